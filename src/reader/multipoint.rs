use std::io::Read;

use geo::MultiPoint;

use crate::common::{read_count, read_header, Endianness, WKBType, MAX_POINTS_ALLOC};
use crate::error::{EwkbError, Result};
use crate::reader::point::read_point;

/// Read the body of a MultiPoint. Every member is a full Point with its own header.
pub(crate) fn read_multi_point<R: Read + ?Sized>(
    reader: &mut R,
    endianness: Endianness,
) -> Result<MultiPoint> {
    let num_points = read_count(reader, endianness)?;

    let mut points = Vec::with_capacity(num_points.min(MAX_POINTS_ALLOC));
    for _ in 0..num_points {
        let header = read_header(reader)?;
        if header.wkb_type != WKBType::Point {
            return Err(EwkbError::NotEwkb);
        }
        points.push(read_point(reader, header.endianness)?);
    }

    Ok(MultiPoint::new(points))
}
