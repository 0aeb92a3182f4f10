use std::io::Read;

use geo::MultiPolygon;

use crate::common::{read_count, read_header, Endianness, WKBType, MAX_MULTI_ALLOC};
use crate::error::{EwkbError, Result};
use crate::reader::polygon::read_polygon;

/// Read the body of a MultiPolygon.
pub(crate) fn read_multi_polygon<R: Read + ?Sized>(
    reader: &mut R,
    endianness: Endianness,
) -> Result<MultiPolygon> {
    let num_polygons = read_count(reader, endianness)?;

    let mut polygons = Vec::with_capacity(num_polygons.min(MAX_MULTI_ALLOC));
    for _ in 0..num_polygons {
        let header = read_header(reader)?;
        if header.wkb_type != WKBType::Polygon {
            return Err(EwkbError::NotEwkb);
        }
        polygons.push(read_polygon(reader, header.endianness)?);
    }

    Ok(MultiPolygon::new(polygons))
}
