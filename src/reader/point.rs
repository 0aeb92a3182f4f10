use std::io::Read;

use geo::Point;

use crate::common::{read_coord, Endianness};
use crate::error::Result;

/// Read the body of a Point: a single coordinate pair.
pub(crate) fn read_point<R: Read + ?Sized>(reader: &mut R, endianness: Endianness) -> Result<Point> {
    Ok(Point(read_coord(reader, endianness)?))
}
