use std::io::Write;

use geo::Point;

use crate::common::{write_coord, write_header, Endianness, WKBType, COORD_SIZE, HEADER_SIZE};
use crate::error::Result;
use crate::writer::srid_size;

/// The byte length of a WKBPoint
pub fn point_wkb_size(srid: Option<i32>) -> usize {
    HEADER_SIZE + srid_size(srid) + COORD_SIZE
}

/// Write a Point geometry to a Writer encoded as WKB
pub fn write_point_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &Point,
    endianness: Endianness,
    srid: Option<i32>,
) -> Result<()> {
    write_header(writer, endianness, WKBType::Point, srid)?;
    write_coord(writer, endianness, geom.0)
}
