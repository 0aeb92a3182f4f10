use std::io::Write;

use geo::LineString;

use crate::common::{
    write_coord, write_count, write_header, Endianness, WKBType, COORD_SIZE, COUNT_SIZE,
    HEADER_SIZE,
};
use crate::error::Result;
use crate::writer::srid_size;

/// The byte length of a point count and its coordinates, as in a LineString
/// body or a Polygon ring.
pub(crate) fn coords_wkb_size(geom: &LineString) -> usize {
    COUNT_SIZE + geom.0.len() * COORD_SIZE
}

/// Write a point count followed by the raw coordinates.
pub(crate) fn write_coords<W: Write + ?Sized>(
    writer: &mut W,
    geom: &LineString,
    endianness: Endianness,
) -> Result<()> {
    write_count(writer, endianness, geom.0.len())?;
    for coord in geom.coords() {
        write_coord(writer, endianness, *coord)?;
    }
    Ok(())
}

/// The byte length of a WKBLineString
pub fn line_string_wkb_size(geom: &LineString, srid: Option<i32>) -> usize {
    HEADER_SIZE + srid_size(srid) + coords_wkb_size(geom)
}

/// Write a LineString geometry to a Writer encoded as WKB
pub fn write_line_string_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &LineString,
    endianness: Endianness,
    srid: Option<i32>,
) -> Result<()> {
    write_header(writer, endianness, WKBType::LineString, srid)?;
    write_coords(writer, geom, endianness)
}
