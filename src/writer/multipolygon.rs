use std::io::Write;

use geo::MultiPolygon;

use crate::common::{write_count, write_header, Endianness, WKBType, COUNT_SIZE, HEADER_SIZE};
use crate::error::Result;
use crate::writer::polygon::{polygon_wkb_size, write_polygon_as_wkb};
use crate::writer::srid_size;

/// The byte length of a WKBMultiPolygon
pub fn multi_polygon_wkb_size(geom: &MultiPolygon, srid: Option<i32>) -> usize {
    let mut sum = HEADER_SIZE + srid_size(srid) + COUNT_SIZE;

    for polygon in geom.iter() {
        sum += polygon_wkb_size(polygon, None);
    }

    sum
}

/// Write a MultiPolygon geometry to a Writer encoded as WKB
pub fn write_multi_polygon_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiPolygon,
    endianness: Endianness,
    srid: Option<i32>,
) -> Result<()> {
    write_header(writer, endianness, WKBType::MultiPolygon, srid)?;

    // numPolygons
    write_count(writer, endianness, geom.0.len())?;

    for polygon in geom.iter() {
        write_polygon_as_wkb(writer, polygon, endianness, None)?;
    }

    Ok(())
}
