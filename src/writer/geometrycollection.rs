use std::io::Write;

use geo::GeometryCollection;

use crate::common::{write_count, write_header, Endianness, WKBType, COUNT_SIZE, HEADER_SIZE};
use crate::error::Result;
use crate::writer::geometry::{geometry_wkb_size, write_geometry_as_wkb};
use crate::writer::srid_size;

/// The byte length of a WKBGeometryCollection
pub fn geometry_collection_wkb_size(geom: &GeometryCollection, srid: Option<i32>) -> usize {
    let mut sum = HEADER_SIZE + srid_size(srid) + COUNT_SIZE;

    for inner_geom in geom.iter() {
        sum += geometry_wkb_size(inner_geom);
    }

    sum
}

/// Write a GeometryCollection geometry to a Writer encoded as WKB
pub fn write_geometry_collection_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &GeometryCollection,
    endianness: Endianness,
    srid: Option<i32>,
) -> Result<()> {
    write_header(writer, endianness, WKBType::GeometryCollection, srid)?;

    // numGeometries
    write_count(writer, endianness, geom.0.len())?;

    for inner_geom in geom.iter() {
        write_geometry_as_wkb(writer, inner_geom, endianness, None)?;
    }

    Ok(())
}
