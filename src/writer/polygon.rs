use std::io::Write;

use geo::{LineString, Polygon};

use crate::common::{write_count, write_header, Endianness, WKBType, COUNT_SIZE, HEADER_SIZE};
use crate::error::Result;
use crate::writer::linestring::{coords_wkb_size, write_coords};
use crate::writer::srid_size;

/// The rings that go on the wire: none for an empty exterior without interiors,
/// otherwise the exterior followed by the interiors.
fn rings(geom: &Polygon) -> impl Iterator<Item = &LineString> {
    let exterior = geom.exterior();
    let skip_exterior = exterior.0.is_empty() && geom.interiors().is_empty();
    std::iter::once(exterior)
        .filter(move |_| !skip_exterior)
        .chain(geom.interiors())
}

/// The byte length of a WKBPolygon
pub fn polygon_wkb_size(geom: &Polygon, srid: Option<i32>) -> usize {
    let mut sum = HEADER_SIZE + srid_size(srid) + COUNT_SIZE;

    for ring in rings(geom) {
        sum += coords_wkb_size(ring);
    }

    sum
}

/// Write a Polygon geometry to a Writer encoded as WKB
pub fn write_polygon_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &Polygon,
    endianness: Endianness,
    srid: Option<i32>,
) -> Result<()> {
    write_header(writer, endianness, WKBType::Polygon, srid)?;

    // numRings
    write_count(writer, endianness, rings(geom).count())?;

    for ring in rings(geom) {
        write_coords(writer, ring, endianness)?;
    }

    Ok(())
}
