use std::io::Read;

use geo::{LineString, Polygon};

use crate::common::{read_count, Endianness, MAX_MULTI_ALLOC};
use crate::error::Result;
use crate::reader::linestring::read_coords;

/// Read a ring count followed by that many rings, exactly as they are on the wire.
pub(crate) fn read_rings<R: Read + ?Sized>(
    reader: &mut R,
    endianness: Endianness,
) -> Result<Vec<LineString>> {
    let num_rings = read_count(reader, endianness)?;

    let mut rings = Vec::with_capacity(num_rings.min(MAX_MULTI_ALLOC));
    for _ in 0..num_rings {
        rings.push(LineString::new(read_coords(reader, endianness)?));
    }

    Ok(rings)
}

/// Read the body of a Polygon.
///
/// The first ring is the exterior. A Polygon with no rings is read as an empty
/// exterior without interiors, the same value as one empty ring.
pub(crate) fn read_polygon<R: Read + ?Sized>(
    reader: &mut R,
    endianness: Endianness,
) -> Result<Polygon> {
    let mut rings = read_rings(reader, endianness)?.into_iter();
    let exterior = rings.next().unwrap_or_else(|| LineString::new(vec![]));
    Ok(Polygon::new(exterior, rings.collect()))
}
