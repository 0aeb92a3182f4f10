use std::io::Read;

use geo::GeometryCollection;

use crate::common::{read_count, Endianness, MAX_MULTI_ALLOC};
use crate::error::Result;
use crate::reader::geometry::read_geometry;

/// Read the body of a GeometryCollection. Members may be of any kind, including
/// further collections, each with its own header.
pub(crate) fn read_geometry_collection<R: Read + ?Sized>(
    reader: &mut R,
    endianness: Endianness,
    depth: usize,
) -> Result<GeometryCollection> {
    let num_geometries = read_count(reader, endianness)?;

    let mut geometries = Vec::with_capacity(num_geometries.min(MAX_MULTI_ALLOC));
    for _ in 0..num_geometries {
        let (geometry, _) = read_geometry(reader, depth + 1)?;
        geometries.push(geometry);
    }

    Ok(GeometryCollection::new_from(geometries))
}
