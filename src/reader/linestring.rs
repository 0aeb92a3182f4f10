use std::io::Read;

use geo::{Coord, LineString};

use crate::common::{read_coord, read_count, Endianness, MAX_POINTS_ALLOC};
use crate::error::Result;

/// Read a point count followed by that many coordinate pairs.
///
/// This is the body of a LineString and of every Polygon ring.
pub(crate) fn read_coords<R: Read + ?Sized>(
    reader: &mut R,
    endianness: Endianness,
) -> Result<Vec<Coord>> {
    let num_points = read_count(reader, endianness)?;

    // The count comes straight from the input, so only trust it up to a point.
    let mut coords = Vec::with_capacity(num_points.min(MAX_POINTS_ALLOC));
    for _ in 0..num_points {
        coords.push(read_coord(reader, endianness)?);
    }

    Ok(coords)
}

/// Read the body of a LineString.
pub(crate) fn read_line_string<R: Read + ?Sized>(
    reader: &mut R,
    endianness: Endianness,
) -> Result<LineString> {
    Ok(LineString::new(read_coords(reader, endianness)?))
}
