use std::io::Read;

use geo::Geometry;
use log::trace;

use crate::common::{read_header, Header, WKBType, MAX_NESTING_DEPTH};
use crate::error::{EwkbError, Result};
use crate::reader::geometrycollection::read_geometry_collection;
use crate::reader::linestring::read_line_string;
use crate::reader::multilinestring::read_multi_line_string;
use crate::reader::multipoint::read_multi_point;
use crate::reader::multipolygon::read_multi_polygon;
use crate::reader::point::read_point;
use crate::reader::polygon::read_polygon;

/// Read one complete geometry, header included, and return it with the SRID
/// from its header, if any.
///
/// `depth` is the number of collections enclosing this geometry.
pub(crate) fn read_geometry<R: Read + ?Sized>(
    reader: &mut R,
    depth: usize,
) -> Result<(Geometry, Option<i32>)> {
    if depth > MAX_NESTING_DEPTH {
        return Err(EwkbError::NotEwkb);
    }

    let header = read_header(reader)?;
    trace!(
        "reading {:?} ({:?}, srid {:?})",
        header.wkb_type,
        header.endianness,
        header.srid
    );

    let geometry = read_geometry_body(reader, &header, depth)?;
    Ok((geometry, header.srid))
}

/// Read the rest of a geometry whose header has already been read.
pub(crate) fn read_geometry_body<R: Read + ?Sized>(
    reader: &mut R,
    header: &Header,
    depth: usize,
) -> Result<Geometry> {
    let endianness = header.endianness;
    let geometry = match header.wkb_type {
        WKBType::Point => Geometry::Point(read_point(reader, endianness)?),
        WKBType::LineString => Geometry::LineString(read_line_string(reader, endianness)?),
        WKBType::Polygon => Geometry::Polygon(read_polygon(reader, endianness)?),
        WKBType::MultiPoint => Geometry::MultiPoint(read_multi_point(reader, endianness)?),
        WKBType::MultiLineString => {
            Geometry::MultiLineString(read_multi_line_string(reader, endianness)?)
        }
        WKBType::MultiPolygon => Geometry::MultiPolygon(read_multi_polygon(reader, endianness)?),
        WKBType::GeometryCollection => {
            Geometry::GeometryCollection(read_geometry_collection(reader, endianness, depth)?)
        }
    };

    Ok(geometry)
}
