use std::io::Write;

use geo::{Geometry, Line, LineString};

use crate::common::Endianness;
use crate::error::Result;
use crate::writer::geometrycollection::{
    geometry_collection_wkb_size, write_geometry_collection_as_wkb,
};
use crate::writer::linestring::{line_string_wkb_size, write_line_string_as_wkb};
use crate::writer::multilinestring::{
    multi_line_string_wkb_size, write_multi_line_string_as_wkb,
};
use crate::writer::multipoint::{multi_point_wkb_size, write_multi_point_as_wkb};
use crate::writer::multipolygon::{multi_polygon_wkb_size, write_multi_polygon_as_wkb};
use crate::writer::point::{point_wkb_size, write_point_as_wkb};
use crate::writer::polygon::{polygon_wkb_size, write_polygon_as_wkb};

/// A Line has no kind of its own on the wire and is written as a two point LineString.
fn line_as_line_string(line: &Line) -> LineString {
    LineString::new(vec![line.start, line.end])
}

/// The byte length of a geometry encoded with an optional SRID.
///
/// A Rect or Triangle is sized as the one ring Polygon it is written as.
pub(crate) fn geometry_ewkb_size(geom: &Geometry, srid: Option<i32>) -> usize {
    match geom {
        Geometry::Point(_) => point_wkb_size(srid),
        Geometry::Line(g) => line_string_wkb_size(&line_as_line_string(g), srid),
        Geometry::LineString(g) => line_string_wkb_size(g, srid),
        Geometry::Polygon(g) => polygon_wkb_size(g, srid),
        Geometry::MultiPoint(g) => multi_point_wkb_size(g, srid),
        Geometry::MultiLineString(g) => multi_line_string_wkb_size(g, srid),
        Geometry::MultiPolygon(g) => multi_polygon_wkb_size(g, srid),
        Geometry::GeometryCollection(g) => geometry_collection_wkb_size(g, srid),
        Geometry::Rect(g) => polygon_wkb_size(&g.to_polygon(), srid),
        Geometry::Triangle(g) => polygon_wkb_size(&g.to_polygon(), srid),
    }
}

/// The byte length of a WKB geometry, without an SRID.
pub fn geometry_wkb_size(geom: &Geometry) -> usize {
    geometry_ewkb_size(geom, None)
}

/// Write a geometry of any kind to a Writer encoded as WKB
pub fn write_geometry_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &Geometry,
    endianness: Endianness,
    srid: Option<i32>,
) -> Result<()> {
    match geom {
        Geometry::Point(g) => write_point_as_wkb(writer, g, endianness, srid),
        Geometry::Line(g) => {
            write_line_string_as_wkb(writer, &line_as_line_string(g), endianness, srid)
        }
        Geometry::LineString(g) => write_line_string_as_wkb(writer, g, endianness, srid),
        Geometry::Polygon(g) => write_polygon_as_wkb(writer, g, endianness, srid),
        Geometry::MultiPoint(g) => write_multi_point_as_wkb(writer, g, endianness, srid),
        Geometry::MultiLineString(g) => {
            write_multi_line_string_as_wkb(writer, g, endianness, srid)
        }
        Geometry::MultiPolygon(g) => write_multi_polygon_as_wkb(writer, g, endianness, srid),
        Geometry::GeometryCollection(g) => {
            write_geometry_collection_as_wkb(writer, g, endianness, srid)
        }
        Geometry::Rect(g) => write_polygon_as_wkb(writer, &g.to_polygon(), endianness, srid),
        Geometry::Triangle(g) => write_polygon_as_wkb(writer, &g.to_polygon(), endianness, srid),
    }
}
