use geo::{Geometry, GeometryCollection};

use crate::test::{linestring, multipoint, multipolygon, point, polygon};

/// One of each flat kind
pub(crate) fn gc0() -> GeometryCollection {
    GeometryCollection::new_from(vec![
        Geometry::Point(point::p0()),
        Geometry::LineString(linestring::ls1()),
        Geometry::Polygon(polygon::p1()),
        Geometry::MultiPoint(multipoint::mp0()),
    ])
}

/// A collection holding another collection
pub(crate) fn gc_nested() -> GeometryCollection {
    GeometryCollection::new_from(vec![
        Geometry::MultiPolygon(multipolygon::mp1()),
        Geometry::GeometryCollection(gc0()),
        Geometry::GeometryCollection(gc_empty()),
    ])
}

pub(crate) fn gc_empty() -> GeometryCollection {
    GeometryCollection::new_from(vec![])
}
