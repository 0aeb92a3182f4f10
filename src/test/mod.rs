pub(crate) mod geometrycollection;
pub(crate) mod multipoint;
pub(crate) mod multipolygon;

use geo::Geometry;

/// One geometry of every kind, including empty ones.
pub(crate) fn all_geometries() -> Vec<Geometry> {
    vec![
        point::p0().into(),
        point::p1().into(),
        linestring::ls0().into(),
        linestring::ls_empty().into(),
        polygon::p0().into(),
        polygon::p1().into(),
        polygon::p_empty().into(),
        multipoint::mp0().into(),
        multipoint::mp_empty().into(),
        multilinestring::ml0().into(),
        multilinestring::ml_empty().into(),
        multipolygon::mp0().into(),
        multipolygon::mp_empty().into(),
        Geometry::GeometryCollection(geometrycollection::gc0()),
        Geometry::GeometryCollection(geometrycollection::gc_nested()),
        Geometry::GeometryCollection(geometrycollection::gc_empty()),
    ]
}

/// Parse a hex string such as PostGIS prints for `ST_AsEWKB`.
pub(crate) fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}
