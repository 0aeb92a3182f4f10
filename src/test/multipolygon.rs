use geo::MultiPolygon;

use crate::test::polygon::{p0, p1};

pub(crate) fn mp0() -> MultiPolygon {
    MultiPolygon::new(vec![p0(), p1()])
}

pub(crate) fn mp1() -> MultiPolygon {
    MultiPolygon::new(vec![p1()])
}

pub(crate) fn mp_empty() -> MultiPolygon {
    MultiPolygon::new(vec![])
}
