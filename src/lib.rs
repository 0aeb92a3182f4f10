//! Encode and decode [`geo`] geometries as WKB and PostGIS-style extended WKB
//! (EWKB), and move them in and out of SQL columns.
//!
//! ```
//! use geo::{Geometry, Point};
//! use geo_ewkb::{from_ewkb, to_ewkb, WriteOptions};
//!
//! let point = Geometry::Point(Point::new(30., 10.));
//! let buf = to_ewkb(&point, WriteOptions::default()).unwrap();
//! assert_eq!(from_ewkb(&buf).unwrap(), (point, 4326));
//! ```
//!
//! Only the seven 2D geometry kinds are supported; Z and M type codes are
//! rejected as [`EwkbError::UnsupportedGeometry`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use common::{Endianness, WKBType};
pub use error::{EwkbError, Result};
#[cfg(feature = "postgis")]
pub use postgis::PostgisGeometry;
pub use reader::{from_ewkb, Decoder};
pub use scanner::{
    from_ewkb_with_vendor_prefix, value, Destination, GeometryScanner, GeometryValue, SqlValue,
};
pub use writer::{ewkb_size, must_to_ewkb, to_ewkb, Encoder, WriteOptions, DEFAULT_SRID};

pub mod common;
pub mod error;
#[cfg(feature = "postgis")]
pub mod postgis;
pub mod reader;
pub mod scanner;
#[cfg(test)]
pub(crate) mod test;
pub mod writer;
