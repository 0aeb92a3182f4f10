//! Encode [`geo`] geometries as (E)WKB.
//!
//! The byte length of every geometry is computed up front, so [`to_ewkb`]
//! allocates its output exactly once.

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use geometry::{geometry_wkb_size, write_geometry_as_wkb};
pub use geometrycollection::{geometry_collection_wkb_size, write_geometry_collection_as_wkb};
pub use linestring::{line_string_wkb_size, write_line_string_as_wkb};
pub use multilinestring::{multi_line_string_wkb_size, write_multi_line_string_as_wkb};
pub use multipoint::{multi_point_wkb_size, write_multi_point_as_wkb};
pub use multipolygon::{multi_polygon_wkb_size, write_multi_polygon_as_wkb};
pub use point::{point_wkb_size, write_point_as_wkb};
pub use polygon::{polygon_wkb_size, write_polygon_as_wkb};

use std::io::Write;

use geo::Geometry;
use serde::{Deserialize, Serialize};

use crate::common::{Endianness, SRID_SIZE};
use crate::error::Result;
use crate::writer::geometry::geometry_ewkb_size;

/// The SRID an [`Encoder`] attaches unless told otherwise (WGS 84).
pub const DEFAULT_SRID: i32 = 4326;

/// Byte order and SRID used when encoding.
///
/// An SRID of 0 means "none": the SRID flag is left unset and no SRID is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    pub endianness: Endianness,
    pub srid: i32,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            endianness: Endianness::LittleEndian,
            srid: DEFAULT_SRID,
        }
    }
}

impl WriteOptions {
    /// The SRID to put on the wire, if any.
    pub(crate) fn wire_srid(&self) -> Option<i32> {
        srid_on_wire(self.srid)
    }
}

pub(crate) fn srid_on_wire(srid: i32) -> Option<i32> {
    (srid != 0).then_some(srid)
}

pub(crate) fn srid_size(srid: Option<i32>) -> usize {
    srid.map_or(0, |_| SRID_SIZE)
}

/// The exact byte length of `geom` encoded with `srid` (0 for none).
pub fn ewkb_size(geom: &Geometry, srid: i32) -> usize {
    geometry_ewkb_size(geom, srid_on_wire(srid))
}

/// Writes geometries to an underlying writer.
///
/// ```
/// use geo::{Geometry, Point};
/// use geo_ewkb::{Encoder, Endianness};
///
/// let mut encoder = Encoder::new(Vec::new());
/// encoder.set_endianness(Endianness::BigEndian).set_srid(0);
/// encoder.encode(&Geometry::Point(Point::new(1., 2.))).unwrap();
/// assert_eq!(encoder.into_inner().len(), 21);
/// ```
#[derive(Debug)]
pub struct Encoder<W: Write> {
    writer: W,
    options: WriteOptions,
}

impl<W: Write> Encoder<W> {
    /// An encoder writing little endian EWKB with SRID 4326.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, WriteOptions::default())
    }

    pub fn with_options(writer: W, options: WriteOptions) -> Self {
        Self { writer, options }
    }

    pub fn set_endianness(&mut self, endianness: Endianness) -> &mut Self {
        self.options.endianness = endianness;
        self
    }

    /// Set the SRID for subsequent geometries. 0 writes plain WKB headers.
    pub fn set_srid(&mut self, srid: i32) -> &mut Self {
        self.options.srid = srid;
        self
    }

    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    /// Write one geometry. Only a failing writer makes this fail.
    pub fn encode(&mut self, geom: &Geometry) -> Result<()> {
        write_geometry_as_wkb(
            &mut self.writer,
            geom,
            self.options.endianness,
            self.options.wire_srid(),
        )
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Encode a geometry into a new buffer of exactly [`ewkb_size`] bytes.
pub fn to_ewkb(geom: &Geometry, options: WriteOptions) -> Result<Vec<u8>> {
    let srid = options.wire_srid();
    let mut buf = Vec::with_capacity(geometry_ewkb_size(geom, srid));
    write_geometry_as_wkb(&mut buf, geom, options.endianness, srid)?;
    Ok(buf)
}

/// Like [`to_ewkb`], but panics if encoding fails.
///
/// Encoding into memory can only fail on a count that does not fit in a
/// uint32, so this is an assertion for callers who have ruled that out.
/// Do not use it on untrusted geometries.
pub fn must_to_ewkb(geom: &Geometry, options: WriteOptions) -> Vec<u8> {
    match to_ewkb(geom, options) {
        Ok(buf) => buf,
        Err(err) => panic!("encoding {geom:?} as ewkb failed: {err}"),
    }
}
