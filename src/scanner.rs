//! Adapter between the codec and SQL drivers: scan a nullable column value into
//! a geometry, and turn a geometry back into a storable value.
//!
//! Drivers do not all hand back plain EWKB:
//! - MySQL stores geometries as WKB prefixed with a raw 4 byte SRID. If the data
//!   does not decode, the first 4 bytes are skipped and the decode is tried
//!   once more.
//! - Some Postgres drivers return `ST_AsBinary` output as text, `\x` followed
//!   by the hex of the bytes. That is decoded before anything else.

use std::borrow::Cow;

use geo::{
    BoundingRect, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Rect,
};
use log::debug;

use crate::common::Endianness;
use crate::error::{EwkbError, Result};
use crate::reader::{from_ewkb, from_ewkb_keeping_rings, Decoded};
use crate::writer::{to_ewkb, WriteOptions};

/// A column value as handed over by a SQL driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SqlValue<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl SqlValue<'_> {
    /// A short name for the kind of value, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bool",
            SqlValue::Int(_) => "int",
            SqlValue::Float(_) => "float",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::Text(_) => "text",
        }
    }
}

impl<'a> From<&'a [u8]> for SqlValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        SqlValue::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for SqlValue<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        SqlValue::Bytes(value)
    }
}

impl<'a> From<Option<&'a [u8]>> for SqlValue<'a> {
    fn from(value: Option<&'a [u8]>) -> Self {
        value.map_or(SqlValue::Null, SqlValue::Bytes)
    }
}

impl<'a> From<&'a str> for SqlValue<'a> {
    fn from(value: &'a str) -> Self {
        SqlValue::Text(value)
    }
}

impl From<bool> for SqlValue<'_> {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<i64> for SqlValue<'_> {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<f64> for SqlValue<'_> {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

/// A typed place to store a scanned geometry.
///
/// The decoded geometry must be of the destination's kind, with two
/// exceptions: a Point fills a MultiPoint destination as a single member, and
/// a Polygon with exactly one ring fills a Ring destination. Anything else is
/// [`EwkbError::IncorrectGeometry`] and leaves the destination untouched.
///
/// [`GeometryScanner`] counts the rings of a Ring destination on the wire, so a
/// single ring without points fills it. [`Destination::assign`] only sees a
/// [`Polygon`], where an empty exterior without interiors counts as no rings.
#[derive(Debug)]
pub enum Destination<'a> {
    Point(&'a mut Point),
    MultiPoint(&'a mut MultiPoint),
    LineString(&'a mut LineString),
    MultiLineString(&'a mut MultiLineString),
    /// A single polygon ring.
    Ring(&'a mut LineString),
    Polygon(&'a mut Polygon),
    MultiPolygon(&'a mut MultiPolygon),
    Collection(&'a mut GeometryCollection),
    /// The bounding box of whatever geometry was decoded.
    Bound(&'a mut Rect),
}

macro_rules! impl_from_destination {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for Destination<'a> {
                fn from(value: &'a mut $ty) -> Self {
                    Destination::$variant(value)
                }
            }
        )*
    };
}

impl_from_destination!(
    Point => Point,
    MultiPoint => MultiPoint,
    LineString => LineString,
    MultiLineString => MultiLineString,
    Polygon => Polygon,
    MultiPolygon => MultiPolygon,
    GeometryCollection => Collection,
    Rect => Bound,
);

impl Destination<'_> {
    /// Store `geom` in the destination, returning what was stored as a [`Geometry`].
    pub fn assign(&mut self, geom: Geometry) -> Result<Geometry> {
        match (self, geom) {
            (Destination::Point(dest), Geometry::Point(g)) => {
                **dest = g;
                Ok(Geometry::Point(g))
            }
            (Destination::MultiPoint(dest), Geometry::MultiPoint(g)) => {
                **dest = g.clone();
                Ok(Geometry::MultiPoint(g))
            }
            (Destination::MultiPoint(dest), Geometry::Point(g)) => {
                let g = MultiPoint::new(vec![g]);
                **dest = g.clone();
                Ok(Geometry::MultiPoint(g))
            }
            (Destination::LineString(dest), Geometry::LineString(g)) => {
                **dest = g.clone();
                Ok(Geometry::LineString(g))
            }
            (Destination::MultiLineString(dest), Geometry::MultiLineString(g)) => {
                **dest = g.clone();
                Ok(Geometry::MultiLineString(g))
            }
            (Destination::Ring(dest), Geometry::Polygon(g))
                if g.interiors().is_empty() && !g.exterior().0.is_empty() =>
            {
                let (ring, _) = g.into_inner();
                **dest = ring.clone();
                Ok(Geometry::LineString(ring))
            }
            (Destination::Polygon(dest), Geometry::Polygon(g)) => {
                **dest = g.clone();
                Ok(Geometry::Polygon(g))
            }
            (Destination::MultiPolygon(dest), Geometry::MultiPolygon(g)) => {
                **dest = g.clone();
                Ok(Geometry::MultiPolygon(g))
            }
            (Destination::Collection(dest), Geometry::GeometryCollection(g)) => {
                **dest = g.clone();
                Ok(Geometry::GeometryCollection(g))
            }
            (Destination::Bound(dest), g) => {
                let bound = g.bounding_rect().ok_or(EwkbError::IncorrectGeometry)?;
                **dest = bound;
                Ok(Geometry::Rect(bound))
            }
            _ => Err(EwkbError::IncorrectGeometry),
        }
    }
}

/// Scans SQL values into geometries.
///
/// ```
/// use geo::{Geometry, Point};
/// use geo_ewkb::{to_ewkb, GeometryScanner, SqlValue, WriteOptions};
///
/// let data = to_ewkb(&Geometry::Point(Point::new(1., 2.)), WriteOptions::default()).unwrap();
///
/// let mut point = Point::new(0., 0.);
/// let mut scanner = GeometryScanner::with_destination(&mut point);
/// scanner.scan(SqlValue::Bytes(&data)).unwrap();
/// assert!(scanner.valid);
/// assert_eq!(scanner.srid, 4326);
/// drop(scanner);
/// assert_eq!(point, Point::new(1., 2.));
/// ```
#[derive(Debug, Default)]
pub struct GeometryScanner<'a> {
    destination: Option<Destination<'a>>,
    /// SRID of the last scanned geometry, 0 if it had none.
    pub srid: i32,
    /// The last scanned geometry; for a Bound destination, its bounding [`Rect`].
    pub geometry: Option<Geometry>,
    /// False if the last scanned value was NULL or empty.
    pub valid: bool,
}

impl<'a> GeometryScanner<'a> {
    /// A scanner that accepts any geometry kind into [`GeometryScanner::geometry`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A scanner that also writes each scanned geometry into `destination`.
    pub fn with_destination(destination: impl Into<Destination<'a>>) -> Self {
        Self {
            destination: Some(destination.into()),
            ..Default::default()
        }
    }

    /// Scan one column value.
    ///
    /// NULL and empty values are not errors: they leave the scanner invalid
    /// with no geometry.
    pub fn scan<'v>(&mut self, value: impl Into<SqlValue<'v>>) -> Result<()> {
        self.geometry = None;
        self.valid = false;
        self.srid = 0;

        let data = match value.into() {
            SqlValue::Null => return Ok(()),
            SqlValue::Bytes(data) => data,
            other => return Err(EwkbError::UnsupportedDataType(other.kind_name())),
        };

        let data = unescape_hex(data)?;
        if data.is_empty() {
            return Ok(());
        }

        let (geom, srid) = match &mut self.destination {
            // Decoded as rings: a single empty ring is still exactly one ring.
            Some(Destination::Ring(dest)) => {
                let (decoded, srid) = with_vendor_prefix(&data, from_ewkb_keeping_rings)?;
                let ring = match decoded {
                    Decoded::Rings(rings) => match <[LineString; 1]>::try_from(rings) {
                        Ok([ring]) => ring,
                        Err(_) => return Err(EwkbError::IncorrectGeometry),
                    },
                    Decoded::Geometry(_) => return Err(EwkbError::IncorrectGeometry),
                };
                **dest = ring.clone();
                (Geometry::LineString(ring), srid)
            }
            Some(destination) => {
                let (geom, srid) = from_ewkb_with_vendor_prefix(&data)?;
                (destination.assign(geom)?, srid)
            }
            None => from_ewkb_with_vendor_prefix(&data)?,
        };

        self.srid = srid;
        self.geometry = Some(geom);
        self.valid = true;
        Ok(())
    }
}

/// Decode a geometry that may carry a raw 4 byte SRID prefix, as MySQL returns.
///
/// The data is first decoded as is. If that fails because the bytes are not laid
/// out as a geometry, the first 4 bytes are skipped and it is decoded again.
/// If the second attempt fails too, the error from the first is returned. The
/// SRID is the one from the EWKB header, never from the prefix.
pub fn from_ewkb_with_vendor_prefix(data: &[u8]) -> Result<(Geometry, i32)> {
    with_vendor_prefix(data, from_ewkb)
}

fn with_vendor_prefix<T>(data: &[u8], decode: impl Fn(&[u8]) -> Result<T>) -> Result<T> {
    let err = match decode(data) {
        Ok(decoded) => return Ok(decoded),
        Err(err) if err.is_framing() && data.len() > 4 => err,
        Err(err) => return Err(err),
    };

    match decode(&data[4..]) {
        Ok(decoded) => {
            debug!("decoded ewkb after skipping a 4 byte srid prefix ({err})");
            Ok(decoded)
        }
        Err(_) => Err(err),
    }
}

/// Strip the `\x` hex escape some drivers put on binary values.
fn unescape_hex(data: &[u8]) -> Result<Cow<'_, [u8]>> {
    match data {
        [b'\\', b'x', hex @ ..] if !hex.is_empty() => {
            debug!("decoding hex escaped value of {} bytes", data.len());
            decode_hex(hex).map(Cow::Owned)
        }
        _ => Ok(Cow::Borrowed(data)),
    }
}

fn decode_hex(hex: &[u8]) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(EwkbError::InvalidHex(format!(
            "odd length hex string ({} characters)",
            hex.len()
        )));
    }

    let nibble = |offset: usize| -> Result<u8> {
        let c = hex[offset];
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(EwkbError::InvalidHex(format!(
                "invalid byte {c:#04x} at offset {offset}"
            ))),
        }
    };

    (0..hex.len())
        .step_by(2)
        .map(|i| Ok(nibble(i)? << 4 | nibble(i + 1)?))
        .collect()
}

/// A geometry ready to be stored in a SQL column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryValue<'a> {
    geometry: Option<&'a Geometry>,
    srid: i32,
}

/// Wrap a geometry, or its absence, for storage with the given SRID.
pub fn value(geometry: Option<&Geometry>, srid: i32) -> GeometryValue<'_> {
    GeometryValue { geometry, srid }
}

impl GeometryValue<'_> {
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry
    }

    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// Little endian EWKB, or `None` for a missing geometry.
    pub fn to_value(&self) -> Result<Option<Vec<u8>>> {
        let Some(geometry) = self.geometry else {
            return Ok(None);
        };
        let options = WriteOptions {
            endianness: Endianness::LittleEndian,
            srid: self.srid,
        };
        to_ewkb(geometry, options).map(Some)
    }
}
