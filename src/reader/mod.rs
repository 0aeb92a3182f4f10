//! Decode (E)WKB into [`geo`] geometries.
//!
//! Declared element counts come straight from the input, so they only bound the
//! initial capacity of each vector up to a fixed ceiling. Elements are then read
//! one at a time and a count larger than the data fails with
//! [`EwkbError::Truncated`] on the read that runs out of input.

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::io::Read;

use geo::{Geometry, LineString};

use crate::common::{read_header, WKBType};
use crate::error::{EwkbError, Result};
use crate::reader::geometry::{read_geometry, read_geometry_body};
use crate::reader::polygon::read_rings;

/// Decode a buffer holding exactly one geometry.
///
/// Returns the geometry and its SRID, or 0 when the header carries none. Bytes
/// left over after the geometry are an error.
///
/// ```
/// use geo::{Geometry, Point};
///
/// let buf = [
///     0x01, 0x01, 0x00, 0x00, 0x20, 0xE6, 0x10, 0x00, 0x00, // point, srid 4326
///     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3E, 0x40, // 30
///     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x24, 0x40, // 10
/// ];
/// let (geom, srid) = geo_ewkb::from_ewkb(&buf).unwrap();
/// assert_eq!(geom, Geometry::Point(Point::new(30., 10.)));
/// assert_eq!(srid, 4326);
/// ```
pub fn from_ewkb(buf: &[u8]) -> Result<(Geometry, i32)> {
    let mut reader = buf;
    let (geometry, srid) = read_geometry(&mut reader, 0)?;
    if !reader.is_empty() {
        return Err(EwkbError::NotEwkb);
    }
    Ok((geometry, srid.unwrap_or(0)))
}

/// A top level geometry decoded by [`from_ewkb_keeping_rings`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Decoded {
    /// The rings of a Polygon, exactly as they were on the wire.
    Rings(Vec<LineString>),
    Geometry(Geometry),
}

/// Like [`from_ewkb`], but a Polygon comes back as its list of rings.
///
/// A [`geo::Polygon`] cannot tell one empty ring from no rings at all; the
/// ring list can.
pub(crate) fn from_ewkb_keeping_rings(buf: &[u8]) -> Result<(Decoded, i32)> {
    let mut reader = buf;
    let header = read_header(&mut reader)?;
    let decoded = match header.wkb_type {
        WKBType::Polygon => Decoded::Rings(read_rings(&mut reader, header.endianness)?),
        _ => Decoded::Geometry(read_geometry_body(&mut reader, &header, 0)?),
    };
    if !reader.is_empty() {
        return Err(EwkbError::NotEwkb);
    }
    Ok((decoded, header.srid.unwrap_or(0)))
}

/// Reads geometries one after another from a byte stream.
#[derive(Debug)]
pub struct Decoder<R: Read> {
    reader: R,
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read the next geometry from the stream.
    ///
    /// The SRID is always reported as 0, even when the header carries one; use
    /// [`from_ewkb`] when the SRID matters. The SRID bytes are still consumed,
    /// so the stream stays aligned on the next geometry.
    pub fn decode(&mut self) -> Result<(Geometry, i32)> {
        let (geometry, _) = read_geometry(&mut self.reader, 0)?;
        Ok((geometry, 0))
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::hex;
    use crate::test::linestring::ls0;
    use crate::test::point::p0;
    use geo::{point, Point};
    use std::io::Cursor;

    #[test]
    fn point_from_postgis() {
        // SELECT 'SRID=4326;POINT(10 -20)'::geometry
        let buf = hex("0101000020E6100000000000000000244000000000000034C0");
        let (geom, srid) = from_ewkb(&buf).unwrap();
        assert_eq!(geom, Geometry::Point(point!(x: 10., y: -20.)));
        assert_eq!(srid, 4326);
    }

    #[test]
    fn negative_srid() {
        let mut buf = vec![0x01, 0x01, 0x00, 0x00, 0x20];
        buf.extend_from_slice(&(-1i32).to_le_bytes());
        buf.extend_from_slice(&[0u8; 16]);
        let (geom, srid) = from_ewkb(&buf).unwrap();
        assert_eq!(geom, Geometry::Point(Point::new(0., 0.)));
        assert_eq!(srid, -1);
    }

    #[test]
    fn empty_input() {
        assert!(matches!(from_ewkb(&[]), Err(EwkbError::Truncated)));
    }

    #[test]
    fn trailing_bytes() {
        let mut buf = hex("0101000020E6100000000000000000244000000000000034C0");
        buf.push(0);
        assert!(matches!(from_ewkb(&buf), Err(EwkbError::NotEwkb)));
    }

    #[test]
    fn unsupported_type_code() {
        let buf = [0x01, 0xE9, 0x03, 0x00, 0x00];
        assert!(matches!(
            from_ewkb(&buf),
            Err(EwkbError::UnsupportedGeometry(1001))
        ));
    }

    #[test]
    fn decoder_reads_consecutive_geometries() {
        let mut buf = hex("0101000020E6100000000000000000244000000000000034C0");
        // little endian LINESTRING(0 1, 1 2) without srid
        buf.extend_from_slice(&[0x01, 0x02, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00]);
        for coord in ls0().coords() {
            buf.extend_from_slice(&coord.x.to_le_bytes());
            buf.extend_from_slice(&coord.y.to_le_bytes());
        }
        // big endian POINT(0 1)
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x01]);
        buf.extend_from_slice(&0f64.to_be_bytes());
        buf.extend_from_slice(&1f64.to_be_bytes());

        let mut decoder = Decoder::new(Cursor::new(buf));

        let (geom, srid) = decoder.decode().unwrap();
        assert_eq!(geom, Geometry::Point(point!(x: 10., y: -20.)));
        assert_eq!(srid, 0);

        let (geom, _) = decoder.decode().unwrap();
        assert_eq!(geom, Geometry::LineString(ls0()));

        let (geom, _) = decoder.decode().unwrap();
        assert_eq!(geom, Geometry::Point(p0()));

        assert!(matches!(decoder.decode(), Err(EwkbError::Truncated)));

        let cursor = decoder.into_inner();
        assert_eq!(cursor.position() as usize, cursor.get_ref().len());
    }

    #[test]
    fn keeping_rings() {
        // one ring without points
        let buf = [0x01, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let (decoded, srid) = from_ewkb_keeping_rings(&buf).unwrap();
        assert_eq!(decoded, Decoded::Rings(vec![LineString::new(vec![])]));
        assert_eq!(srid, 0);

        // no rings
        let (decoded, _) = from_ewkb_keeping_rings(&buf[..9]).unwrap();
        assert_eq!(decoded, Decoded::Rings(vec![]));

        let buf = hex("0101000020E6100000000000000000244000000000000034C0");
        let (decoded, srid) = from_ewkb_keeping_rings(&buf).unwrap();
        assert_eq!(decoded, Decoded::Geometry(Geometry::Point(point!(x: 10., y: -20.))));
        assert_eq!(srid, 4326);
    }

    #[test]
    fn keeping_rings_rejects_trailing_bytes() {
        let buf = [0x01, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert!(matches!(
            from_ewkb_keeping_rings(&buf),
            Err(EwkbError::NotEwkb)
        ));
    }
}
