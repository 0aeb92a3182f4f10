//! Wire-level building blocks shared by the reader and the writer: the byte order
//! marker, the geometry type code and the byte-order aware primitives.

use std::io::{Read, Write};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use geo::Coord;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{EwkbError, Result};

/// Bit set in the type code when a 4 byte SRID follows it.
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;

/// Upper bound on the up-front allocation for a declared number of points.
///
/// Invalid data can declare any count. Well formed data with more elements
/// still decodes; the vector just grows as it goes.
pub const MAX_POINTS_ALLOC: usize = 10_000;

/// Upper bound on the up-front allocation for rings and multi geometry members.
pub const MAX_MULTI_ALLOC: usize = 100;

/// Deepest nesting of geometry collections the reader will follow.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Byte order marker plus type code.
pub(crate) const HEADER_SIZE: usize = 1 + 4;
pub(crate) const SRID_SIZE: usize = 4;
/// Every element count is a uint32.
pub(crate) const COUNT_SIZE: usize = 4;
/// Two f64s.
pub(crate) const COORD_SIZE: usize = 2 * 8;

/// Endianness
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Endianness {
    BigEndian = 0,
    LittleEndian = 1,
}

// Not derived: num_enum treats a `#[default]` variant as the catch-all for
// unknown markers.
impl Default for Endianness {
    fn default() -> Self {
        Endianness::LittleEndian
    }
}

/// The geometry kinds that can appear in the type code
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
}

impl WKBType {
    /// The type code to put on the wire, with the SRID flag set when an SRID follows.
    pub fn type_code(self, srid: Option<i32>) -> u32 {
        let code: u32 = self.into();
        if srid.is_some() {
            code | EWKB_SRID_FLAG
        } else {
            code
        }
    }

    /// Split a wire type code into the geometry kind and whether an SRID follows.
    pub fn from_type_code(code: u32) -> Result<(Self, bool)> {
        let has_srid = code & EWKB_SRID_FLAG != 0;
        let wkb_type = Self::try_from_primitive(code & !EWKB_SRID_FLAG)
            .map_err(|_| EwkbError::UnsupportedGeometry(code))?;
        Ok((wkb_type, has_srid))
    }
}

/// The fields that start every encoded geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub endianness: Endianness,
    pub wkb_type: WKBType,
    pub srid: Option<i32>,
}

/// Read the byte order marker, the type code and, if flagged, the SRID.
pub fn read_header<R: Read + ?Sized>(reader: &mut R) -> Result<Header> {
    let marker = reader.read_u8().map_err(EwkbError::from_read)?;
    let endianness = Endianness::try_from_primitive(marker).map_err(|_| EwkbError::NotEwkb)?;
    let (wkb_type, has_srid) = WKBType::from_type_code(read_u32(reader, endianness)?)?;
    let srid = if has_srid {
        Some(read_u32(reader, endianness)? as i32)
    } else {
        None
    };
    Ok(Header {
        endianness,
        wkb_type,
        srid,
    })
}

/// Write the byte order marker, the type code and the SRID if there is one.
pub fn write_header<W: Write + ?Sized>(
    writer: &mut W,
    endianness: Endianness,
    wkb_type: WKBType,
    srid: Option<i32>,
) -> Result<()> {
    writer.write_u8(endianness.into())?;
    write_u32(writer, endianness, wkb_type.type_code(srid))?;
    if let Some(srid) = srid {
        write_u32(writer, endianness, srid as u32)?;
    }
    Ok(())
}

pub(crate) fn read_u32<R: Read + ?Sized>(reader: &mut R, endianness: Endianness) -> Result<u32> {
    match endianness {
        Endianness::BigEndian => reader.read_u32::<BigEndian>(),
        Endianness::LittleEndian => reader.read_u32::<LittleEndian>(),
    }
    .map_err(EwkbError::from_read)
}

pub(crate) fn read_f64<R: Read + ?Sized>(reader: &mut R, endianness: Endianness) -> Result<f64> {
    match endianness {
        Endianness::BigEndian => reader.read_f64::<BigEndian>(),
        Endianness::LittleEndian => reader.read_f64::<LittleEndian>(),
    }
    .map_err(EwkbError::from_read)
}

/// Read a declared element count.
pub(crate) fn read_count<R: Read + ?Sized>(
    reader: &mut R,
    endianness: Endianness,
) -> Result<usize> {
    Ok(read_u32(reader, endianness)? as usize)
}

pub(crate) fn read_coord<R: Read + ?Sized>(
    reader: &mut R,
    endianness: Endianness,
) -> Result<Coord> {
    let x = read_f64(reader, endianness)?;
    let y = read_f64(reader, endianness)?;
    Ok(Coord { x, y })
}

pub(crate) fn write_u32<W: Write + ?Sized>(
    writer: &mut W,
    endianness: Endianness,
    value: u32,
) -> Result<()> {
    match endianness {
        Endianness::BigEndian => writer.write_u32::<BigEndian>(value)?,
        Endianness::LittleEndian => writer.write_u32::<LittleEndian>(value)?,
    }
    Ok(())
}

pub(crate) fn write_f64<W: Write + ?Sized>(
    writer: &mut W,
    endianness: Endianness,
    value: f64,
) -> Result<()> {
    match endianness {
        Endianness::BigEndian => writer.write_f64::<BigEndian>(value)?,
        Endianness::LittleEndian => writer.write_f64::<LittleEndian>(value)?,
    }
    Ok(())
}

/// Write an element count, which must fit in a uint32.
pub(crate) fn write_count<W: Write + ?Sized>(
    writer: &mut W,
    endianness: Endianness,
    count: usize,
) -> Result<()> {
    let count = u32::try_from(count).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{count} elements do not fit in a WKB count"),
        )
    })?;
    write_u32(writer, endianness, count)
}

pub(crate) fn write_coord<W: Write + ?Sized>(
    writer: &mut W,
    endianness: Endianness,
    coord: Coord,
) -> Result<()> {
    write_f64(writer, endianness, coord.x)?;
    write_f64(writer, endianness, coord.y)
}
