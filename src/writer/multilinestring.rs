use std::io::Write;

use geo::MultiLineString;

use crate::common::{write_count, write_header, Endianness, WKBType, COUNT_SIZE, HEADER_SIZE};
use crate::error::Result;
use crate::writer::linestring::{line_string_wkb_size, write_line_string_as_wkb};
use crate::writer::srid_size;

/// The byte length of a WKBMultiLineString
pub fn multi_line_string_wkb_size(geom: &MultiLineString, srid: Option<i32>) -> usize {
    let mut sum = HEADER_SIZE + srid_size(srid) + COUNT_SIZE;

    for line_string in geom.iter() {
        sum += line_string_wkb_size(line_string, None);
    }

    sum
}

/// Write a MultiLineString geometry to a Writer encoded as WKB
pub fn write_multi_line_string_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiLineString,
    endianness: Endianness,
    srid: Option<i32>,
) -> Result<()> {
    write_header(writer, endianness, WKBType::MultiLineString, srid)?;

    // numLineStrings
    write_count(writer, endianness, geom.0.len())?;

    for line_string in geom.iter() {
        write_line_string_as_wkb(writer, line_string, endianness, None)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::multilinestring::{ml0, ml1};
    use geo::Geometry;
    use geozero::{CoordDimensions, ToWkb};

    #[test]
    fn multi_line_string_matches_geozero() {
        for geom in [ml0(), ml1()] {
            let mut buf = Vec::new();
            write_multi_line_string_as_wkb(&mut buf, &geom, Endianness::LittleEndian, None)
                .unwrap();

            let expected = Geometry::MultiLineString(geom.clone())
                .to_wkb(CoordDimensions::xy())
                .unwrap();
            assert_eq!(buf, expected);
            assert_eq!(buf.len(), multi_line_string_wkb_size(&geom, None));
        }
    }
}
