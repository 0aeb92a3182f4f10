use std::io::Write;

use geo::MultiPoint;

use crate::common::{write_count, write_header, Endianness, WKBType, COUNT_SIZE, HEADER_SIZE};
use crate::error::Result;
use crate::writer::point::{point_wkb_size, write_point_as_wkb};
use crate::writer::srid_size;

/// The byte length of a WKBMultiPoint
pub fn multi_point_wkb_size(geom: &MultiPoint, srid: Option<i32>) -> usize {
    HEADER_SIZE + srid_size(srid) + COUNT_SIZE + geom.0.len() * point_wkb_size(None)
}

/// Write a MultiPoint geometry to a Writer encoded as WKB
pub fn write_multi_point_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiPoint,
    endianness: Endianness,
    srid: Option<i32>,
) -> Result<()> {
    write_header(writer, endianness, WKBType::MultiPoint, srid)?;

    // numPoints
    write_count(writer, endianness, geom.0.len())?;

    for point in geom.iter() {
        write_point_as_wkb(writer, point, endianness, None)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::multipoint::{mp0, mp1, mp_empty};
    use geo::Geometry;
    use geozero::{CoordDimensions, ToWkb};

    #[test]
    fn multi_point_matches_geozero() {
        for geom in [mp0(), mp1()] {
            let mut buf = Vec::new();
            write_multi_point_as_wkb(&mut buf, &geom, Endianness::LittleEndian, None).unwrap();

            let expected = Geometry::MultiPoint(geom.clone())
                .to_wkb(CoordDimensions::xy())
                .unwrap();
            assert_eq!(buf, expected);
            assert_eq!(buf.len(), multi_point_wkb_size(&geom, None));
        }
    }

    #[test]
    fn empty_multi_point() {
        let mut buf = Vec::new();
        write_multi_point_as_wkb(&mut buf, &mp_empty(), Endianness::LittleEndian, None).unwrap();
        assert_eq!(buf, [0x01, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn members_carry_no_srid() {
        let mut buf = Vec::new();
        write_multi_point_as_wkb(&mut buf, &mp1(), Endianness::LittleEndian, Some(4326)).unwrap();

        // outer header, srid, count, then a plain point header
        assert_eq!(buf[1..5], [0x04, 0x00, 0x00, 0x20]);
        assert_eq!(buf[13..18], [0x01, 0x01, 0x00, 0x00, 0x00]);
        assert_eq!(buf.len(), multi_point_wkb_size(&mp1(), Some(4326)));
    }
}
