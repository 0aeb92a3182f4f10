use std::io::Read;

use geo::MultiLineString;

use crate::common::{read_count, read_header, Endianness, WKBType, MAX_MULTI_ALLOC};
use crate::error::{EwkbError, Result};
use crate::reader::linestring::read_line_string;

/// Read the body of a MultiLineString.
pub(crate) fn read_multi_line_string<R: Read + ?Sized>(
    reader: &mut R,
    endianness: Endianness,
) -> Result<MultiLineString> {
    let num_lines = read_count(reader, endianness)?;

    let mut lines = Vec::with_capacity(num_lines.min(MAX_MULTI_ALLOC));
    for _ in 0..num_lines {
        let header = read_header(reader)?;
        if header.wkb_type != WKBType::LineString {
            return Err(EwkbError::NotEwkb);
        }
        lines.push(read_line_string(reader, header.endianness)?);
    }

    Ok(MultiLineString::new(lines))
}
