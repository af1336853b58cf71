//! Low-level byte reading utilities

use std::io::Read;
use byteorder::{LittleEndian, ReadBytesExt};
use encoding_rs::UTF_16LE;
use crate::v8::types::error::{V8Error, Result};

/// Decode a header field stored as hex-ASCII.
///
/// Every byte is the ASCII code of a hexadecimal digit, so `b"0000001f"`
/// decodes to 31. Not to be confused with the little-endian fields used
/// elsewhere in the format.
pub fn read_hex_ascii(field: &[u8]) -> Result<u32> {
    let digits = std::str::from_utf8(field)
        .map_err(|_| V8Error::InvalidFormat(format!("Non-ASCII bytes in hex field: {:02x?}", field)))?;
    u32::from_str_radix(digits, 16)
        .map_err(|e| V8Error::InvalidFormat(format!("Invalid hex field {:?}: {}", digits, e)))
}

/// Read a 4-byte little-endian number and advance the reader.
pub fn read_u32_le(reader: &mut impl Read) -> Result<u32> {
    Ok(reader.read_u32::<LittleEndian>()?)
}

/// Read an 8-byte little-endian number and advance the reader.
pub fn read_u64_le(reader: &mut impl Read) -> Result<u64> {
    Ok(reader.read_u64::<LittleEndian>()?)
}

/// Decode a NUL-terminated string of little-endian 16-bit units.
///
/// Everything from the first NUL unit onwards is ignored. Without a
/// terminator the whole slice is used; an odd trailing byte is dropped.
pub fn read_utf16_nul_terminated(bytes: &[u8]) -> String {
    let end_pos = bytes
        .chunks_exact(2)
        .position(|unit| unit == [0, 0])
        .map(|unit_index| unit_index * 2)
        .unwrap_or(bytes.len() & !1);

    let (decoded, _) = UTF_16LE.decode_without_bom_handling(&bytes[..end_pos]);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_ascii_is_not_binary() {
        assert_eq!(read_hex_ascii(b"0000001f").unwrap(), 31);
        assert_eq!(read_hex_ascii(b"7fffffff").unwrap(), 2147483647);
        assert_eq!(read_hex_ascii(b"000000FF").unwrap(), 255);
    }

    #[test]
    fn hex_ascii_rejects_garbage() {
        assert!(matches!(read_hex_ascii(b"0000 01f"), Err(V8Error::InvalidFormat(_))));
        assert!(matches!(read_hex_ascii(&[0xff, 0x00]), Err(V8Error::InvalidFormat(_))));
    }

    #[test]
    fn utf16_without_terminator_uses_whole_slice() {
        let bytes = [b'a', 0, b'b', 0, b'c'];
        assert_eq!(read_utf16_nul_terminated(&bytes), "ab");
    }

    #[test]
    fn utf16_decodes_non_ascii() {
        let mut bytes: Vec<u8> = "Форма".encode_utf16().flat_map(u16::to_le_bytes).collect();
        bytes.extend_from_slice(&[0, 0, 0xAA, 0xBB]);
        assert_eq!(read_utf16_nul_terminated(&bytes), "Форма");
    }
}
