//! Hex encoding of text for Ctrl+Shift+U Unicode entry.
//!
//! GTK, Qt and IBus all accept `Ctrl+Shift+U <hex digits>` as a way to enter
//! an arbitrary code point.  The emitter needs the digits to type; this
//! module produces them.
//!
//! Code points are written in uppercase hex with no padding and no
//! separator, and all characters of the input are concatenated into a single
//! digit string:
//!
//! | Input  | Code points        | Output       |
//! |--------|--------------------|--------------|
//! | `"A"`  | U+41               | `"41"`       |
//! | `"👱"` | U+1F471            | `"1F471"`    |
//! | `"ab"` | U+61, U+62         | `"6162"`     |

use std::fmt::Write as _;

use tracing::debug;

/// Decodes `utf8` and returns the uppercase hex digits of every code point.
///
/// Invalid UTF-8 sequences are skipped; the valid text around them is still
/// encoded.
pub fn to_hex(utf8: &[u8]) -> String {
    let mut hex = String::with_capacity(utf8.len() * 2);
    for chunk in utf8.utf8_chunks() {
        for ch in chunk.valid().chars() {
            // Writing into a String cannot fail.
            let _ = write!(hex, "{:X}", u32::from(ch));
        }
        if !chunk.invalid().is_empty() {
            debug!(bytes = ?chunk.invalid(), "skipping invalid UTF-8 sequence");
        }
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_character_encodes_to_two_digits() {
        assert_eq!(to_hex(b"A"), "41");
        assert_eq!(to_hex(b"~"), "7E");
    }

    #[test]
    fn test_digits_are_uppercase() {
        assert_eq!(to_hex("ÿ".as_bytes()), "FF");
        assert_eq!(to_hex("é".as_bytes()), "E9");
    }

    #[test]
    fn test_astral_code_point_is_not_padded() {
        assert_eq!(to_hex("👱".as_bytes()), "1F471");
    }

    #[test]
    fn test_control_character_has_no_leading_zero() {
        assert_eq!(to_hex(b"\t"), "9");
    }

    #[test]
    fn test_multiple_characters_are_concatenated() {
        assert_eq!(to_hex(b"ab"), "6162");
        assert_eq!(to_hex("a€".as_bytes()), "6120AC");
    }

    #[test]
    fn test_empty_input_encodes_to_empty_string() {
        assert_eq!(to_hex(b""), "");
    }

    #[test]
    fn test_invalid_utf8_is_skipped() {
        assert_eq!(to_hex(&[b'a', 0xFF, b'b']), "6162");
        assert_eq!(to_hex(&[0xC3]), "");
    }
}
