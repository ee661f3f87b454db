//! Conversion between GBK and UTF-16/UTF-32 code units.
//!
//! Bytes below `0x80` are ASCII and map to themselves. Bytes `0x81..=0xFE`
//! lead a two-byte sequence whose trail byte is in `0x40..=0x7E` or
//! `0x80..=0xFE`. Every such pair has a scalar value; cells outside the
//! standard assignments decode to the Private Use Area. Every other byte is
//! rejected.
//!
//! # Measure, then fill
//!
//! [`decode`] and [`encode`] take an optional output slice. Passing `None`
//! returns the exact output length without writing anything; passing a slice
//! of at least that length performs the conversion and returns the same
//! length. Both modes run one scanning routine, so they cannot disagree.
//!
//! ```
//! use gbk_codec::{decode, encode};
//!
//! let gbk = b"Hello, \xCA\xC0\xBD\xE7!";
//!
//! let len = decode::<u32>(gbk, None).unwrap();
//! let mut text = vec![0u32; len];
//! decode(gbk, Some(&mut text[..])).unwrap();
//! assert_eq!(len, 10);
//!
//! let len = encode(&text, None).unwrap();
//! let mut back = vec![0u8; len];
//! encode(&text, Some(&mut back[..])).unwrap();
//! assert_eq!(back, gbk);
//! ```
//!
//! # Errors
//!
//! The first malformed or unrepresentable sequence aborts the conversion with
//! a [`GbkError`] carrying its input offset. There is no replacement
//! character. Sizing and fill report the same error for the same input.

mod convert;
mod decode;
mod encode;
mod error;
mod sink;
mod table;
mod unit;

pub use convert::{decode_to_string, decode_to_vec, encode_str, encode_to_vec};
pub use decode::{decode, decode_into, decoded_len};
pub use encode::{encode, encode_into, encoded_len};
pub use error::GbkError;
pub use table::{is_lead_byte, is_trail_byte, lookup_pair, lookup_scalar};
pub use unit::CodeUnit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_transparent_both_ways() {
        for c in 0u8..0x80 {
            assert_eq!(decode_to_vec::<u16>(&[c]).unwrap(), vec![u16::from(c)]);
            assert_eq!(decode_to_vec::<u32>(&[c]).unwrap(), vec![u32::from(c)]);
            assert_eq!(encode_to_vec(&[u16::from(c)]).unwrap(), vec![c]);
            assert_eq!(encode_to_vec(&[u32::from(c)]).unwrap(), vec![c]);
        }
    }

    #[test]
    fn byte_classes() {
        assert!(!is_lead_byte(0x7F));
        assert!(!is_lead_byte(0x80));
        assert!(is_lead_byte(0x81));
        assert!(is_lead_byte(0xFE));
        assert!(!is_lead_byte(0xFF));
        assert!(!is_trail_byte(0x3F));
        assert!(is_trail_byte(0x40));
        assert!(!is_trail_byte(0x7F));
        assert!(is_trail_byte(0x80));
        assert!(!is_trail_byte(0xFF));
    }
}
