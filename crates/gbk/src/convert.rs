//! Owned-buffer conversions built on the measure-then-fill calls.

use crate::{decode, encode, CodeUnit, GbkError};

/// Decodes `input` into a vector sized exactly to the result.
pub fn decode_to_vec<U: CodeUnit>(input: &[u8]) -> Result<Vec<U>, GbkError> {
    let len = decode::<U>(input, None)?;
    let mut out = vec![U::default(); len];
    let written = decode(input, Some(&mut out[..]))?;
    debug_assert_eq!(written, len);
    Ok(out)
}

/// Encodes `input` into a vector sized exactly to the result.
pub fn encode_to_vec<U: CodeUnit>(input: &[U]) -> Result<Vec<u8>, GbkError> {
    let len = encode(input, None)?;
    let mut out = vec![0u8; len];
    let written = encode(input, Some(&mut out[..]))?;
    debug_assert_eq!(written, len);
    Ok(out)
}

/// Decodes GBK `input` into a `String`.
///
/// ```
/// let s = gbk_codec::decode_to_string(b"\xD6\xD0\xCE\xC4").unwrap();
/// assert_eq!(s, "中文");
/// ```
pub fn decode_to_string(input: &[u8]) -> Result<String, GbkError> {
    Ok(decode_to_vec::<char>(input)?.into_iter().collect())
}

/// Encodes a string as GBK. Error positions count `char`s, not bytes.
///
/// ```
/// assert_eq!(gbk_codec::encode_str("中文").unwrap(), b"\xD6\xD0\xCE\xC4");
/// ```
pub fn encode_str(input: &str) -> Result<Vec<u8>, GbkError> {
    let scalars: Vec<char> = input.chars().collect();
    encode_to_vec(&scalars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_round_trip_utf16() {
        let gbk = b"\xD6\xD0\xBB\xAA\xC8\xCB\xC3\xF1\xB9\xB2\xBA\xCD\xB9\xFA";
        let units = decode_to_vec::<u16>(gbk).unwrap();
        assert_eq!(String::from_utf16(&units).unwrap(), "中华人民共和国");
        assert_eq!(encode_to_vec(&units).unwrap(), gbk.to_vec());
    }

    #[test]
    fn string_round_trip() {
        let text = "GBK 编码: ａ·é";
        let gbk = encode_str(text).unwrap();
        assert_eq!(decode_to_string(&gbk).unwrap(), text);
    }

    #[test]
    fn errors_propagate() {
        assert_eq!(
            decode_to_vec::<u32>(b"\xCA"),
            Err(GbkError::TruncatedInput { position: 0 })
        );
        assert_eq!(
            encode_str("ok😀"),
            Err(GbkError::Unrepresentable {
                position: 2,
                scalar: 0x1F600
            })
        );
    }

    #[test]
    fn string_keeps_every_decoded_scalar() {
        // Private-use cells included: nothing is dropped between units and text.
        let gbk = b"a\xAA\xA1\xFE\xA0\xD6\xD0";
        let text = decode_to_string(gbk).unwrap();
        assert_eq!(text, "a\u{E000}\u{E864}中");
        assert_eq!(text.chars().count(), decode_to_vec::<u32>(gbk).unwrap().len());
        assert_eq!(encode_str(&text).unwrap(), gbk.to_vec());
    }
}
