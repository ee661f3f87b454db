//! UTF-16/UTF-32 code units to GBK bytes.

use log::debug;

use crate::sink::{Fill, Measure, Sink};
use crate::table::lookup_scalar;
use crate::{CodeUnit, GbkError};

/// Encodes code units of width `U` into GBK.
///
/// Sizing and fill follow [`decode`](crate::decode()): `None` measures,
/// `Some(buf)` writes to the front of `buf`, and both return the same byte
/// count for the same input. Positions in errors are unit offsets into
/// `input`.
///
/// # Errors
///
/// - [`GbkError::TruncatedInput`] when UTF-16 input ends on a high surrogate.
/// - [`GbkError::InvalidSequence`] for unpaired surrogates, or UTF-32 units
///   that are not scalar values.
/// - [`GbkError::Unrepresentable`] for scalar values outside GBK.
/// - [`GbkError::OutputTooSmall`] when `buf` cannot hold the result.
///
/// # Example
///
/// ```
/// use gbk_codec::encode;
///
/// let text: Vec<u32> = "世界".chars().map(u32::from).collect();
/// let len = encode(&text, None).unwrap();
/// let mut buf = vec![0u8; len];
/// encode(&text, Some(&mut buf[..])).unwrap();
/// assert_eq!(buf, b"\xCA\xC0\xBD\xE7");
/// ```
pub fn encode<U: CodeUnit>(input: &[U], output: Option<&mut [u8]>) -> Result<usize, GbkError> {
    match output {
        None => run(input, Measure::default()),
        Some(buf) => run(input, Fill::new(buf)),
    }
}

/// Number of bytes needed to encode `input`.
pub fn encoded_len<U: CodeUnit>(input: &[U]) -> Result<usize, GbkError> {
    run(input, Measure::default())
}

/// Encodes `input` into `output` and returns the number of bytes written.
pub fn encode_into<U: CodeUnit>(input: &[U], output: &mut [u8]) -> Result<usize, GbkError> {
    run(input, Fill::new(output))
}

fn run<U: CodeUnit, S: Sink<u8>>(input: &[U], sink: S) -> Result<usize, GbkError> {
    let mode = sink.mode();
    scan(input, sink).map_err(|err| {
        debug!("gbk encode aborted ({mode}): {err}");
        err
    })
}

fn scan<U: CodeUnit, S: Sink<u8>>(input: &[U], mut sink: S) -> Result<usize, GbkError> {
    let mut x = 0;
    while x < input.len() {
        let (scalar, width) = U::next_scalar(input, x)?;
        if scalar.is_ascii() {
            sink.emit(&[scalar as u8], x)?;
        } else {
            let pair = lookup_scalar(scalar).ok_or(GbkError::Unrepresentable {
                position: x,
                scalar: u32::from(scalar),
            })?;
            sink.emit(&pair, x)?;
        }
        x += width;
    }
    Ok(sink.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    fn utf32(s: &str) -> Vec<u32> {
        s.chars().map(u32::from).collect()
    }

    #[test]
    fn hello_world_both_widths() {
        let expected = b"Hello, \xCA\xC0\xBD\xE7!";
        let wide = utf16("Hello, 世界!");
        assert_eq!(encoded_len(&wide), Ok(12));
        let mut buf = [0u8; 12];
        assert_eq!(encode_into(&wide, &mut buf), Ok(12));
        assert_eq!(&buf, expected);

        let wider = utf32("Hello, 世界!");
        assert_eq!(encode(&wider, None), Ok(12));
        let mut buf = [0u8; 12];
        assert_eq!(encode(&wider, Some(&mut buf[..])), Ok(12));
        assert_eq!(&buf, expected);
    }

    #[test]
    fn unrepresentable_scalar() {
        assert_eq!(
            encoded_len(&utf32("a€")),
            Err(GbkError::Unrepresentable {
                position: 1,
                scalar: 0x20AC
            })
        );
        assert_eq!(
            encoded_len(&utf32("\u{80}")),
            Err(GbkError::Unrepresentable {
                position: 0,
                scalar: 0x80
            })
        );
    }

    #[test]
    fn supplementary_scalar_is_joined_before_lookup() {
        // U+1F600 has no GBK cell; the error names the joined scalar.
        assert_eq!(
            encoded_len(&utf16("ab\u{1F600}")),
            Err(GbkError::Unrepresentable {
                position: 2,
                scalar: 0x1F600
            })
        );
    }

    #[test]
    fn malformed_utf16() {
        assert_eq!(
            encoded_len::<u16>(&[0x41, 0xDC00]),
            Err(GbkError::InvalidSequence { position: 1 })
        );
        assert_eq!(
            encoded_len::<u16>(&[0xD800, 0x41]),
            Err(GbkError::InvalidSequence { position: 0 })
        );
        assert_eq!(
            encoded_len::<u16>(&[0x41, 0x42, 0xD800]),
            Err(GbkError::TruncatedInput { position: 2 })
        );
    }

    #[test]
    fn malformed_utf32() {
        assert_eq!(
            encoded_len::<u32>(&[0xDFFF]),
            Err(GbkError::InvalidSequence { position: 0 })
        );
        assert_eq!(
            encoded_len::<u32>(&[0x4E2D, 0x0011_0000]),
            Err(GbkError::InvalidSequence { position: 1 })
        );
    }

    #[test]
    fn short_buffer_never_splits_a_pair() {
        let mut buf = [0u8; 3];
        assert_eq!(
            encode_into(&utf32("中华"), &mut buf),
            Err(GbkError::OutputTooSmall {
                position: 1,
                capacity: 3
            })
        );
        assert_eq!(buf, [0xD6, 0xD0, 0x00]);
    }
}
