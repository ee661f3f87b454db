//! GBK bytes to UTF-16/UTF-32 code units.

use log::debug;

use crate::sink::{Fill, Measure, Sink};
use crate::table::{is_lead_byte, lookup_pair};
use crate::{CodeUnit, GbkError};

#[derive(Debug, Clone, Copy)]
enum State {
    AwaitingLead,
    AwaitingTrail { lead: u8, position: usize },
}

/// Decodes GBK `input` into code units of width `U`.
///
/// With `output` set to `None` nothing is written and the returned length is
/// the number of units the conversion needs. With `Some(buf)` the units are
/// written to the front of `buf` and their count is returned. Both calls
/// return the same length for the same input.
///
/// # Errors
///
/// - [`GbkError::TruncatedInput`] when the input ends after a lead byte.
/// - [`GbkError::InvalidSequence`] for `0x80`, `0xFF`, or a trail byte out
///   of range.
/// - [`GbkError::OutputTooSmall`] when `buf` cannot hold the result.
///
/// # Example
///
/// ```
/// use gbk_codec::decode;
///
/// let gbk = b"Hello, \xCA\xC0\xBD\xE7!";
/// let len = decode::<u16>(gbk, None).unwrap();
/// let mut buf = vec![0u16; len];
/// assert_eq!(decode(gbk, Some(&mut buf[..])).unwrap(), len);
/// assert_eq!(String::from_utf16(&buf).unwrap(), "Hello, 世界!");
/// ```
pub fn decode<U: CodeUnit>(input: &[u8], output: Option<&mut [U]>) -> Result<usize, GbkError> {
    match output {
        None => run::<U, _>(input, Measure::default()),
        Some(buf) => run(input, Fill::new(buf)),
    }
}

/// Number of `U` units needed to decode `input`.
pub fn decoded_len<U: CodeUnit>(input: &[u8]) -> Result<usize, GbkError> {
    run::<U, _>(input, Measure::default())
}

/// Decodes `input` into `output` and returns the number of units written.
pub fn decode_into<U: CodeUnit>(input: &[u8], output: &mut [U]) -> Result<usize, GbkError> {
    run(input, Fill::new(output))
}

fn run<U: CodeUnit, S: Sink<U>>(input: &[u8], sink: S) -> Result<usize, GbkError> {
    let mode = sink.mode();
    scan(input, sink).map_err(|err| {
        debug!("gbk decode aborted ({mode}): {err}");
        err
    })
}

fn scan<U: CodeUnit, S: Sink<U>>(input: &[u8], mut sink: S) -> Result<usize, GbkError> {
    let mut state = State::AwaitingLead;
    for (x, &byte) in input.iter().enumerate() {
        state = match state {
            State::AwaitingLead if byte < 0x80 => {
                let (units, n) = U::from_scalar(char::from(byte));
                sink.emit(&units[..n], x)?;
                State::AwaitingLead
            }
            State::AwaitingLead if is_lead_byte(byte) => State::AwaitingTrail {
                lead: byte,
                position: x,
            },
            State::AwaitingLead => return Err(GbkError::InvalidSequence { position: x }),
            State::AwaitingTrail { lead, position } => {
                let scalar =
                    lookup_pair(lead, byte).ok_or(GbkError::InvalidSequence { position })?;
                let (units, n) = U::from_scalar(scalar);
                sink.emit(&units[..n], position)?;
                State::AwaitingLead
            }
        };
    }
    match state {
        State::AwaitingLead => Ok(sink.len()),
        State::AwaitingTrail { position, .. } => Err(GbkError::TruncatedInput { position }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_WORLD: &[u8] = b"Hello, \xCA\xC0\xBD\xE7!";

    #[test]
    fn hello_world_utf16() {
        assert_eq!(decoded_len::<u16>(HELLO_WORLD), Ok(10));
        let mut buf = [0u16; 10];
        assert_eq!(decode_into(HELLO_WORLD, &mut buf), Ok(10));
        let expected: Vec<u16> = "Hello, 世界!".encode_utf16().collect();
        assert_eq!(buf.to_vec(), expected);
    }

    #[test]
    fn hello_world_utf32() {
        assert_eq!(decode::<u32>(HELLO_WORLD, None), Ok(10));
        let mut buf = [0u32; 10];
        assert_eq!(decode(HELLO_WORLD, Some(&mut buf[..])), Ok(10));
        let expected: Vec<u32> = "Hello, 世界!".chars().map(u32::from).collect();
        assert_eq!(buf.to_vec(), expected);
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode::<u16>(&[], None), Ok(0));
        let mut buf: [u32; 0] = [];
        assert_eq!(decode(&[], Some(&mut buf[..])), Ok(0));
    }

    #[test]
    fn trailing_lead_is_truncated() {
        assert_eq!(
            decoded_len::<u16>(b"ab\xCA"),
            Err(GbkError::TruncatedInput { position: 2 })
        );
        let mut buf = [0u16; 8];
        assert_eq!(
            decode_into(b"ab\xCA", &mut buf),
            Err(GbkError::TruncatedInput { position: 2 })
        );
    }

    #[test]
    fn invalid_lead_bytes() {
        for lead in [0x80u8, 0xFF] {
            assert_eq!(
                decoded_len::<u32>(&[b'a', lead, 0xA1]),
                Err(GbkError::InvalidSequence { position: 1 })
            );
        }
    }

    #[test]
    fn invalid_trail_bytes() {
        for trail in [0x00u8, 0x3F, 0x7F, 0xFF] {
            assert_eq!(
                decoded_len::<u16>(&[0x81, trail]),
                Err(GbkError::InvalidSequence { position: 0 })
            );
        }
    }

    #[test]
    fn user_defined_cells_decode_to_private_use() {
        let mut buf = [0u16; 4];
        assert_eq!(decode_into(b"x\xAA\xA1\xA2\xE3", &mut buf), Ok(3));
        assert_eq!(buf[..3], [0x78, 0xE000, 0xE76C]);
    }

    #[test]
    fn sizing_resolves_the_unit_width() {
        assert_eq!(decode::<u16>(b"\xD6\xD0", None), Ok(1));
        assert_eq!(decode::<u32>(b"\xD6\xD0", None), Ok(1));
        assert_eq!(decode::<char>(b"\xD6\xD0", None), Ok(1));
    }

    #[test]
    fn short_buffer_is_reported_not_overrun() {
        let mut buf = [0u16; 8];
        assert_eq!(
            decode_into(HELLO_WORLD, &mut buf),
            Err(GbkError::OutputTooSmall {
                position: 9,
                capacity: 8
            })
        );
    }

    #[test]
    fn oversized_buffer_is_filled_from_front() {
        let mut buf = [0xFFFFu16; 4];
        assert_eq!(decode_into(b"\xD6\xD0a", &mut buf), Ok(2));
        assert_eq!(buf, [0x4E2D, 0x61, 0xFFFF, 0xFFFF]);
    }
}
