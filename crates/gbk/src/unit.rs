//! Code-unit widths on the Unicode side of the codec.

use std::fmt::Debug;

use crate::GbkError;

const HIGH_SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for char {}
}

/// A fixed-width Unicode code unit: `u16` (UTF-16), `u32` (UTF-32), or
/// `char` (a scalar value, for `String` conversions).
///
/// Implemented only inside this crate.
pub trait CodeUnit: sealed::Sealed + Copy + Default + Eq + Debug {
    /// Splits `scalar` into units. Returns the buffer and how many of its
    /// leading entries are used.
    fn from_scalar(scalar: char) -> ([Self; 2], usize);

    /// Reads the scalar value starting at `input[position]` and returns it
    /// with the number of units it spans.
    fn next_scalar(input: &[Self], position: usize) -> Result<(char, usize), GbkError>;
}

impl CodeUnit for u16 {
    #[inline]
    fn from_scalar(scalar: char) -> ([u16; 2], usize) {
        let cp = u32::from(scalar);
        if cp <= 0xFFFF {
            return ([cp as u16, 0], 1);
        }
        let v = cp - 0x10000;
        let high = 0xD800 + (v >> 10);
        let low = 0xDC00 + (v & 0x3FF);
        ([high as u16, low as u16], 2)
    }

    #[inline]
    fn next_scalar(input: &[u16], position: usize) -> Result<(char, usize), GbkError> {
        let unit = u32::from(input[position]);
        if LOW_SURROGATES.contains(&unit) {
            return Err(GbkError::InvalidSequence { position });
        }
        if !HIGH_SURROGATES.contains(&unit) {
            return char::from_u32(unit)
                .map(|c| (c, 1))
                .ok_or(GbkError::InvalidSequence { position });
        }
        let low = match input.get(position + 1) {
            Some(&low) => u32::from(low),
            None => return Err(GbkError::TruncatedInput { position }),
        };
        if !LOW_SURROGATES.contains(&low) {
            return Err(GbkError::InvalidSequence { position });
        }
        let cp = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
        char::from_u32(cp)
            .map(|c| (c, 2))
            .ok_or(GbkError::InvalidSequence { position })
    }
}

impl CodeUnit for u32 {
    #[inline]
    fn from_scalar(scalar: char) -> ([u32; 2], usize) {
        ([u32::from(scalar), 0], 1)
    }

    #[inline]
    fn next_scalar(input: &[u32], position: usize) -> Result<(char, usize), GbkError> {
        char::from_u32(input[position])
            .map(|c| (c, 1))
            .ok_or(GbkError::InvalidSequence { position })
    }
}

impl CodeUnit for char {
    #[inline]
    fn from_scalar(scalar: char) -> ([char; 2], usize) {
        ([scalar, '\0'], 1)
    }

    #[inline]
    fn next_scalar(input: &[char], position: usize) -> Result<(char, usize), GbkError> {
        Ok((input[position], 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf16_bmp_is_one_unit() {
        assert_eq!(u16::from_scalar('A'), ([0x41, 0], 1));
        assert_eq!(u16::from_scalar('\u{FFFF}'), ([0xFFFF, 0], 1));
        assert_eq!(u16::next_scalar(&[0x4E16], 0), Ok(('世', 1)));
    }

    #[test]
    fn utf16_supplementary_is_surrogate_pair() {
        assert_eq!(u16::from_scalar('\u{10000}'), ([0xD800, 0xDC00], 2));
        assert_eq!(u16::from_scalar('\u{1F600}'), ([0xD83D, 0xDE00], 2));
        assert_eq!(u16::from_scalar('\u{10FFFF}'), ([0xDBFF, 0xDFFF], 2));
        assert_eq!(u16::next_scalar(&[0xD83D, 0xDE00], 0), Ok(('\u{1F600}', 2)));
    }

    #[test]
    fn utf16_malformed_surrogates() {
        assert_eq!(
            u16::next_scalar(&[0xDE00], 0),
            Err(GbkError::InvalidSequence { position: 0 })
        );
        assert_eq!(
            u16::next_scalar(&[0x41, 0xD83D, 0x41], 1),
            Err(GbkError::InvalidSequence { position: 1 })
        );
        assert_eq!(
            u16::next_scalar(&[0xD83D, 0xD83D], 0),
            Err(GbkError::InvalidSequence { position: 0 })
        );
        assert_eq!(
            u16::next_scalar(&[0x41, 0xD83D], 1),
            Err(GbkError::TruncatedInput { position: 1 })
        );
    }

    #[test]
    fn utf32_units() {
        assert_eq!(u32::from_scalar('\u{1F600}'), ([0x1F600, 0], 1));
        assert_eq!(u32::next_scalar(&[0x1F600], 0), Ok(('\u{1F600}', 1)));
        assert_eq!(
            u32::next_scalar(&[0xD800], 0),
            Err(GbkError::InvalidSequence { position: 0 })
        );
        assert_eq!(
            u32::next_scalar(&[0x41, 0x110000], 1),
            Err(GbkError::InvalidSequence { position: 1 })
        );
    }

    #[test]
    fn char_units_are_scalars() {
        assert_eq!(char::from_scalar('\u{1F600}'), (['\u{1F600}', '\0'], 1));
        assert_eq!(char::next_scalar(&['a', '世'], 1), Ok(('世', 1)));
    }
}
