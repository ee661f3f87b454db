//! GBK code table.
//!
//! Two-byte cells are addressed by a pointer
//! `(lead - 0x81) * 190 + (trail - 0x40)` (or `- 0x41` once the trail byte is
//! past the `0x7F` hole). `FORWARD` maps every pointer to a scalar value and
//! `REVERSE` lists the pointers ordered by scalar value so the encoder can
//! binary-search it.
//!
//! Cells without a standard assignment decode to the Private Use Area: the
//! user-defined blocks `AAA1..AFFE`, `F8A1..FEFE` and `A140..A7A0` take
//! `U+E000..U+E765` in that order, and the remaining unassigned cells take
//! `U+E766..U+E864` in byte order.

mod data;

use data::{FORWARD, REVERSE};

/// Number of trail bytes per lead byte.
const TRAILS_PER_LEAD: usize = 190;

/// Returns `true` for bytes that start a two-byte GBK sequence.
#[inline]
pub fn is_lead_byte(byte: u8) -> bool {
    (0x81..=0xFE).contains(&byte)
}

/// Returns `true` for bytes allowed in second position of a two-byte
/// sequence.
#[inline]
pub fn is_trail_byte(byte: u8) -> bool {
    matches!(byte, 0x40..=0x7E | 0x80..=0xFE)
}

#[inline]
fn pointer(lead: u8, trail: u8) -> Option<usize> {
    if !is_lead_byte(lead) || !is_trail_byte(trail) {
        return None;
    }
    let offset = if trail < 0x7F { 0x40 } else { 0x41 };
    Some((lead - 0x81) as usize * TRAILS_PER_LEAD + (trail - offset) as usize)
}

#[inline]
fn pair(pointer: usize) -> [u8; 2] {
    let lead = (pointer / TRAILS_PER_LEAD) as u8 + 0x81;
    let trail = (pointer % TRAILS_PER_LEAD) as u8;
    let offset = if trail < 0x3F { 0x40 } else { 0x41 };
    [lead, trail + offset]
}

/// Looks up the scalar value of a two-byte sequence.
///
/// Returns `None` when either byte is out of range. Every in-range cell has a
/// scalar value.
///
/// ```
/// assert_eq!(gbk_codec::lookup_pair(0xCA, 0xC0), Some('世'));
/// assert_eq!(gbk_codec::lookup_pair(0x81, 0x00), None);
/// ```
pub fn lookup_pair(lead: u8, trail: u8) -> Option<char> {
    char::from_u32(u32::from(FORWARD[pointer(lead, trail)?]))
}

/// Looks up the two-byte sequence of a scalar value.
///
/// ASCII is not part of the table and yields `None`; the codec handles it
/// before reaching here.
///
/// ```
/// assert_eq!(gbk_codec::lookup_scalar('界'), Some([0xBD, 0xE7]));
/// assert_eq!(gbk_codec::lookup_scalar('€'), None);
/// ```
pub fn lookup_scalar(scalar: char) -> Option<[u8; 2]> {
    let scalar = u16::try_from(u32::from(scalar)).ok()?;
    let idx = REVERSE
        .binary_search_by_key(&scalar, |&p| FORWARD[p as usize])
        .ok()?;
    Some(pair(REVERSE[idx] as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shape() {
        assert_eq!(FORWARD.len(), 126 * TRAILS_PER_LEAD);
        assert!(FORWARD.iter().all(|&v| v != 0));
        assert_eq!(REVERSE.len(), FORWARD.len());
        assert_eq!(REVERSE.len(), 23_940);
    }

    #[test]
    fn reverse_is_strictly_sorted() {
        for w in REVERSE.windows(2) {
            assert!(FORWARD[w[0] as usize] < FORWARD[w[1] as usize]);
        }
    }

    #[test]
    fn every_mapped_cell_round_trips() {
        for &p in REVERSE.iter() {
            let [lead, trail] = pair(p as usize);
            let scalar = lookup_pair(lead, trail).expect("mapped cell");
            assert_eq!(lookup_scalar(scalar), Some([lead, trail]));
        }
    }

    #[test]
    fn pointer_skips_0x7f_hole() {
        assert_eq!(pointer(0x81, 0x40), Some(0));
        assert_eq!(pointer(0x81, 0x7E), Some(62));
        assert_eq!(pointer(0x81, 0x80), Some(63));
        assert_eq!(pointer(0x81, 0xFE), Some(189));
        assert_eq!(pointer(0x82, 0x40), Some(190));
        assert_eq!(pointer(0x81, 0x7F), None);
        assert_eq!(pointer(0x80, 0x40), None);
        assert_eq!(pointer(0xFF, 0x40), None);
        assert_eq!(pair(62), [0x81, 0x7E]);
        assert_eq!(pair(63), [0x81, 0x80]);
        assert_eq!(pair(190), [0x82, 0x40]);
    }

    #[test]
    fn known_cells() {
        assert_eq!(lookup_pair(0x81, 0x40), Some('\u{4E02}'));
        assert_eq!(lookup_pair(0xA1, 0xA1), Some('\u{3000}'));
        assert_eq!(lookup_pair(0xB0, 0xA1), Some('啊'));
        assert_eq!(lookup_pair(0xD2, 0xBB), Some('一'));
        assert_eq!(lookup_pair(0xA3, 0xC1), Some('Ａ'));
        assert_eq!(lookup_pair(0xFE, 0x4F), Some('\u{FA29}'));
        assert_eq!(lookup_pair(0xA1, 0xE8), Some('\u{A4}'));
        assert_eq!(lookup_scalar('\u{FFE5}').map(|[l, _]| l), Some(0xA3));
    }

    #[test]
    fn private_use_cells() {
        // User-defined blocks first.
        assert_eq!(lookup_pair(0xAA, 0xA1), Some('\u{E000}'));
        assert_eq!(lookup_pair(0xAF, 0xFE), Some('\u{E233}'));
        assert_eq!(lookup_pair(0xF8, 0xA1), Some('\u{E234}'));
        assert_eq!(lookup_pair(0xFE, 0xFE), Some('\u{E4C5}'));
        assert_eq!(lookup_pair(0xA1, 0x40), Some('\u{E4C6}'));
        assert_eq!(lookup_pair(0xA7, 0xA0), Some('\u{E765}'));
        // Then the leftover unassigned cells.
        assert_eq!(lookup_pair(0xA2, 0xAB), Some('\u{E766}'));
        assert_eq!(lookup_pair(0xA2, 0xE3), Some('\u{E76C}'));
        assert_eq!(lookup_pair(0xD7, 0xFA), Some('\u{E810}'));
        assert_eq!(lookup_pair(0xFE, 0x50), Some('\u{E815}'));
        assert_eq!(lookup_pair(0xFE, 0xA0), Some('\u{E864}'));
        assert_eq!(lookup_scalar('\u{E000}'), Some([0xAA, 0xA1]));
        assert_eq!(lookup_scalar('\u{E864}'), Some([0xFE, 0xA0]));
        assert_eq!(lookup_scalar('\u{E865}'), None);
    }

    #[test]
    fn unmapped_scalars() {
        assert_eq!(lookup_scalar('A'), None);
        assert_eq!(lookup_scalar('\u{A5}'), None);
        assert_eq!(lookup_scalar('\u{1F600}'), None);
    }
}
