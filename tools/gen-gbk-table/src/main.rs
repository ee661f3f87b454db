//! Regenerates `crates/gbk/src/table/data.rs`.
//!
//! Standard cells come from `encoding_rs::GBK`. Cells that code page 936
//! leaves to the Private Use Area are numbered here, because `encoding_rs`
//! follows GB18030 and gives some of them standard scalars instead.
//!
//! ```text
//! cargo run -p gen-gbk-table -- crates/gbk/src/table/data.rs
//! ```

use std::fmt::Write as _;
use std::{env, fs};

use anyhow::{bail, ensure, Context, Result};

const TRAILS_PER_LEAD: usize = 190;
const CELLS: usize = 126 * TRAILS_PER_LEAD;
const VALUES_PER_LINE: usize = 12;

const FIRST_USER_DEFINED: u16 = 0xE000;
const FIRST_UNASSIGNED: u16 = 0xE766;
const END_OF_PRIVATE_USE: u16 = 0xE865;

/// User-defined blocks in Private Use Area order, as
/// `(first lead, last lead, first trail, last trail)`.
const USER_DEFINED: [(u8, u8, u8, u8); 3] = [
    (0xAA, 0xAF, 0xA1, 0xFE),
    (0xF8, 0xFE, 0xA1, 0xFE),
    (0xA1, 0xA7, 0x40, 0xA0),
];

/// Cells code page 936 leaves unassigned outside the user-defined blocks.
const UNASSIGNED: [(u16, u16); 26] = [
    (0xA2AB, 0xA2B0),
    (0xA2E3, 0xA2E4),
    (0xA2EF, 0xA2F0),
    (0xA2FD, 0xA2FE),
    (0xA4F4, 0xA4FE),
    (0xA5F7, 0xA5FE),
    (0xA6B9, 0xA6C0),
    (0xA6D9, 0xA6DF),
    (0xA6EC, 0xA6ED),
    (0xA6F3, 0xA6F3),
    (0xA6F6, 0xA6FE),
    (0xA7C2, 0xA7D0),
    (0xA7F2, 0xA7FE),
    (0xA896, 0xA8A0),
    (0xA8BC, 0xA8BC),
    (0xA8BF, 0xA8BF),
    (0xA8C1, 0xA8C4),
    (0xA8EA, 0xA8FE),
    (0xA958, 0xA958),
    (0xA95B, 0xA95B),
    (0xA95D, 0xA95F),
    (0xA989, 0xA995),
    (0xA997, 0xA9A3),
    (0xA9F0, 0xA9FE),
    (0xD7FA, 0xD7FE),
    (0xFE50, 0xFEA0),
];

fn pointer(lead: u8, trail: u8) -> usize {
    let offset = if trail < 0x7F { 0x40 } else { 0x41 };
    (lead - 0x81) as usize * TRAILS_PER_LEAD + (trail - offset) as usize
}

fn pair(pointer: usize) -> [u8; 2] {
    let lead = (pointer / TRAILS_PER_LEAD) as u8 + 0x81;
    let trail = (pointer % TRAILS_PER_LEAD) as u8;
    let offset = if trail < 0x3F { 0x40 } else { 0x41 };
    [lead, trail + offset]
}

fn is_private_use(scalar: u16) -> bool {
    (0xE000..=0xF8FF).contains(&scalar)
}

/// Scalar `encoding_rs` assigns to a cell outside the private-use set.
fn standard_scalar(cell: [u8; 2]) -> Result<u16> {
    let text = encoding_rs::GBK
        .decode_without_bom_handling_and_without_replacement(&cell)
        .with_context(|| format!("{cell:02X?} does not decode"))?;
    let mut chars = text.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        bail!("{cell:02X?} decodes to {text:?}, not one scalar");
    };
    let scalar = u16::try_from(u32::from(c))
        .with_context(|| format!("{cell:02X?} decodes outside the BMP"))?;
    ensure!(
        !is_private_use(scalar) && !c.is_ascii(),
        "{cell:02X?} decodes to U+{scalar:04X}, expected a standard assignment"
    );
    Ok(scalar)
}

fn build_forward() -> Result<Vec<u16>> {
    let mut forward = vec![0u16; CELLS];

    let mut next = FIRST_USER_DEFINED;
    for (first_lead, last_lead, first_trail, last_trail) in USER_DEFINED {
        for lead in first_lead..=last_lead {
            for trail in (first_trail..=last_trail).filter(|&t| t != 0x7F) {
                forward[pointer(lead, trail)] = next;
                next += 1;
            }
        }
    }
    ensure!(next == FIRST_UNASSIGNED, "user-defined blocks end at U+{next:04X}");

    for (p, slot) in forward.iter_mut().enumerate() {
        let code = u16::from_be_bytes(pair(p));
        if *slot == 0 && UNASSIGNED.iter().any(|&(lo, hi)| (lo..=hi).contains(&code)) {
            *slot = next;
            next += 1;
        }
    }
    ensure!(next == END_OF_PRIVATE_USE, "unassigned cells end at U+{next:04X}");

    for (p, slot) in forward.iter_mut().enumerate() {
        if *slot == 0 {
            *slot = standard_scalar(pair(p))?;
        }
    }

    let mut distinct = forward.clone();
    distinct.sort_unstable();
    distinct.dedup();
    ensure!(distinct.len() == CELLS, "two cells share a scalar value");
    Ok(forward)
}

fn push_array(out: &mut String, doc: &str, name: &str, values: &[u16]) {
    let _ = writeln!(out, "\n/// {doc}");
    let _ = writeln!(out, "pub(crate) static {name}: [u16; {}] = [", values.len());
    for line in values.chunks(VALUES_PER_LINE) {
        let cells: Vec<String> = line.iter().map(|v| format!("0x{v:04X},")).collect();
        let _ = writeln!(out, "    {}", cells.join(" "));
    }
    out.push_str("];\n");
}

fn render(forward: &[u16]) -> String {
    let mut reverse: Vec<u16> = (0..forward.len() as u16).collect();
    reverse.sort_by_key(|&p| forward[p as usize]);

    let mut out = String::from("// Generated by `tools/gen-gbk-table`. Do not edit by hand.\n");
    push_array(&mut out, "Scalar value per GBK pointer.", "FORWARD", forward);
    push_array(&mut out, "Pointers sorted by their scalar value.", "REVERSE", &reverse);
    out
}

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .context("usage: gen-gbk-table <path to data.rs>")?;
    let forward = build_forward()?;
    fs::write(&path, render(&forward)).with_context(|| format!("writing {path}"))?;
    println!("wrote {} cells to {path}", forward.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_in_table_is_up_to_date() {
        let checked_in = include_str!("../../../crates/gbk/src/table/data.rs");
        let forward = build_forward().unwrap();
        assert!(render(&forward) == checked_in, "rerun gen-gbk-table");
    }

    #[test]
    fn private_use_numbering() {
        let forward = build_forward().unwrap();
        assert_eq!(forward[pointer(0xAA, 0xA1)], 0xE000);
        assert_eq!(forward[pointer(0xA1, 0x40)], 0xE4C6);
        assert_eq!(forward[pointer(0xA2, 0xAB)], 0xE766);
        assert_eq!(forward[pointer(0xFE, 0xA0)], 0xE864);
        assert_eq!(pair(pointer(0xFE, 0x80)), [0xFE, 0x80]);
    }
}
