//! Conversion matrix over the whole GBK table and the sizing/fill protocol.

use gbk_codec::{
    decode, decode_to_string, decode_to_vec, decoded_len, encode, encode_str, encode_to_vec,
    encoded_len, is_lead_byte, is_trail_byte, lookup_pair, CodeUnit, GbkError,
};

const HELLO_WORLD: &[u8] = &[
    0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x2C, 0x20, 0xCA, 0xC0, 0xBD, 0xE7, 0x21,
];

fn mapped_cells() -> Vec<([u8; 2], char)> {
    let mut out = Vec::new();
    for lead in 0x81..=0xFEu8 {
        for trail in 0x40..=0xFEu8 {
            if let Some(c) = lookup_pair(lead, trail) {
                out.push(([lead, trail], c));
            }
        }
    }
    out
}

/// Runs the two-step protocol and checks the fill never writes past the
/// measured length.
fn decode_two_step<U: CodeUnit + From<u8>>(input: &[u8]) -> Result<Vec<U>, GbkError> {
    let len = decode::<U>(input, None)?;
    let sentinel = U::from(0xAA);
    let mut buf = vec![sentinel; len + 4];
    let written = decode(input, Some(&mut buf[..]))?;
    assert_eq!(written, len, "sizing and fill disagree");
    assert!(buf[len..].iter().all(|&u| u == sentinel), "fill overran");
    buf.truncate(len);
    Ok(buf)
}

fn encode_two_step<U: CodeUnit>(input: &[U]) -> Result<Vec<u8>, GbkError> {
    let len = encode(input, None)?;
    let mut buf = vec![0xAAu8; len + 4];
    let written = encode(input, Some(&mut buf[..]))?;
    assert_eq!(written, len, "sizing and fill disagree");
    assert!(buf[len..].iter().all(|&b| b == 0xAA), "fill overran");
    buf.truncate(len);
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Concrete scenario
// ---------------------------------------------------------------------------

#[test]
fn hello_world_utf16() {
    let units = decode_two_step::<u16>(HELLO_WORLD).unwrap();
    assert_eq!(units.len(), 10);
    assert_eq!(String::from_utf16(&units).unwrap(), "Hello, 世界!");
    assert_eq!(encode_two_step(&units).unwrap(), HELLO_WORLD);
}

#[test]
fn hello_world_utf32() {
    let units = decode_two_step::<u32>(HELLO_WORLD).unwrap();
    assert_eq!(
        units,
        vec![0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x2C, 0x20, 0x4E16, 0x754C, 0x21]
    );
    assert_eq!(encode_two_step(&units).unwrap(), HELLO_WORLD);
}

#[test]
fn hello_world_strings() {
    assert_eq!(decode_to_string(HELLO_WORLD).unwrap(), "Hello, 世界!");
    assert_eq!(encode_str("Hello, 世界!").unwrap(), HELLO_WORLD);
}

// ---------------------------------------------------------------------------
// Full-table sweep
// ---------------------------------------------------------------------------

#[test]
fn every_cell_round_trips_through_both_widths() {
    let cells = mapped_cells();
    assert_eq!(cells.len(), 23_940);
    for (pair, c) in cells {
        let wide = decode_to_vec::<u16>(&pair).unwrap();
        assert_eq!(wide, vec![c as u16], "{pair:02X?}");
        assert_eq!(encode_to_vec(&wide).unwrap(), pair);

        let wider = decode_to_vec::<u32>(&pair).unwrap();
        assert_eq!(wider, vec![u32::from(c)]);
        assert_eq!(encode_to_vec(&wider).unwrap(), pair);
    }
}

#[test]
fn whole_table_as_one_stream() {
    let stream: Vec<u8> = mapped_cells().iter().flat_map(|(p, _)| *p).collect();
    assert_eq!(decoded_len::<u16>(&stream), Ok(23_940));
    let units = decode_two_step::<u16>(&stream).unwrap();
    assert_eq!(encoded_len(&units), Ok(stream.len()));
    assert_eq!(encode_two_step(&units).unwrap(), stream);
}

#[test]
fn every_pair_with_a_bad_trail_is_invalid() {
    for lead in 0x81..=0xFEu8 {
        for trail in 0x00..=0xFFu8 {
            if is_trail_byte(trail) {
                assert!(lookup_pair(lead, trail).is_some(), "{lead:02X} {trail:02X}");
                continue;
            }
            let input = [b'.', lead, trail];
            assert_eq!(
                decoded_len::<u32>(&input),
                Err(GbkError::InvalidSequence { position: 1 }),
                "{lead:02X} {trail:02X}"
            );
        }
    }
}

#[test]
fn private_use_cells_round_trip() {
    let cells: Vec<_> = mapped_cells()
        .into_iter()
        .filter(|(_, c)| ('\u{E000}'..='\u{F8FF}').contains(c))
        .collect();
    // 1894 user-defined cells plus 255 cells without a standard assignment.
    assert_eq!(cells.len(), 2149);
    assert_eq!(cells.iter().map(|(_, c)| *c).min(), Some('\u{E000}'));
    assert_eq!(cells.iter().map(|(_, c)| *c).max(), Some('\u{E864}'));
    for (pair, c) in cells {
        assert_eq!(decode_two_step::<u16>(&pair).unwrap(), vec![c as u16]);
        assert_eq!(encode_str(&c.to_string()).unwrap(), pair);
    }
}

#[test]
fn lead_and_trail_classes_match_table() {
    for (pair, _) in mapped_cells() {
        assert!(is_lead_byte(pair[0]));
        assert!(is_trail_byte(pair[1]));
    }
}

// ---------------------------------------------------------------------------
// Error matrix
// ---------------------------------------------------------------------------

#[test]
fn truncation_for_every_lead_byte() {
    for lead in 0x81..=0xFEu8 {
        let input = [b'a', b'b', lead];
        assert_eq!(
            decode_two_step::<u16>(&input),
            Err(GbkError::TruncatedInput { position: 2 })
        );
        assert_eq!(
            decode_two_step::<u32>(&input),
            Err(GbkError::TruncatedInput { position: 2 })
        );
    }
}

#[test]
fn invalid_pair_lead_81_trail_00() {
    assert_eq!(
        decode_two_step::<u16>(&[0x81, 0x00]),
        Err(GbkError::InvalidSequence { position: 0 })
    );
}

#[test]
fn first_error_wins() {
    // An invalid pair precedes a truncated lead byte.
    let input = [0xCA, 0xC0, 0x81, 0x00, 0xCA];
    assert_eq!(
        decoded_len::<u16>(&input),
        Err(GbkError::InvalidSequence { position: 2 })
    );
}

#[test]
fn sizing_and_fill_report_the_same_error() {
    let inputs: [&[u8]; 4] = [b"\x80", b"ok\xFF", b"\x81\x7F", b"\xD6\xD0\xD6"];
    for input in inputs {
        let sized = decoded_len::<u16>(input);
        let mut buf = vec![0u16; 16];
        let filled = decode(input, Some(&mut buf[..]));
        assert!(sized.is_err());
        assert_eq!(sized, filled);
    }
}

#[test]
fn encode_error_matrix() {
    let cases: Vec<(Vec<u16>, GbkError)> = vec![
        (vec![0x20AC], GbkError::Unrepresentable { position: 0, scalar: 0x20AC }),
        (vec![0x41, 0xDC00], GbkError::InvalidSequence { position: 1 }),
        (vec![0xD800, 0xD800], GbkError::InvalidSequence { position: 0 }),
        (vec![0x4E2D, 0xDBFF], GbkError::TruncatedInput { position: 1 }),
        (
            vec![0xD83D, 0xDE00],
            GbkError::Unrepresentable { position: 0, scalar: 0x1F600 },
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(encode_two_step(&input), Err(expected), "{input:04X?}");
    }
}
