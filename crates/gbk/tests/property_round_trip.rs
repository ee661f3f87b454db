use gbk_codec::{
    decode, decode_to_vec, encode, encode_str, encode_to_vec, lookup_pair, CodeUnit, GbkError,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn mapped_pairs() -> Vec<[u8; 2]> {
    (0x81..=0xFEu8)
        .flat_map(|lead| (0x40..=0xFEu8).map(move |trail| [lead, trail]))
        .filter(|&[lead, trail]| lookup_pair(lead, trail).is_some())
        .collect()
}

/// Well-formed GBK: a mix of ASCII bytes and assigned two-byte cells.
fn gbk_stream() -> impl Strategy<Value = Vec<u8>> {
    let unit = prop_oneof![
        (0u8..0x80).prop_map(|b| vec![b]),
        prop::sample::select(mapped_pairs()).prop_map(|p| p.to_vec()),
    ];
    prop::collection::vec(unit, 0..64).prop_map(|units| units.concat())
}

fn sizing_matches_fill<U: CodeUnit>(input: &[u8]) -> Result<usize, GbkError> {
    let sized = decode::<U>(input, None);
    // One byte never decodes to more than one unit.
    let mut buf = vec![U::default(); input.len() + 1];
    let filled = decode(input, Some(&mut buf[..]));
    assert_eq!(sized, filled);
    sized
}

proptest! {
    #[test]
    fn decode_then_encode_is_identity_utf16(bytes in gbk_stream()) {
        let units = decode_to_vec::<u16>(&bytes).unwrap();
        prop_assert_eq!(encode_to_vec(&units).unwrap(), bytes);
    }

    #[test]
    fn decode_then_encode_is_identity_utf32(bytes in gbk_stream()) {
        let units = decode_to_vec::<u32>(&bytes).unwrap();
        prop_assert_eq!(encode_to_vec(&units).unwrap(), bytes);
    }

    #[test]
    fn sizing_and_fill_agree_on_arbitrary_bytes(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let a = sizing_matches_fill::<u16>(&bytes);
        let b = sizing_matches_fill::<u32>(&bytes);
        // No GBK cell lies outside the BMP, so both widths count alike.
        prop_assert_eq!(a, b);
    }

    #[test]
    fn exact_buffer_is_enough(bytes in gbk_stream()) {
        let len = decode::<u16>(&bytes, None).unwrap();
        let mut buf = vec![0u16; len];
        prop_assert_eq!(decode(&bytes, Some(&mut buf[..])), Ok(len));
        if len > 0 {
            let mut short = vec![0u16; len - 1];
            let is_too_small = matches!(
                decode(&bytes, Some(&mut short[..])),
                Err(GbkError::OutputTooSmall { .. })
            );
            prop_assert!(is_too_small);
        }
    }

    #[test]
    fn encode_sizing_and_fill_agree(text in "\\PC{0,32}") {
        let units: Vec<u16> = text.encode_utf16().collect();
        let sized = encode(&units, None);
        let mut buf = vec![0u8; units.len() * 2];
        let filled = encode(&units, Some(&mut buf[..]));
        prop_assert_eq!(sized, filled);
        if let Ok(len) = sized {
            let expected = encode_str(&text).unwrap();
            prop_assert_eq!(&buf[..len], &expected[..]);
        }
    }

    #[test]
    fn supplementary_scalars_use_surrogate_pairs(cp in 0x10000u32..=0x10FFFF) {
        let c = char::from_u32(cp).unwrap();
        let (units, n) = <u16 as CodeUnit>::from_scalar(c);
        prop_assert_eq!(n, 2);
        prop_assert!((0xD800..=0xDBFF).contains(&units[0]));
        prop_assert!((0xDC00..=0xDFFF).contains(&units[1]));
        prop_assert_eq!(<u16 as CodeUnit>::next_scalar(&units, 0), Ok((c, 2)));
        // Encoding joins the pair and reports the scalar, not a surrogate.
        prop_assert_eq!(
            encode(&units, None),
            Err(GbkError::Unrepresentable { position: 0, scalar: cp })
        );
    }
}

#[test]
fn seeded_sweep_of_mixed_and_damaged_streams() {
    let pairs = mapped_pairs();
    let mut rng = StdRng::seed_from_u64(0x6B_6B);
    let mut truncated = 0;
    for _ in 0..500 {
        let mut bytes = Vec::new();
        let mut ends_in_pair = false;
        for _ in 0..rng.gen_range(0..48) {
            if rng.gen_bool(0.5) {
                bytes.push(rng.gen_range(0x20..0x7F));
                ends_in_pair = false;
            } else {
                bytes.extend_from_slice(&pairs[rng.gen_range(0..pairs.len())]);
                ends_in_pair = true;
            }
        }
        let units = decode_to_vec::<u16>(&bytes).unwrap();
        assert_eq!(encode_to_vec(&units).unwrap(), bytes);

        // Chopping the trail byte off a final pair leaves a dangling lead.
        if ends_in_pair {
            let cut = &bytes[..bytes.len() - 1];
            assert_eq!(
                sizing_matches_fill::<u32>(cut),
                Err(GbkError::TruncatedInput { position: cut.len() - 1 })
            );
            assert_eq!(
                sizing_matches_fill::<u16>(cut),
                Err(GbkError::TruncatedInput { position: cut.len() - 1 })
            );
            truncated += 1;
        }
    }
    assert!(truncated > 0);
}
