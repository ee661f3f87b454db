//! Cross-checks the table against `encoding_rs::GBK`.

use gbk_codec::{decode_to_string, encode_str, is_trail_byte, lookup_pair, lookup_scalar};

/// GB2312 symbol and hanzi rows in their EUC-CN placement, without the
/// private-use cells interleaved with them.
fn gb2312_cells() -> impl Iterator<Item = [u8; 2]> {
    (0xA1..=0xF7u8)
        .flat_map(|lead| (0xA1..=0xFEu8).map(move |trail| [lead, trail]))
        .filter(|&[lead, trail]| lookup_pair(lead, trail).is_some_and(|c| !is_private_use(c)))
}

fn is_private_use(c: char) -> bool {
    ('\u{E000}'..='\u{F8FF}').contains(&c)
}

/// `encoding_rs` follows GB18030, which gives some private-use cells of
/// code page 936 standard scalars. Everywhere else the two tables agree.
#[test]
fn every_cell_agrees_with_encoding_rs() {
    let (mut standard, mut private_use, mut reassigned) = (0, 0, 0);
    for lead in 0x81..=0xFEu8 {
        for trail in (0x40..=0xFEu8).filter(|&t| is_trail_byte(t)) {
            let cell = [lead, trail];
            let ours = lookup_pair(lead, trail).expect("every cell is mapped");
            let theirs = encoding_rs::GBK
                .decode_without_bom_handling_and_without_replacement(&cell)
                .expect("encoding_rs maps every cell");
            let mut chars = theirs.chars();
            let theirs = chars.next().unwrap();
            assert_eq!(chars.next(), None, "{cell:02X?}");

            if !is_private_use(ours) {
                assert_eq!(ours, theirs, "{cell:02X?}");
                standard += 1;
            } else if is_private_use(theirs) {
                assert_eq!(ours, theirs, "{cell:02X?}");
                private_use += 1;
            } else {
                // The GB18030 scalar has no cell of its own here.
                assert_eq!(lookup_scalar(theirs), None, "{cell:02X?}");
                reassigned += 1;
            }
        }
    }
    assert_eq!(standard, 21_791);
    assert_eq!(private_use + reassigned, 2149);
}

#[test]
fn hanzi_rows_decode_like_encoding_rs() {
    let mut checked = 0;
    for pair in gb2312_cells().filter(|p| p[0] >= 0xB0) {
        let (expected, had_errors) = encoding_rs::GBK.decode_without_bom_handling(&pair);
        assert!(!had_errors, "{pair:02X?}");
        assert_eq!(decode_to_string(&pair).unwrap(), expected, "{pair:02X?}");
        checked += 1;
    }
    // 6763 GB2312 hanzi.
    assert_eq!(checked, 6763);
}

#[test]
fn hanzi_rows_encode_like_encoding_rs() {
    let text: String = gb2312_cells()
        .filter(|p| p[0] >= 0xB0)
        .filter_map(|[lead, trail]| lookup_pair(lead, trail))
        .collect();
    let (expected, _, had_errors) = encoding_rs::GBK.encode(&text);
    assert!(!had_errors);
    assert_eq!(encode_str(&text).unwrap(), expected.into_owned());
}

#[test]
fn mixed_text_agrees() {
    let text = "GBK 编码测试：中华人民共和国，你好世界！";
    let (expected, _, had_errors) = encoding_rs::GBK.encode(text);
    assert!(!had_errors);
    let ours = encode_str(text).unwrap();
    assert_eq!(ours, expected.into_owned());
    assert_eq!(decode_to_string(&ours).unwrap(), text);
}
