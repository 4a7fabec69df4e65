//! Integration tests for Unicode escaping.

use proptest::prelude::*;
use rtfdoc::escape_unicode;

/// Parse escaped output back into UTF-16 units and ASCII characters.
fn decode(escaped: &str) -> String {
    let mut units: Vec<u16> = Vec::new();
    let mut rest = escaped;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("\\u") {
            let end = tail
                .find("\\'5f")
                .expect("escape is terminated by the fallback glyph");
            let value: i32 = tail[..end].parse().expect("escape value is an integer");
            assert!((-32768..=32767).contains(&value), "{} out of range", value);
            units.push(if value < 0 { (value + 0x10000) as u16 } else { value as u16 });
            rest = &tail[end + 4..];
        } else {
            let ch = rest.chars().next().unwrap();
            assert!(ch.is_ascii());
            units.push(ch as u16);
            rest = &rest[1..];
        }
    }
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .expect("escaped output decodes as UTF-16")
}

#[test]
fn test_mixed_text() {
    assert_eq!(
        escape_unicode("Café 😀!"),
        "Caf\\u233\\'5f \\u-10179\\'5f\\u-8704\\'5f!"
    );
}

#[test]
fn test_boundaries() {
    assert_eq!(escape_unicode("\u{7F}"), "\u{7F}");
    assert_eq!(escape_unicode("\u{80}"), "\\u128\\'5f");
    assert_eq!(escape_unicode("\u{7FFF}"), "\\u32767\\'5f");
    assert_eq!(escape_unicode("\u{8000}"), "\\u-32768\\'5f");
    assert_eq!(escape_unicode("\u{FFFF}"), "\\u-1\\'5f");
    assert_eq!(escape_unicode("\u{10000}"), "\\u-10240\\'5f\\u-9216\\'5f");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_ascii_is_unchanged(text in "[\\x00-\\x7F]*") {
        prop_assert_eq!(escape_unicode(&text), text);
    }

    #[test]
    fn prop_lower_bmp_is_code_point(cp in 0x80u32..=0x7FFF) {
        let ch = char::from_u32(cp).unwrap();
        prop_assert_eq!(escape_unicode(&ch.to_string()), format!("\\u{}\\'5f", cp));
    }

    #[test]
    fn prop_upper_bmp_is_negative(cp in 0x8000u32..=0xFFFF) {
        // Surrogate code points are not chars.
        if let Some(ch) = char::from_u32(cp) {
            let expected = format!("\\u{}\\'5f", cp as i32 - 0x10000);
            prop_assert_eq!(escape_unicode(&ch.to_string()), expected);
        }
    }

    #[test]
    fn prop_supplementary_is_surrogate_pair(cp in 0x10000u32..=0x10FFFF) {
        let ch = char::from_u32(cp).unwrap();
        let escaped = escape_unicode(&ch.to_string());
        prop_assert_eq!(escaped.matches("\\u").count(), 2);

        let mut utf16 = [0u16; 2];
        ch.encode_utf16(&mut utf16);
        let expected = format!(
            "\\u{}\\'5f\\u{}\\'5f",
            utf16[0] as i32 - 0x10000,
            utf16[1] as i32 - 0x10000
        );
        prop_assert_eq!(escaped, expected);
    }

    #[test]
    fn prop_escape_decodes_to_input(text in "[^\\\\]*") {
        let escaped = escape_unicode(&text);
        prop_assert!(escaped.is_ascii());
        prop_assert_eq!(decode(&escaped), text);
    }
}
