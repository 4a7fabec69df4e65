//! Unicode escaping for RTF text.
//!
//! ASCII passes through. Everything else becomes `\u<n>\'5f`, where `n` is a
//! signed 16-bit value and `\'5f` (`_`) is the fallback glyph for readers
//! without Unicode support. Code points above the Basic Multilingual Plane are
//! written as a UTF-16 surrogate pair, high surrogate first.

const END_OF_ASCII: u32 = 0x7F;
const MAX_SIGNED_16: u32 = 0x7FFF;
const START_OF_PLANE_1: u32 = 0x10000;
const HIGH_SURROGATE_START: i32 = 0xD800;
const LOW_SURROGATE_START: i32 = 0xDC00;
const LOW_10_BITS: i32 = 0x3FF;
/// Subtracted from values above 0x7FFF to bring them into signed 16-bit range.
const SIGNED_16_OFFSET: i32 = 0x10000;

/// Escape `text` for inclusion in an RTF stream.
///
/// # Example
///
/// ```
/// use rtfdoc::render::escape_unicode;
///
/// assert_eq!(escape_unicode("Añ"), "A\\u241\\'5f");
/// assert_eq!(escape_unicode("\u{FFFD}"), "\\u-3\\'5f");
/// ```
pub fn escape_unicode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    write_escaped(&mut out, text);
    out
}

/// Append the escaped form of `text` to `out`.
pub fn write_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        let cp = u32::from(ch);
        if cp <= END_OF_ASCII {
            out.push(ch);
        } else if cp <= MAX_SIGNED_16 {
            push_escape(out, cp as i32);
        } else if cp < START_OF_PLANE_1 {
            push_escape(out, cp as i32 - SIGNED_16_OFFSET);
        } else {
            let offset = (cp - START_OF_PLANE_1) as i32;
            push_escape(out, HIGH_SURROGATE_START + (offset >> 10) - SIGNED_16_OFFSET);
            push_escape(out, LOW_SURROGATE_START + (offset & LOW_10_BITS) - SIGNED_16_OFFSET);
        }
    }
}

fn push_escape(out: &mut String, value: i32) {
    out.push_str(&format!("\\u{}\\'5f", value));
}
