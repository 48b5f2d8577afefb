//! The string masking policy.
//!
//! This is a pure string transformation. It does not traverse structures or
//! decide whether a value is sensitive; the engine hands it a value, a glyph
//! and a level, and it produces the obscured text.

use crate::directive::MaskLevel;

/// Default glyph used to obscure masked characters.
pub const DEFAULT_MASK: &str = "*";

/// Applies `level` masking to `value` using `mask` as the repeated glyph.
///
/// The computation counts Unicode scalar values, not bytes. Empty input is
/// returned unchanged for both levels.
///
/// Full masking replaces every character with one repetition of the glyph.
/// Partial masking keeps `(20 * len) / 100 + 1` leading characters visible
/// and masks the rest. For values of four characters or fewer the visible
/// count can reach the whole value, in which case nothing is masked; this
/// arithmetic is kept as-is for compatibility with existing consumers.
///
/// The glyph is used verbatim as the repeated unit, so a multi-character
/// glyph produces output longer than the input.
#[must_use]
pub(crate) fn sanitize(value: &str, mask: &str, level: MaskLevel) -> String {
    let chars: Vec<char> = value.chars().collect();
    let length = chars.len();
    if length == 0 {
        return String::new();
    }

    match level {
        MaskLevel::Full => mask.repeat(length),
        MaskLevel::Partial => {
            let visible = ((20 * length) / 100 + 1).min(length);
            let mut masked: String = chars[..visible].iter().collect();
            masked.push_str(&mask.repeat(length - visible));
            masked
        }
    }
}
