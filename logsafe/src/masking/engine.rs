//! The redaction engine: glyph configuration and traversal entrypoints.
//!
//! A [`Masker`] owns the mask glyph and drives [`Maskable`] traversal. The
//! glyph is plain owned state behind `&mut self`, so reconfiguring a shared
//! instance requires exclusive access; callers that need live
//! reconfiguration across threads wrap the `Masker` in their own lock.

use thiserror::Error;

use super::{maskable::Maskable, policy};
use crate::directive::{Directive, MaskLevel};

/// Errors produced by the masking entrypoints.
///
/// Traversal itself cannot fail: malformed annotations degrade to partial
/// masking and shapes without a masking rule pass through verbatim, so a
/// masking bug can never block the caller.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum MaskError {
    /// An absent record was handed to [`Masker::mask_optional`].
    #[error("cannot mask nil value")]
    NilValue,
}

/// Applies the string masking policy during traversal.
///
/// [`Maskable`] implementations call back into the mapper for every string
/// leaf whose directive enables masking; everything else never reaches it.
pub trait MaskMapper {
    /// Masks a string leaf at the given level.
    fn mask_text(&self, value: &str, level: MaskLevel) -> String;
}

/// Masks sensitive data in records and standalone strings.
///
/// Each instance carries its own glyph. Two invocations on structurally
/// equal inputs with the same configuration produce structurally equal
/// outputs; results already returned are unaffected by later
/// [`Masker::set_mask`] calls.
#[derive(Clone, Debug)]
pub struct Masker {
    mask: String,
}

impl Masker {
    /// Constructs a masker using the default `*` glyph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mask: policy::DEFAULT_MASK.to_string(),
        }
    }

    /// Constructs a masker with a specific glyph.
    #[must_use]
    pub fn with_mask(mask: impl Into<String>) -> Self {
        Self { mask: mask.into() }
    }

    /// Returns the glyph currently in use.
    #[must_use]
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// Replaces the glyph used by subsequent calls.
    ///
    /// The glyph is not validated: any string, including a multi-character
    /// one, is used verbatim as the repeated unit.
    pub fn set_mask(&mut self, mask: impl Into<String>) {
        self.mask = mask.into();
    }

    /// Builds a masked deep clone of `value`.
    ///
    /// Records are walked field by field according to their `#[sensitive]`
    /// annotations; values that are not records — strings, numbers, maps —
    /// come back unchanged, since masking only applies inside record fields.
    /// The input is borrowed and never mutated.
    #[must_use]
    pub fn mask_sensitive_data<T: Maskable>(&self, value: &T) -> T {
        value.mask_field(self, Directive::None)
    }

    /// Like [`Masker::mask_sensitive_data`], for records behind an optional
    /// reference.
    ///
    /// Fails with [`MaskError::NilValue`] when the record is absent; no
    /// partial clone is produced.
    pub fn mask_optional<T: Maskable>(&self, value: Option<&T>) -> Result<T, MaskError> {
        value
            .map(|record| self.mask_sensitive_data(record))
            .ok_or(MaskError::NilValue)
    }

    /// Applies `level` masking to an arbitrary string, outside any record
    /// traversal.
    #[must_use]
    pub fn sanitize(&self, value: &str, level: MaskLevel) -> String {
        policy::sanitize(value, &self.mask, level)
    }
}

impl Default for Masker {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskMapper for Masker {
    fn mask_text(&self, value: &str, level: MaskLevel) -> String {
        policy::sanitize(value, &self.mask, level)
    }
}

#[cfg(test)]
mod tests {
    use super::{MaskError, Masker};
    use crate::directive::MaskLevel;

    #[test]
    fn sanitize_uses_the_instance_glyph() {
        let mut masker = Masker::new();
        assert_eq!(masker.sanitize("abc123", MaskLevel::Partial), "ab****");

        masker.set_mask("#");
        assert_eq!(masker.sanitize("abc123", MaskLevel::Partial), "ab####");
    }

    #[test]
    fn set_mask_does_not_rewrite_earlier_results() {
        let mut masker = Masker::new();
        let before = masker.sanitize("abc123", MaskLevel::Full);
        masker.set_mask("#");
        assert_eq!(before, "******");
        assert_eq!(masker.sanitize("abc123", MaskLevel::Full), "######");
    }

    #[test]
    fn with_mask_sets_the_glyph() {
        let masker = Masker::with_mask("x");
        assert_eq!(masker.mask(), "x");
        assert_eq!(masker.sanitize("secret", MaskLevel::Full), "xxxxxx");
    }

    #[test]
    fn top_level_non_records_pass_through() {
        let masker = Masker::new();
        let value = String::from("plain");
        assert_eq!(masker.mask_sensitive_data(&value), "plain");
        assert_eq!(masker.mask_sensitive_data(&7_u32), 7);
    }

    #[test]
    fn mask_optional_rejects_absent_records() {
        let masker = Masker::new();
        let absent: Option<&String> = None;
        assert_eq!(masker.mask_optional(absent), Err(MaskError::NilValue));

        let present = String::from("plain");
        assert_eq!(masker.mask_optional(Some(&present)), Ok("plain".to_string()));
    }
}
