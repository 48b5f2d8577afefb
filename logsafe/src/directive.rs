//! Masking directives: "should this field be masked, and how much?"
//!
//! A [`Directive`] is resolved once per field from its declarative annotation
//! and never depends on the runtime value. The derive macro resolves the
//! attribute forms at expansion time; [`Directive::from_tag`] interprets the
//! raw comma-separated tag grammar (`"true"`, `"false"`, `"true,full"`) for
//! callers that keep field metadata in a side table instead.

/// How aggressively a string value is obscured once masking is enabled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MaskLevel {
    /// Reveal a short leading portion of the value, mask the remainder.
    Partial,
    /// Replace every character with the mask glyph.
    Full,
}

/// Per-field masking policy, resolved from the field's static annotation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Directive {
    /// No annotation, or an explicit opt-out: the value is copied verbatim.
    #[default]
    None,
    /// Mask most of the value, keeping a short visible prefix.
    Partial,
    /// Mask the entire value.
    Full,
}

impl Directive {
    /// Resolves a directive from a raw annotation tag.
    ///
    /// The tag is split on commas. Masking is enabled when the first token is
    /// present and not `"false"`; the second token selects [`Directive::Full`]
    /// when it is exactly `"full"`. Any other token combination — including
    /// unrecognized second tokens — resolves to [`Directive::Partial`]. This
    /// function never fails: malformed tags degrade to partial masking rather
    /// than blocking the caller.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let mut tokens = tag.split(',');
        let enabled = tokens
            .next()
            .is_some_and(|first| !first.is_empty() && first != "false");
        if !enabled {
            return Self::None;
        }
        if tokens.next() == Some("full") {
            Self::Full
        } else {
            Self::Partial
        }
    }

    /// Returns the apply level for this directive, or `None` when the field
    /// passes through unmasked.
    #[must_use]
    pub fn level(self) -> Option<MaskLevel> {
        match self {
            Self::None => None,
            Self::Partial => Some(MaskLevel::Partial),
            Self::Full => Some(MaskLevel::Full),
        }
    }
}
