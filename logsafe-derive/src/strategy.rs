//! Parsing of `#[sensitive(...)]` field attributes.
//!
//! This module maps attribute syntax to a per-field masking directive and
//! produces structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Meta, Result};

/// Directive resolved for a field at expansion time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TagDirective {
    /// Copy the value verbatim (still traversed, so nested records apply
    /// their own annotations).
    None,
    /// Mask string content, keeping a short visible prefix.
    Partial,
    /// Mask string content entirely.
    Full,
}

/// Field transformation strategy based on `#[sensitive(...)]` attributes.
///
/// ## Strategy Mapping
///
/// | Attribute | Strategy |
/// |-----------|----------|
/// | None | `Directive(None)` — traversed, nothing masked at this level |
/// | `#[sensitive]` / `#[sensitive(true)]` | `Directive(Partial)` |
/// | `#[sensitive(full)]` | `Directive(Full)` |
/// | `#[sensitive(false)]` | `Directive(None)` — explicit opt-out |
/// | `#[sensitive = "<tag>"]` | `Directive(parse_tag(tag))` — raw tag grammar |
/// | `#[sensitive(opaque)]` | `Opaque` — copied verbatim, no traversal bound |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Strategy {
    /// Dispatch the field through the traversal trait with this directive.
    Directive(TagDirective),
    /// Clone the field without a traversal bound. Escape hatch for foreign
    /// types that have no masking rule.
    Opaque,
}

/// Resolves a directive from a raw annotation tag.
///
/// Mirrors the runtime tag grammar: split on commas, first token present and
/// not `"false"` enables masking, second token `"full"` selects full
/// masking. Unrecognized tokens degrade to partial masking, never an error.
pub(crate) fn parse_tag(tag: &str) -> TagDirective {
    let mut tokens = tag.split(',');
    let enabled = tokens
        .next()
        .is_some_and(|first| !first.is_empty() && first != "false");
    if !enabled {
        return TagDirective::None;
    }
    if tokens.next() == Some("full") {
        TagDirective::Full
    } else {
        TagDirective::Partial
    }
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[sensitive] attributes specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("sensitive") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                // Bare #[sensitive] - partial masking
                set_strategy(&mut strategy, Strategy::Directive(TagDirective::Partial), attr.span())?;
            }
            Meta::List(list) => {
                let next = if let Ok(lit) = syn::parse2::<syn::LitBool>(list.tokens.clone()) {
                    // #[sensitive(true)] / #[sensitive(false)]
                    if lit.value {
                        Strategy::Directive(TagDirective::Partial)
                    } else {
                        Strategy::Directive(TagDirective::None)
                    }
                } else if let Ok(ident) = syn::parse2::<syn::Ident>(list.tokens.clone()) {
                    match ident.to_string().as_str() {
                        "full" => Strategy::Directive(TagDirective::Full),
                        "opaque" => Strategy::Opaque,
                        other => {
                            return Err(syn::Error::new(
                                attr.span(),
                                format!(
                                    "unknown #[sensitive] option `{other}`; expected `full`, \
                                     `opaque`, or a boolean literal"
                                ),
                            ));
                        }
                    }
                } else {
                    return Err(syn::Error::new(
                        attr.span(),
                        "expected #[sensitive(full)], #[sensitive(opaque)], or a boolean literal",
                    ));
                };
                set_strategy(&mut strategy, next, attr.span())?;
            }
            Meta::NameValue(nv) => {
                // #[sensitive = "true,full"] - the raw tag grammar
                if let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(tag),
                    ..
                }) = &nv.value
                {
                    set_strategy(
                        &mut strategy,
                        Strategy::Directive(parse_tag(&tag.value())),
                        attr.span(),
                    )?;
                } else {
                    return Err(syn::Error::new(
                        attr.span(),
                        "expected a string literal (e.g., #[sensitive = \"true,full\"])",
                    ));
                }
            }
        }
    }

    // Default: no annotation means nothing is masked at this level
    Ok(strategy.unwrap_or(Strategy::Directive(TagDirective::None)))
}
