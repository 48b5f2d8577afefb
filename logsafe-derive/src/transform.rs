//! Shared field transformation logic for struct and enum derivation.
//!
//! Every field is rebuilt from a borrowed binding: traversed fields go
//! through `Maskable::mask_field` with the directive resolved from their
//! annotation, opaque fields are cloned verbatim.

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote_spanned;

use crate::{
    crate_path,
    generics::collect_generics_from_type,
    strategy::{Strategy, TagDirective},
};

/// Accumulated state during field processing.
///
/// Groups the mutable vectors that collect generic parameters needing
/// bounds while walking struct fields or enum variants.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) masked_generics: &'a mut Vec<Ident>,
    pub(crate) opaque_generics: &'a mut Vec<Ident>,
}

fn directive_tokens(directive: TagDirective) -> TokenStream {
    let root = crate_path("Directive");
    match directive {
        TagDirective::None => quote_spanned! { Span::call_site() => #root::None },
        TagDirective::Partial => quote_spanned! { Span::call_site() => #root::Partial },
        TagDirective::Full => quote_spanned! { Span::call_site() => #root::Full },
    }
}

/// Generates the transform statement for a single field.
///
/// The binding is a reference into `self`; the statement shadows it with the
/// owned value for the clone under construction.
pub(crate) fn generate_field_transform(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    span: Span,
    strategy: &Strategy,
) -> TokenStream {
    match strategy {
        Strategy::Directive(directive) => {
            collect_generics_from_type(ty, ctx.generics, ctx.masked_generics);
            let maskable_path = crate_path("Maskable");
            let directive = directive_tokens(*directive);
            quote_spanned! { span =>
                let #binding = #maskable_path::mask_field(#binding, mapper, #directive);
            }
        }
        Strategy::Opaque => {
            // Copied verbatim; no masking rule applies to this field.
            collect_generics_from_type(ty, ctx.generics, ctx.opaque_generics);
            quote_spanned! { span =>
                let #binding = ::core::clone::Clone::clone(#binding);
            }
        }
    }
}
