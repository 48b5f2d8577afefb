//! Derive macros for `logsafe`.
//!
//! This crate generates the traversal code behind `#[derive(Sensitive)]`. It:
//! - reads `#[sensitive(...)]` field attributes
//! - emits a `Maskable` implementation that calls into a mapper
//!
//! It does **not** define the masking policy. The glyph and the visible
//! prefix arithmetic live in the main `logsafe` crate and are applied at
//! runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

#[cfg(feature = "slog")]
use proc_macro2::Span;
use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
#[cfg(feature = "slog")]
use syn::parse_quote;
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::{add_clone_bounds, add_maskable_bounds};

/// Derives `logsafe::Maskable` (and related impls) for structs and enums.
///
/// # Field Attributes
///
/// - **No annotation**: Nothing is masked at this level, but the field is
///   still traversed — a nested record or list of records applies its own
///   annotations. String and scalar fields are copied verbatim.
///
/// - `#[sensitive]` (or `#[sensitive(true)]`): Partially masks string
///   content, keeping a short visible prefix. On `Vec<String>` each element
///   is masked independently. Inert on scalars, maps and sets.
///
/// - `#[sensitive(full)]`: Masks string content entirely.
///
/// - `#[sensitive(false)]`: Explicit opt-out; identical to no annotation.
///
/// - `#[sensitive = "true,full"]`: The raw comma-separated tag grammar.
///   Lenient: unrecognized tokens degrade to partial masking.
///
/// - `#[sensitive(opaque)]`: Copies the field verbatim with a `Clone` bound
///   instead of a `Maskable` bound. Use for foreign types (timestamps,
///   decimals) that carry nothing sensitive.
///
/// Unions are rejected at compile time.
///
/// # Additional Generated Impls
///
/// - `slog::Value` (behind `cfg(feature = "slog")`): implemented by masking
///   the value through `logsafe::slog::ToMaskedJson` and emitting it as
///   structured JSON. Requires the type to implement `serde::Serialize`.
///   The derive first looks for a top-level `slog` crate; if not found, it
///   checks the `LOGSAFE_SLOG_CRATE` env var for an alternate path (e.g.,
///   `my_log::slog`). If neither is available, compilation fails.
#[proc_macro_derive(Sensitive, attributes(sensitive))]
pub fn derive_sensitive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the logsafe crate root.
///
/// Handles crate renaming (e.g., `my_mask = { package = "logsafe", ... }`)
/// and internal usage (when the derive is used inside logsafe itself).
fn crate_root() -> proc_macro2::TokenStream {
    match crate_name("logsafe") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::logsafe },
    }
}

/// Returns the token stream to reference the slog crate root.
///
/// Handles crate renaming (e.g., `my_slog = { package = "slog", ... }`).
/// If the top-level `slog` crate is not available, falls back to the
/// `LOGSAFE_SLOG_CRATE` env var, which should be a path like `my_log::slog`.
#[cfg(feature = "slog")]
fn slog_crate() -> Result<proc_macro2::TokenStream> {
    match crate_name("slog") {
        Ok(FoundCrate::Itself) => Ok(quote! { crate }),
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            Ok(quote! { ::#ident })
        }
        Err(_) => {
            let env_value = std::env::var("LOGSAFE_SLOG_CRATE").map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    "slog support is enabled, but no top-level `slog` crate was found. \
Set the LOGSAFE_SLOG_CRATE env var to a path (e.g., `my_log::slog`) or add \
`slog` as a direct dependency.",
                )
            })?;
            let path = syn::parse_str::<syn::Path>(&env_value).map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    format!("LOGSAFE_SLOG_CRATE must be a valid Rust path (got `{env_value}`)"),
                )
            })?;
            Ok(quote! { #path })
        }
    }
}

fn crate_path(item: &str) -> proc_macro2::TokenStream {
    let root = crate_root();
    let item_ident = syn::parse_str::<syn::Path>(item).expect("logsafe crate path should parse");
    quote! { #root::#item_ident }
}

struct DeriveOutput {
    body: TokenStream,
    masked_generics: Vec<proc_macro2::Ident>,
    opaque_generics: Vec<proc_macro2::Ident>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    let crate_root = crate_root();

    let derive_output = match data {
        Data::Struct(data) => {
            let output = derive_struct(data, &generics)?;
            DeriveOutput {
                body: output.body,
                masked_generics: output.masked_generics,
                opaque_generics: output.opaque_generics,
            }
        }
        Data::Enum(data) => {
            let output = derive_enum(&ident, data, &generics)?;
            DeriveOutput {
                body: output.body,
                masked_generics: output.masked_generics,
                opaque_generics: output.opaque_generics,
            }
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Sensitive` cannot be derived for unions",
            ));
        }
    };

    let bounded_generics = add_maskable_bounds(generics.clone(), &derive_output.masked_generics);
    let bounded_generics = add_clone_bounds(bounded_generics, &derive_output.opaque_generics);
    let (impl_generics, ty_generics, where_clause) = bounded_generics.split_for_impl();
    let body = &derive_output.body;

    // Only generate the slog impl when the slog feature is enabled on
    // logsafe-derive. The generated impl masks before serialization, so the
    // original value never reaches the drain.
    #[cfg(feature = "slog")]
    let slog_impl = {
        let slog_crate = slog_crate()?;
        let mut slog_generics = generics.clone();
        let slog_where_clause = slog_generics.make_where_clause();
        let self_ty: syn::Type = parse_quote!(#ident #ty_generics);
        slog_where_clause
            .predicates
            .push(parse_quote!(#self_ty: ::serde::Serialize));
        slog_where_clause
            .predicates
            .push(parse_quote!(#self_ty: #crate_root::slog::ToMaskedJson));
        let (slog_impl_generics, slog_ty_generics, slog_where_clause) =
            slog_generics.split_for_impl();
        quote! {
            impl #slog_impl_generics #slog_crate::Value for #ident #slog_ty_generics #slog_where_clause {
                fn serialize(
                    &self,
                    _record: &#slog_crate::Record<'_>,
                    key: #slog_crate::Key,
                    serializer: &mut dyn #slog_crate::Serializer,
                ) -> #slog_crate::Result {
                    let masked = #crate_root::slog::ToMaskedJson::to_masked_json(self);
                    #slog_crate::Value::serialize(&masked, _record, key, serializer)
                }
            }
        }
    };

    #[cfg(not(feature = "slog"))]
    let slog_impl = quote! {};

    let trait_impl = quote! {
        impl #impl_generics #crate_root::Maskable for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn mask_field<M: #crate_root::MaskMapper>(
                &self,
                mapper: &M,
                _directive: #crate_root::Directive,
            ) -> Self {
                #body
            }
        }

        #slog_impl

        // `slog` already provides `impl<V: Value> Value for &V`, so a
        // reference impl here would conflict with the blanket impl.
    };
    Ok(trait_impl)
}
