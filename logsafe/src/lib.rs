//! Tag-driven masking of sensitive data.
//!
//! This crate separates:
//! - **Directive**: whether a field is masked, and how much.
//! - **Traversal**: walking a record into a masked deep clone.
//!
//! The derive macro attaches a directive to each field; the [`Masker`]
//! engine applies it at the boundary when you call
//! [`Masker::mask_sensitive_data`] or [`Masked::masked`].
//!
//! Key rules:
//! - `#[sensitive]` partially masks a string field; `#[sensitive(full)]`
//!   masks it entirely.
//! - Unannotated fields pass through unchanged — except records and lists of
//!   records, which are always walked so their own annotations apply.
//! - Masking is cosmetic, not cryptographic: it obscures values for display
//!   and logging, it does not encrypt or hash them.
//! - The source value is borrowed, never mutated; the result is a fresh
//!   deep clone.
//!
//! What this crate does:
//! - defines the [`Directive`] grammar and the [`Maskable`] traversal seam
//! - implements the masking engine and its glyph configuration
//! - provides logging integrations behind feature flags (`slog`, `logger`)
//!
//! What it does not do:
//! - validate annotations at startup
//! - detect cyclic object graphs (input is assumed to be a finite tree)
//!
//! The `Sensitive` derive macro lives in `logsafe-derive` and is re-exported
//! here.

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

pub use logsafe_derive::Sensitive;

#[allow(unused_extern_crates)]
extern crate self as logsafe;

// Module declarations
mod directive;
#[cfg(feature = "logger")]
pub mod logger;
mod masking;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use directive::{Directive, MaskLevel};
pub use masking::{MaskError, MaskMapper, Maskable, Masked, Masker, DEFAULT_MASK};
