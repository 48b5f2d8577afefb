//! Masking policies, traversal, and entrypoints.
//!
//! This module ties the pieces together:
//!
//! - **`policy`**: the string transformation (glyph repetition, visible prefix)
//! - **`maskable`**: what can be traversed (`Maskable`, `Masked`)
//! - **`engine`**: the machinery that drives it (`Masker`, `MaskMapper`)
//!
//! Directive resolution lives in `crate::directive`.

mod engine;
mod maskable;
mod policy;

pub use engine::{MaskError, MaskMapper, Masker};
pub use maskable::{Maskable, Masked};
pub use policy::DEFAULT_MASK;
