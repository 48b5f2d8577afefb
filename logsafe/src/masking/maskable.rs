//! Domain layer: types that can be traversed into a masked clone.
//!
//! [`Maskable`] is the traversal seam. Every field of a record dispatches
//! through it with the directive resolved from the field's annotation, and
//! each implementation decides what that directive means for its own shape:
//!
//! | Shape | Behavior |
//! |-------|----------|
//! | `String`, `Cow<str>` | Masked when the directive enables it, else cloned |
//! | Scalars (`i32`, `bool`, …) | Copied verbatim; directives are inert |
//! | Derived records | Incoming directive ignored; own fields are walked |
//! | `Option<T>` | Absent stays absent; present values recurse |
//! | `Vec<T>` | Each element masked independently with the field directive |
//! | Maps and sets | Cloned verbatim; no masking rule is defined for them |
//!
//! The trait borrows its receiver and returns a newly built clone, so the
//! source value is never mutated and never aliased by the result.
//!
//! ## Foreign field types
//!
//! Types from other crates cannot implement `Maskable` here (orphan rules)
//! and usually carry nothing sensitive. Annotate such fields with
//! `#[sensitive(opaque)]` to copy them verbatim without a trait bound, or
//! wrap them in a local newtype and implement `Maskable` for the wrapper.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};

use super::engine::{MaskMapper, Masker};
use crate::directive::Directive;

/// A value that can produce a masked deep clone of itself.
///
/// Implemented by `#[derive(Sensitive)]` for user records and provided here
/// for standard library shapes. The `directive` argument is the policy of
/// the *enclosing field*; structural implementations (records, and any
/// container of records) ignore it and let nested fields speak for
/// themselves.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be traversed for masking",
    label = "this field type has no masking rule",
    note = "use `#[derive(Sensitive)]` on the type definition",
    note = "or mark the field `#[sensitive(opaque)]` to copy it verbatim"
)]
pub trait Maskable: Sized {
    /// Builds a masked clone of this value under the given field directive.
    #[must_use]
    fn mask_field<M: MaskMapper>(&self, mapper: &M, directive: Directive) -> Self;
}

/// Public entrypoint for masking on traversable types.
///
/// Blanket-implemented for every [`Maskable`] type. `masked()` runs the
/// traversal with a default-configured [`Masker`] (glyph `*`); construct a
/// `Masker` explicitly to use a different glyph.
pub trait Masked: Maskable {
    /// Returns a masked deep clone of `self`.
    #[must_use]
    fn masked(&self) -> Self {
        Masker::new().mask_sensitive_data(self)
    }
}

impl<T> Masked for T where T: Maskable {}

impl Maskable for String {
    fn mask_field<M: MaskMapper>(&self, mapper: &M, directive: Directive) -> Self {
        match directive.level() {
            Some(level) => mapper.mask_text(self, level),
            None => self.clone(),
        }
    }
}

impl Maskable for Cow<'_, str> {
    fn mask_field<M: MaskMapper>(&self, mapper: &M, directive: Directive) -> Self {
        match directive.level() {
            Some(level) => Cow::Owned(mapper.mask_text(self, level)),
            None => self.clone(),
        }
    }
}

// Scalar values have no masking rule; directives on them are inert.
macro_rules! impl_maskable_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Maskable for $ty {
                fn mask_field<M: MaskMapper>(&self, _mapper: &M, _directive: Directive) -> Self {
                    *self
                }
            }
        )*
    };
}

impl_maskable_scalar!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, ()
);

impl<T: ?Sized> Maskable for PhantomData<T> {
    fn mask_field<M: MaskMapper>(&self, _mapper: &M, _directive: Directive) -> Self {
        *self
    }
}

impl<T> Maskable for Option<T>
where
    T: Maskable,
{
    fn mask_field<M: MaskMapper>(&self, mapper: &M, directive: Directive) -> Self {
        self.as_ref().map(|value| value.mask_field(mapper, directive))
    }
}

impl<T, E> Maskable for Result<T, E>
where
    T: Maskable,
    E: Maskable,
{
    fn mask_field<M: MaskMapper>(&self, mapper: &M, directive: Directive) -> Self {
        match self {
            Ok(value) => Ok(value.mask_field(mapper, directive)),
            Err(err) => Err(err.mask_field(mapper, directive)),
        }
    }
}

impl<T> Maskable for Vec<T>
where
    T: Maskable,
{
    fn mask_field<M: MaskMapper>(&self, mapper: &M, directive: Directive) -> Self {
        self.iter()
            .map(|value| value.mask_field(mapper, directive))
            .collect()
    }
}

impl<T> Maskable for Box<T>
where
    T: Maskable,
{
    fn mask_field<M: MaskMapper>(&self, mapper: &M, directive: Directive) -> Self {
        Box::new((**self).mask_field(mapper, directive))
    }
}

// Maps and sets have no masking rule and are copied verbatim. Rekeying a
// masked map would corrupt lookups, so keys are never touched; misannotated
// map values therefore pass through unmasked.
impl<K, V, S> Maskable for HashMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn mask_field<M: MaskMapper>(&self, _mapper: &M, _directive: Directive) -> Self {
        self.clone()
    }
}

impl<K, V> Maskable for BTreeMap<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    fn mask_field<M: MaskMapper>(&self, _mapper: &M, _directive: Directive) -> Self {
        self.clone()
    }
}

impl<T, S> Maskable for HashSet<T, S>
where
    T: Clone + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn mask_field<M: MaskMapper>(&self, _mapper: &M, _directive: Directive) -> Self {
        self.clone()
    }
}

impl<T> Maskable for BTreeSet<T>
where
    T: Clone + Ord,
{
    fn mask_field<M: MaskMapper>(&self, _mapper: &M, _directive: Directive) -> Self {
        self.clone()
    }
}
