//! Generic type parameter handling and trait bound management.
//!
//! This module adds bounds only for generics that appear in traversed
//! fields.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` fields are explicitly skipped when collecting generics,
//! so a marker parameter never drags a `Maskable` bound onto `T`:
//!
//! ```ignore
//! struct TypedId<T> {
//!     id: String,
//!     _marker: PhantomData<T>,  // T gets no Maskable bound
//! }
//! ```

use syn::{parse_quote, Ident};

use crate::crate_path;

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    if let syn::Type::Path(path) = ty {
        if let Some(segment) = path.path.segments.last() {
            // PhantomData fields are copied as-is; their parameter never
            // participates in traversal.
            if segment.ident == "PhantomData" {
                return;
            }

            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                for arg in &args.args {
                    if let syn::GenericArgument::Type(inner_ty) = arg {
                        collect_generics_from_type(inner_ty, generics, result);
                    }
                }
            }

            // Check if this type identifier matches a generic parameter
            for param in generics.type_params() {
                if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                    result.push(param.ident.clone());
                }
            }
        }
    }
}

/// Adds `Maskable` bounds to generic parameters used in traversed fields.
pub(crate) fn add_maskable_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            let maskable_path = crate_path("Maskable");
            param.bounds.push(parse_quote!(#maskable_path));
        }
    }
    generics
}

/// Adds `Clone` bounds to generic parameters used in opaque fields.
pub(crate) fn add_clone_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(::core::clone::Clone));
        }
    }
    generics
}
