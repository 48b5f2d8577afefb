//! Enum-specific `Maskable` derivation.
//!
//! This module generates a match arm for each variant and collects generic
//! parameters that require trait bounds.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataEnum, Fields, Result};

use crate::{
    strategy::parse_field_strategy,
    transform::{generate_field_transform, DeriveContext},
};

pub(crate) struct EnumDeriveOutput {
    pub(crate) body: TokenStream,
    pub(crate) masked_generics: Vec<Ident>,
    pub(crate) opaque_generics: Vec<Ident>,
}

pub(crate) fn derive_enum(
    name: &Ident,
    data: DataEnum,
    generics: &syn::Generics,
) -> Result<EnumDeriveOutput> {
    let mut arms = Vec::new();
    let mut masked_generics = Vec::new();
    let mut opaque_generics = Vec::new();

    if data.variants.is_empty() {
        // An empty enum has no values to mask; deref so the empty match
        // is accepted over the uninhabited type itself.
        return Ok(EnumDeriveOutput {
            body: quote! { match *self {} },
            masked_generics,
            opaque_generics,
        });
    }

    for variant in data.variants {
        let variant_ident = &variant.ident;
        let mut ctx = DeriveContext {
            generics,
            masked_generics: &mut masked_generics,
            opaque_generics: &mut opaque_generics,
        };

        match variant.fields {
            Fields::Unit => {
                arms.push(quote! { #name::#variant_ident => #name::#variant_ident });
            }
            Fields::Named(fields) => {
                let mut bindings = Vec::new();
                let mut transforms = Vec::new();
                for field in fields.named {
                    let span = field.span();
                    let strategy = parse_field_strategy(&field.attrs)?;
                    let ident = field.ident.expect("named field should have an identifier");
                    let binding = ident.clone();
                    bindings.push(ident);
                    transforms.push(generate_field_transform(
                        &mut ctx, &field.ty, &binding, span, &strategy,
                    ));
                }
                arms.push(quote! {
                    #name::#variant_ident { #(#bindings),* } => {
                        #(#transforms)*
                        #name::#variant_ident { #(#bindings),* }
                    }
                });
            }
            Fields::Unnamed(fields) => {
                let mut bindings = Vec::new();
                let mut transforms = Vec::new();
                for (index, field) in fields.unnamed.into_iter().enumerate() {
                    let binding = format_ident!("field_{index}");
                    let span = field.span();
                    let strategy = parse_field_strategy(&field.attrs)?;
                    bindings.push(binding.clone());
                    transforms.push(generate_field_transform(
                        &mut ctx, &field.ty, &binding, span, &strategy,
                    ));
                }
                arms.push(quote! {
                    #name::#variant_ident ( #(#bindings),* ) => {
                        #(#transforms)*
                        #name::#variant_ident ( #(#bindings),* )
                    }
                });
            }
        }
    }

    Ok(EnumDeriveOutput {
        body: quote! {
            match self {
                #(#arms),*
            }
        },
        masked_generics,
        opaque_generics,
    })
}
