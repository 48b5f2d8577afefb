//! Struct-specific `Maskable` derivation.
//!
//! This module generates traversal logic for struct fields and collects
//! generic parameters that require trait bounds.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    strategy::parse_field_strategy,
    transform::{generate_field_transform, DeriveContext},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) body: TokenStream,
    pub(crate) masked_generics: Vec<Ident>,
    pub(crate) opaque_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<StructDeriveOutput> {
    match data.fields {
        Fields::Named(fields) => derive_named_struct(fields, generics),
        Fields::Unnamed(fields) => derive_unnamed_struct(fields, generics),
        Fields::Unit => Ok(StructDeriveOutput {
            body: quote! { Self },
            masked_generics: Vec::new(),
            opaque_generics: Vec::new(),
        }),
    }
}

fn derive_named_struct(
    fields: syn::FieldsNamed,
    generics: &syn::Generics,
) -> Result<StructDeriveOutput> {
    let mut bindings = Vec::new();
    let mut transforms = Vec::new();
    let mut masked_generics = Vec::new();
    let mut opaque_generics = Vec::new();

    let mut ctx = DeriveContext {
        generics,
        masked_generics: &mut masked_generics,
        opaque_generics: &mut opaque_generics,
    };

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

    Ok(StructDeriveOutput {
        body: quote! {
            let Self { #(#bindings),* } = self;
            #(#transforms)*
            Self { #(#bindings),* }
        },
        masked_generics,
        opaque_generics,
    })
}

fn derive_unnamed_struct(
    fields: syn::FieldsUnnamed,
    generics: &syn::Generics,
) -> Result<StructDeriveOutput> {
    let mut bindings = Vec::new();
    let mut transforms = Vec::new();
    let mut masked_generics = Vec::new();
    let mut opaque_generics = Vec::new();

    let mut ctx = DeriveContext {
        generics,
        masked_generics: &mut masked_generics,
        opaque_generics: &mut opaque_generics,
    };

    for (index, field) in fields.unnamed.into_iter().enumerate() {
        let binding = format_ident!("field_{index}");
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        bindings.push(binding.clone());

        transforms.push(generate_field_transform(
            &mut ctx, &field.ty, &binding, span, &strategy,
        ));
    }

    Ok(StructDeriveOutput {
        body: quote! {
            let Self ( #(#bindings),* ) = self;
            #(#transforms)*
            Self ( #(#bindings),* )
        },
        masked_generics,
        opaque_generics,
    })
}
