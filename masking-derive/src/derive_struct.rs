//! Struct-specific `Maskable` derivation.
//!
//! This module generates traversal logic for struct fields and collects generic
//! parameters that require trait bounds.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{DataStruct, Fields, Member, Result, ext::IdentExt, spanned::Spanned};

use crate::{
    DeriveOutput, crate_path,
    generics::collect_generics_from_type,
    transform::{DeriveContext, FieldPlan, UsedGenerics, generate_field_plan},
};

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<DeriveOutput> {
    let shape = crate_path("Shape::Record");
    let mut used = UsedGenerics::default();
    let mut ctx = DeriveContext {
        generics,
        used: &mut used,
    };

    let (zeroed_body, walk_body) = match &data.fields {
        Fields::Named(fields) => {
            let mut plans = Vec::new();
            for field in &fields.named {
                let ident = field
                    .ident
                    .clone()
                    .expect("named field should have an identifier");
                let name = ident.unraw().to_string();
                plans.push(generate_field_plan(
                    &mut ctx,
                    field,
                    ident,
                    &name,
                    field.span(),
                )?);
            }
            named_bodies(&quote! { Self }, &plans).into_struct_bodies()
        }
        Fields::Unnamed(fields) => {
            let mut plans = Vec::new();
            for (index, field) in fields.unnamed.iter().enumerate() {
                let binding = format_ident!("field_{index}");
                plans.push(generate_field_plan(
                    &mut ctx,
                    field,
                    binding,
                    &index.to_string(),
                    field.span(),
                )?);
            }
            unnamed_bodies(&quote! { Self }, &plans).into_struct_bodies()
        }
        Fields::Unit => (quote! { Self }, quote! { Self }),
    };

    Ok(DeriveOutput {
        shape,
        zeroed_body,
        map_text: TokenStream::new(),
        walk_body,
        used,
    })
}

/// The pieces of one constructor: how to build it zeroed, how to bind its
/// fields, and how to build the masked copy from those bindings.
pub(crate) struct Bodies {
    pub(crate) zeroed: TokenStream,
    pub(crate) pattern: TokenStream,
    pub(crate) walked: TokenStream,
}

impl Bodies {
    fn into_struct_bodies(self) -> (TokenStream, TokenStream) {
        let Self {
            zeroed,
            pattern,
            walked,
        } = self;
        (
            zeroed,
            quote! {
                let #pattern = self;
                #walked
            },
        )
    }
}

/// Builds the constructor pieces for braced fields such as `Self { .. }` or
/// `Self::Variant { .. }`.
pub(crate) fn named_bodies(path: &TokenStream, plans: &[FieldPlan]) -> Bodies {
    let members: Vec<&Ident> = plans.iter().map(|plan| &plan.binding).collect();
    let zeroed = plans.iter().map(|plan| &plan.zeroed);
    let walked = plans.iter().map(|plan| &plan.walked);
    let read: Vec<&Ident> = plans
        .iter()
        .filter(|plan| plan.reads_binding)
        .map(|plan| &plan.binding)
        .collect();

    Bodies {
        zeroed: quote! { #path { #( #members: #zeroed ),* } },
        pattern: quote! { #path { #(#read,)* .. } },
        walked: quote! { #path { #( #members: #walked ),* } },
    }
}

/// Builds the constructor pieces for tuple fields such as `Self(..)` or
/// `Self::Variant(..)`.
pub(crate) fn unnamed_bodies(path: &TokenStream, plans: &[FieldPlan]) -> Bodies {
    let zeroed = plans.iter().map(|plan| &plan.zeroed);
    let walked = plans.iter().map(|plan| &plan.walked);
    let patterns = plans.iter().map(|plan| {
        if plan.reads_binding {
            let binding = &plan.binding;
            quote! { #binding }
        } else {
            quote! { _ }
        }
    });

    Bodies {
        zeroed: quote! { #path( #(#zeroed),* ) },
        pattern: quote! { #path( #(#patterns),* ) },
        walked: quote! { #path( #(#walked),* ) },
    }
}

/// Derives the textual newtype form selected by `#[mask(text)]`.
///
/// The wrapper reports [`Shape::Text`] and forwards every operation to its
/// single field, so a matching filter formats the wrapped string instead of
/// zeroing the whole value.
pub(crate) fn derive_text_struct(
    name: &Ident,
    data: DataStruct,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let mut fields = data.fields.iter();
    let (Some(field), None) = (fields.next(), fields.next()) else {
        return Err(syn::Error::new(
            name.span(),
            "#[mask(text)] requires a struct with exactly one field",
        ));
    };
    if let Some(attr) = field
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("mask") || attr.path().is_ident("tag"))
    {
        return Err(syn::Error::new(
            attr.span(),
            "field attributes are not supported inside a #[mask(text)] wrapper",
        ));
    }

    let member = field
        .ident
        .clone()
        .map_or_else(|| Member::Unnamed(0.into()), Member::Named);
    let ty = &field.ty;
    let maskable = crate_path("Maskable");
    let shape = crate_path("Shape::Text");

    let mut used = UsedGenerics::default();
    collect_generics_from_type(ty, generics, &mut used.walked);

    Ok(DeriveOutput {
        shape,
        zeroed_body: quote! {
            Self { #member: <#ty as #maskable>::zeroed() }
        },
        map_text: quote! {
            fn map_text<__F>(&self, f: __F) -> ::core::option::Option<Self>
            where
                __F: ::core::ops::FnOnce(&str) -> ::std::string::String,
            {
                <#ty as #maskable>::map_text(&self.#member, f).map(|inner| Self { #member: inner })
            }
        },
        walk_body: quote! {
            Self { #member: <#ty as #maskable>::walk(&self.#member, __walker, __field, __tag) }
        },
        used,
    })
}
