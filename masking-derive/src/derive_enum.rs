//! Enum-specific `Maskable` derivation.
//!
//! Each variant becomes one match arm in `walk`. Field names reported to
//! filters are the variant's field names, or positions for tuple variants.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{DataEnum, Fields, Result, ext::IdentExt, spanned::Spanned};

use crate::{
    DeriveOutput, crate_path,
    derive_struct::{Bodies, named_bodies, unnamed_bodies},
    transform::{DeriveContext, FieldPlan, UsedGenerics, generate_field_plan},
};

/// Per-variant state used while generating arms.
struct VariantContext<'a, 'b> {
    derive: &'a mut DeriveContext<'b>,
    path: TokenStream,
}

impl VariantContext<'_, '_> {
    fn bodies(&mut self, fields: &Fields) -> Result<Bodies> {
        match fields {
            Fields::Named(named) => {
                let mut plans: Vec<FieldPlan> = Vec::new();
                for field in &named.named {
                    let ident = field
                        .ident
                        .clone()
                        .expect("named field should have an identifier");
                    let name = ident.unraw().to_string();
                    plans.push(generate_field_plan(
                        self.derive,
                        field,
                        ident,
                        &name,
                        field.span(),
                    )?);
                }
                Ok(named_bodies(&self.path, &plans))
            }
            Fields::Unnamed(unnamed) => {
                let mut plans: Vec<FieldPlan> = Vec::new();
                for (index, field) in unnamed.unnamed.iter().enumerate() {
                    plans.push(generate_field_plan(
                        self.derive,
                        field,
                        format_ident!("field_{index}"),
                        &index.to_string(),
                        field.span(),
                    )?);
                }
                Ok(unnamed_bodies(&self.path, &plans))
            }
            Fields::Unit => Ok(Bodies {
                zeroed: self.path.clone(),
                pattern: self.path.clone(),
                walked: self.path.clone(),
            }),
        }
    }
}

/// Derives `Maskable` for an enum.
///
/// The zeroed value is the `#[default]` variant when one is marked, and the
/// first declared variant otherwise, with every field zeroed.
pub(crate) fn derive_enum(
    name: &Ident,
    data: DataEnum,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    if data.variants.is_empty() {
        return Err(syn::Error::new(
            name.span(),
            "`Maskable` cannot be derived for enums without variants",
        ));
    }

    let mut used = UsedGenerics::default();
    let mut derive = DeriveContext {
        generics,
        used: &mut used,
    };

    let mut arms = Vec::new();
    let mut first_zeroed = None;
    let mut default_zeroed = None;

    for variant in &data.variants {
        if let Some(attr) = variant
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident("mask") || attr.path().is_ident("tag"))
        {
            return Err(syn::Error::new(
                attr.span(),
                "#[mask] and #[tag] belong on variant fields, not on variants",
            ));
        }

        let variant_ident = &variant.ident;
        let mut ctx = VariantContext {
            derive: &mut derive,
            path: quote! { Self::#variant_ident },
        };
        let Bodies {
            zeroed,
            pattern,
            walked,
        } = ctx.bodies(&variant.fields)?;

        if variant.attrs.iter().any(|attr| attr.path().is_ident("default")) {
            default_zeroed = Some(zeroed.clone());
        }
        first_zeroed.get_or_insert(zeroed);
        arms.push(quote! { #pattern => #walked, });
    }

    let zeroed_body = default_zeroed
        .or(first_zeroed)
        .expect("enum has at least one variant");

    Ok(DeriveOutput {
        shape: crate_path("Shape::Record"),
        zeroed_body,
        map_text: TokenStream::new(),
        walk_body: quote! {
            match self {
                #(#arms)*
            }
        },
        used,
    })
}
