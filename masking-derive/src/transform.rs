//! Shared field code generation for struct and enum derivation.
//!
//! Each field yields two expressions: the value it takes in the masked copy
//! and the value it takes in a zeroed instance.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::Result;

use crate::{
    crate_path,
    generics::collect_generics_from_type,
    strategy::{FieldOptions, Strategy, parse_field_options},
};

/// Generic parameters collected while walking fields, grouped by the bound
/// each group needs.
#[derive(Default)]
pub(crate) struct UsedGenerics {
    /// Appear in walked fields; need `Maskable`.
    pub(crate) walked: Vec<Ident>,
    /// Appear in `#[mask(keep)]` fields; need `Clone + Default`.
    pub(crate) kept: Vec<Ident>,
    /// Appear in `#[mask(skip)]` fields; need `Default`.
    pub(crate) skipped: Vec<Ident>,
}

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) used: &'a mut UsedGenerics,
}

/// Code generated for a single field.
pub(crate) struct FieldPlan {
    /// Pattern binding for the field in `self`.
    pub(crate) binding: Ident,
    /// Whether the walk body reads the binding.
    pub(crate) reads_binding: bool,
    /// Expression building the field of the masked copy.
    pub(crate) walked: TokenStream,
    /// Expression building the field of a zeroed value.
    pub(crate) zeroed: TokenStream,
}

/// Generates the masked and zeroed expressions for one field.
///
/// | Attribute        | Masked copy                                   | Zeroed                |
/// |------------------|-----------------------------------------------|-----------------------|
/// | None             | `walker.visit(name, field, tag)`              | `Maskable::zeroed()`  |
/// | `#[mask(skip)]`  | `Default::default()`                          | `Default::default()`  |
/// | `#[mask(keep)]`  | `Clone::clone(field)`                         | `Default::default()`  |
pub(crate) fn generate_field_plan(
    ctx: &mut DeriveContext<'_>,
    field: &syn::Field,
    binding: Ident,
    name: &str,
    span: Span,
) -> Result<FieldPlan> {
    let FieldOptions {
        strategy,
        rename,
        tags,
    } = parse_field_options(&field.attrs)?;
    let ty = &field.ty;
    let maskable = crate_path("Maskable");

    let plan = match strategy {
        Strategy::Walk => {
            collect_generics_from_type(ty, ctx.generics, &mut ctx.used.walked);
            let name = rename.as_deref().unwrap_or(name);
            let tag = if tags.is_empty() {
                quote! { "" }
            } else {
                let keys = tags.iter().map(|(key, _)| key);
                let values = tags.iter().map(|(_, value)| value);
                quote! { __walker.tag_value(&[#( (#keys, #values) ),*]) }
            };
            FieldPlan {
                walked: quote_spanned! { span =>
                    __walker.visit(#name, #binding, #tag)
                },
                zeroed: quote_spanned! { span =>
                    <#ty as #maskable>::zeroed()
                },
                binding,
                reads_binding: true,
            }
        }
        Strategy::Keep => {
            collect_generics_from_type(ty, ctx.generics, &mut ctx.used.kept);
            FieldPlan {
                walked: quote_spanned! { span =>
                    ::core::clone::Clone::clone(#binding)
                },
                zeroed: quote_spanned! { span =>
                    <#ty as ::core::default::Default>::default()
                },
                binding,
                reads_binding: true,
            }
        }
        Strategy::Skip => {
            collect_generics_from_type(ty, ctx.generics, &mut ctx.used.skipped);
            let default = quote_spanned! { span =>
                <#ty as ::core::default::Default>::default()
            };
            FieldPlan {
                walked: default.clone(),
                zeroed: default,
                binding,
                reads_binding: false,
            }
        }
    };
    Ok(plan)
}
