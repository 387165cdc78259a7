//! Generic type parameter handling and trait bound management.
//!
//! A type parameter receives `Maskable` only when a walked field mentions it,
//! `Clone + Default` when a kept field does, and `Default` when a skipped
//! field does. Every type parameter also receives `'static`, since masked
//! copies are reported to filters by `TypeId`.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is skipped when collecting generics:
//!
//! ```ignore
//! struct TypedId<T> {
//!     id: String,
//!     _marker: PhantomData<T>,  // T should NOT require Maskable
//! }
//! ```
//!
//! `PhantomData<T>` is itself `Maskable` for any `T: 'static`, so
//! `TypedId<std::time::Instant>` still derives.

use syn::{Ident, parse_quote};

use crate::{crate_path, transform::UsedGenerics};

/// Records every type parameter of `generics` that `ty` mentions.
///
/// Only the forms a field bounded by `Maskable`, or by `Clone + Default`, can
/// take are visited: paths with their type arguments, arrays, tuples,
/// `'static` references and slices. `PhantomData<_>` is skipped.
pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(type_path) => {
            if let Some(qself) = &type_path.qself {
                collect_generics_from_type(&qself.ty, generics, result);
            }
            collect_from_path(&type_path.path, generics, result);
        }
        syn::Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        syn::Type::Slice(slice) => collect_generics_from_type(&slice.elem, generics, result),
        syn::Type::Reference(reference) => {
            collect_generics_from_type(&reference.elem, generics, result);
        }
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                collect_generics_from_type(elem, generics, result);
            }
        }
        syn::Type::Paren(syn::TypeParen { elem, .. })
        | syn::Type::Group(syn::TypeGroup { elem, .. }) => {
            collect_generics_from_type(elem, generics, result);
        }
        _ => {}
    }
}

fn collect_from_path(path: &syn::Path, generics: &syn::Generics, result: &mut Vec<Ident>) {
    if path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "PhantomData")
    {
        return;
    }

    for segment in &path.segments {
        let is_param = generics.type_params().any(|param| param.ident == segment.ident);
        if is_param && !result.contains(&segment.ident) {
            result.push(segment.ident.clone());
        }
        if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
            for arg in &args.args {
                if let syn::GenericArgument::Type(inner) = arg {
                    collect_generics_from_type(inner, generics, result);
                }
            }
        }
    }
}

fn push_bounds(generics: &mut syn::Generics, used: &[Ident], bound: &syn::TypeParamBound) {
    for param in generics.type_params_mut() {
        if used.iter().any(|g| g == &param.ident) {
            param.bounds.push(bound.clone());
        }
    }
}

/// Adds the bounds the generated `Maskable` impl relies on.
pub(crate) fn add_bounds(mut generics: syn::Generics, used: &UsedGenerics) -> syn::Generics {
    let maskable = crate_path("Maskable");
    push_bounds(&mut generics, &used.walked, &parse_quote!(#maskable));
    push_bounds(&mut generics, &used.kept, &parse_quote!(::core::clone::Clone));
    push_bounds(&mut generics, &used.kept, &parse_quote!(::core::default::Default));
    push_bounds(&mut generics, &used.skipped, &parse_quote!(::core::default::Default));
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    generics
}
