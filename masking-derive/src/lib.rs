//! Derive macro for `masking`.
//!
//! This crate generates the traversal code behind `#[derive(Maskable)]`. It:
//! - reads `#[mask(...)]` and `#[tag(...)]` attributes
//! - emits a `masking::Maskable` implementation that visits every field
//!   through the session's walker
//!
//! It does **not** decide what gets masked. Filters and formatters live in the
//! main `masking` crate and are applied at runtime.

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
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
use container::{ContainerOptions, parse_container_options};
use derive_enum::derive_enum;
use derive_struct::{derive_struct, derive_text_struct};
use generics::add_bounds;
use transform::UsedGenerics;

/// Derives `masking::Maskable` for structs and enums.
///
/// The generated `walk` produces a masked copy by visiting each field with
/// its name and tag, so filters see the same information for derived types
/// as they do for hand-written impls.
///
/// # Container Attributes
///
/// - `#[mask(text)]`: the type is a newtype around a textual value. It
///   reports `Shape::Text`, so a matching filter formats the wrapped string
///   rather than zeroing the value. Requires exactly one field.
///
/// # Field Attributes
///
/// - **No annotation**: the field is visited. Its type must implement
///   `Maskable`.
/// - `#[mask(rename = "Name")]`: the name filters see for this field.
/// - `#[tag(key = "value", ...)]`: field tags. Tag filters read the value
///   stored under the session's tag key (`mask` unless configured).
/// - `#[mask(keep)]`: the field is cloned as is and never shown to filters.
///   Use this for foreign types that don't implement `Maskable`.
/// - `#[mask(skip)]`: the field is left at `Default::default()` in the copy.
///
/// # Zero Values
///
/// A struct's zero value zeroes every field. An enum's zero value is the
/// `#[default]` variant when one is marked, and the first variant otherwise.
///
/// Unions and types with lifetime parameters are rejected at compile time.
#[proc_macro_derive(Maskable, attributes(mask, tag))]
pub fn derive_maskable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the masking crate root.
///
/// Handles crate renaming (e.g., `my_masking = { package = "masking", ... }`).
/// Inside the masking crate itself this still yields `::masking`, which
/// resolves through its `extern crate self as masking;` alias.
fn crate_root() -> TokenStream {
    match crate_name("masking") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::masking },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_path = syn::parse_str::<syn::Path>(item).expect("masking crate path should parse");
    quote! { #root::#item_path }
}

struct DeriveOutput {
    shape: TokenStream,
    zeroed_body: TokenStream,
    map_text: TokenStream,
    walk_body: TokenStream,
    used: UsedGenerics,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { text } = parse_container_options(&attrs)?;

    if let Some(lifetime) = generics.lifetimes().next() {
        return Err(syn::Error::new(
            lifetime.span(),
            "`Maskable` cannot be derived for types with lifetime parameters; \
             masked copies must be `'static`",
        ));
    }

    let output = match data {
        Data::Struct(data) if text => derive_text_struct(&ident, data, &generics)?,
        Data::Struct(data) => derive_struct(data, &generics)?,
        Data::Enum(data) => {
            if text {
                return Err(syn::Error::new(
                    ident.span(),
                    "#[mask(text)] is only supported on structs",
                ));
            }
            derive_enum(&ident, data, &generics)?
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Maskable` cannot be derived for unions",
            ));
        }
    };

    let DeriveOutput {
        shape,
        zeroed_body,
        map_text,
        walk_body,
        used,
    } = output;

    let crate_root = crate_root();
    let generics = add_bounds(generics, &used);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_root::Maskable for #ident #ty_generics #where_clause {
            const SHAPE: #crate_root::Shape = #shape;

            fn zeroed() -> Self {
                #zeroed_body
            }

            #map_text

            #[allow(unused_variables)]
            fn walk(
                &self,
                __walker: &#crate_root::Walker<'_>,
                __field: &str,
                __tag: &str,
            ) -> Self {
                #walk_body
            }
        }
    })
}
