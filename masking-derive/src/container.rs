//! Container-level attribute parsing for `#[derive(Maskable)]`.
//!
//! This module handles attributes on the struct/enum itself, not on fields.

use syn::{Attribute, Meta, Result};

/// Options parsed from container-level `#[mask(...)]` attributes.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// The type is a single-field newtype around a textual value.
    pub(crate) text: bool,
}

/// Parses container-level `#[mask(...)]` attributes.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("mask") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("text") {
                        options.text = true;
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `text`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected #[mask(text)] on the container",
                ));
            }
        }
    }

    Ok(options)
}
