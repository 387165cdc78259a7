//! Parsing of `#[mask(...)]` and `#[tag(...)]` field attributes.
//!
//! This module maps attribute syntax to traversal decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{Attribute, LitStr, Meta, Result, spanned::Spanned};

/// Field traversal strategy based on `#[mask(...)]` attributes.
///
/// | Attribute        | Strategy | Behavior                                   |
/// |------------------|----------|--------------------------------------------|
/// | None             | `Walk`   | Visit through the walker and filter chain  |
/// | `#[mask(skip)]`  | `Skip`   | Left at `Default::default()` in the copy   |
/// | `#[mask(keep)]`  | `Keep`   | Cloned as is, never seen by filters        |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    Walk,
    Skip,
    Keep,
}

/// Everything the derive needs to know about one field.
#[derive(Clone, Debug)]
pub(crate) struct FieldOptions {
    pub(crate) strategy: Strategy,
    /// Field name reported to filters, overriding the Rust identifier.
    pub(crate) rename: Option<String>,
    /// `#[tag(key = "value")]` pairs, in declaration order.
    pub(crate) tags: Vec<(String, String)>,
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple of #[mask(skip)] and #[mask(keep)] on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

fn parse_mask_attr(
    attr: &Attribute,
    strategy: &mut Option<Strategy>,
    rename: &mut Option<String>,
) -> Result<()> {
    let Meta::List(list) = &attr.meta else {
        return Err(syn::Error::new(
            attr.span(),
            "expected #[mask(skip)], #[mask(keep)] or #[mask(rename = \"...\")]",
        ));
    };

    list.parse_nested_meta(|meta| {
        if meta.path.is_ident("skip") {
            set_strategy(strategy, Strategy::Skip, meta.path.span())
        } else if meta.path.is_ident("keep") {
            set_strategy(strategy, Strategy::Keep, meta.path.span())
        } else if meta.path.is_ident("rename") {
            if rename.is_some() {
                return Err(meta.error("duplicate `rename` option"));
            }
            let value: LitStr = meta.value()?.parse()?;
            *rename = Some(value.value());
            Ok(())
        } else if meta.path.is_ident("text") {
            Err(meta.error("`text` is a container option; place #[mask(text)] on the type"))
        } else {
            Err(meta.error("unknown field option; expected `skip`, `keep` or `rename`"))
        }
    })
}

fn parse_tag_attr(attr: &Attribute, tags: &mut Vec<(String, String)>) -> Result<()> {
    let Meta::List(list) = &attr.meta else {
        return Err(syn::Error::new(
            attr.span(),
            "expected #[tag(key = \"value\")]",
        ));
    };

    list.parse_nested_meta(|meta| {
        let key = meta
            .path
            .get_ident()
            .map(ToString::to_string)
            .ok_or_else(|| meta.error("tag keys must be plain identifiers"))?;
        if tags.iter().any(|(existing, _)| *existing == key) {
            return Err(meta.error(format!("duplicate tag key `{key}`")));
        }
        let value: LitStr = meta.value()?.parse()?;
        tags.push((key, value.value()));
        Ok(())
    })
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut strategy = None;
    let mut rename = None;
    let mut tags = Vec::new();
    let mut tag_span = None;

    for attr in attrs {
        if attr.path().is_ident("mask") {
            parse_mask_attr(attr, &mut strategy, &mut rename)?;
        } else if attr.path().is_ident("tag") {
            parse_tag_attr(attr, &mut tags)?;
            tag_span.get_or_insert(attr.span());
        }
    }

    let strategy = strategy.unwrap_or(Strategy::Walk);
    if let Some(span) = tag_span {
        if strategy != Strategy::Walk {
            return Err(syn::Error::new(
                span,
                "#[tag] has no effect on fields marked #[mask(skip)] or #[mask(keep)]",
            ));
        }
    }

    Ok(FieldOptions {
        strategy,
        rename,
        tags,
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_walks() {
        let options = parse_field_options(&parse_attrs(quote! {})).unwrap();
        assert_eq!(options.strategy, Strategy::Walk);
        assert!(options.rename.is_none());
        assert!(options.tags.is_empty());
    }

    #[test]
    fn skip_and_keep_are_parsed() {
        let options = parse_field_options(&parse_attrs(quote! { #[mask(skip)] })).unwrap();
        assert_eq!(options.strategy, Strategy::Skip);
        let options = parse_field_options(&parse_attrs(quote! { #[mask(keep)] })).unwrap();
        assert_eq!(options.strategy, Strategy::Keep);
    }

    #[test]
    fn skip_and_keep_together_error() {
        let result = parse_field_options(&parse_attrs(quote! {
            #[mask(skip)]
            #[mask(keep)]
        }));
        assert!(result.unwrap_err().to_string().contains("multiple"));
    }

    #[test]
    fn rename_is_parsed() {
        let options =
            parse_field_options(&parse_attrs(quote! { #[mask(rename = "Phone")] })).unwrap();
        assert_eq!(options.rename.as_deref(), Some("Phone"));
    }

    #[test]
    fn duplicate_rename_errors() {
        let result = parse_field_options(&parse_attrs(quote! {
            #[mask(rename = "A", rename = "B")]
        }));
        assert!(result.unwrap_err().to_string().contains("duplicate"));
    }

    #[test]
    fn tags_keep_declaration_order() {
        let options = parse_field_options(&parse_attrs(quote! {
            #[tag(mask = "email", log = "secret")]
        }))
        .unwrap();
        assert_eq!(
            options.tags,
            [
                ("mask".to_owned(), "email".to_owned()),
                ("log".to_owned(), "secret".to_owned())
            ]
        );
    }

    #[test]
    fn duplicate_tag_key_errors() {
        let result = parse_field_options(&parse_attrs(quote! {
            #[tag(mask = "email")]
            #[tag(mask = "name")]
        }));
        assert!(result.unwrap_err().to_string().contains("duplicate tag key"));
    }

    #[test]
    fn tag_on_skipped_field_errors() {
        let result = parse_field_options(&parse_attrs(quote! {
            #[mask(skip)]
            #[tag(mask = "email")]
        }));
        assert!(result.unwrap_err().to_string().contains("no effect"));
    }

    #[test]
    fn bare_mask_errors() {
        let result = parse_field_options(&parse_attrs(quote! { #[mask] }));
        assert!(result.is_err());
    }

    #[test]
    fn text_on_field_points_to_container() {
        let result = parse_field_options(&parse_attrs(quote! { #[mask(text)] }));
        assert!(result.unwrap_err().to_string().contains("container option"));
    }

    #[test]
    fn other_attributes_ignored() {
        let options = parse_field_options(&parse_attrs(quote! {
            #[derive(Clone)]
            #[serde(skip)]
        }))
        .unwrap();
        assert_eq!(options.strategy, Strategy::Walk);
    }
}
