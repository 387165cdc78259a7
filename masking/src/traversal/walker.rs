//! Filter dispatch during traversal.

use super::traits::{Maskable, Shape};
use crate::{
    filter::{FilterChain, Site},
    format::MaskStyle,
};

/// Visits values on behalf of a [`MaskingSession`](crate::MaskingSession).
///
/// Generated and hand-written [`Maskable`] impls call [`Walker::visit`] for
/// every child value; the walker decides whether the child is masked as a
/// whole or copied recursively.
#[derive(Clone, Copy, Debug)]
pub struct Walker<'a> {
    filters: &'a FilterChain,
    style: &'a MaskStyle,
    tag_key: &'a str,
}

impl<'a> Walker<'a> {
    pub fn new(filters: &'a FilterChain, style: &'a MaskStyle, tag_key: &'a str) -> Self {
        Self {
            filters,
            style,
            tag_key,
        }
    }

    pub fn filters(&self) -> &'a FilterChain {
        self.filters
    }

    pub fn style(&self) -> &'a MaskStyle {
        self.style
    }

    pub fn tag_key(&self) -> &'a str {
        self.tag_key
    }

    /// Returns a masked copy of `value`, found under `field` with tag `tag`.
    ///
    /// Reference shapes are entered without a filter check. For everything
    /// else the first matching filter decides: text is rewritten through it,
    /// other shapes become [`Maskable::zeroed`]. Unmatched values are walked.
    pub fn visit<T: Maskable>(&self, field: &str, value: &T, tag: &str) -> T {
        if T::SHAPE == Shape::Reference {
            return value.walk(self, field, tag);
        }

        let site = Site::new::<T>(field, tag);
        let Some(filter) = self.filters.first_match(&site) else {
            return value.walk(self, field, tag);
        };

        match T::SHAPE {
            Shape::Text => value
                .map_text(|text| filter.mask_string(&site, text, self.style))
                .unwrap_or_else(T::zeroed),
            _ => T::zeroed(),
        }
    }

    /// Runs the chain's content filters over a string.
    pub fn replace_text(&self, value: &str) -> String {
        self.filters.replace_string(value, self.style)
    }

    /// Picks the value stored under the session's tag key.
    ///
    /// Returns an empty string when the field carries no such tag.
    pub fn tag_value<'t>(&self, tags: &[(&str, &'t str)]) -> &'t str {
        tags.iter()
            .find(|(key, _)| *key == self.tag_key)
            .map_or("", |&(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldFilter, TagFilter, kind::MaskKind};

    #[test]
    fn tag_value_follows_the_configured_key() {
        let filters = FilterChain::new();
        let style = MaskStyle::default();
        let walker = Walker::new(&filters, &style, "log");
        let tags = [("mask", "email"), ("log", "secret")];
        assert_eq!(walker.tag_value(&tags), "secret");
        assert_eq!(Walker::new(&filters, &style, "other").tag_value(&tags), "");
    }

    #[test]
    fn matched_text_is_rewritten_and_other_shapes_zeroed() {
        let filters = FilterChain::new().with(FieldFilter::with_kind("secret", MaskKind::Password));
        let style = MaskStyle::default();
        let walker = Walker::new(&filters, &style, "mask");
        assert_eq!(walker.visit("secret", &"hunter2".to_owned(), ""), "************");
        assert_eq!(walker.visit("secret", &42_u32, ""), 0);
        assert_eq!(walker.visit("secret", &vec![1_u8, 2], ""), Vec::<u8>::new());
        assert_eq!(walker.visit("public", &42_u32, ""), 42);
    }

    #[test]
    fn references_pass_field_and_tag_through() {
        let filters = FilterChain::new().with(TagFilter::new([MaskKind::Mobile]));
        let style = MaskStyle::default();
        let walker = Walker::new(&filters, &style, "mask");
        let phone = Some(Box::new("0987654321".to_owned()));
        assert_eq!(
            walker.visit("Phone", &phone, "mobile"),
            Some(Box::new("0987***321".to_owned()))
        );
        assert_eq!(walker.visit("Phone", &None::<String>, "mobile"), None);
    }
}
