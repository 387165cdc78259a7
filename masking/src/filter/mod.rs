//! Filters decide which fields and substrings are sensitive.
//!
//! A [`Filter`] answers two independent questions during traversal:
//!
//! - **Identity**: does the value at this [`Site`] (field name, tag, runtime
//!   type) have to be masked as a whole? The first filter in a
//!   [`FilterChain`] that answers yes is the one whose
//!   [`Filter::mask_string`] produces the replacement.
//! - **Content**: for every string that was not masked by identity, every
//!   filter in the chain may rewrite sensitive substrings through
//!   [`Filter::replace_string`].
//!
//! Filters are immutable once built and can be shared across threads.

use std::{any::TypeId, fmt, sync::Arc};

use crate::format::MaskStyle;

mod field;
mod pii;
mod tag;
mod types;
mod value;

pub use field::{AllFieldsFilter, FieldFilter, FieldPrefixFilter};
pub use pii::RegexFilter;
pub use tag::TagFilter;
pub use types::TypeFilter;
pub use value::ValueFilter;

/// The location of a value under inspection.
#[derive(Clone, Copy, Debug)]
pub struct Site<'a> {
    field: &'a str,
    tag: &'a str,
    type_id: TypeId,
    type_name: &'static str,
}

impl<'a> Site<'a> {
    /// Describes a value of type `T` found under `field` with tag value `tag`.
    ///
    /// The root value and sequence elements of the root have an empty field
    /// name; fields without a tag have an empty tag.
    pub fn new<T: 'static>(field: &'a str, tag: &'a str) -> Self {
        Self {
            field,
            tag,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn field(&self) -> &'a str {
        self.field
    }

    pub fn tag(&self) -> &'a str {
        self.tag
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the value at this site is a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

/// A policy unit deciding whether and how values are masked.
///
/// Every method has a no-op default, so a filter only implements the
/// capabilities it uses: identity filters implement [`should_mask`] and
/// [`mask_string`], content filters implement [`replace_string`].
///
/// [`should_mask`]: Filter::should_mask
/// [`mask_string`]: Filter::mask_string
/// [`replace_string`]: Filter::replace_string
pub trait Filter: fmt::Debug + Send + Sync {
    /// Returns `true` if the whole value at `site` must be masked.
    fn should_mask(&self, site: &Site<'_>) -> bool {
        let _ = site;
        false
    }

    /// Produces the replacement for a string this filter matched by identity.
    fn mask_string(&self, site: &Site<'_>, value: &str, style: &MaskStyle) -> String {
        let _ = (site, style);
        value.to_owned()
    }

    /// Rewrites sensitive substrings; strings without a match are returned as is.
    fn replace_string(&self, value: &str, style: &MaskStyle) -> String {
        let _ = style;
        value.to_owned()
    }
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn should_mask(&self, site: &Site<'_>) -> bool {
        (**self).should_mask(site)
    }

    fn mask_string(&self, site: &Site<'_>, value: &str, style: &MaskStyle) -> String {
        (**self).mask_string(site, value, style)
    }

    fn replace_string(&self, value: &str, style: &MaskStyle) -> String {
        (**self).replace_string(value, style)
    }
}

impl<F: Filter + ?Sized> Filter for Arc<F> {
    fn should_mask(&self, site: &Site<'_>) -> bool {
        (**self).should_mask(site)
    }

    fn mask_string(&self, site: &Site<'_>, value: &str, style: &MaskStyle) -> String {
        (**self).mask_string(site, value, style)
    }

    fn replace_string(&self, value: &str, style: &MaskStyle) -> String {
        (**self).replace_string(value, style)
    }
}

/// An ordered list of filters.
///
/// Order matters for identity checks only: the first filter whose
/// [`Filter::should_mask`] returns `true` wins. Content replacement runs every
/// filter in order, each one on the output of the previous.
#[derive(Clone, Debug, Default)]
pub struct FilterChain {
    filters: Vec<Arc<dyn Filter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter, builder style.
    #[must_use]
    pub fn with<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.push(filter);
        self
    }

    pub fn push<F: Filter + 'static>(&mut self, filter: F) {
        self.filters.push(Arc::new(filter));
    }

    /// Appends a filter that is already shared.
    pub fn push_shared(&mut self, filter: Arc<dyn Filter>) {
        self.filters.push(filter);
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Filter> + '_ {
        self.filters.iter().map(|filter| &**filter)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the first filter that masks the value at `site`.
    pub fn first_match(&self, site: &Site<'_>) -> Option<&dyn Filter> {
        self.iter().find(|filter| filter.should_mask(site))
    }

    /// Returns `true` if any filter masks the value at `site`.
    pub fn should_mask(&self, site: &Site<'_>) -> bool {
        self.first_match(site).is_some()
    }

    /// Runs every filter's content replacement over `value`, in order.
    pub fn replace_string(&self, value: &str, style: &MaskStyle) -> String {
        self.iter()
            .fold(value.to_owned(), |current, filter| filter.replace_string(&current, style))
    }
}

impl<F: Filter + 'static> Extend<F> for FilterChain {
    fn extend<I: IntoIterator<Item = F>>(&mut self, filters: I) {
        for filter in filters {
            self.push(filter);
        }
    }
}

impl<F: Filter + 'static> FromIterator<F> for FilterChain {
    fn from_iter<I: IntoIterator<Item = F>>(filters: I) -> Self {
        let mut chain = Self::new();
        chain.extend(filters);
        chain
    }
}

impl From<Vec<Arc<dyn Filter>>> for FilterChain {
    fn from(filters: Vec<Arc<dyn Filter>>) -> Self {
        Self { filters }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::MaskKind;

    #[test]
    fn first_identity_match_wins() {
        let chain = FilterChain::new()
            .with(FieldFilter::with_kind("Phone", MaskKind::Mobile))
            .with(FieldPrefixFilter::new("Ph"));
        let site = Site::new::<String>("Phone", "");
        let matched = chain.first_match(&site).unwrap();
        let masked = matched.mask_string(&site, "0987654321", &MaskStyle::default());
        assert_eq!(masked, "0987***321");
    }

    #[test]
    fn content_filters_run_in_sequence() {
        let chain = FilterChain::new()
            .with(ValueFilter::new("alpha"))
            .with(ValueFilter::with_kind("beta", MaskKind::Password));
        let replaced = chain.replace_string("alpha and beta", &MaskStyle::default());
        assert_eq!(replaced, "[filtered] and ************");
    }

    #[test]
    fn empty_chain_matches_nothing() {
        let chain = FilterChain::default();
        assert!(!chain.should_mask(&Site::new::<String>("Password", "secret")));
        assert_eq!(chain.replace_string("plain", &MaskStyle::default()), "plain");
    }

    #[test]
    fn boxed_filters_delegate() {
        let boxed: Box<dyn Filter> = Box::new(FieldFilter::new("token"));
        let chain: FilterChain = [boxed].into_iter().collect();
        assert_eq!(chain.len(), 1);
        assert!(chain.should_mask(&Site::new::<String>("token", "")));
    }

    #[test]
    fn site_reports_runtime_type() {
        let site = Site::new::<u32>("count", "");
        assert!(site.is::<u32>());
        assert!(!site.is::<u64>());
        assert_eq!(site.type_name(), "u32");
    }
}
