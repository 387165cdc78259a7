//! The user-facing masking entry point.

use std::{borrow::Cow, fmt};

#[cfg(feature = "json")]
use serde::Serialize;

#[cfg(feature = "json")]
use crate::output::MaskedJson;
use crate::{
    config::{DEFAULT_TAG_KEY, MaskingConfig},
    filter::{Filter, FilterChain},
    format::MaskStyle,
    output::MaskedOutput,
    traversal::{Maskable, Walker},
};

/// A filter chain plus the settings the formatters read while masking.
///
/// A session is configured once and then reused: [`mask_details`] takes
/// `&self`, so a shared session can serve many threads. Configuration
/// setters take `&mut self` and therefore cannot race with masking.
///
/// [`mask_details`]: MaskingSession::mask_details
#[derive(Clone, Debug)]
pub struct MaskingSession {
    filters: FilterChain,
    style: MaskStyle,
    tag_key: Cow<'static, str>,
}

impl MaskingSession {
    /// Creates a session with default settings and the given filters, in order.
    pub fn new<F>(filters: impl IntoIterator<Item = F>) -> Self
    where
        F: Filter + 'static,
    {
        Self::from(filters.into_iter().collect::<FilterChain>())
    }

    /// Creates a session from explicit settings.
    pub fn with_config(filters: FilterChain, config: MaskingConfig) -> Self {
        Self {
            filters,
            style: MaskStyle::new(config.mask_char, config.placeholder),
            tag_key: Cow::Owned(config.tag_key),
        }
    }

    /// Appends filters after the existing ones.
    pub fn append_filters<F>(&mut self, filters: impl IntoIterator<Item = F>)
    where
        F: Filter + 'static,
    {
        self.filters.extend(filters);
    }

    /// Appends a single filter.
    pub fn push_filter<F: Filter + 'static>(&mut self, filter: F) {
        self.filters.push(filter);
    }

    pub fn filters(&self) -> &FilterChain {
        &self.filters
    }

    pub fn set_mask_char(&mut self, mask_char: char) {
        self.style.set_mask_char(mask_char);
    }

    pub fn mask_char(&self) -> char {
        self.style.mask_char()
    }

    /// Sets the label substituted by filters that carry no mask kind.
    pub fn set_placeholder(&mut self, placeholder: impl Into<Cow<'static, str>>) {
        self.style.set_placeholder(placeholder);
    }

    pub fn placeholder(&self) -> &str {
        self.style.placeholder()
    }

    /// Sets the field-tag key read by tag filters.
    pub fn set_tag_key(&mut self, tag_key: impl Into<Cow<'static, str>>) {
        self.tag_key = tag_key.into();
    }

    pub fn tag_key(&self) -> &str {
        &self.tag_key
    }

    pub fn style(&self) -> &MaskStyle {
        &self.style
    }

    /// Returns a current snapshot of the settings.
    pub fn config(&self) -> MaskingConfig {
        MaskingConfig {
            mask_char: self.mask_char(),
            placeholder: self.placeholder().to_owned(),
            tag_key: self.tag_key().to_owned(),
        }
    }

    /// A walker bound to this session, for hand-written [`Maskable`] impls.
    pub fn walker(&self) -> Walker<'_> {
        Walker::new(&self.filters, &self.style, &self.tag_key)
    }

    /// Returns a masked deep copy of `value`.
    ///
    /// `value` is left untouched. The root is visited with an empty field
    /// name and an empty tag.
    #[must_use]
    pub fn mask_details<T: Maskable>(&self, value: &T) -> T {
        self.walker().visit("", value, "")
    }

    /// Masks `value` and renders the copy with its `Debug` impl.
    pub fn masked_output<T: Maskable + fmt::Debug>(&self, value: &T) -> MaskedOutput {
        MaskedOutput::Text(format!("{:?}", self.mask_details(value)))
    }

    /// Masks `value` and converts the copy to JSON.
    ///
    /// A serialization failure is reported as a JSON string rather than an
    /// error, since the caller is a logging path.
    #[cfg(feature = "json")]
    pub fn masked_json<T: Maskable + Serialize>(&self, value: &T) -> MaskedJson {
        let masked = self.mask_details(value);
        let json = serde_json::to_value(masked).unwrap_or_else(|err| {
            serde_json::Value::String(format!("Failed to serialize masked value: {err}"))
        });
        MaskedJson::new(json)
    }
}

impl Default for MaskingSession {
    fn default() -> Self {
        Self {
            filters: FilterChain::new(),
            style: MaskStyle::default(),
            tag_key: Cow::Borrowed(DEFAULT_TAG_KEY),
        }
    }
}

impl From<FilterChain> for MaskingSession {
    fn from(filters: FilterChain) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }
}
