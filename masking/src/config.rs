//! Session configuration.

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::format::{FILTERED_PLACEHOLDER, MASK_CHAR};

/// Default field-tag key read by [`TagFilter`](crate::TagFilter).
pub const DEFAULT_TAG_KEY: &str = "mask";

/// Settings a [`MaskingSession`](crate::MaskingSession) is created with.
///
/// Under the `json` feature this type is (de)serializable, with every field
/// optional, so hosts can embed it in their own configuration files.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct MaskingConfig {
    /// Character used to build masked spans.
    pub mask_char: char,
    /// Label substituted by filters that carry no mask kind.
    pub placeholder: String,
    /// Field-tag key whose value is compared against mask kinds.
    pub tag_key: String,
}

impl MaskingConfig {
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_tag_key(mut self, tag_key: impl Into<String>) -> Self {
        self.tag_key = tag_key.into();
        self
    }
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            mask_char: MASK_CHAR,
            placeholder: FILTERED_PLACEHOLDER.to_owned(),
            tag_key: DEFAULT_TAG_KEY.to_owned(),
        }
    }
}
