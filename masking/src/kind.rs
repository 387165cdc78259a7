//! Semantic categories of sensitive strings.
//!
//! A [`MaskKind`] selects the formatter applied to a matched string and is
//! also the value compared against field tags (e.g. `#[tag(mask = "email")]`).

use std::{fmt, str::FromStr};

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Category of sensitive data, used to pick a masking algorithm.
///
/// The string form (see [`MaskKind::as_str`]) is what field tags carry.
/// [`MaskKind::Unspecified`] is the empty string; filters built without a kind
/// use it and substitute the session placeholder instead of a formatted mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum MaskKind {
    /// Fixed-length mask regardless of input.
    Password,
    /// Personal names, masked per space-separated token.
    Name,
    /// Postal addresses: the first six characters stay visible.
    #[cfg_attr(feature = "json", serde(rename = "addr"))]
    Address,
    /// Email addresses: the domain stays visible.
    Email,
    /// Mobile numbers.
    Mobile,
    /// Landline numbers, normalised to `(AA)NNNN-****`.
    #[cfg_attr(feature = "json", serde(rename = "tel"))]
    Telephone,
    /// National identity numbers.
    #[cfg_attr(feature = "json", serde(rename = "id"))]
    NationalId,
    /// Card numbers (15 or 16 digits).
    #[cfg_attr(feature = "json", serde(rename = "credit"))]
    CreditCard,
    /// URLs; only the embedded password is hidden.
    Url,
    /// Replaced wholesale by the placeholder label.
    Secret,
    /// No kind configured; replaced by the placeholder label.
    #[default]
    #[cfg_attr(feature = "json", serde(rename = ""))]
    Unspecified,
}

impl MaskKind {
    /// Every kind, in declaration order.
    pub const ALL: [MaskKind; 11] = [
        MaskKind::Password,
        MaskKind::Name,
        MaskKind::Address,
        MaskKind::Email,
        MaskKind::Mobile,
        MaskKind::Telephone,
        MaskKind::NationalId,
        MaskKind::CreditCard,
        MaskKind::Url,
        MaskKind::Secret,
        MaskKind::Unspecified,
    ];

    /// Returns the tag string for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            MaskKind::Password => "password",
            MaskKind::Name => "name",
            MaskKind::Address => "addr",
            MaskKind::Email => "email",
            MaskKind::Mobile => "mobile",
            MaskKind::Telephone => "tel",
            MaskKind::NationalId => "id",
            MaskKind::CreditCard => "credit",
            MaskKind::Url => "url",
            MaskKind::Secret => "secret",
            MaskKind::Unspecified => "",
        }
    }

    /// Maps a field tag to a kind; unknown tags become [`MaskKind::Unspecified`].
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl FromStr for MaskKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        MaskKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| Error::UnknownMaskKind(value.to_owned()))
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
