//! Output types for logging boundaries.
//!
//! - [`MaskedOutput`]: the rendered form of a masked value (Text or Json)
//! - [`MaskedJson`]: a masked value already converted to JSON, ready to hand
//!   to a structured logger

use std::fmt;

#[cfg(feature = "json")]
use serde_json::Value as JsonValue;

// =============================================================================
// MaskedOutput - Output produced at logging boundaries
// =============================================================================

/// Output produced at a logging boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskedOutput {
    Text(String),
    #[cfg(feature = "json")]
    Json(JsonValue),
}

impl MaskedOutput {
    /// Flattens the output to a string; JSON is rendered compactly.
    pub fn into_text(self) -> String {
        match self {
            MaskedOutput::Text(text) => text,
            #[cfg(feature = "json")]
            MaskedOutput::Json(json) => json.to_string(),
        }
    }
}

impl fmt::Display for MaskedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskedOutput::Text(text) => f.write_str(text),
            #[cfg(feature = "json")]
            MaskedOutput::Json(json) => write!(f, "{json}"),
        }
    }
}

// =============================================================================
// MaskedJson - JSON form of a masked value
// =============================================================================

/// A masked value converted to `serde_json::Value`.
///
/// Only produced from the output of a masking session, never from the raw
/// value.
#[cfg(feature = "json")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedJson(JsonValue);

#[cfg(feature = "json")]
impl MaskedJson {
    pub(crate) fn new(value: JsonValue) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_inner(self) -> JsonValue {
        self.0
    }
}

#[cfg(feature = "json")]
impl From<MaskedJson> for MaskedOutput {
    fn from(json: MaskedJson) -> Self {
        MaskedOutput::Json(json.0)
    }
}
