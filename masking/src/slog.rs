//! Adapters for emitting masked values through `slog`.
//!
//! The logged representation is always derived from the session's masked
//! copy, never from the original value. Serialization failures become
//! placeholder strings rather than errors.
//!
//! This module does not configure `slog`.

use serde::Serialize;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{MaskedJson, MaskedOutput, Maskable, MaskingSession};

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogValue for MaskedOutput {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        match self {
            MaskedOutput::Text(text) => serializer.emit_str(key, text),
            MaskedOutput::Json(json) => {
                let nested = slog::Serde(json.clone());
                SlogValue::serialize(&nested, record, key, serializer)
            }
        }
    }
}

/// Extension trait for slog logging of masked values as JSON.
///
/// ## Example
/// ```ignore
/// use masking::slog::SlogMaskedExt;
///
/// info!(logger, "login"; "request" => request.slog_masked_json(&session));
/// ```
pub trait SlogMaskedExt: Maskable + Serialize {
    fn slog_masked_json(&self, session: &MaskingSession) -> MaskedJson {
        session.masked_json(self)
    }
}

impl<T> SlogMaskedExt for T where T: Maskable + Serialize {}
