//! Adapters for emitting masked values through `tracing`.
//!
//! - **`TracingMaskedExt`**: logs the masked copy as a display string. Works
//!   with any tracing subscriber but loses structure.
//! - **`TracingValuableExt`** (requires `tracing-valuable`): logs the masked
//!   copy as structured data via the `valuable` crate.
//!
//! # Example
//!
//! ```ignore
//! use masking::tracing::TracingMaskedExt;
//!
//! tracing::info!(user = %user.tracing_masked(&session));
//! ```

use std::fmt;

use tracing::field::{DisplayValue, display};

use crate::{MaskedOutput, MaskingSession, Maskable};

/// Extension trait for logging masked values as display strings.
pub trait TracingMaskedExt {
    /// Masks the value with `session` and wraps its `Debug` rendering.
    fn tracing_masked(&self, session: &MaskingSession) -> DisplayValue<String>;
}

impl<T> TracingMaskedExt for T
where
    T: Maskable + fmt::Debug,
{
    fn tracing_masked(&self, session: &MaskingSession) -> DisplayValue<String> {
        display(session.masked_output(self).into_text())
    }
}

/// Wraps output that was already masked.
pub fn tracing_output(output: MaskedOutput) -> DisplayValue<String> {
    display(output.into_text())
}

/// A masked copy that implements `valuable::Valuable` for structured output.
#[cfg(feature = "tracing-valuable")]
#[derive(Clone, Debug)]
pub struct MaskedValuable<T> {
    masked: T,
}

#[cfg(feature = "tracing-valuable")]
impl<T> MaskedValuable<T> {
    pub fn inner(&self) -> &T {
        &self.masked
    }
}

#[cfg(feature = "tracing-valuable")]
impl<T: valuable::Valuable> valuable::Valuable for MaskedValuable<T> {
    fn as_value(&self) -> valuable::Value<'_> {
        self.masked.as_value()
    }

    fn visit(&self, visit: &mut dyn valuable::Visit) {
        self.masked.visit(visit);
    }
}

/// Extension trait for logging masked values as structured `valuable` data.
#[cfg(feature = "tracing-valuable")]
pub trait TracingValuableExt: Sized {
    fn tracing_masked_valuable(&self, session: &MaskingSession) -> MaskedValuable<Self>;
}

#[cfg(feature = "tracing-valuable")]
impl<T> TracingValuableExt for T
where
    T: Maskable + valuable::Valuable,
{
    fn tracing_masked_valuable(&self, session: &MaskingSession) -> MaskedValuable<Self> {
        MaskedValuable {
            masked: session.mask_details(self),
        }
    }
}
