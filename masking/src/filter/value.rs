use std::borrow::Cow;

use super::Filter;
use crate::{format::MaskStyle, kind::MaskKind};

/// Replaces every occurrence of a literal substring.
///
/// The replacement is computed once from the whole string being scanned: the
/// placeholder label when no kind is set, otherwise the kind's formatter
/// applied to the full string.
#[derive(Clone, Debug)]
pub struct ValueFilter {
    target: Cow<'static, str>,
    kind: MaskKind,
}

impl ValueFilter {
    pub fn new(target: impl Into<Cow<'static, str>>) -> Self {
        Self::with_kind(target, MaskKind::Unspecified)
    }

    pub fn with_kind(target: impl Into<Cow<'static, str>>, kind: MaskKind) -> Self {
        Self {
            target: target.into(),
            kind,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Filter for ValueFilter {
    fn replace_string(&self, value: &str, style: &MaskStyle) -> String {
        if self.target.is_empty() || !value.contains(&*self.target) {
            return value.to_owned();
        }
        value.replace(&*self.target, &style.format(self.kind, value))
    }
}
