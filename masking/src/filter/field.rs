//! Filters matching on the field path.

use std::borrow::Cow;

use super::{Filter, Site};
use crate::{format::MaskStyle, kind::MaskKind};

/// Masks the field whose name equals the target exactly.
#[derive(Clone, Debug)]
pub struct FieldFilter {
    target: Cow<'static, str>,
    kind: MaskKind,
}

impl FieldFilter {
    /// Replaces the matching field with the placeholder label.
    pub fn new(target: impl Into<Cow<'static, str>>) -> Self {
        Self::with_kind(target, MaskKind::Unspecified)
    }

    /// Formats the matching field as `kind`.
    pub fn with_kind(target: impl Into<Cow<'static, str>>, kind: MaskKind) -> Self {
        Self {
            target: target.into(),
            kind,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn kind(&self) -> MaskKind {
        self.kind
    }
}

impl Filter for FieldFilter {
    fn should_mask(&self, site: &Site<'_>) -> bool {
        site.field() == self.target
    }

    fn mask_string(&self, _site: &Site<'_>, value: &str, style: &MaskStyle) -> String {
        style.format(self.kind, value)
    }
}

/// Masks every field whose name starts with the prefix.
///
/// An empty prefix matches every site, including the root value.
#[derive(Clone, Debug)]
pub struct FieldPrefixFilter {
    prefix: Cow<'static, str>,
    kind: MaskKind,
}

impl FieldPrefixFilter {
    pub fn new(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self::with_kind(prefix, MaskKind::Unspecified)
    }

    pub fn with_kind(prefix: impl Into<Cow<'static, str>>, kind: MaskKind) -> Self {
        Self {
            prefix: prefix.into(),
            kind,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Filter for FieldPrefixFilter {
    fn should_mask(&self, site: &Site<'_>) -> bool {
        site.field().starts_with(&*self.prefix)
    }

    fn mask_string(&self, _site: &Site<'_>, value: &str, style: &MaskStyle) -> String {
        style.format(self.kind, value)
    }
}

/// Masks every named field.
///
/// Only the root value and elements of a root sequence, which carry no field
/// name, escape it.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllFieldsFilter {
    kind: MaskKind,
}

impl AllFieldsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(kind: MaskKind) -> Self {
        Self { kind }
    }
}

impl Filter for AllFieldsFilter {
    fn should_mask(&self, site: &Site<'_>) -> bool {
        !site.field().is_empty()
    }

    fn mask_string(&self, _site: &Site<'_>, value: &str, style: &MaskStyle) -> String {
        style.format(self.kind, value)
    }
}
