//! Regex-driven detection of PII inside string values.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use super::Filter;
use crate::{error::Result, format::MaskStyle, kind::MaskKind};

const PHONE_PATTERN: &str = r"^((\+\d{1,3}(-| )?\(?\d\)?(-| )?\d{1,5})|(\(?\d{2,6}\)?))(-| )?(\d{3,4})(-| )?(\d{4})(( x| ext)\d{1,5}){0,1}$";

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

/// Replaces the matches of one or more regular expressions.
///
/// The replacement is computed from the whole string being scanned (the
/// placeholder label, or the kind's formatter applied to the full string)
/// and inserted literally for every match.
#[derive(Clone, Debug)]
pub struct RegexFilter {
    patterns: Vec<Regex>,
    kind: MaskKind,
}

impl RegexFilter {
    /// Matches strings that are entirely a phone number.
    pub fn phone() -> Self {
        Self::from_regex(PHONE_REGEX.clone(), MaskKind::Unspecified)
    }

    /// Matches strings that are entirely a phone number and formats them as `kind`.
    pub fn phone_with_kind(kind: MaskKind) -> Self {
        Self::from_regex(PHONE_REGEX.clone(), kind)
    }

    /// Matches strings that are entirely an email address.
    pub fn email() -> Self {
        Self::from_regex(EMAIL_REGEX.clone(), MaskKind::Unspecified)
    }

    pub fn email_with_kind(kind: MaskKind) -> Self {
        Self::from_regex(EMAIL_REGEX.clone(), kind)
    }

    /// Compiles a caller-supplied pattern.
    pub fn custom(pattern: &str) -> Result<Self> {
        Self::custom_with_kind(pattern, MaskKind::Unspecified)
    }

    pub fn custom_with_kind(pattern: &str, kind: MaskKind) -> Result<Self> {
        Ok(Self::from_regex(Regex::new(pattern)?, kind))
    }

    /// Wraps an already compiled regex.
    pub fn from_regex(regex: Regex, kind: MaskKind) -> Self {
        Self {
            patterns: vec![regex],
            kind,
        }
    }

    /// Adds another pattern scanned after the existing ones.
    #[must_use]
    pub fn with_regex(mut self, regex: Regex) -> Self {
        self.patterns.push(regex);
        self
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }
}

impl Filter for RegexFilter {
    fn replace_string(&self, value: &str, style: &MaskStyle) -> String {
        let mut current = value.to_owned();
        for pattern in &self.patterns {
            if !pattern.is_match(&current) {
                continue;
            }
            let replacement = style.format(self.kind, &current);
            current = pattern
                .replace_all(&current, NoExpand(&replacement))
                .into_owned();
        }
        current
    }
}
