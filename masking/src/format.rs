//! Masking formatters for string values.
//!
//! Every formatter works on Unicode scalar values, never on bytes, so
//! multi-byte characters are kept whole. Formatters are pure: they never look
//! at filters or traverse structures, they only turn one string into another.
//!
//! [`MaskStyle`] bundles the two knobs a formatter needs at call time: the
//! mask character and the placeholder label used for kinds without a
//! positional rule.

use std::{borrow::Cow, iter};

use url::Url;

use crate::kind::MaskKind;

/// Default character used to build masked spans.
pub const MASK_CHAR: char = '*';

/// Hyphen preset for the mask character.
pub const HYPHEN: char = '-';

/// Underscore preset for the mask character.
pub const UNDERSCORE: char = '_';

/// Cross preset for the mask character.
pub const CROSS: char = 'x';

/// Default label substituted when a filter has no [`MaskKind`].
pub const FILTERED_PLACEHOLDER: &str = "[filtered]";

/// Written in place of a URL password.
const URL_PASSWORD_MASK: &str = "xxxxx";

/// Base used to resolve scheme-relative URLs. A non-special scheme keeps the
/// host and port exactly as written.
const SCHEME_RELATIVE_BASE: &str = "masking-base://placeholder/";

const SCHEME_RELATIVE_SCHEME: &str = "masking-base:";

/// Builds a run of `len` mask characters.
fn mask_run(mask_char: char, len: usize) -> String {
    iter::repeat_n(mask_char, len).collect()
}

fn clamp(index: isize, len: usize) -> usize {
    usize::try_from(index).map_or(0, |index| index.min(len))
}

/// Replaces the scalar range `[start, end)` of `value` with `replacement`.
///
/// Both indices are clamped to `[0, len]` and swapped when inverted, so any
/// pair of integers is accepted. An empty `value` always yields an empty
/// string.
pub fn overlay(value: &str, replacement: &str, start: isize, end: isize) -> String {
    let len = value.chars().count();
    if len == 0 {
        return String::new();
    }

    let mut start = clamp(start, len);
    let mut end = clamp(end, len);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    let byte_offset = |chars: usize| {
        value
            .char_indices()
            .nth(chars)
            .map_or(value.len(), |(offset, _)| offset)
    };
    let (head, tail) = (byte_offset(start), byte_offset(end));

    let mut overlaid = String::with_capacity(value.len() + replacement.len());
    overlaid.push_str(&value[..head]);
    overlaid.push_str(replacement);
    overlaid.push_str(&value[tail..]);
    overlaid
}

/// Masks the second and third characters of every space-separated word.
///
/// `"ABCD"` becomes `"A**D"`; one-character words become a two-character run.
pub fn name(value: &str, mask_char: char) -> String {
    let len = value.chars().count();
    if len == 0 {
        return String::new();
    }

    if value.contains(' ') {
        return value
            .split(' ')
            .map(|word| name(word, mask_char))
            .collect::<Vec<_>>()
            .join(" ");
    }

    let run = mask_run(mask_char, 2);
    match len {
        2 | 3 => overlay(value, &run, 1, 2),
        _ if len > 3 => overlay(value, &run, 1, 3),
        _ => run,
    }
}

/// Masks characters 7 through 10 of an identity number.
pub fn id(value: &str, mask_char: char) -> String {
    if value.is_empty() {
        return String::new();
    }
    overlay(value, &mask_run(mask_char, 4), 6, 10)
}

/// Keeps the first six characters and masks the rest with a six-character run.
pub fn address(value: &str, mask_char: char) -> String {
    let len = value.chars().count();
    match len {
        0 => String::new(),
        1..=6 => mask_run(mask_char, 6),
        _ => overlay(value, &mask_run(mask_char, 6), 6, isize::MAX),
    }
}

/// Masks six characters starting at the seventh, for 15- and 16-digit cards.
pub fn credit_card(value: &str, mask_char: char) -> String {
    if value.is_empty() {
        return String::new();
    }
    overlay(value, &mask_run(mask_char, 6), 6, 12)
}

/// Keeps the first three characters of the local part and the whole domain.
///
/// Without an `@` the whole value is treated as the local part. Anything after
/// a second `@` is dropped.
pub fn email(value: &str, mask_char: char) -> String {
    if value.is_empty() {
        return String::new();
    }

    let run = mask_run(mask_char, 4);
    let mut parts = value.split('@');
    let local = parts.next().unwrap_or_default();
    match parts.next() {
        None => overlay(value, &run, 3, 7),
        Some(domain) => format!("{}@{domain}", overlay(local, &run, 3, 7)),
    }
}

/// Masks three characters starting at the fifth.
pub fn mobile(value: &str, mask_char: char) -> String {
    if value.is_empty() {
        return String::new();
    }
    overlay(value, &mask_run(mask_char, 3), 4, 7)
}

/// Normalises a landline number to `(AA)NNNN-****` or `NNNN-****`.
///
/// Spaces, parentheses and hyphens are stripped first. When the remaining
/// length is neither 8 nor 10 the stripped string is returned as is.
pub fn telephone(value: &str, mask_char: char) -> String {
    if value.is_empty() {
        return String::new();
    }

    let digits: Vec<char> = value
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '(' | ')' | '-'))
        .collect();
    let rest = match digits.len() {
        8 => &digits[..],
        10 => &digits[2..],
        _ => return digits.into_iter().collect(),
    };

    let mut formatted = String::with_capacity(16);
    if digits.len() == 10 {
        formatted.push('(');
        formatted.extend(&digits[..2]);
        formatted.push(')');
    }
    formatted.extend(&rest[..4]);
    formatted.push('-');
    formatted.push_str(&mask_run(mask_char, 4));
    formatted
}

/// Replaces any non-empty value with a fixed twelve-character run.
pub fn password(value: &str, mask_char: char) -> String {
    if value.is_empty() {
        return String::new();
    }
    mask_run(mask_char, 12)
}

/// Hides the password component of a URL.
///
/// Scheme-relative references (`//user:pw@host/path`) are accepted. Values
/// that do not parse, or whose userinfo has no `:`, are returned unchanged.
/// An empty password counts as present.
pub fn url(value: &str) -> String {
    if !userinfo_has_password(value) {
        return value.to_owned();
    }

    let scheme_relative = value.starts_with("//");
    let parsed = if scheme_relative {
        Url::parse(SCHEME_RELATIVE_BASE)
            .and_then(|base| Url::options().base_url(Some(&base)).parse(value))
    } else {
        Url::parse(value)
    };
    let Ok(mut parsed) = parsed else {
        return value.to_owned();
    };
    if parsed.set_password(Some(URL_PASSWORD_MASK)).is_err() {
        return value.to_owned();
    }

    let masked = String::from(parsed);
    if scheme_relative && let Some(reference) = masked.strip_prefix(SCHEME_RELATIVE_SCHEME) {
        return reference.to_owned();
    }
    masked
}

/// Returns `true` if the authority of `value` carries `user:password@`.
fn userinfo_has_password(value: &str) -> bool {
    let Some((_, rest)) = value.split_once("//") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    authority
        .rsplit_once('@')
        .is_some_and(|(userinfo, _)| userinfo.contains(':'))
}

/// Applies the formatter for `kind` to `value`.
///
/// Kinds without a positional rule ([`MaskKind::Secret`] and
/// [`MaskKind::Unspecified`]) yield `placeholder`.
pub fn format(kind: MaskKind, value: &str, placeholder: &str, mask_char: char) -> String {
    match kind {
        MaskKind::Password => password(value, mask_char),
        MaskKind::Name => name(value, mask_char),
        MaskKind::Address => address(value, mask_char),
        MaskKind::Email => email(value, mask_char),
        MaskKind::Mobile => mobile(value, mask_char),
        MaskKind::Telephone => telephone(value, mask_char),
        MaskKind::NationalId => id(value, mask_char),
        MaskKind::CreditCard => credit_card(value, mask_char),
        MaskKind::Url => url(value),
        MaskKind::Secret | MaskKind::Unspecified => placeholder.to_owned(),
    }
}

/// Formats `value` with the default mask character.
///
/// Kinds without a positional rule return the input unchanged.
pub fn mask(kind: MaskKind, value: &str) -> String {
    format(kind, value, value, MASK_CHAR)
}

/// Mask character and placeholder label applied by the formatters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskStyle {
    mask_char: char,
    placeholder: Cow<'static, str>,
}

impl MaskStyle {
    /// Creates a style from a mask character and placeholder label.
    pub fn new(mask_char: char, placeholder: impl Into<Cow<'static, str>>) -> Self {
        Self {
            mask_char,
            placeholder: placeholder.into(),
        }
    }

    /// Uses a specific mask character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Uses a specific placeholder label.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<Cow<'static, str>>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub(crate) fn set_mask_char(&mut self, mask_char: char) {
        self.mask_char = mask_char;
    }

    pub(crate) fn set_placeholder(&mut self, placeholder: impl Into<Cow<'static, str>>) {
        self.placeholder = placeholder.into();
    }

    /// Formats `value` as `kind` with this style.
    pub fn format(&self, kind: MaskKind, value: &str) -> String {
        format(kind, value, &self.placeholder, self.mask_char)
    }
}

impl Default for MaskStyle {
    fn default() -> Self {
        Self::new(MASK_CHAR, FILTERED_PLACEHOLDER)
    }
}
