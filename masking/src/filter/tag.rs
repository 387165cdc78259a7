use super::{Filter, Site};
use crate::{format::MaskStyle, kind::MaskKind};

/// Masks fields whose tag value names one of the accepted kinds.
///
/// The kind used for formatting is the one the field's tag names, so a single
/// filter accepting `email` and `mobile` formats each field appropriately.
#[derive(Clone, Debug)]
pub struct TagFilter {
    accepted: Vec<MaskKind>,
}

impl TagFilter {
    /// Accepts the given kinds; an empty list accepts [`MaskKind::Secret`].
    pub fn new(kinds: impl IntoIterator<Item = MaskKind>) -> Self {
        let mut accepted: Vec<MaskKind> = kinds.into_iter().collect();
        if accepted.is_empty() {
            accepted.push(MaskKind::Secret);
        }
        Self { accepted }
    }

    pub fn accepted(&self) -> &[MaskKind] {
        &self.accepted
    }
}

impl Default for TagFilter {
    fn default() -> Self {
        Self::new([])
    }
}

impl Filter for TagFilter {
    fn should_mask(&self, site: &Site<'_>) -> bool {
        !site.tag().is_empty()
            && self
                .accepted
                .iter()
                .any(|kind| kind.as_str() == site.tag())
    }

    fn mask_string(&self, site: &Site<'_>, value: &str, style: &MaskStyle) -> String {
        style.format(MaskKind::from_tag(site.tag()), value)
    }
}
