use std::any::{self, TypeId};

use super::{Filter, Site};
use crate::{format::MaskStyle, kind::MaskKind};

/// Masks every value whose runtime type is exactly `T`.
///
/// Newtypes are distinct types: a filter for `Password(String)` does not
/// match plain `String` fields.
#[derive(Clone, Copy, Debug)]
pub struct TypeFilter {
    target: TypeId,
    type_name: &'static str,
    kind: MaskKind,
}

impl TypeFilter {
    pub fn of<T: 'static>() -> Self {
        Self::with_kind::<T>(MaskKind::Unspecified)
    }

    pub fn with_kind<T: 'static>(kind: MaskKind) -> Self {
        Self {
            target: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            kind,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Filter for TypeFilter {
    fn should_mask(&self, site: &Site<'_>) -> bool {
        site.type_id() == self.target
    }

    fn mask_string(&self, _site: &Site<'_>, value: &str, style: &MaskStyle) -> String {
        style.format(self.kind, value)
    }
}
