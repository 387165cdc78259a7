//! `Maskable` implementations for standard library types.
//!
//! ## Map Keys Are Not Masked
//!
//! For map containers (`HashMap`, `BTreeMap`), only **values** are walked. The
//! key's display form becomes the field name of its value, so field filters
//! can target map entries, but the key itself is copied unchanged.
//!
//! ## Set Masking Can Collapse Elements
//!
//! For set containers (`HashSet`, `BTreeSet`), each element is walked and the
//! results are collected back into a set. If masking makes elements equal
//! (e.g., several values replaced by `"[filtered]"`), the resulting set shrinks.

mod cells;
mod ip_address;
#[cfg(feature = "json")]
mod json;
mod maps;
mod passthrough;
mod sequences;
mod sets;
mod text;
mod wrappers;


// =============================================================================
// Opaque implementation helper
// =============================================================================

macro_rules! impl_maskable_opaque {
    ($ty:ty => $zero:expr) => {
        impl crate::traversal::Maskable for $ty {
            const SHAPE: crate::traversal::Shape = crate::traversal::Shape::Opaque;

            fn zeroed() -> Self {
                $zero
            }

            fn walk(&self, _walker: &crate::traversal::Walker<'_>, _field: &str, _tag: &str) -> Self {
                ::std::clone::Clone::clone(self)
            }
        }
    };
    ($ty:ty) => {
        impl_maskable_opaque!($ty => <$ty as ::std::default::Default>::default());
    };
}

pub(super) use impl_maskable_opaque;
