//! The trait every traversable value implements.

use super::walker::Walker;

/// How the walker treats a value once a filter has matched it.
///
/// - `Text` values are rewritten through [`Filter::mask_string`].
/// - `Reference` values (optional and shared pointers, cells, locks) are
///   transparent: the filter check happens on the value they point to.
/// - Everything else is replaced by [`Maskable::zeroed`].
///
/// [`Filter::mask_string`]: crate::Filter::mask_string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Text,
    Reference,
    Record,
    Map,
    Sequence,
    Dynamic,
    Opaque,
}

/// A type the masking walker can copy while masking.
///
/// Implemented for strings, scalars, std containers and, through
/// `#[derive(Maskable)]`, for user structs and enums. Implementations never
/// mutate `self`; [`walk`](Maskable::walk) always builds a fresh value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Maskable`",
    label = "this type cannot be walked for masking",
    note = "use `#[derive(Maskable)]` on the type definition",
    note = "or mark the field with `#[mask(keep)]` to copy it as is"
)]
pub trait Maskable: Sized + 'static {
    /// Treatment applied when a filter matches a value of this type.
    const SHAPE: Shape;

    /// The value a matched non-text site is replaced with.
    fn zeroed() -> Self;

    /// Rebuilds a textual value from a rewritten string.
    ///
    /// Only `Text` types return `Some`.
    fn map_text<F: FnOnce(&str) -> String>(&self, f: F) -> Option<Self> {
        let _ = f;
        None
    }

    /// Copies `self`, visiting every child through `walker`.
    ///
    /// `field` and `tag` describe where `self` sits in its parent; containers
    /// that are transparent to filters pass them on to their contents.
    #[must_use]
    fn walk(&self, walker: &Walker<'_>, field: &str, tag: &str) -> Self;
}
