//! Deep copying of values with masking applied.
//!
//! [`Maskable`] describes how one type is copied; [`Walker`] holds the filter
//! chain and style for a single `mask_details` call and decides, for every
//! child value, whether it is masked as a whole or copied recursively.
//!
//! The walker never mutates its input and does not detect cycles. Values that
//! reference themselves through `Rc` and interior mutability will recurse
//! until the stack is exhausted.

mod containers;
mod traits;
mod walker;

pub use traits::{Maskable, Shape};
pub use walker::Walker;
