//! Filter-driven masking for structured data.
//!
//! This crate separates:
//! - **Filters**: which fields or substrings are sensitive (by field name, name
//!   prefix, runtime type, field tag, literal value, or regex).
//! - **Formatters**: how a sensitive string is masked (`MaskKind::Name`,
//!   `MaskKind::Email`, ...), with a configurable mask character.
//!
//! A [`MaskingSession`] owns an ordered [`FilterChain`] and walks any value
//! implementing [`Maskable`], returning a masked deep copy. The original value
//! is never mutated.
//!
//! What this crate does:
//! - defines the masking formatters and the filter variants
//! - walks records, maps, sequences and optional references
//! - provides logging adapters behind feature flags (`tracing`, `slog`)
//!
//! What it does not do:
//! - perform I/O or configure logging
//! - detect sensitive data beyond the configured filters
//!
//! The `Maskable` derive macro lives in `masking-derive` and is re-exported
//! from this crate.
//!
//! # Example
//!
//! ```rust
//! use masking::{FieldFilter, MaskKind, Maskable, MaskingSession};
//!
//! #[derive(Maskable)]
//! struct Customer {
//!     id: u64,
//!     email: String,
//! }
//!
//! let session = MaskingSession::new([FieldFilter::with_kind("email", MaskKind::Email)]);
//! let customer = Customer { id: 7, email: "ggw.chang@gmail.com".into() };
//! let masked = session.mask_details(&customer);
//!
//! assert_eq!(masked.email, "ggw****@gmail.com");
//! assert_eq!(customer.email, "ggw.chang@gmail.com");
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use masking_derive::Maskable;

#[allow(unused_extern_crates)]
extern crate self as masking;

#[cfg(doctest)]
#[doc = include_str!("../../README.md")]
struct ReadmeDoctests;

mod config;
mod error;
pub mod filter;
pub mod format;
mod kind;
mod output;
mod session;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;
mod traversal;

pub use config::{DEFAULT_TAG_KEY, MaskingConfig};
pub use error::{Error, Result};
pub use filter::{
    AllFieldsFilter, FieldFilter, FieldPrefixFilter, Filter, FilterChain, RegexFilter, Site,
    TagFilter, TypeFilter, ValueFilter,
};
pub use format::{FILTERED_PLACEHOLDER, MASK_CHAR, MaskStyle};
pub use kind::MaskKind;
pub use output::MaskedOutput;
#[cfg(feature = "json")]
pub use output::MaskedJson;
pub use session::MaskingSession;
pub use traversal::{Maskable, Shape, Walker};
