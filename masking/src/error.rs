//! Errors raised while building filters and parsing configuration.
//!
//! Masking itself is total; only construction can fail.

/// Error type for fallible constructors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A custom filter pattern failed to compile.
    #[error("invalid masking pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A mask kind name did not match any known kind.
    #[error("unknown mask kind `{0}`")]
    UnknownMaskKind(String),
}

/// Result alias using [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
