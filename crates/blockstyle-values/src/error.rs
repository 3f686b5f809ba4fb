//! Errors raised at the textual boundary of the value layer.
//!
//! The transforms themselves are total; only turning configuration tokens
//! into typed values can fail.

use thiserror::Error;

/// A configuration token that names no known edge, axis, or corner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token is neither a side (`top`, `right`, `bottom`, `left`) nor an
    /// axis (`horizontal`, `vertical`).
    #[error("unknown side subset token '{0}'")]
    UnknownSideToken(String),
    /// Shorthand contained zero or more than four values.
    #[error("shorthand '{0}' must have between one and four values")]
    ShorthandArity(String),
}
