//! Errors raised while constructing checks.

/// A check could not be built from the configuration it was given.
///
/// Validation outcomes are never reported through this type; it only
/// covers constructors whose parameters can themselves be invalid.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The regular expression handed to
    /// [`pattern`](crate::checks::string::pattern) does not compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
