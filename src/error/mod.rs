//! Error types.
//!
//! [`Violation`] is the diagnostic a failing check produces; [`Violations`]
//! is a non-empty collection of them. [`BuildError`] covers the few
//! constructors that can reject their own configuration.

mod build_error;
mod violation;

pub use build_error::BuildError;
pub use violation::{Violation, Violations};
