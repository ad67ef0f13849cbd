//! Interoperability with other formats.
//!
//! Violations render to JSON so reports can be handed to tools that do not
//! link this crate.

pub mod json;

pub use json::ToJson;
