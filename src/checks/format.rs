//! Syntax checks that defer to dedicated parsers.
//!
//! The grammar lives in the parser crates; on failure the parser's own
//! diagnostic becomes the violation message unchanged.

use std::str::FromStr;

use email_address::EmailAddress;
use uuid::Uuid;

use crate::check::Check;
use crate::error::Violation;

/// Passes syntactically valid email addresses.
///
/// ```rust
/// use verdict::checks::format::email;
///
/// assert!(email().is_valid("user@example.com"));
/// assert!(!email().is_valid("not-an-address"));
/// ```
pub fn email() -> Check<str> {
    Check::new(|s: &str| {
        EmailAddress::from_str(s).map(|_| ()).map_err(|err| {
            Violation::new(err.to_string())
                .with_code("email")
                .with_expected("email address")
                .with_got(s)
        })
    })
}

/// Passes strings that parse as a UUID.
///
/// Hyphenated, simple, braced and URN forms are all accepted.
pub fn uuid() -> Check<str> {
    Check::new(|s: &str| {
        Uuid::parse_str(s).map(|_| ()).map_err(|err| {
            Violation::new(err.to_string())
                .with_code("uuid")
                .with_expected("UUID")
                .with_got(s)
        })
    })
}
