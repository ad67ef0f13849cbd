//! # Verdict
//!
//! Composable value checks with explicit aggregation.
//!
//! ## Overview
//!
//! A [`Check<T>`] is a reusable, stateless function that either accepts a
//! `&T` or explains why it does not with a [`Violation`]. Checks are built
//! from the constructors in [`checks`] and evaluated together by the
//! combinators, which decide how failures are aggregated:
//!
//! - [`abort`] stops at the first failure
//! - [`collect`] returns every failure, in check order
//! - [`join`] and [`join_with`] merge every failure into one violation
//! - [`validate`] returns a stillwater `Validation` for applicative use
//!
//! Violations can be replaced ([`Check::with_error`]) or wrapped
//! ([`Check::wrap_error`]) without touching the check that produced them.
//!
//! ## Core Types
//!
//! - [`Check`]: a single check over `T` (which may be `str` or `[E]`)
//! - [`Violation`]: one diagnostic, with an optional cause chain or joined causes
//! - [`Violations`]: a non-empty collection of violations
//! - [`Path`]: where inside the checked value a violation applies
//! - [`Plan`]: an owned, ordered sequence of checks
//!
//! ## Example
//!
//! ```rust
//! use verdict::{abort, join, Violation};
//! use verdict::checks::{comparable, format, string};
//!
//! let email = [
//!     comparable::not_empty(),
//!     string::max_len(254),
//!     format::email(),
//! ];
//!
//! assert!(join("ada@example.com", &email).is_ok());
//!
//! // fail fast on an empty value
//! let first = abort("", &email).unwrap_err();
//! assert_eq!(first.code, "not_empty");
//!
//! // replace the diagnostic entirely
//! let friendly = format::email().with_error(Violation::new("please enter an email address"));
//! assert_eq!(friendly.validate("nope").unwrap_err().message, "please enter an email address");
//! ```
//!
//! ## Features
//!
//! - `parallel`: [`par_collect`] and [`par_join`] evaluate checks on the rayon
//!   thread pool
//! - `tracing`: combinators emit `trace`-level events describing failures

pub mod check;
pub mod checks;
pub mod combinators;
pub mod error;
pub mod interop;
pub mod path;
pub mod plan;

pub use check::Check;
#[cfg(feature = "parallel")]
pub use combinators::{par_collect, par_join};
pub use combinators::{abort, collect, join, join_with, nothing, validate};
pub use error::{BuildError, Violation, Violations};
pub use interop::ToJson;
pub use path::{Path, PathSegment};
pub use plan::Plan;

/// Type alias for collect-all results: the checked value or every violation.
pub type ValidationResult<'a, T> = stillwater::Validation<&'a T, Violations>;
