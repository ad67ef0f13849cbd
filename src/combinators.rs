//! Combinators that run a sequence of checks against one value.
//!
//! - [`abort`]: fail fast, returning the first violation
//! - [`collect`]: run everything, returning every violation in order
//! - [`join`] / [`join_with`]: run everything, merging violations into one
//! - [`validate`]: run everything, as a stillwater `Validation`
//!
//! With the `parallel` feature, [`par_collect`] and [`par_join`] evaluate the
//! sequence on the rayon thread pool.
//!
//! # Example
//!
//! ```rust
//! use verdict::{abort, collect, join, Check};
//! use verdict::checks::{comparable, string};
//!
//! let checks: Vec<Check<str>> = vec![
//!     comparable::not_empty(),
//!     string::min_len(8),
//!     string::alphanumeric(),
//! ];
//!
//! // fail fast: only the first failure
//! assert_eq!(abort("a-b", &checks).unwrap_err().code, "min_len");
//!
//! // collect all: one entry per failing check
//! assert_eq!(collect("a-b", &checks).len(), 2);
//!
//! // joined: one violation listing both
//! let joined = join("a-b", &checks).unwrap_err();
//! assert_eq!(joined.causes().len(), 2);
//! ```

use stillwater::Validation;

use crate::check::Check;
use crate::error::{Violation, Violations};

/// Runs `checks` in order and returns the first violation.
///
/// Checks after the first failure are not evaluated. Passes when every
/// check passes or `checks` is empty.
pub fn abort<T: ?Sized>(value: &T, checks: &[Check<T>]) -> Result<(), Violation> {
    for check in checks {
        if let Err(violation) = check.validate(value) {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                checks = checks.len(),
                code = %violation.code,
                "check failed, skipping the rest"
            );
            return Err(violation);
        }
    }
    Ok(())
}

/// Runs every check and returns the violations of the failing ones.
///
/// The result preserves the order of `checks`; passing checks contribute
/// nothing. An empty vec means no check failed.
pub fn collect<T: ?Sized>(value: &T, checks: &[Check<T>]) -> Vec<Violation> {
    let violations: Vec<Violation> = checks
        .iter()
        .filter_map(|check| check.validate(value).err())
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        checks = checks.len(),
        failures = violations.len(),
        "collected violations"
    );

    violations
}

/// Runs every check and merges the violations with `merge`.
///
/// Passes when no check fails. Otherwise `merge` receives the violations in
/// check order, and may receive just one.
///
/// ```rust
/// use verdict::{join_with, Violation};
/// use verdict::checks::ordered;
///
/// let first_only = |mut violations: Vec<Violation>| violations.remove(0);
///
/// let result = join_with(&50, first_only, &[ordered::max(10), ordered::max(20)]);
/// assert_eq!(result.unwrap_err().message, "50 must be at most 10");
/// ```
pub fn join_with<T, M>(value: &T, merge: M, checks: &[Check<T>]) -> Result<(), Violation>
where
    T: ?Sized,
    M: FnOnce(Vec<Violation>) -> Violation,
{
    let violations = collect(value, checks);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(merge(violations))
    }
}

/// Runs every check and merges the violations with [`Violation::join`].
pub fn join<T: ?Sized>(value: &T, checks: &[Check<T>]) -> Result<(), Violation> {
    join_with(value, Violation::join, checks)
}

/// Runs every check and reports the outcome as a `Validation`.
///
/// Success carries the value back so results can be combined with other
/// validations; failure carries every violation.
///
/// ```rust
/// use verdict::validate;
/// use verdict::checks::{comparable, ordered};
/// use stillwater::Validation;
///
/// let name = validate("Ada", &[comparable::not_empty()]);
/// let age = validate(&36, &[ordered::between(0, 150)]);
///
/// match name.and(age) {
///     Validation::Success((name, age)) => assert_eq!((name, *age), ("Ada", 36)),
///     Validation::Failure(violations) => panic!("{}", violations),
/// }
/// ```
pub fn validate<'a, T: ?Sized>(value: &'a T, checks: &[Check<T>]) -> Validation<&'a T, Violations> {
    match Violations::from_vec(collect(value, checks)) {
        Some(violations) => Validation::Failure(violations),
        None => Validation::Success(value),
    }
}

/// Returns a check that always passes.
///
/// Useful as the neutral element when building a sequence conditionally.
pub fn nothing<T: ?Sized + 'static>() -> Check<T> {
    Check::nothing()
}

/// Like [`collect`], evaluating the checks on the rayon thread pool.
///
/// Violations are returned in check order.
#[cfg(feature = "parallel")]
pub fn par_collect<T: ?Sized + Sync>(value: &T, checks: &[Check<T>]) -> Vec<Violation> {
    use rayon::prelude::*;

    let outcomes: Vec<Option<Violation>> = checks
        .par_iter()
        .map(|check| check.validate(value).err())
        .collect();

    outcomes.into_iter().flatten().collect()
}

/// Like [`join`], evaluating the checks on the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn par_join<T: ?Sized + Sync>(value: &T, checks: &[Check<T>]) -> Result<(), Violation> {
    let violations = par_collect(value, checks);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Violation::join(violations))
    }
}
