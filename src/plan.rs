//! Reusable check sequences.
//!
//! A [`Plan`] owns an ordered list of checks for one value type. It is
//! typically assembled once at startup and then evaluated against many
//! values with any of the aggregation strategies.

use stillwater::Validation;

use crate::check::Check;
use crate::combinators;
use crate::error::{Violation, Violations};

/// An owned, ordered sequence of checks over `T`.
///
/// # Example
///
/// ```rust
/// use verdict::Plan;
/// use verdict::checks::{comparable, string};
///
/// let strict = true;
/// let username = Plan::new()
///     .check(comparable::not_empty())
///     .check(string::char_count_between(3, 16))
///     .when(strict, string::alphanumeric());
///
/// assert!(username.join("ada99").is_ok());
///
/// let violation = username.join("a!").unwrap_err();
/// assert_eq!(violation.causes().len(), 2);
/// ```
pub struct Plan<T: ?Sized> {
    checks: Vec<Check<T>>,
}

impl<T: ?Sized + 'static> Plan<T> {
    /// Creates a plan with no checks.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Appends a check.
    pub fn check(mut self, check: Check<T>) -> Self {
        self.checks.push(check);
        self
    }

    /// Appends several checks, keeping their order.
    pub fn checks(mut self, checks: impl IntoIterator<Item = Check<T>>) -> Self {
        self.checks.extend(checks);
        self
    }

    /// Appends `check` if `enabled`, otherwise a check that always passes.
    pub fn when(self, enabled: bool, check: Check<T>) -> Self {
        self.check(if enabled { check } else { Check::nothing() })
    }
}

impl<T: ?Sized> Plan<T> {
    /// Fail-fast evaluation; see [`combinators::abort`].
    pub fn abort(&self, value: &T) -> Result<(), Violation> {
        combinators::abort(value, &self.checks)
    }

    /// Collect-all evaluation; see [`combinators::collect`].
    pub fn collect(&self, value: &T) -> Vec<Violation> {
        combinators::collect(value, &self.checks)
    }

    /// Joined evaluation; see [`combinators::join`].
    pub fn join(&self, value: &T) -> Result<(), Violation> {
        combinators::join(value, &self.checks)
    }

    /// Joined evaluation with a custom merge; see [`combinators::join_with`].
    pub fn join_with<M>(&self, value: &T, merge: M) -> Result<(), Violation>
    where
        M: FnOnce(Vec<Violation>) -> Violation,
    {
        combinators::join_with(value, merge, &self.checks)
    }

    /// Accumulating evaluation; see [`combinators::validate`].
    pub fn validate<'a>(&self, value: &'a T) -> Validation<&'a T, Violations> {
        combinators::validate(value, &self.checks)
    }

    /// Parallel collect-all evaluation; see [`combinators::par_collect`].
    #[cfg(feature = "parallel")]
    pub fn par_collect(&self, value: &T) -> Vec<Violation>
    where
        T: Sync,
    {
        combinators::par_collect(value, &self.checks)
    }

    /// The checks in evaluation order.
    pub fn as_slice(&self) -> &[Check<T>] {
        &self.checks
    }

    /// Returns the number of checks in the plan.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if the plan has no checks.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<T: ?Sized + 'static> Default for Plan<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Plan<T> {
    fn clone(&self) -> Self {
        Self {
            checks: self.checks.clone(),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for Plan<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plan")
            .field("checks", &self.checks.len())
            .finish()
    }
}

impl<T: ?Sized + 'static> FromIterator<Check<T>> for Plan<T> {
    fn from_iter<I: IntoIterator<Item = Check<T>>>(iter: I) -> Self {
        Self::new().checks(iter)
    }
}

impl<T: ?Sized> From<Vec<Check<T>>> for Plan<T> {
    fn from(checks: Vec<Check<T>>) -> Self {
        Self { checks }
    }
}
