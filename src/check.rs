//! The check type and its adapters.
//!
//! A [`Check<T>`] is a pure function from `&T` to `Result<(), Violation>`.
//! Every constructor in [`checks`](crate::checks) returns one, and every
//! combinator in [`combinators`](crate::combinators) consumes a slice of
//! them.

use std::fmt;
use std::sync::Arc;

use crate::error::Violation;
use crate::path::PathSegment;

/// Type alias for the function stored in a check.
pub(crate) type CheckFn<T> = Arc<dyn Fn(&T) -> Result<(), Violation> + Send + Sync>;

/// A reusable, stateless check over values of type `T`.
///
/// Checks are built once and evaluated many times. They hold no mutable
/// state, so evaluating the same check against the same value always gives
/// the same outcome, and a check can be cloned cheaply and shared between
/// threads.
///
/// `T` may be unsized: string checks are `Check<str>` and sequence checks
/// are `Check<[E]>`.
///
/// # Example
///
/// ```rust
/// use verdict::{Check, Violation};
///
/// let even = Check::new(|n: &i32| {
///     if n % 2 == 0 {
///         Ok(())
///     } else {
///         Err(Violation::new(format!("{} must be even", n)).with_code("even"))
///     }
/// });
///
/// assert!(even.validate(&4).is_ok());
/// assert_eq!(even.validate(&3).unwrap_err().message, "3 must be even");
/// ```
pub struct Check<T: ?Sized> {
    run: CheckFn<T>,
}

impl<T: ?Sized + 'static> Check<T> {
    /// Creates a check from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> Result<(), Violation> + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Creates a check from a boolean predicate and a violation builder.
    ///
    /// `on_failure` is only called when `passes` returns false.
    ///
    /// ```rust
    /// use verdict::{Check, Violation};
    ///
    /// let short = Check::ensure(
    ///     |s: &str| s.len() <= 3,
    ///     |s: &str| Violation::new(format!("{:?} is too long", s)),
    /// );
    /// assert!(short.is_valid("abc"));
    /// assert!(!short.is_valid("abcd"));
    /// ```
    pub fn ensure<P, V>(passes: P, on_failure: V) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        V: Fn(&T) -> Violation + Send + Sync + 'static,
    {
        Self::new(move |value| {
            if passes(value) {
                Ok(())
            } else {
                Err(on_failure(value))
            }
        })
    }

    /// Returns a check that always passes.
    pub fn nothing() -> Self {
        Self::new(|_| Ok(()))
    }

    /// Returns a check with the same verdict whose failures are replaced by
    /// `violation`.
    ///
    /// The original violation is discarded; passing values still pass.
    ///
    /// ```rust
    /// use verdict::{checks::ordered, Violation};
    ///
    /// let adult = ordered::min(18).with_error(Violation::new("must be an adult"));
    ///
    /// assert!(adult.validate(&30).is_ok());
    /// assert_eq!(adult.validate(&12).unwrap_err().message, "must be an adult");
    /// ```
    pub fn with_error(self, violation: Violation) -> Self {
        let inner = self.run;
        Self::new(move |value| inner(value).map_err(|_| violation.clone()))
    }

    /// Returns a check with the same verdict whose failures are wrapped by
    /// `outer`, so the cause chain reads `outer -> original`.
    ///
    /// ```rust
    /// use verdict::{checks::string, Violation};
    ///
    /// let username = string::min_len(3).wrap_error(Violation::new("invalid username"));
    ///
    /// let violation = username.validate("ab").unwrap_err();
    /// assert_eq!(violation.message, "invalid username");
    /// assert_eq!(violation.cause().map(|c| c.code.as_str()), Some("min_len"));
    /// ```
    pub fn wrap_error(self, outer: Violation) -> Self {
        let inner = self.run;
        Self::new(move |value| inner(value).map_err(|original| outer.clone().wrap(original)))
    }

    /// Returns a check whose failures carry `message` instead of the
    /// original message. Code, context and causes are kept.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        let inner = self.run;
        Self::new(move |value| {
            inner(value).map_err(|mut violation| {
                violation.message = message.clone();
                violation
            })
        })
    }

    /// Returns a check whose failures carry `code`.
    pub fn with_code(self, code: impl Into<String>) -> Self {
        let code = code.into();
        let inner = self.run;
        Self::new(move |value| {
            inner(value).map_err(|mut violation| {
                violation.code = code.clone();
                violation
            })
        })
    }

    /// Returns a check whose failures are located under the field `name`.
    ///
    /// ```rust
    /// use verdict::checks::string;
    ///
    /// let email = string::contains("@").at_field("email");
    /// let violation = email.validate("nobody").unwrap_err();
    /// assert_eq!(violation.path.to_string(), "email");
    /// ```
    pub fn at_field(self, name: impl Into<String>) -> Self {
        self.within(PathSegment::field(name))
    }

    /// Returns a check whose failures are located under position `index`.
    pub fn at_index(self, index: usize) -> Self {
        self.within(PathSegment::Index(index))
    }

    /// Adapts the check to any type that can be viewed as `T`.
    ///
    /// A `Check<str>` lifted this way checks `String`s or `&str`s, which is
    /// what [`each`](crate::checks::slice::each) needs for sequences of
    /// strings.
    ///
    /// ```rust
    /// use verdict::checks::{slice, string};
    ///
    /// let tags = slice::each([string::max_len(8).lift::<String>()]);
    /// assert!(tags.is_valid(&[String::from("rust")]));
    /// assert!(!tags.is_valid(&[String::from("far-too-long")]));
    /// ```
    pub fn lift<U>(self) -> Check<U>
    where
        U: AsRef<T> + ?Sized + 'static,
    {
        let inner = self.run;
        Check::new(move |value: &U| inner(AsRef::<T>::as_ref(value)))
    }

    fn within(self, segment: PathSegment) -> Self {
        let inner = self.run;
        Self::new(move |value| inner(value).map_err(|v| v.within(segment.clone())))
    }
}

impl<T: ?Sized> Check<T> {
    /// Runs the check against `value`.
    #[inline]
    pub fn validate(&self, value: &T) -> Result<(), Violation> {
        (self.run)(value)
    }

    /// Returns true if `value` passes.
    pub fn is_valid(&self, value: &T) -> bool {
        self.validate(value).is_ok()
    }
}

impl<T: ?Sized> Clone for Check<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T: ?Sized + 'static> Default for Check<T> {
    fn default() -> Self {
        Self::nothing()
    }
}

impl<T: ?Sized> fmt::Debug for Check<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").finish_non_exhaustive()
    }
}
