//! Check constructors, grouped by what they need from the checked value.
//!
//! - [`comparable`]: equality, emptiness and membership
//! - [`ordered`]: lower/upper bounds and closed ranges
//! - [`string`]: length, character classes and substrings of `str`
//! - [`slice`]: length, membership and per-element checks of `[E]`
//! - [`format`]: email address and UUID syntax
//!
//! Every constructor is pure: it captures its parameters and returns a
//! [`Check`] that can be evaluated any number of times.
//!
//! # Example
//!
//! ```rust
//! use verdict::join;
//! use verdict::checks::{ordered, slice, string};
//!
//! assert!(join(&42, &[ordered::between(100, 1)]).is_ok());
//! assert!(join("ab12", &[string::alphanumeric(), string::len(4)]).is_ok());
//! assert!(join(&[1, 2, 3][..], &[slice::each([ordered::min(0)])]).is_ok());
//! ```

pub mod comparable;
pub mod format;
pub mod ordered;
pub mod slice;
pub mod string;

use crate::check::Check;
use crate::error::Violation;

/// A constraint on a count (bytes, characters, elements, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Count {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
    Within(usize, usize),
    Outside(usize, usize),
}

impl Count {
    /// A closed range with endpoints in either order.
    pub(crate) fn within(x: usize, y: usize) -> Self {
        let (lo, hi) = sorted(x, y);
        Count::Within(lo, hi)
    }

    /// The complement of a closed range with endpoints in either order.
    pub(crate) fn outside(x: usize, y: usize) -> Self {
        let (lo, hi) = sorted(x, y);
        Count::Outside(lo, hi)
    }

    fn admits(self, n: usize) -> bool {
        match self {
            Count::Exactly(want) => n == want,
            Count::AtLeast(min) => n >= min,
            Count::AtMost(max) => n <= max,
            Count::Within(lo, hi) => (lo..=hi).contains(&n),
            Count::Outside(lo, hi) => !(lo..=hi).contains(&n),
        }
    }

    fn code(self, name: &str) -> String {
        match self {
            Count::Exactly(_) => name.to_string(),
            Count::AtLeast(_) => format!("min_{}", name),
            Count::AtMost(_) => format!("max_{}", name),
            Count::Within(..) => format!("{}_between", name),
            Count::Outside(..) => format!("{}_not_between", name),
        }
    }

    fn describe(self, unit: &str) -> String {
        match self {
            Count::Exactly(n) => format!("exactly {} {}", n, unit),
            Count::AtLeast(n) => format!("at least {} {}", n, unit),
            Count::AtMost(n) => format!("at most {} {}", n, unit),
            Count::Within(lo, hi) => format!("from {} to {} {}", lo, hi, unit),
            Count::Outside(lo, hi) => format!("fewer than {} or more than {} {}", lo, hi, unit),
        }
    }
}

/// Builds a check that measures a value with `measure` and holds the
/// result against `bound`.
///
/// `name` is the code stem (`len`, `char_count`, ...); `unit` names what is
/// being counted in messages.
pub(crate) fn counted<T>(
    bound: Count,
    measure: fn(&T) -> usize,
    name: &'static str,
    unit: &'static str,
) -> Check<T>
where
    T: ?Sized + 'static,
{
    let code = bound.code(name);
    let expected = bound.describe(unit);
    let message = format!("must contain {}", expected);

    Check::new(move |value| {
        let n = measure(value);
        if bound.admits(n) {
            Ok(())
        } else {
            Err(Violation::new(message.clone())
                .with_code(code.clone())
                .with_expected(expected.clone())
                .with_got(format!("{} {}", n, unit)))
        }
    })
}

/// Orders two endpoints so the smaller comes first.
pub(crate) fn sorted<T: PartialOrd>(x: T, y: T) -> (T, T) {
    if y < x {
        (y, x)
    } else {
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_admits() {
        assert!(Count::Exactly(3).admits(3));
        assert!(!Count::Exactly(3).admits(2));
        assert!(Count::AtLeast(3).admits(3));
        assert!(!Count::AtLeast(3).admits(2));
        assert!(Count::AtMost(3).admits(3));
        assert!(!Count::AtMost(3).admits(4));
        assert!(Count::within(5, 2).admits(2));
        assert!(Count::within(5, 2).admits(5));
        assert!(!Count::within(5, 2).admits(6));
        assert!(Count::outside(5, 2).admits(1));
        assert!(!Count::outside(5, 2).admits(2));
        assert!(!Count::outside(5, 2).admits(5));
        assert!(Count::outside(5, 2).admits(6));
    }

    #[test]
    fn test_count_codes() {
        assert_eq!(Count::Exactly(1).code("len"), "len");
        assert_eq!(Count::AtLeast(1).code("len"), "min_len");
        assert_eq!(Count::AtMost(1).code("char_count"), "max_char_count");
        assert_eq!(Count::within(1, 2).code("len"), "len_between");
        assert_eq!(Count::outside(1, 2).code("len"), "len_not_between");
    }

    #[test]
    fn test_counted_violation_context() {
        let check = counted(Count::AtLeast(3), str::len, "len", "bytes");
        let violation = check.validate("ab").unwrap_err();

        assert_eq!(violation.message, "must contain at least 3 bytes");
        assert_eq!(violation.code, "min_len");
        assert_eq!(violation.expected.as_deref(), Some("at least 3 bytes"));
        assert_eq!(violation.got.as_deref(), Some("2 bytes"));
    }

    #[test]
    fn test_sorted() {
        assert_eq!(sorted(5, 1), (1, 5));
        assert_eq!(sorted(1, 5), (1, 5));
        assert_eq!(sorted(2, 2), (2, 2));
    }
}
