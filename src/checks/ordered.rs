//! Checks for ordered values.
//!
//! All bounds are inclusive. Range constructors accept their endpoints in
//! either order: `between(5, 1)` and `between(1, 5)` describe the same range.
//! Values that are unordered with respect to a bound (a float `NaN`) never
//! satisfy it.

use std::fmt::Debug;

use crate::check::Check;
use crate::checks::sorted;
use crate::error::Violation;

/// Passes values greater than or equal to `minimal`.
///
/// ```rust
/// use verdict::checks::ordered::min;
///
/// let check = min(5);
/// assert!(check.validate(&4).is_err());
/// assert!(check.validate(&5).is_ok());
/// assert!(check.validate(&6).is_ok());
/// ```
pub fn min<T>(minimal: T) -> Check<T>
where
    T: PartialOrd + Debug + Send + Sync + 'static,
{
    let shown = format!("{:?}", minimal);
    Check::ensure(
        move |value: &T| *value >= minimal,
        move |value: &T| {
            Violation::new(format!("{:?} must be at least {}", value, shown))
                .with_code("min")
                .with_expected(format!(">= {}", shown))
                .with_got(format!("{:?}", value))
        },
    )
}

/// Passes values less than or equal to `maximal`.
pub fn max<T>(maximal: T) -> Check<T>
where
    T: PartialOrd + Debug + Send + Sync + 'static,
{
    let shown = format!("{:?}", maximal);
    Check::ensure(
        move |value: &T| *value <= maximal,
        move |value: &T| {
            Violation::new(format!("{:?} must be at most {}", value, shown))
                .with_code("max")
                .with_expected(format!("<= {}", shown))
                .with_got(format!("{:?}", value))
        },
    )
}

/// Passes values inside the closed range spanned by `x` and `y`.
///
/// ```rust
/// use verdict::checks::ordered::between;
///
/// let check = between(10, 1);
/// assert!(check.is_valid(&1));
/// assert!(check.is_valid(&10));
/// assert_eq!(check.validate(&11).unwrap_err().message, "11 must be between 1 and 10");
/// ```
pub fn between<T>(x: T, y: T) -> Check<T>
where
    T: PartialOrd + Debug + Send + Sync + 'static,
{
    let (lo, hi) = sorted(x, y);
    let range = format!("{:?} and {:?}", lo, hi);
    let expected = format!("{:?}..={:?}", lo, hi);
    Check::ensure(
        move |value: &T| *value >= lo && *value <= hi,
        move |value: &T| {
            Violation::new(format!("{:?} must be between {}", value, range))
                .with_code("between")
                .with_expected(expected.clone())
                .with_got(format!("{:?}", value))
        },
    )
}

/// Passes values outside the closed range spanned by `x` and `y`.
pub fn not_between<T>(x: T, y: T) -> Check<T>
where
    T: PartialOrd + Debug + Send + Sync + 'static,
{
    let (lo, hi) = sorted(x, y);
    let range = format!("{:?} and {:?}", lo, hi);
    let expected = format!("outside {:?}..={:?}", lo, hi);
    Check::ensure(
        move |value: &T| *value < lo || *value > hi,
        move |value: &T| {
            Violation::new(format!("{:?} must not be between {}", value, range))
                .with_code("not_between")
                .with_expected(expected.clone())
                .with_got(format!("{:?}", value))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_boundaries() {
        let check = min(5);
        assert!(check.validate(&4).is_err());
        assert!(check.validate(&5).is_ok());
        assert!(check.validate(&6).is_ok());
    }

    #[test]
    fn test_min_violation() {
        let violation = min(5).validate(&4).unwrap_err();
        assert_eq!(violation.code, "min");
        assert_eq!(violation.message, "4 must be at least 5");
        assert_eq!(violation.expected.as_deref(), Some(">= 5"));
        assert_eq!(violation.got.as_deref(), Some("4"));
    }

    #[test]
    fn test_max_boundaries() {
        let check = max(5);
        assert!(check.validate(&4).is_ok());
        assert!(check.validate(&5).is_ok());
        assert_eq!(check.validate(&6).unwrap_err().message, "6 must be at most 5");
    }

    #[test]
    fn test_between_inclusive() {
        let check = between(1, 5);
        assert!(!check.is_valid(&0));
        assert!(check.is_valid(&1));
        assert!(check.is_valid(&3));
        assert!(check.is_valid(&5));
        assert!(!check.is_valid(&6));
    }

    #[test]
    fn test_between_swapped_bounds() {
        let forward = between(1, 5);
        let backward = between(5, 1);
        for value in -3..10 {
            assert_eq!(forward.is_valid(&value), backward.is_valid(&value));
        }
        assert_eq!(
            backward.validate(&0).unwrap_err().message,
            "0 must be between 1 and 5"
        );
    }

    #[test]
    fn test_not_between() {
        let check = not_between(5, 1);
        assert!(check.is_valid(&0));
        assert!(!check.is_valid(&1));
        assert!(!check.is_valid(&5));
        assert!(check.is_valid(&6));

        let violation = check.validate(&3).unwrap_err();
        assert_eq!(violation.code, "not_between");
        assert_eq!(violation.message, "3 must not be between 1 and 5");
    }

    #[test]
    fn test_strings_are_ordered() {
        let check = between("b", "d");
        assert!(check.is_valid(&"c"));
        assert!(!check.is_valid(&"e"));
    }

    #[test]
    fn test_nan_never_in_range() {
        assert!(!min(0.0).is_valid(&f64::NAN));
        assert!(!max(0.0).is_valid(&f64::NAN));
        assert!(!between(0.0, 1.0).is_valid(&f64::NAN));
    }
}
