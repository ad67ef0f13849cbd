//! Checks for homogeneous sequences.
//!
//! Checks are built over `[E]`, so they apply to arrays, `Vec`s and
//! slices alike.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::check::Check;
use crate::checks::{counted, Count};
use crate::combinators::collect;
use crate::error::Violation;
use crate::path::PathSegment;

const ELEMENTS: &str = "elements";

/// Passes sequences of exactly `n` elements.
pub fn len<E: 'static>(n: usize) -> Check<[E]> {
    counted(Count::Exactly(n), <[E]>::len, "len", ELEMENTS)
}

/// Passes sequences of at least `n` elements.
pub fn min_len<E: 'static>(n: usize) -> Check<[E]> {
    counted(Count::AtLeast(n), <[E]>::len, "len", ELEMENTS)
}

/// Passes sequences of at most `n` elements.
pub fn max_len<E: 'static>(n: usize) -> Check<[E]> {
    counted(Count::AtMost(n), <[E]>::len, "len", ELEMENTS)
}

/// Passes sequences whose length lies in the closed range spanned by `x`
/// and `y`.
pub fn len_between<E: 'static>(x: usize, y: usize) -> Check<[E]> {
    counted(Count::within(x, y), <[E]>::len, "len", ELEMENTS)
}

/// Passes sequences whose length lies outside the closed range spanned by
/// `x` and `y`.
pub fn len_not_between<E: 'static>(x: usize, y: usize) -> Check<[E]> {
    counted(Count::outside(x, y), <[E]>::len, "len", ELEMENTS)
}

/// Passes sequences containing `element`.
pub fn contains<E>(element: E) -> Check<[E]>
where
    E: PartialEq + Debug + Send + Sync + 'static,
{
    let shown = format!("{:?}", element);
    Check::ensure(
        move |items: &[E]| items.contains(&element),
        move |items: &[E]| {
            Violation::new(format!("{:?} must contain {}", items, shown))
                .with_code("contains")
                .with_expected(format!("sequence containing {}", shown))
        },
    )
}

/// Passes sequences not containing `element`.
pub fn not_contains<E>(element: E) -> Check<[E]>
where
    E: PartialEq + Debug + Send + Sync + 'static,
{
    let shown = format!("{:?}", element);
    Check::new(move |items: &[E]| match items.iter().position(|e| *e == element) {
        None => Ok(()),
        Some(i) => Err(
            Violation::new(format!("{:?} must not contain {}", items, shown))
                .with_code("not_contains")
                .with_got(format!("{} at index {}", shown, i)),
        ),
    })
}

/// Passes sequences without repeated elements.
///
/// The violation is located at the first repeat.
pub fn unique<E>() -> Check<[E]>
where
    E: Hash + Eq + Debug + 'static,
{
    Check::new(|items: &[E]| {
        let mut seen = HashSet::with_capacity(items.len());
        match items.iter().position(|e| !seen.insert(e)) {
            None => Ok(()),
            Some(i) => Err(Violation::new("must not contain duplicates")
                .with_code("unique")
                .with_got(format!("{:?}", items[i]))
                .within(PathSegment::Index(i))),
        }
    })
}

/// Runs `checks` against every element and merges all failures into one
/// violation.
///
/// Each element is evaluated with collect-all semantics; the violations of
/// all elements are joined in element order, each located at its index.
///
/// ```rust
/// use verdict::checks::{ordered, slice};
///
/// let check = slice::each([ordered::min(0)]);
/// assert!(check.is_valid(&[1, 2, 3]));
///
/// let violation = check.validate(&[1, -1, 2]).unwrap_err();
/// assert_eq!(violation.code, "each");
/// assert_eq!(violation.causes()[0].path.to_string(), "[1]");
/// assert!(violation.to_string().contains("[1]: -1 must be at least 0"));
/// ```
pub fn each<E: 'static>(checks: impl IntoIterator<Item = Check<E>>) -> Check<[E]> {
    let checks: Vec<Check<E>> = checks.into_iter().collect();
    Check::new(move |items: &[E]| {
        let violations: Vec<Violation> = items
            .iter()
            .enumerate()
            .flat_map(|(i, item)| {
                collect(item, &checks)
                    .into_iter()
                    .map(move |v| v.within(PathSegment::Index(i)))
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(Violation::join(violations).with_code("each"))
        }
    })
}
