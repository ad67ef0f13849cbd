//! Check violation types.
//!
//! This module provides [`Violation`], the diagnostic produced by a failing
//! check, and [`Violations`], a non-empty collection used when failures are
//! accumulated through stillwater's `Validation`.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::{Path, PathSegment};

const DEFAULT_CODE: &str = "violation";
const JOINED_CODE: &str = "joined";

/// The diagnostic produced when a check fails.
///
/// A violation carries a human-readable `message`, a machine-readable
/// `code`, optional `expected`/`got` context and the `path` of the offending
/// value. It may additionally:
///
/// - wrap a single cause ([`Violation::wrap`]), forming a chain reachable
///   through [`std::error::Error::source`] and [`Violation::chain`];
/// - be a composite of several constituents ([`Violation::join`]), each of
///   which stays recoverable through [`Violation::causes`].
///
/// # Example
///
/// ```rust
/// use verdict::Violation;
///
/// let inner = Violation::new("must contain at least 8 characters").with_code("min_len");
/// let outer = Violation::new("password rejected").wrap(inner);
///
/// assert_eq!(outer.to_string(), "password rejected: must contain at least 8 characters");
/// assert_eq!(outer.cause().map(|v| v.code.as_str()), Some("min_len"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Location of the offending value, relative to the checked value.
    pub path: Path,
    /// Human-readable description of the failure.
    pub message: String,
    /// Machine-readable code (e.g. `min_len`).
    pub code: String,
    /// What the check wanted.
    pub expected: Option<String>,
    /// What the check saw.
    pub got: Option<String>,
    source: Option<Box<Violation>>,
    causes: Option<Vec<Violation>>,
}

impl Violation {
    /// Creates a violation at the root path with the default code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            path: Path::root(),
            message: message.into(),
            code: DEFAULT_CODE.to_string(),
            expected: None,
            got: None,
            source: None,
            causes: None,
        }
    }

    /// Merges `violations` into one composite violation.
    ///
    /// The constituents keep their order and identity and are all rendered
    /// by `Display`. A single violation still yields a composite, and an
    /// empty input yields a composite with no constituents.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Violation;
    ///
    /// let joined = Violation::join(vec![
    ///     Violation::new("must not be empty"),
    ///     Violation::new("must contain \"@\""),
    /// ]);
    ///
    /// assert_eq!(joined.causes().len(), 2);
    /// assert!(joined.to_string().contains("must contain \"@\""));
    /// ```
    pub fn join(violations: Vec<Violation>) -> Self {
        let mut joined = Self::new(format!(
            "validation failed with {} violation(s)",
            violations.len()
        ))
        .with_code(JOINED_CODE);
        joined.causes = Some(violations);
        joined
    }

    /// Sets the code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the expected value description and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Sets the observed value description and returns self for chaining.
    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    /// Replaces the path and returns self for chaining.
    pub fn with_path(mut self, path: Path) -> Self {
        self.path = path;
        self
    }

    /// Attaches `inner` at the end of this violation's cause chain.
    ///
    /// The result renders as `self: inner` and `inner` becomes reachable via
    /// [`cause`](Self::cause). If `self` already wraps a cause, `inner` is
    /// attached below the existing chain so nothing is lost.
    pub fn wrap(mut self, inner: Violation) -> Self {
        self.source = Some(Box::new(match self.source.take() {
            Some(existing) => existing.wrap(inner),
            None => inner,
        }));
        self
    }

    /// Moves this violation (and everything it wraps or joins) under
    /// `segment`, so `[2]` turns a root violation into one located at `[2]`.
    pub fn within(mut self, segment: PathSegment) -> Self {
        self.path = self.path.prepend(segment.clone());
        self.source = self
            .source
            .take()
            .map(|source| Box::new(source.within(segment.clone())));
        self.causes = self.causes.take().map(|causes| {
            causes
                .into_iter()
                .map(|cause| cause.within(segment.clone()))
                .collect()
        });
        self
    }

    /// The directly wrapped cause, if any.
    pub fn cause(&self) -> Option<&Violation> {
        self.source.as_deref()
    }

    /// This violation followed by every violation it wraps, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &Violation> {
        std::iter::successors(Some(self), |v| v.cause())
    }

    /// The innermost violation of the cause chain.
    pub fn root_cause(&self) -> &Violation {
        let mut current = self;
        while let Some(next) = current.cause() {
            current = next;
        }
        current
    }

    /// The constituents of a joined violation (empty otherwise).
    pub fn causes(&self) -> &[Violation] {
        self.causes.as_deref().unwrap_or(&[])
    }

    /// Returns true if this violation was produced by [`join`](Self::join).
    pub fn is_joined(&self) -> bool {
        self.causes.is_some()
    }

    /// All non-composite violations reachable through joins, in order.
    ///
    /// A violation that is not joined yields only itself.
    pub fn leaves(&self) -> Vec<&Violation> {
        match &self.causes {
            Some(causes) => causes.iter().flat_map(|c| c.leaves()).collect(),
            None => vec![self],
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, parent: Option<&Path>) -> fmt::Result {
        if !self.path.is_root() && parent != Some(&self.path) {
            write!(f, "{}: ", self.path)?;
        }
        f.write_str(&self.message)?;

        if let Some(ref source) = self.source {
            f.write_str(": ")?;
            source.render(f, Some(&self.path))?;
        }

        if let Some(ref causes) = self.causes {
            for (i, cause) in causes.iter().enumerate() {
                let rendered = Rendered {
                    violation: cause,
                    parent: &self.path,
                }
                .to_string();
                write!(f, "\n  {}. {}", i + 1, rendered.replace('\n', "\n     "))?;
            }
        }

        Ok(())
    }
}

/// Renders a constituent relative to the path of its composite.
struct Rendered<'a> {
    violation: &'a Violation,
    parent: &'a Path,
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.violation.render(f, Some(self.parent))
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, None)
    }
}

impl std::error::Error for Violation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|v| v as &(dyn std::error::Error + 'static))
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Violation>();
    assert_sync::<Violation>();
};

/// A non-empty collection of violations.
///
/// `Violations` is the failure side of [`validate`](crate::validate): it
/// wraps a `NonEmptyVec<Violation>` so a failed `Validation` always carries
/// at least one violation, and implements `Semigroup` so results from
/// several values combine.
///
/// ```rust
/// use verdict::{Violation, Violations};
/// use stillwater::prelude::*;
///
/// let name = Violations::single(Violation::new("must not be empty").with_code("not_empty"));
/// let age = Violations::single(Violation::new("must be at least 18").with_code("min"));
///
/// let all = name.combine(age);
/// assert_eq!(all.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Violations(NonEmptyVec<Violation>);

impl Violations {
    /// A collection holding one violation.
    pub fn single(violation: Violation) -> Self {
        Self(NonEmptyVec::singleton(violation))
    }

    /// Creates a collection from a stillwater `NonEmptyVec`.
    pub fn from_non_empty(violations: NonEmptyVec<Violation>) -> Self {
        Self(violations)
    }

    /// Builds a collection from a vec, or `None` if the vec is empty.
    pub fn from_vec(violations: Vec<Violation>) -> Option<Self> {
        NonEmptyVec::from_vec(violations).map(Self)
    }

    /// Returns the number of violations in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the violations in accumulation order.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// The violations located at `path`.
    pub fn at_path(&self, path: &Path) -> Vec<&Violation> {
        self.0.iter().filter(|v| &v.path == path).collect()
    }

    /// The violations carrying `code`.
    pub fn with_code(&self, code: &str) -> Vec<&Violation> {
        self.0.iter().filter(|v| v.code == code).collect()
    }

    /// Returns the first violation in the collection.
    pub fn first(&self) -> &Violation {
        self.0.head()
    }

    /// Converts the collection into a `Vec<Violation>`.
    pub fn into_vec(self) -> Vec<Violation> {
        self.0.into_vec()
    }

    /// Merges the collection into one joined [`Violation`].
    pub fn into_violation(self) -> Violation {
        Violation::join(self.into_vec())
    }
}

impl Semigroup for Violations {
    fn combine(self, other: Self) -> Self {
        Violations(self.0.combine(other.0))
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} violation(s):", self.len())?;
        for (i, violation) in self.iter().enumerate() {
            let rendered = violation.to_string().replace('\n', "\n     ");
            writeln!(f, "  {}. {}", i + 1, rendered)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        Self::single(violation)
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = Box<dyn Iterator<Item = &'a Violation> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Violations>();
    assert_sync::<Violations>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_new_defaults() {
        let violation = Violation::new("must not be empty");

        assert!(violation.path.is_root());
        assert_eq!(violation.code, "violation");
        assert!(violation.expected.is_none());
        assert!(violation.got.is_none());
        assert!(violation.cause().is_none());
        assert!(!violation.is_joined());
    }

    #[test]
    fn test_builder_fields() {
        let violation = Violation::new("must be at least 5")
            .with_code("min")
            .with_expected(">= 5")
            .with_got("4");

        assert_eq!(violation.code, "min");
        assert_eq!(violation.expected.as_deref(), Some(">= 5"));
        assert_eq!(violation.got.as_deref(), Some("4"));
    }

    #[test]
    fn test_display_without_path() {
        assert_eq!(Violation::new("bad value").to_string(), "bad value");
    }

    #[test]
    fn test_display_with_path() {
        let violation = Violation::new("bad value").within(PathSegment::field("email"));
        assert_eq!(violation.to_string(), "email: bad value");
    }

    #[test]
    fn test_wrap_builds_chain() {
        let inner = Violation::new("inner");
        let middle = Violation::new("middle").wrap(inner.clone());
        let outer = Violation::new("outer").wrap(middle);

        let messages: Vec<_> = outer.chain().map(|v| v.message.as_str()).collect();
        assert_eq!(messages, vec!["outer", "middle", "inner"]);
        assert_eq!(outer.root_cause(), &inner);
        assert_eq!(outer.to_string(), "outer: middle: inner");
    }

    #[test]
    fn test_wrap_appends_below_existing_cause() {
        let outer = Violation::new("a")
            .wrap(Violation::new("b"))
            .wrap(Violation::new("c"));

        let messages: Vec<_> = outer.chain().map(|v| v.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_std_error_source() {
        let outer = Violation::new("outer").wrap(Violation::new("inner"));
        let source = outer.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("inner"));
    }

    #[test]
    fn test_join_keeps_order_and_renders_all() {
        let joined = Violation::join(vec![
            Violation::new("first"),
            Violation::new("second"),
        ]);

        assert!(joined.is_joined());
        assert_eq!(joined.code, "joined");
        assert_eq!(joined.causes()[0].message, "first");
        assert_eq!(joined.causes()[1].message, "second");
        assert_eq!(
            joined.to_string(),
            "validation failed with 2 violation(s)\n  1. first\n  2. second"
        );
    }

    #[test]
    fn test_join_single_is_composite() {
        let joined = Violation::join(vec![Violation::new("only")]);
        assert!(joined.is_joined());
        assert_eq!(joined.causes().len(), 1);
        assert!(joined.to_string().contains("1. only"));
    }

    #[test]
    fn test_join_empty() {
        let joined = Violation::join(Vec::new());
        assert!(joined.is_joined());
        assert!(joined.causes().is_empty());
        assert_eq!(joined.to_string(), "validation failed with 0 violation(s)");
    }

    #[test]
    fn test_nested_join_indents() {
        let inner = Violation::join(vec![Violation::new("a"), Violation::new("b")]);
        let outer = Violation::join(vec![inner, Violation::new("c")]);

        let rendered = outer.to_string();
        assert!(rendered.contains("\n  1. validation failed with 2 violation(s)\n       1. a"));
        assert!(rendered.contains("\n  2. c"));
    }

    #[test]
    fn test_leaves_flatten_joins() {
        let inner = Violation::join(vec![Violation::new("a"), Violation::new("b")]);
        let outer = Violation::join(vec![inner, Violation::new("c")]);

        let leaves: Vec<_> = outer.leaves().iter().map(|v| v.message.clone()).collect();
        assert_eq!(leaves, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_within_moves_constituents_and_causes() {
        let joined = Violation::join(vec![Violation::new("a").wrap(Violation::new("b"))])
            .within(PathSegment::index(2));

        assert_eq!(joined.path.to_string(), "[2]");
        assert_eq!(joined.causes()[0].path.to_string(), "[2]");
        assert_eq!(
            joined.causes()[0].cause().map(|c| c.path.to_string()),
            Some("[2]".to_string())
        );
        // the shared location is printed once
        assert_eq!(
            joined.to_string(),
            "[2]: validation failed with 1 violation(s)\n  1. a: b"
        );
    }

    #[test]
    fn test_violations_from_vec() {
        assert!(Violations::from_vec(Vec::new()).is_none());

        let violations = Violations::from_vec(vec![Violation::new("x")]);
        assert_eq!(violations.map(|v| v.len()), Some(1));
    }

    #[test]
    fn test_violations_combine_and_filter() {
        let name = Path::root().push_field("name");
        let a = Violations::single(Violation::new("a").with_code("min").with_path(name.clone()));
        let b = Violations::single(Violation::new("b").with_code("max"));
        let c = Violations::single(Violation::new("c").with_code("min"));

        let all = a.combine(b).combine(c);
        assert_eq!(all.len(), 3);
        assert!(!all.is_empty());
        assert_eq!(all.with_code("min").len(), 2);
        assert_eq!(all.at_path(&name).len(), 1);
        assert_eq!(all.first().message, "a");
    }

    #[test]
    fn test_violations_display_numbers_entries() {
        let all = Violations::single(Violation::new("too short"))
            .combine(Violations::single(Violation::new("not numeric")));

        let display = all.to_string();
        assert!(display.contains("2 violation(s)"));
        assert!(display.contains("1. too short"));
        assert!(display.contains("2. not numeric"));
    }

    #[test]
    fn test_violations_into_violation() {
        let all = Violations::single(Violation::new("a"))
            .combine(Violations::single(Violation::new("b")));

        let joined = all.into_violation();
        assert!(joined.is_joined());
        assert_eq!(joined.causes().len(), 2);
    }

    #[test]
    fn test_semigroup_associativity() {
        let e1 = Violations::single(Violation::new("1"));
        let e2 = Violations::single(Violation::new("2"));
        let e3 = Violations::single(Violation::new("3"));

        let left = e1.clone().combine(e2.clone()).combine(e3.clone());
        let right = e1.combine(e2.combine(e3));

        assert_eq!(left, right);
    }
}
