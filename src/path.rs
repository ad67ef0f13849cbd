//! Location paths for violations.
//!
//! A [`Path`] records where inside a checked value a violation was found.
//! Checks on scalar values report at the root; sequence checks such as
//! [`each`](crate::checks::slice::each) push an index segment for the element
//! that failed, and callers may name values with
//! [`Check::at_field`](crate::Check::at_field).

use std::fmt::{self, Display};

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named value (e.g. `email`).
    Field(String),
    /// A position in a sequence (e.g. `[3]`).
    Index(usize),
}

impl PathSegment {
    /// Creates a field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates an index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// The location of a value relative to the value handed to a check.
///
/// Paths render like `users[0].email`. The empty path is the root.
///
/// # Example
///
/// ```rust
/// use verdict::Path;
///
/// let path = Path::root().push_field("tags").push_index(2);
/// assert_eq!(path.to_string(), "tags[2]");
///
/// let nested = path.prepend_field("post");
/// assert_eq!(nested.to_string(), "post.tags[2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The empty path.
    pub fn root() -> Self {
        Self::default()
    }

    /// A path of a single segment.
    pub fn from_segment(segment: PathSegment) -> Self {
        Self {
            segments: vec![segment],
        }
    }

    /// Returns a new path with `name` appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::field(name))
    }

    /// Returns a new path with `index` appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Returns a new path with `segment` appended.
    pub fn push(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        Self { segments }
    }

    /// Returns a new path with `name` in front.
    ///
    /// Violations bubble up from inner values to outer ones, so locations
    /// grow at the front rather than the back.
    pub fn prepend_field(&self, name: impl Into<String>) -> Self {
        self.prepend(PathSegment::field(name))
    }

    /// Returns a new path with `index` in front.
    pub fn prepend_index(&self, index: usize) -> Self {
        self.prepend(PathSegment::Index(index))
    }

    /// Returns a new path with `segment` in front.
    pub fn prepend(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(segment);
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }

    /// Returns true for the empty path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// The last segment, or `None` at the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_renders_empty() {
        let path = Path::root();
        assert!(path.is_root());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_index_only() {
        assert_eq!(Path::root().push_index(4).to_string(), "[4]");
    }

    #[test]
    fn test_mixed_segments() {
        let path = Path::root()
            .push_field("orders")
            .push_index(0)
            .push_field("items")
            .push_index(12);
        assert_eq!(path.to_string(), "orders[0].items[12]");
    }

    #[test]
    fn test_prepend_builds_outward() {
        let path = Path::root()
            .prepend_field("name")
            .prepend_index(3)
            .prepend_field("users");
        assert_eq!(path.to_string(), "users[3].name");
    }

    #[test]
    fn test_prepend_index_before_field() {
        let path = Path::from_segment(PathSegment::field("id")).prepend_index(1);
        assert_eq!(path.to_string(), "[1].id");
    }

    #[test]
    fn test_push_does_not_mutate_base() {
        let base = Path::root().push_field("tags");
        let first = base.push_index(0);
        let second = base.push_index(1);

        assert_eq!(base.to_string(), "tags");
        assert_eq!(first.to_string(), "tags[0]");
        assert_eq!(second.to_string(), "tags[1]");
    }

    #[test]
    fn test_last_segment() {
        let path = Path::root().push_field("tags").push_index(0);
        assert_eq!(path.last(), Some(&PathSegment::Index(0)));
        assert_eq!(Path::root().last(), None);
    }
}
