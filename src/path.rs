//! Structural addresses for values inside a validated payload.
//!
//! A [`JsonPath`] records where an error happened, e.g. the `email` field of the
//! third element of `items`. Validators extend the path as they descend, so an
//! error raised deep inside a nested structure carries its full location.

use std::fmt::{self, Display};

/// One step of a [`JsonPath`]: an object key or an array position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key (e.g. `email`).
    Field(String),
    /// An array position (e.g. `2`).
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

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// The location of a value within the overall input.
///
/// Paths are immutable; `push_field`/`push_index` return extended copies so a
/// parent path can be shared by every child it hands out.
///
/// Three renderings are available:
///
/// ```rust
/// use fablecheck::JsonPath;
///
/// let path = JsonPath::root()
///     .push_field("items")
///     .push_index(2)
///     .push_field("email");
///
/// assert_eq!(path.to_strings(), vec!["items", "2", "email"]);
/// assert_eq!(path.dotted(), "items.2.email");
/// assert_eq!(path.to_string(), "items[2].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// The empty path, addressing the input itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// A single-segment path naming a field.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// A single-segment path naming an array position.
    pub fn from_index(idx: usize) -> Self {
        Self {
            segments: vec![PathSegment::Index(idx)],
        }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this path addresses the input itself.
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

    /// The path as plain strings, indices rendered in decimal.
    ///
    /// This is the form form-handling code maps back onto input fields.
    pub fn to_strings(&self) -> Vec<String> {
        self.segments.iter().map(|s| s.to_string()).collect()
    }

    /// The segments joined by `.`, e.g. `items.2.email`. Empty for the root.
    pub fn dotted(&self) -> String {
        self.to_strings().join(".")
    }

    /// The parent path, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.to_vec(),
        })
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

impl From<Vec<PathSegment>> for JsonPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}
