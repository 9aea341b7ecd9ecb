//! Absolute positions in the virtual tree and the resolution algorithm.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An absolute, normalized position measured from the tree root.
///
/// Segments are never empty and never `.` or `..`; the empty sequence is
/// the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct TreePath {
    segments: Vec<String>,
}

impl TreePath {
    /// The tree root (`/`).
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from already-normalized segments.
    ///
    /// Empty, `.` and `..` segments are dropped or applied so the result is
    /// always well formed.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = Self::root();
        for segment in segments {
            path.push_token(segment.as_ref());
        }
        path
    }

    /// Parse an absolute path such as `/home/recruit`.
    ///
    /// A missing leading slash is tolerated; the string is always read from
    /// the root.
    pub fn parse_absolute(raw: &str) -> Self {
        Self::from_segments(raw.split('/'))
    }

    /// Resolve a user-typed path against the current and home locations.
    ///
    /// - `/...` starts at the root
    /// - `~` or `~/...` starts at `home`
    /// - anything else starts at `current`
    ///
    /// `.` is ignored, `..` pops one segment (clamped at the root) and empty
    /// tokens from repeated slashes are skipped. Resolution never fails; an
    /// unknown location is only detected when the result is looked up.
    pub fn resolve(raw: &str, current: &TreePath, home: &TreePath) -> TreePath {
        let (mut path, rest) = if let Some(rest) = raw.strip_prefix('/') {
            (TreePath::root(), rest)
        } else if raw.starts_with('~') {
            let rest = match raw.split_once('/') {
                Some(("~", rest)) => rest,
                Some(_) => raw,
                None if raw == "~" => "",
                None => raw,
            };
            (home.clone(), rest)
        } else {
            (current.clone(), raw)
        };

        for token in rest.split('/') {
            path.push_token(token);
        }
        path
    }

    fn push_token(&mut self, token: &str) {
        match token {
            "" | "." => {}
            ".." => {
                self.segments.pop();
            }
            name => self.segments.push(name.to_string()),
        }
    }

    /// Append one name, returning the child path.
    pub fn join(&self, name: &str) -> TreePath {
        let mut child = self.clone();
        child.push_token(name);
        child
    }

    /// The containing directory; the root is its own parent.
    pub fn parent(&self) -> TreePath {
        let mut parent = self.clone();
        parent.segments.pop();
        parent
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments below `base`, or `None` when `self` is not `base` or one of
    /// its descendants.
    pub fn strip_prefix(&self, base: &TreePath) -> Option<&[String]> {
        if self.segments.starts_with(&base.segments) {
            Some(&self.segments[base.segments.len()..])
        } else {
            None
        }
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl From<TreePath> for String {
    fn from(path: TreePath) -> Self {
        path.to_string()
    }
}

impl From<String> for TreePath {
    fn from(raw: String) -> Self {
        TreePath::parse_absolute(&raw)
    }
}
