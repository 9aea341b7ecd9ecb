//! Virtual File Tree
//!
//! The immutable namespace a terminal session navigates. A tree is built once
//! (from the compiled-in default or a manifest) and shared read-only, usually
//! behind an `Arc`, by any number of sessions.

pub mod defaults;
pub mod manifest;
pub mod node;
pub mod path;

pub use manifest::{EntrySpec, TreeManifest};
pub use node::{is_hidden, Directory, File, Node};
pub use path::TreePath;

use crate::error::{ManifestError, TreeError};
use std::path::Path;

/// Read-only hierarchical namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFileTree {
    root: Node,
}

impl VirtualFileTree {
    pub fn new(root: Directory) -> Self {
        Self {
            root: Node::Directory(root),
        }
    }

    /// Load and validate a manifest file.
    pub fn from_manifest_file(path: &Path) -> Result<Self, ManifestError> {
        let root = TreeManifest::load(path)?.into_root()?;
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walk from the root one segment at a time.
    ///
    /// Fails with `NotFound` when a segment is missing or an intermediate
    /// node is a file. The empty path yields the root.
    pub fn lookup(&self, path: &TreePath) -> Result<&Node, TreeError> {
        let mut node = &self.root;
        for segment in path.segments() {
            node = match node {
                Node::Directory(dir) => dir
                    .get(segment)
                    .ok_or_else(|| TreeError::NotFound(path.clone()))?,
                Node::File(_) => return Err(TreeError::NotFound(path.clone())),
            };
        }
        Ok(node)
    }

    /// Look up a path that must be a directory.
    pub fn directory(&self, path: &TreePath) -> Result<&Directory, TreeError> {
        match self.lookup(path)? {
            Node::Directory(dir) => Ok(dir),
            Node::File(_) => Err(TreeError::NotADirectory(path.clone())),
        }
    }

    /// Look up a path that must be a file.
    pub fn file(&self, path: &TreePath) -> Result<&File, TreeError> {
        match self.lookup(path)? {
            Node::File(file) => Ok(file),
            Node::Directory(_) => Err(TreeError::NotAFile(path.clone())),
        }
    }

    pub fn is_directory(&self, path: &TreePath) -> bool {
        self.directory(path).is_ok()
    }
}

impl Default for VirtualFileTree {
    fn default() -> Self {
        defaults::bureau_tree()
    }
}
