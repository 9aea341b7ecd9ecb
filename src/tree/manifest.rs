//! Tree manifests: TOML or JSON descriptions of a content tree.
//!
//! ```toml
//! [[children]]
//! type = "dir"
//! name = "home"
//!
//! [[children.children]]
//! type = "file"
//! name = "readme.txt"
//! content = "hello"
//! ```
//!
//! Arrays keep the author's order, which becomes the listing order.

use super::node::{Directory, File, Node};
use super::path::TreePath;
use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One manifest entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntrySpec {
    Dir {
        name: String,
        #[serde(default)]
        children: Vec<EntrySpec>,
    },
    File {
        name: String,
        #[serde(default)]
        content: String,
    },
}

impl EntrySpec {
    fn name(&self) -> &str {
        match self {
            EntrySpec::Dir { name, .. } | EntrySpec::File { name, .. } => name,
        }
    }
}

/// Manifest root: the children of `/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeManifest {
    #[serde(default)]
    pub children: Vec<EntrySpec>,
}

impl TreeManifest {
    pub fn from_toml_str(raw: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read a manifest, picking the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&raw),
            Some("json") => Self::from_json_str(&raw),
            other => Err(ManifestError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    /// Validate names and build the root directory.
    pub fn into_root(self) -> Result<Directory, ManifestError> {
        build_directory(&TreePath::root(), self.children)
    }
}

fn build_directory(parent: &TreePath, entries: Vec<EntrySpec>) -> Result<Directory, ManifestError> {
    let mut dir = Directory::new();
    for entry in entries {
        let name = entry.name().to_string();
        if !is_valid_name(&name) {
            return Err(ManifestError::InvalidName {
                parent: parent.clone(),
                name,
            });
        }
        if dir.contains(&name) {
            return Err(ManifestError::DuplicateEntry {
                parent: parent.clone(),
                name,
            });
        }
        let node = match entry {
            EntrySpec::File { content, .. } => Node::File(File::new(content)),
            EntrySpec::Dir { children, .. } => {
                Node::Directory(build_directory(&parent.join(&name), children)?)
            }
        };
        dir.insert(name, node);
    }
    Ok(dir)
}

/// Names must be usable as a single path segment and a single command
/// argument, so whitespace is rejected along with `/` and NUL.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\0')
        && !name.chars().any(char::is_whitespace)
}
