//! Node types for the virtual tree

/// File node: an immutable text body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub content: String,
}

impl File {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Directory node representation
///
/// Children keep insertion order, which is the listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    children: Vec<(String, Node)>, // (name, node) in insertion order
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a child.
    ///
    /// Replacing keeps the original position, so names stay unique and the
    /// listing order is that of first insertion.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) {
        let name = name.into();
        match self.children.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = node,
            None => self.children.push((name, node)),
        }
    }

    /// Builder form of [`Directory::insert`] for a file.
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, Node::File(File::new(content)));
        self
    }

    /// Builder form of [`Directory::insert`] for a subdirectory.
    pub fn with_dir(mut self, name: impl Into<String>, dir: Directory) -> Self {
        self.insert(name, Node::Directory(dir));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, node)| node)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Child names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(name, _)| name.as_str())
    }

    /// Child names in insertion order, without `.`-prefixed entries.
    pub fn visible_names(&self) -> impl Iterator<Item = &str> {
        self.names().filter(|name| !is_hidden(name))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Hidden-entry convention: a leading dot.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Virtual tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(File),
    Directory(Directory),
}

impl Node {
    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }
}
