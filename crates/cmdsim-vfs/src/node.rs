//! Tree nodes.

/// A node in the namespace: either a directory of named children or a file
/// with string content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    File(String),
}

impl Node {
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn as_dir(&self) -> Option<&Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    /// Content length for files, 0 for directories.
    pub fn size(&self) -> u64 {
        match self {
            Node::File(content) => content.len() as u64,
            Node::Directory(_) => 0,
        }
    }
}

/// Ordered mapping from child name to node.
///
/// Names are case-sensitive and unique. Iteration follows insertion order;
/// overwriting an existing name keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, Node)>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert or replace a child, returning the node it replaced.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) -> Option<Node> {
        let name = name.into();
        match self.get_mut(&name) {
            Some(slot) => Some(std::mem::replace(slot, node)),
            None => {
                self.entries.push((name, node));
                None
            },
        }
    }

    /// Remove a child (and everything beneath it).
    pub fn remove(&mut self, name: &str) -> Option<Node> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(n, node)| (n.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builder form of [`insert`](Self::insert) for a subdirectory.
    pub fn with_dir(mut self, name: &str, dir: Directory) -> Self {
        self.insert(name, Node::Directory(dir));
        self
    }

    /// Builder form of [`insert`](Self::insert) for a file.
    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.insert(name, Node::File(content.to_string()));
        self
    }
}
