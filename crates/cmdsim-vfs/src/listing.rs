//! `dir`-style listings and `tree`-style rendering.

use std::fmt;

use cmdsim_types::text::group_thousands;

use crate::node::{Directory, Node};
use crate::path;

/// Entry type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One child in a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub kind: EntryKind,
    /// Content length for files, 0 for directories.
    pub size: u64,
}

/// Snapshot of a directory, rendered through [`fmt::Display`] in the classic
/// `dir` layout (volume header, `.`/`..`, entries, summary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    pub path: String,
    pub entries: Vec<ListingEntry>,
    pub volume_serial: String,
    pub free_bytes: u64,
    /// Date and time column printed before each file row, if any.
    pub stamp: Option<String>,
}

impl DirListing {
    pub(crate) fn new(path: String, dir: &Directory, volume_serial: &str, free_bytes: u64) -> Self {
        let entries = dir
            .iter()
            .map(|(name, node)| ListingEntry {
                name: name.to_string(),
                kind: match node {
                    Node::Directory(_) => EntryKind::Directory,
                    Node::File(_) => EntryKind::File,
                },
                size: node.size(),
            })
            .collect();
        Self {
            path,
            entries,
            volume_serial: volume_serial.to_string(),
            free_bytes,
            stamp: None,
        }
    }

    /// Prefix file rows with `stamp` (e.g. `10/16/2026  03:04 PM`).
    pub fn stamped(mut self, stamp: impl Into<String>) -> Self {
        self.stamp = Some(stamp.into());
        self
    }

    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.kind == EntryKind::File)
            .count()
    }

    /// Sum of file content lengths.
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }

    /// Child directories plus the synthetic `.` and `..`.
    pub fn dir_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.kind == EntryKind::Directory)
            .count()
            + 2
    }

    fn drive_letter(&self) -> &str {
        path::drive_of(&self.path).trim_end_matches(':')
    }
}

const DIR_TAG: &str = "<DIR>          ";
const SUMMARY_INDENT: &str = "               ";

impl fmt::Display for DirListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " Volume in drive {} has no label.", self.drive_letter())?;
        writeln!(f, " Volume Serial Number is {}", self.volume_serial)?;
        writeln!(f)?;
        writeln!(f, " Directory of {}", self.path)?;
        writeln!(f)?;
        writeln!(f, "{DIR_TAG}.")?;
        writeln!(f, "{DIR_TAG}..")?;
        for entry in &self.entries {
            match entry.kind {
                EntryKind::Directory => writeln!(f, "{DIR_TAG}{}", entry.name)?,
                EntryKind::File => writeln!(
                    f,
                    "{}{:>14} {}",
                    self.stamp.as_deref().unwrap_or_default(),
                    entry.size,
                    entry.name
                )?,
            }
        }
        writeln!(f)?;
        writeln!(
            f,
            "{SUMMARY_INDENT}{} File(s)     {} bytes",
            self.file_count(),
            group_thousands(self.total_bytes())
        )?;
        write!(
            f,
            "{SUMMARY_INDENT}{} Dir(s)  {} bytes free",
            self.dir_count(),
            group_thousands(self.free_bytes)
        )
    }
}

/// Render `dir` as a connected ASCII tree, one line per descendant.
///
/// Directories carry a trailing `/`. Every line ends with `\n`; an empty
/// directory renders as the empty string.
pub(crate) fn render_tree(dir: &Directory) -> String {
    let mut out = String::new();
    render_level(dir, "", &mut out);
    out
}

fn render_level(dir: &Directory, prefix: &str, out: &mut String) {
    let last = dir.len().saturating_sub(1);
    for (i, (name, node)) in dir.iter().enumerate() {
        let is_last = i == last;
        out.push_str(prefix);
        out.push_str(if is_last { "└── " } else { "├── " });
        out.push_str(name);
        match node {
            Node::Directory(child) => {
                out.push_str("/\n");
                if !child.is_empty() {
                    let extended = format!("{prefix}{}", if is_last { "    " } else { "│   " });
                    render_level(child, &extended, out);
                }
            },
            Node::File(_) => out.push('\n'),
        }
    }
}
