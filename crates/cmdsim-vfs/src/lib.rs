//! Virtual drive namespace.
//!
//! A session's file system is a forest of drives (`C:`, `D:`), each a tree of
//! [`Node`]s held entirely in memory. [`Namespace`] pairs that tree with the
//! current working directory and exposes the operations the interpreter
//! needs: path resolution, lookup, `cd`, `dir`, `mkdir`, removal, file
//! read/write/copy, and tree rendering.
//!
//! Paths use `\` as the delimiter and always begin with a drive token once
//! resolved, e.g. `C:\Users\Administrator`.

mod listing;
mod namespace;
mod node;
pub mod path;
mod seed;

pub use listing::{DirListing, EntryKind, ListingEntry};
pub use namespace::Namespace;
pub use node::{Directory, Node};
pub use seed::reference_layout;
