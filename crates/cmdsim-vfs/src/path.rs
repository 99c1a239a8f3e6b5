//! Path string helpers.
//!
//! A canonical path is a drive token followed by zero or more non-empty
//! segments joined by [`DELIMITER`], with no `.` or `..` segments and no
//! trailing delimiter: `C:`, `C:\Users`, `D:\Games\Steam`.

use std::borrow::Cow;

/// Segment separator.
pub const DELIMITER: char = '\\';

/// Segment meaning "ascend one level".
pub const PARENT: &str = "..";

/// Segment meaning "this directory".
pub const CURRENT: &str = ".";

/// Check whether a path is already canonical.
fn is_canonical(path: &str) -> bool {
    let mut segments = path.split(DELIMITER);
    match segments.next() {
        Some(drive) if drive.contains(':') => {},
        _ => return false,
    }
    segments.all(|s| !s.is_empty() && s != CURRENT && s != PARENT)
}

/// Canonicalize a path: drop empty and `.` segments, and let `..` pop the
/// previous segment without ever popping the drive. Returns the input
/// unchanged (zero-alloc) when it is already canonical.
pub fn canonicalize(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split(DELIMITER) {
        match segment {
            "" | CURRENT => {},
            PARENT => {
                if parts.len() > 1 {
                    parts.pop();
                }
            },
            other => parts.push(other),
        }
    }
    Cow::Owned(parts.join("\\"))
}

/// Parent of a canonical path. A drive root is its own parent.
pub fn parent(path: &str) -> &str {
    match path.rfind(DELIMITER) {
        Some(i) => &path[..i],
        None => path,
    }
}

/// Drive token of a canonical path (`C:\Users` -> `C:`).
pub fn drive_of(path: &str) -> &str {
    path.split(DELIMITER).next().unwrap_or(path)
}

/// Non-empty segments of a path, drive first.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(DELIMITER).filter(|s| !s.is_empty())
}
