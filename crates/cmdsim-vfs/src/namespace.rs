//! The session namespace: drive forest plus current working directory.

use cmdsim_types::config::ShellConfig;
use cmdsim_types::error::{Result, ShellError};

use crate::listing::{self, DirListing};
use crate::node::{Directory, Node};
use crate::path::{self, DELIMITER, PARENT};
use crate::seed::reference_layout;

/// A drive forest and the directory the session is "in".
///
/// The current working directory is always a canonical path that resolves to
/// an existing directory; only [`change_directory`](Self::change_directory)
/// moves it.
#[derive(Debug, Clone)]
pub struct Namespace {
    /// Children of this directory are the drive roots (`C:`, `D:`).
    drives: Directory,
    cwd: String,
    volume_serial: String,
    free_bytes: u64,
    primary_drive: String,
    protected_names: Vec<String>,
}

impl Namespace {
    /// Build a namespace over `drives`, starting in `config.home`.
    pub fn new(drives: Directory, config: &ShellConfig) -> Result<Self> {
        let home = path::canonicalize(&config.home).into_owned();
        match descend(&drives, &home) {
            Some(Node::Directory(_)) => {},
            Some(Node::File(_)) => return Err(ShellError::NotADirectory { path: home }),
            None => return Err(ShellError::PathNotFound { path: home }),
        }
        log::debug!("Namespace ready, cwd={home}");
        Ok(Self {
            drives,
            cwd: home,
            volume_serial: config.volume_serial.clone(),
            free_bytes: config.free_bytes,
            primary_drive: config.primary_drive.clone(),
            protected_names: config.protected_names.clone(),
        })
    }

    /// A namespace over the [reference layout](reference_layout).
    pub fn seeded(config: &ShellConfig) -> Result<Self> {
        Self::new(reference_layout(), config)
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn current_drive(&self) -> &str {
        path::drive_of(&self.cwd)
    }

    /// Turn a user-supplied path into a canonical absolute path.
    ///
    /// Drive-qualified input is taken as-is; a lone `..` or a `..\` prefix
    /// ascends from the cwd; a leading `\` roots at the current drive;
    /// anything else is appended to the cwd.
    pub fn resolve(&self, input: &str) -> String {
        let joined = if input.contains(':') {
            input.to_string()
        } else if input == PARENT {
            path::parent(&self.cwd).to_string()
        } else if let Some(rest) = input.strip_prefix("..\\") {
            format!("{}{DELIMITER}{rest}", path::parent(&self.cwd))
        } else if input.starts_with(DELIMITER) {
            format!("{}{input}", self.current_drive())
        } else {
            format!("{}{DELIMITER}{input}", self.cwd)
        };
        path::canonicalize(&joined).into_owned()
    }

    /// Find the node at a canonical path. A missing segment anywhere, or a
    /// file standing in for an intermediate directory, yields `None`.
    pub fn lookup(&self, canonical: &str) -> Option<&Node> {
        descend(&self.drives, canonical)
    }

    pub fn change_directory(&mut self, input: &str) -> Result<()> {
        let target = self.resolve(input);
        match self.lookup(&target) {
            None => Err(ShellError::PathNotFound { path: target }),
            Some(Node::File(_)) => Err(ShellError::NotADirectory { path: target }),
            Some(Node::Directory(_)) => {
                log::debug!("cd {} -> {target}", self.cwd);
                self.cwd = target;
                Ok(())
            },
        }
    }

    /// Snapshot a directory for `dir`. Defaults to the cwd.
    pub fn list(&self, input: Option<&str>) -> Result<DirListing> {
        let target = match input {
            Some(p) => self.resolve(p),
            None => self.cwd.clone(),
        };
        match self.lookup(&target) {
            None => Err(ShellError::ListingNotFound { path: target }),
            Some(Node::File(_)) => Err(ShellError::NotAListing { path: target }),
            Some(Node::Directory(dir)) => {
                Ok(DirListing::new(target, dir, &self.volume_serial, self.free_bytes))
            },
        }
    }

    /// Create an empty directory under the cwd.
    pub fn make_directory(&mut self, name: &str) -> Result<()> {
        if !is_valid_name(name) {
            return Err(ShellError::InvalidName {
                name: name.to_string(),
            });
        }
        let dir = self.current_dir_mut();
        if dir.contains(name) {
            return Err(ShellError::AlreadyExists {
                name: name.to_string(),
            });
        }
        dir.insert(name, Node::Directory(Directory::new()));
        log::debug!("mkdir {}{DELIMITER}{name}", self.cwd);
        Ok(())
    }

    /// Remove a child of the cwd.
    ///
    /// Protected names are refused on the primary drive regardless of
    /// `recursive`. A populated directory needs `recursive`.
    pub fn remove(&mut self, name: &str, recursive: bool) -> Result<()> {
        let populated = match self.current_dir().get(name) {
            None => {
                return Err(ShellError::CouldNotFind {
                    path: format!("{}{DELIMITER}{name}", self.cwd),
                });
            },
            Some(Node::Directory(dir)) => !dir.is_empty(),
            Some(Node::File(_)) => false,
        };
        if self.is_protected(name) {
            log::warn!("Refused to remove protected '{name}' in {}", self.cwd);
            return Err(ShellError::AccessDenied {
                name: name.to_string(),
            });
        }
        if populated && !recursive {
            return Err(ShellError::NotEmpty {
                name: name.to_string(),
            });
        }
        self.current_dir_mut().remove(name);
        log::debug!("removed {}{DELIMITER}{name} (recursive={recursive})", self.cwd);
        Ok(())
    }

    /// Content of the file at `input`, resolved like any other path.
    pub fn read_file(&self, input: &str) -> Result<&str> {
        match self.lookup(&self.resolve(input)) {
            None => Err(ShellError::FileNotFound {
                name: input.to_string(),
            }),
            Some(Node::Directory(_)) => Err(ShellError::AccessDenied {
                name: input.to_string(),
            }),
            Some(Node::File(content)) => Ok(content),
        }
    }

    /// Create or overwrite a file under the cwd. Never fails.
    pub fn write_file(&mut self, name: &str, content: impl Into<String>) {
        let content = content.into();
        log::debug!("write {}{DELIMITER}{name} ({} bytes)", self.cwd, content.len());
        self.current_dir_mut().insert(name, Node::File(content));
    }

    /// Copy `source` into a file named `destination` under the cwd.
    pub fn copy_file(&mut self, source: &str, destination: &str) -> Result<()> {
        let content = self.read_file(source)?.to_string();
        self.write_file(destination, content);
        Ok(())
    }

    /// Render the subtree at `input` (default: cwd) with box-drawing
    /// connectors.
    pub fn render_tree(&self, input: Option<&str>) -> Result<String> {
        let target = match input {
            Some(p) => self.resolve(p),
            None => self.cwd.clone(),
        };
        match self.lookup(&target) {
            None => Err(ShellError::PathNotFound { path: target }),
            Some(Node::File(_)) => Err(ShellError::NotADirectory { path: target }),
            Some(Node::Directory(dir)) => Ok(listing::render_tree(dir)),
        }
    }

    fn is_protected(&self, name: &str) -> bool {
        self.current_drive() == self.primary_drive
            && self.protected_names.iter().any(|p| p == name)
    }

    fn current_dir(&self) -> &Directory {
        descend(&self.drives, &self.cwd)
            .and_then(Node::as_dir)
            .unwrap_or_else(|| panic!("cwd {} no longer resolves to a directory", self.cwd))
    }

    fn current_dir_mut(&mut self) -> &mut Directory {
        match descend_mut(&mut self.drives, &self.cwd) {
            Some(Node::Directory(dir)) => dir,
            _ => panic!("cwd {} no longer resolves to a directory", self.cwd),
        }
    }
}

/// A single path segment: non-empty, not `.`/`..`, no delimiters or colons.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != path::CURRENT
        && name != PARENT
        && !name.contains(['\\', '/', ':'])
}

fn descend<'a>(root: &'a Directory, canonical: &str) -> Option<&'a Node> {
    let mut segments = path::segments(canonical);
    let mut node = root.get(segments.next()?)?;
    for segment in segments {
        node = node.as_dir()?.get(segment)?;
    }
    Some(node)
}

fn descend_mut<'a>(root: &'a mut Directory, canonical: &str) -> Option<&'a mut Node> {
    let mut segments = path::segments(canonical);
    let mut node = root.get_mut(segments.next()?)?;
    for segment in segments {
        node = match node {
            Node::Directory(dir) => dir.get_mut(segment)?,
            Node::File(_) => return None,
        };
    }
    Some(node)
}
