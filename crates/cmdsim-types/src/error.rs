//! Error types for cmdsim.
//!
//! Display strings mirror classic `cmd.exe` phrasing because they are shown to
//! the user verbatim. Callers that need to branch on the failure class should
//! use [`ShellError::kind`] instead of matching on message text.

use std::io;

/// Errors produced by the namespace engine, interpreter, and session setup.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("The system cannot find the path specified.")]
    PathNotFound { path: String },

    #[error("The system cannot find the file specified.")]
    FileNotFound { name: String },

    #[error("File Not Found")]
    ListingNotFound { path: String },

    #[error("Could Not Find {path}")]
    CouldNotFind { path: String },

    #[error("The directory name is invalid.")]
    NotADirectory { path: String },

    #[error("The filename, directory name, or volume label syntax is incorrect.")]
    NotAListing { path: String },

    #[error("The filename, directory name, or volume label syntax is incorrect.")]
    InvalidName { name: String },

    #[error("A subdirectory or file {name} already exists.")]
    AlreadyExists { name: String },

    #[error("The directory is not empty.")]
    NotEmpty { name: String },

    #[error("Access is denied.")]
    AccessDenied { name: String },

    #[error("The syntax of the command is incorrect.")]
    Syntax,

    #[error("The syntax of the command is incorrect.")]
    UnterminatedQuote,

    #[error("'{0}' is not recognized as an internal or external command,\noperable program or batch file.")]
    Unrecognized(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("pattern error: {0}")]
    Pattern(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse failure classes, independent of the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A path or name is absent.
    NotFound,
    /// A file was found where a directory was required.
    WrongKind,
    /// Creating over an existing name.
    AlreadyExists,
    /// Non-recursive removal of a populated directory.
    NotEmpty,
    /// Protected-name guard, or reading a directory as a file.
    AccessDenied,
    /// Missing arguments or a malformed name/path.
    Syntax,
    /// Verb not in the dispatch table.
    Unrecognized,
    /// Configuration or host I/O problems outside the emulated shell.
    Environment,
}

impl ShellError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PathNotFound { .. }
            | Self::FileNotFound { .. }
            | Self::ListingNotFound { .. }
            | Self::CouldNotFind { .. } => ErrorKind::NotFound,
            Self::NotADirectory { .. } => ErrorKind::WrongKind,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::NotEmpty { .. } => ErrorKind::NotEmpty,
            Self::AccessDenied { .. } => ErrorKind::AccessDenied,
            Self::Syntax
            | Self::UnterminatedQuote
            | Self::NotAListing { .. }
            | Self::InvalidName { .. } => ErrorKind::Syntax,
            Self::Unrecognized(_) => ErrorKind::Unrecognized,
            Self::Config(_)
            | Self::Pattern(_)
            | Self::Io(_)
            | Self::TomlParse(_)
            | Self::Json(_) => ErrorKind::Environment,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_not_found_display() {
        let e = ShellError::PathNotFound {
            path: "C:\\nope".into(),
        };
        assert_eq!(format!("{e}"), "The system cannot find the path specified.");
        assert_eq!(e.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn could_not_find_includes_path() {
        let e = ShellError::CouldNotFind {
            path: "C:\\Users\\ghost".into(),
        };
        assert_eq!(format!("{e}"), "Could Not Find C:\\Users\\ghost");
    }

    #[test]
    fn already_exists_includes_name() {
        let e = ShellError::AlreadyExists {
            name: "Docs".into(),
        };
        assert_eq!(format!("{e}"), "A subdirectory or file Docs already exists.");
        assert_eq!(e.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn unrecognized_spans_two_lines() {
        let e = ShellError::Unrecognized("xyzzy".into());
        assert_eq!(
            format!("{e}"),
            "'xyzzy' is not recognized as an internal or external command,\n\
             operable program or batch file."
        );
        assert_eq!(e.kind(), ErrorKind::Unrecognized);
    }

    #[test]
    fn syntax_class_variants() {
        assert_eq!(ShellError::Syntax.kind(), ErrorKind::Syntax);
        assert_eq!(ShellError::UnterminatedQuote.kind(), ErrorKind::Syntax);
        let e = ShellError::NotAListing {
            path: "C:\\a.txt".into(),
        };
        assert_eq!(e.kind(), ErrorKind::Syntax);
        assert_eq!(
            format!("{e}"),
            "The filename, directory name, or volume label syntax is incorrect."
        );
    }

    #[test]
    fn wrong_kind_and_access_denied() {
        let e = ShellError::NotADirectory {
            path: "C:\\x".into(),
        };
        assert_eq!(e.kind(), ErrorKind::WrongKind);
        assert_eq!(format!("{e}"), "The directory name is invalid.");
        let e = ShellError::AccessDenied {
            name: "Windows".into(),
        };
        assert_eq!(e.kind(), ErrorKind::AccessDenied);
        assert_eq!(format!("{e}"), "Access is denied.");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: ShellError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
        assert_eq!(e.kind(), ErrorKind::Environment);
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: ShellError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: ShellError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn error_is_debug() {
        let e = ShellError::Syntax;
        assert!(format!("{e:?}").contains("Syntax"));
    }
}
