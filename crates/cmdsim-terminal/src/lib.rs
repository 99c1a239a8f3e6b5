//! Command interpreter and session shell.
//!
//! The interpreter is a registry-based dispatch system. Commands implement
//! the `Command` trait and are registered under a name plus aliases. A
//! [`Session`] ties the pieces together: it normalizes free text, runs the
//! resulting command line through the registry, keeps history, and turns
//! results into display lines.

mod commands;
mod file_commands;
mod interpreter;
pub mod session;
mod system_commands;

/// Register every built-in verb into a registry.
pub use commands::register_builtins;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, nothing, or a shell signal).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Outcome of running one command line.
pub use interpreter::CommandResult;
/// Shared mutable environment passed to every command.
pub use interpreter::Environment;
/// Split a command line into words, honoring double quotes.
pub use interpreter::tokenize;
pub use session::{Session, ShellLine, Submission};
