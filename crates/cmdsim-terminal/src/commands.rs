//! Built-in commands for the cmdsim shell.

use cmdsim_types::error::Result;

use crate::file_commands::register_file_commands;
use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::system_commands::register_system_commands;

/// Register all built-in commands into a registry.
///
/// Registration order is the order `help` lists them in.
pub fn register_builtins(reg: &mut CommandRegistry) {
    register_file_commands(reg);
    reg.register(Box::new(EchoCmd));
    register_system_commands(reg);
    reg.register(Box::new(ClsCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(ExitCmd));
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Display text"
    }
    fn usage(&self) -> &str {
        "ECHO <text>"
    }
    fn example(&self) -> Option<&str> {
        Some("echo Hello World")
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(args.join(" ")))
    }
}

// ---------------------------------------------------------------------------
// cls
// ---------------------------------------------------------------------------

struct ClsCmd;
impl Command for ClsCmd {
    fn name(&self) -> &str {
        "cls"
    }
    fn aliases(&self) -> &[&str] {
        &["clear"]
    }
    fn description(&self) -> &str {
        "Clear the terminal screen"
    }
    fn usage(&self) -> &str {
        "CLS"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

/// The registry keeps no history; the session renders it on this signal.
struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show previously entered commands"
    }
    fn usage(&self) -> &str {
        "HISTORY"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::ShowHistory)
    }
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn description(&self) -> &str {
        "Close the terminal"
    }
    fn usage(&self) -> &str {
        "EXIT"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text("Goodbye!".to_string()))
    }
}
