//! Command trait, registry, and dispatch logic.
//!
//! Supports double-quoted arguments, case-insensitive verbs with aliases,
//! and output redirection (`>`, `>>`) into the current directory.

use std::collections::HashMap;
use std::fmt;

use cmdsim_platform::Platform;
use cmdsim_types::config::ShellConfig;
use cmdsim_types::error::{Result, ShellError};
use cmdsim_vfs::{Namespace, Node};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text lines.
    Text(String),
    /// Command produced no visible output.
    None,
    /// Signal to clear the terminal output buffer.
    Clear,
    /// Signal to print the session's command history.
    ShowHistory,
}

impl CommandOutput {
    /// Text to write when the output is redirected into a file.
    fn redirect_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            _ => "",
        }
    }
}

/// Signals render as their reserved sentinel words; shells must intercept
/// them rather than print them.
impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::None => Ok(()),
            Self::Clear => f.write_str("CLEAR_SCREEN"),
            Self::ShowHistory => f.write_str("SHOW_HISTORY"),
        }
    }
}

/// Outcome of one dispatched command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub output: CommandOutput,
    pub success: bool,
    /// User-facing message when `success` is false.
    pub error: Option<String>,
}

impl CommandResult {
    pub fn ok(output: CommandOutput) -> Self {
        Self {
            output,
            success: true,
            error: None,
        }
    }

    pub fn failed(err: &ShellError) -> Self {
        Self {
            output: CommandOutput::None,
            success: false,
            error: Some(err.to_string()),
        }
    }
}

impl From<Result<CommandOutput>> for CommandResult {
    fn from(result: Result<CommandOutput>) -> Self {
        match result {
            Ok(output) => Self::ok(output),
            Err(e) => Self::failed(&e),
        }
    }
}

/// Shared mutable environment passed to every command.
pub struct Environment<'a> {
    /// The session's drive namespace.
    pub fs: &'a mut Namespace,
    /// Synthetic system figures and the clock.
    pub platform: &'a dyn Platform,
    /// Identity and display settings.
    pub config: &'a ShellConfig,
}

/// A single executable command.
pub trait Command {
    /// Canonical verb (what `help` lists).
    fn name(&self) -> &str;

    /// Alternate verbs that dispatch to this command.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "DIR [path]").
    fn usage(&self) -> &str;

    /// Sample invocations for `help <verb>`.
    fn example(&self) -> Option<&str> {
        None
    }

    /// Fewer arguments than this is a syntax error.
    fn min_args(&self) -> usize {
        0
    }

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

const HELP_USAGE: &str = "HELP [command]";
const HELP_DESCRIPTION: &str = "Display available commands";
const HELP_EXAMPLE: &str = "help, help dir";
const HELP_UNSUPPORTED: &str = "This command is not supported by the help utility.";

/// Registry of available commands with dispatch.
///
/// `help` is built in because it needs to see the other commands.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    /// Lowercased name or alias -> index into `commands`.
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a command under its name and aliases. A later registration
    /// takes over any verb it shares with an earlier one.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let slot = self.commands.len();
        self.index.insert(cmd.name().to_ascii_lowercase(), slot);
        for alias in cmd.aliases() {
            self.index.insert(alias.to_ascii_lowercase(), slot);
        }
        self.commands.push(cmd);
    }

    /// Canonical name for a verb or alias, in any case.
    pub fn canonical_verb(&self, verb: &str) -> Option<&str> {
        let lower = verb.to_ascii_lowercase();
        if lower == "help" {
            return Some("help");
        }
        self.lookup(&lower).map(|cmd| cmd.name())
    }

    /// Every dispatchable verb: canonical names and aliases, lowercased.
    pub fn verbs(&self) -> Vec<String> {
        let mut verbs: Vec<String> = self.index.keys().cloned().collect();
        verbs.push("help".to_string());
        verbs.sort();
        verbs
    }

    fn lookup(&self, lower: &str) -> Option<&dyn Command> {
        self.index.get(lower).map(|&i| self.commands[i].as_ref())
    }

    /// Run `verb` with pre-split arguments.
    pub fn execute(&self, verb: &str, args: &[&str], env: &mut Environment<'_>) -> CommandResult {
        self.dispatch(verb, args, env).into()
    }

    /// Tokenize and run a full command line, honoring redirection.
    ///
    /// A blank line succeeds with no output.
    pub fn run_line(&self, line: &str, env: &mut Environment<'_>) -> CommandResult {
        self.run_tokens(line, env).into()
    }

    fn run_tokens(&self, line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let tokens = tokenize(line)?;
        let (tokens, redirect) = split_redirect(tokens)?;
        let Some((verb, rest)) = tokens.split_first() else {
            return Ok(CommandOutput::None);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        let output = self.dispatch(verb, &args, env)?;

        match redirect {
            Some(redirect) => {
                redirect.apply(output.redirect_text(), env)?;
                Ok(CommandOutput::None)
            },
            None => Ok(output),
        }
    }

    fn dispatch(
        &self,
        verb: &str,
        args: &[&str],
        env: &mut Environment<'_>,
    ) -> Result<CommandOutput> {
        let lower = verb.to_ascii_lowercase();
        if lower == "help" {
            return Ok(CommandOutput::Text(self.help(args.first().copied())));
        }
        let cmd = self
            .lookup(&lower)
            .ok_or_else(|| ShellError::Unrecognized(verb.to_string()))?;
        if args.len() < cmd.min_args() {
            return Err(ShellError::Syntax);
        }
        log::debug!("dispatch {} {args:?}", cmd.name());
        cmd.execute(args, env)
    }

    /// `help` with no topic lists every command; `help <verb>` describes one.
    pub fn help(&self, topic: Option<&str>) -> String {
        match topic {
            Some(verb) => {
                let lower = verb.to_ascii_lowercase();
                if lower == "help" {
                    return format!("{HELP_USAGE} - {HELP_DESCRIPTION}\nExample: {HELP_EXAMPLE}");
                }
                match self.lookup(&lower) {
                    Some(cmd) => {
                        let mut out = format!("{} - {}", cmd.usage(), cmd.description());
                        if let Some(example) = cmd.example() {
                            out.push_str(&format!("\nExample: {example}"));
                        }
                        out
                    },
                    None => HELP_UNSUPPORTED.to_string(),
                }
            },
            None => self.help_listing(),
        }
    }

    fn help_listing(&self) -> String {
        let width = self
            .commands
            .iter()
            .map(|cmd| cmd.usage().len())
            .chain(std::iter::once(HELP_USAGE.len()))
            .max()
            .unwrap_or(0)
            + 1;
        let mut out = String::from("Available Commands:\n\n");
        for cmd in &self.commands {
            out.push_str(&format!(
                "{:<width$}- {}\n",
                cmd.usage(),
                cmd.description()
            ));
        }
        out.push_str(&format!("{HELP_USAGE:<width$}- {HELP_DESCRIPTION}\n"));
        out.push_str("\nNatural Language Commands:\n");
        out.push_str("Try: \"show files\", \"create folder test\", \"go to Documents\"");
        out
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tokenizer: double quotes group words; backslashes are path delimiters.
// ---------------------------------------------------------------------------

/// Split a command line into words.
///
/// - Whitespace separates words outside of double quotes.
/// - A double-quoted run is kept intact; `""` yields an empty word.
/// - Backslashes are ordinary characters.
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_double = false;

    for ch in input.chars() {
        if in_double {
            if ch == '"' {
                in_double = false;
            } else {
                current.push(ch);
            }
            continue;
        }
        match ch {
            '"' => {
                in_double = true;
                in_word = true;
            },
            c if c.is_whitespace() => {
                if in_word {
                    tokens.push(std::mem::take(&mut current));
                    in_word = false;
                }
            },
            c => {
                current.push(c);
                in_word = true;
            },
        }
    }

    if in_double {
        return Err(ShellError::UnterminatedQuote);
    }
    if in_word {
        tokens.push(current);
    }
    Ok(tokens)
}

// ---------------------------------------------------------------------------
// Redirection
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
struct Redirect {
    target: String,
    append: bool,
}

impl Redirect {
    /// Write (or append) `text` to the target file in the cwd.
    fn apply(&self, text: &str, env: &mut Environment<'_>) -> Result<()> {
        if self.target.contains(['\\', '/', ':']) {
            return Err(ShellError::InvalidName {
                name: self.target.clone(),
            });
        }
        let path = env.fs.resolve(&self.target);
        let content = match env.fs.lookup(&path) {
            Some(Node::Directory(_)) => {
                return Err(ShellError::AccessDenied {
                    name: self.target.clone(),
                });
            },
            Some(Node::File(existing)) if self.append && !existing.is_empty() => {
                format!("{existing}\n{text}")
            },
            _ => text.to_string(),
        };
        env.fs.write_file(&self.target, content);
        Ok(())
    }
}

/// Pull the first `>`/`>>` operator and its target out of a token list.
///
/// The target may be glued to the operator (`>out.txt`) or be the next
/// word. Words after the target stay with the command, as in `cmd.exe`.
fn split_redirect(tokens: Vec<String>) -> Result<(Vec<String>, Option<Redirect>)> {
    let Some(pos) = tokens.iter().position(|t| t.starts_with('>')) else {
        return Ok((tokens, None));
    };
    let mut tokens = tokens;
    let op = tokens.remove(pos);
    let append = op.starts_with(">>");
    let glued = op.trim_start_matches('>');
    let target = if glued.is_empty() {
        if pos >= tokens.len() {
            return Err(ShellError::Syntax);
        }
        tokens.remove(pos)
    } else {
        glued.to_string()
    };
    Ok((tokens, Some(Redirect { target, append })))
}
