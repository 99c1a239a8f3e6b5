//! One interactive shell session.
//!
//! A [`Session`] owns the namespace, the phrase normalizer, the command
//! registry, and the command history. Each [`Session::submit`] call turns a
//! line of free text into display lines: the echoed prompt, an optional
//! hint, and the command's output or error. Front ends only render what it
//! returns.

use std::fmt;

use cmdsim_nlp::{Normalizer, ParseResult};
use cmdsim_platform::Platform;
use cmdsim_types::config::ShellConfig;
use cmdsim_types::error::Result;
use cmdsim_vfs::Namespace;

use crate::commands::register_builtins;
use crate::interpreter::{CommandOutput, CommandRegistry, Environment};

/// Shown once when a session starts.
pub const WELCOME_BANNER: &str = "Microsoft Windows [Version 10.0.22621.2428]\n\
(c) Microsoft Corporation. All rights reserved.\n\
\n\
CodeMate Terminal Emulator - Hackathon Project\n\
Type \"help\" for available commands or try natural language like \"show files\"\n";

/// Fallback when a failed command carries no message.
const GENERIC_FAILURE: &str = "Command failed";

/// One line of terminal transcript, tagged by how it should be styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellLine {
    /// The echoed `CWD>input` line.
    Command(String),
    Output(String),
    Error(String),
    /// Banners and normalizer hints.
    Info(String),
}

impl ShellLine {
    pub fn text(&self) -> &str {
        match self {
            Self::Command(s) | Self::Output(s) | Self::Error(s) | Self::Info(s) => s,
        }
    }
}

impl fmt::Display for ShellLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// What one submitted line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Lines to append to the display, in order.
    pub lines: Vec<ShellLine>,
    /// The display was wiped; `lines` is empty.
    pub cleared: bool,
    pub success: bool,
}

/// Namespace, normalizer, registry, and history for one user.
pub struct Session {
    config: ShellConfig,
    platform: Box<dyn Platform>,
    namespace: Namespace,
    normalizer: Normalizer,
    registry: CommandRegistry,
    history: Vec<String>,
    transcript: Vec<ShellLine>,
    should_exit: bool,
}

impl Session {
    /// Build a session over the reference layout.
    pub fn new(config: ShellConfig, platform: Box<dyn Platform>) -> Result<Self> {
        config.validate()?;
        let namespace = Namespace::seeded(&config)?;
        let normalizer = Normalizer::from_config(&config)?;
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        log::info!(
            "Session started for {} on {}",
            config.qualified_user(),
            config.host_name
        );
        Ok(Self {
            config,
            platform,
            namespace,
            normalizer,
            registry,
            history: Vec::new(),
            transcript: vec![ShellLine::Info(WELCOME_BANNER.to_string())],
            should_exit: false,
        })
    }

    /// Normalize and run one line of input.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn submit(&mut self, input: &str) -> Option<Submission> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if self.history.last().is_none_or(|last| last != input) {
            self.history.push(input.to_string());
        }

        let mut lines = vec![ShellLine::Command(format!("{}{input}", self.prompt()))];
        let parsed = self.normalizer.normalize(input);
        if self.config.wants_hint(parsed.confidence) {
            lines.push(ShellLine::Info(format!("💡 {}", parsed.explanation)));
        }

        let mut env = Environment {
            fs: &mut self.namespace,
            platform: self.platform.as_ref(),
            config: &self.config,
        };
        let result = self.registry.run_line(&parsed.command, &mut env);

        match result.output {
            CommandOutput::Clear => {
                self.transcript.clear();
                return Some(Submission {
                    lines: Vec::new(),
                    cleared: true,
                    success: true,
                });
            },
            CommandOutput::ShowHistory => lines.push(ShellLine::Output(self.render_history())),
            CommandOutput::Text(text) if result.success && !text.is_empty() => {
                lines.push(ShellLine::Output(text));
            },
            _ => {},
        }
        if !result.success {
            let message = result.error.unwrap_or_else(|| GENERIC_FAILURE.to_string());
            log::debug!("{:?} failed: {message}", parsed.command);
            lines.push(ShellLine::Error(message));
        }

        if result.success && self.is_exit(&parsed.command) {
            self.should_exit = true;
        }

        self.transcript.extend(lines.iter().cloned());
        Some(Submission {
            lines,
            cleared: false,
            success: result.success,
        })
    }

    fn is_exit(&self, command: &str) -> bool {
        command
            .split_whitespace()
            .next()
            .and_then(|verb| self.registry.canonical_verb(verb))
            == Some("exit")
    }

    fn render_history(&self) -> String {
        if self.history.is_empty() {
            return "No commands in history.".to_string();
        }
        self.history
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{}  {cmd}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `CWD>`.
    pub fn prompt(&self) -> String {
        format!("{}>", self.namespace.cwd())
    }

    pub fn cwd(&self) -> &str {
        self.namespace.cwd()
    }

    /// Autocomplete candidates, cut to the number a shell should display.
    pub fn suggestions(&self, partial: &str) -> Vec<String> {
        let mut found = self.normalizer.suggest(partial);
        found.truncate(self.config.suggestions_shown);
        found
    }

    /// How `input` would be interpreted, without running it.
    pub fn explain(&self, input: &str) -> ParseResult {
        self.normalizer.normalize(input)
    }

    /// Everything shown since the last clear, welcome banner included.
    pub fn transcript(&self) -> &[ShellLine] {
        &self.transcript
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Set once an `exit` command has run.
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }
}
