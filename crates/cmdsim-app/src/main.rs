//! cmdsim entry point.
//!
//! With no arguments this starts the interactive shell. `-c "<line>"` runs a
//! single line and exits non-zero if it failed; `--explain "<text>"` prints
//! how the text would be normalized, as JSON, without running it.
//! `--config <file>` loads session settings from TOML.

mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use cmdsim_platform::DesktopPlatform;
use cmdsim_terminal::{Session, ShellLine};
use cmdsim_types::config::ShellConfig;

#[derive(Debug, PartialEq)]
enum Mode {
    Interactive,
    OneShot(String),
    Explain(String),
}

#[derive(Debug, PartialEq)]
struct Options {
    config: Option<PathBuf>,
    mode: Mode,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options> {
    let mut config = None;
    let mut mode = Mode::Interactive;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a file path")?;
                config = Some(PathBuf::from(path));
            },
            "-c" => mode = Mode::OneShot(args.next().context("-c needs a command line")?),
            "--explain" => mode = Mode::Explain(args.next().context("--explain needs some text")?),
            other => bail!("unknown argument '{other}' (try -c, --explain or --config)"),
        }
    }
    Ok(Options { config, mode })
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = parse_args(std::env::args().skip(1))?;
    let config = match &options.config {
        Some(path) => ShellConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ShellConfig::default(),
    };
    log::info!("Starting cmdsim as {}", config.qualified_user());

    let platform = DesktopPlatform::new(config.total_memory_mb);
    let mut session = Session::new(config, Box::new(platform))?;

    match options.mode {
        Mode::Explain(text) => {
            let parsed = session.explain(&text);
            println!("{}", serde_json::to_string_pretty(&parsed)?);
            Ok(ExitCode::SUCCESS)
        },
        Mode::OneShot(line) => {
            let success = match session.submit(&line) {
                Some(submission) => {
                    print_lines(&submission.lines);
                    submission.success
                },
                None => true,
            };
            Ok(if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        },
        Mode::Interactive => {
            repl::run(&mut session)?;
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// Print display lines. The echoed command line is skipped because the
/// terminal already shows what was typed.
fn print_lines(lines: &[ShellLine]) {
    for line in lines {
        match line {
            ShellLine::Command(_) => {},
            ShellLine::Error(text) => eprintln!("{text}"),
            ShellLine::Output(text) | ShellLine::Info(text) => println!("{text}"),
        }
    }
}
