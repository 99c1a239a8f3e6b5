//! Line-editing loop over a [`Session`].

use std::io::{self, Write};

use anyhow::Result;
use cmdsim_nlp::Normalizer;
use cmdsim_terminal::Session;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::print_lines;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Tab completion over verbs and canned phrases. A chosen candidate
/// replaces the whole input buffer.
struct PhraseHelper {
    normalizer: Normalizer,
    shown: usize,
}

impl Completer for PhraseHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let mut found = self.normalizer.suggest(&line[..pos]);
        found.truncate(self.shown);
        Ok((0, found))
    }
}

impl Hinter for PhraseHelper {
    type Hint = String;
}

impl Highlighter for PhraseHelper {}

impl Validator for PhraseHelper {}

impl Helper for PhraseHelper {}

/// Read lines until `exit`, EOF, or an editor failure.
pub fn run(session: &mut Session) -> Result<()> {
    let helper = PhraseHelper {
        normalizer: Normalizer::from_config(session.config())?,
        shown: session.config().suggestions_shown,
    };
    let mut rl: Editor<PhraseHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(helper));

    print_lines(session.transcript());

    while !session.should_exit() {
        match rl.readline(&session.prompt()) {
            Ok(line) => {
                let Some(submission) = session.submit(&line) else {
                    continue;
                };
                rl.add_history_entry(line.trim())?;
                if submission.cleared {
                    print!("{CLEAR_SCREEN}");
                    io::stdout().flush()?;
                }
                print_lines(&submission.lines);
            },
            // Ctrl-C abandons the current line, as in cmd.exe.
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    log::debug!("REPL finished after {} commands", session.history().len());
    Ok(())
}
