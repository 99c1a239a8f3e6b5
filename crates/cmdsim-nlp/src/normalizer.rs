//! Pattern cascade evaluation and autocomplete.

use cmdsim_types::config::ShellConfig;
use cmdsim_types::error::{Result, ShellError};
use regex::{Captures, Regex};
use serde::Serialize;

use crate::patterns::{ArgRule, PHRASE_TABLE};
use crate::vocabulary::{self, CANONICAL_VERBS, SUGGESTED_PHRASES};

/// Outcome of normalizing one line of input.
///
/// `confidence` is advisory: it decorates the display but never blocks
/// execution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    /// Canonical command line to hand to the interpreter.
    pub command: String,
    pub confidence: f32,
    pub explanation: String,
}

/// Confidence for input that already starts with a known verb.
const DIRECT_CONFIDENCE: f32 = 1.0;
/// Confidence for input no pattern understood.
const FALLBACK_CONFIDENCE: f32 = 0.1;

struct PhrasePattern {
    regex: Regex,
    verb: &'static str,
    confidence: f32,
    args: ArgRule,
}

/// Compiled phrase cascade plus the settings it needs.
pub struct Normalizer {
    patterns: Vec<PhrasePattern>,
    home: String,
    suggestion_limit: usize,
}

impl Normalizer {
    /// Compile the cascade. `home` replaces `~` in argument templates.
    pub fn new(home: impl Into<String>, suggestion_limit: usize) -> Result<Self> {
        let patterns = PHRASE_TABLE
            .iter()
            .map(|spec| {
                let regex = Regex::new(&format!("(?i){}", spec.source)).map_err(|e| {
                    ShellError::Pattern(format!("{}: {e}", spec.source))
                })?;
                Ok(PhrasePattern {
                    regex,
                    verb: spec.verb,
                    confidence: spec.confidence,
                    args: spec.args,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            patterns,
            home: home.into(),
            suggestion_limit,
        })
    }

    pub fn from_config(config: &ShellConfig) -> Result<Self> {
        Self::new(config.home.clone(), config.suggestion_limit)
    }

    /// Rewrite free text into a command line.
    pub fn normalize(&self, input: &str) -> ParseResult {
        let trimmed = input.trim();

        if trimmed
            .split_whitespace()
            .next()
            .is_some_and(vocabulary::is_known_verb)
        {
            return ParseResult {
                command: trimmed.to_string(),
                confidence: DIRECT_CONFIDENCE,
                explanation: "Direct command recognized".to_string(),
            };
        }

        for (i, pattern) in self.patterns.iter().enumerate() {
            let Some(caps) = pattern.regex.captures(trimmed) else {
                continue;
            };
            let args = self.extract_args(&pattern.args, &caps);
            let command = if args.is_empty() {
                pattern.verb.to_string()
            } else {
                format!("{} {}", pattern.verb, args.join(" "))
            };
            log::debug!("Phrase #{} matched {trimmed:?} -> {command:?}", i + 1);
            return ParseResult {
                explanation: format!("Interpreted \"{trimmed}\" as \"{command}\""),
                command,
                confidence: pattern.confidence,
            };
        }

        ParseResult {
            command: trimmed.to_string(),
            confidence: FALLBACK_CONFIDENCE,
            explanation: "Command not recognized - executing as-is".to_string(),
        }
    }

    fn extract_args(&self, rule: &ArgRule, caps: &Captures<'_>) -> Vec<String> {
        let group = |n: usize| caps.get(n).map_or("", |m| m.as_str());
        let raw: Vec<&str> = match rule {
            ArgRule::Bare => Vec::new(),
            ArgRule::Groups(indices) => indices.iter().map(|&n| group(n)).collect(),
            ArgRule::Template(tokens) => tokens
                .iter()
                .map(|&token| match token {
                    "~" => self.home.as_str(),
                    t => t
                        .strip_prefix('$')
                        .and_then(|n| n.parse().ok())
                        .map_or(t, group),
                })
                .collect(),
        };
        raw.into_iter()
            .map(|arg| arg.trim().replace(['\'', '"'], ""))
            .filter(|arg| !arg.is_empty())
            .collect()
    }

    /// Autocomplete candidates containing `partial` (any case): verbs first,
    /// then canned phrases, capped at the suggestion limit. An empty partial
    /// returns every candidate.
    pub fn suggest(&self, partial: &str) -> Vec<String> {
        let candidates = CANONICAL_VERBS.iter().chain(SUGGESTED_PHRASES.iter());
        if partial.is_empty() {
            return candidates.map(|s| s.to_string()).collect();
        }
        let needle = partial.to_lowercase();
        candidates
            .filter(|c| c.to_lowercase().contains(&needle))
            .take(self.suggestion_limit)
            .map(|s| s.to_string())
            .collect()
    }
}
