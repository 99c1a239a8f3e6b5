//! The phrase cascade, in evaluation order.
//!
//! Earlier entries shadow later ones: "show memory usage" is caught by the
//! generic `show <file>` rule before the memory rule is reached.

/// How a matched pattern produces its arguments.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ArgRule {
    /// No arguments.
    Bare,
    /// Capture groups, in order.
    Groups(&'static [usize]),
    /// Literal tokens; `$N` is capture group N, `~` is the home directory.
    Template(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PatternSpec {
    /// Case-insensitive, unanchored.
    pub source: &'static str,
    pub verb: &'static str,
    pub confidence: f32,
    pub args: ArgRule,
}

const fn spec(
    source: &'static str,
    verb: &'static str,
    confidence: f32,
    args: ArgRule,
) -> PatternSpec {
    PatternSpec {
        source,
        verb,
        confidence,
        args,
    }
}

use ArgRule::{Bare, Groups, Template};

pub(crate) const PHRASE_TABLE: [PatternSpec; 31] = [
    // Directories
    spec(r"(?:show|list|display)\s+(?:files?|contents?|directory)", "dir", 0.9, Bare),
    spec(r"(?:go\s+to|change\s+to|navigate\s+to|cd\s+to)\s+(.+)", "cd", 0.9, Groups(&[1])),
    spec(r"(?:create|make|new)\s+(?:folder|directory)\s+(.+)", "mkdir", 0.9, Groups(&[1])),
    spec(r"(?:delete|remove|rm)\s+(?:folder|directory)\s+(.+)", "rmdir", 0.8, Groups(&[1])),
    spec(r"(?:current|working)\s+(?:directory|folder|path)", "pwd", 0.9, Bare),
    // Files
    spec(r"(?:show|display|read|type|cat)\s+(?:file\s+)?(.+)", "type", 0.8, Groups(&[1])),
    spec(r"(?:create|make|new)\s+(?:file)\s+(.+)", "echo", 0.7, Template(&[">", "$1"])),
    spec(r"(?:copy|duplicate)\s+(.+)\s+(?:to|as)\s+(.+)", "copy", 0.8, Groups(&[1, 2])),
    spec(r"(?:delete|remove|rm)\s+(?:file\s+)?(.+)", "del", 0.8, Groups(&[1])),
    // System
    spec(r"(?:show|display|list)\s+(?:processes|running|tasks)", "tasklist", 0.9, Bare),
    spec(r"(?:show|display)\s+(?:cpu|processor)\s+(?:usage|info)", "systeminfo", 0.9, Bare),
    spec(r"(?:show|display)\s+(?:memory|ram)\s+(?:usage|info)", "mem", 0.9, Bare),
    spec(r"(?:system|computer)\s+(?:info|information)", "systeminfo", 0.8, Bare),
    // General
    spec(r"(?:clear|clean)\s+(?:screen|terminal|console)", "cls", 0.9, Bare),
    spec(r"(?:show|display)\s+(?:tree|structure)", "tree", 0.8, Bare),
    spec(r"(?:help|commands|what\s+can)", "help", 0.9, Bare),
    spec(r"(?:current|show)\s+(?:time|clock)", "time", 0.9, Bare),
    spec(r"(?:current|show|today)\s+(?:date|day)", "date", 0.9, Bare),
    spec(r"(?:list|show)\s+(.+)\s+(?:files?|contents?)", "dir", 0.7, Groups(&[1])),
    spec(r"(?:go|move|switch)\s+(?:back|up|parent)", "cd", 0.8, Template(&[".."])),
    spec(r"(?:echo|print|say)\s+(.+)", "echo", 0.8, Groups(&[1])),
    // Identity and version
    spec(r"(?:who\s+am\s+i|current\s+user)", "whoami", 0.9, Bare),
    spec(r"(?:computer\s+name|host\s+name|machine\s+name)", "hostname", 0.9, Bare),
    spec(
        r"(?:show|display|list)\s+(?:history|previous|past)\s+(?:commands?)",
        "history",
        0.9,
        Bare,
    ),
    spec(r"(?:what\s+version|windows\s+version|system\s+version)", "ver", 0.9, Bare),
    // Loose file verbs
    spec(r"(?:read|open|view)\s+(.+)", "type", 0.7, Groups(&[1])),
    spec(r"(?:make|create|touch)\s+(?:file\s+)?(.+)", "echo", 0.6, Template(&[">", "$1"])),
    // Well-known places
    spec(r"(?:go\s+)?(?:home|back\s+home)", "cd", 0.8, Template(&["~"])),
    spec(r"(?:go\s+to\s+)?(?:desktop)", "cd", 0.8, Template(&["Desktop"])),
    spec(r"(?:go\s+to\s+)?(?:documents)", "cd", 0.8, Template(&["Documents"])),
    spec(r"(?:go\s+to\s+)?(?:downloads)", "cd", 0.8, Template(&["Downloads"])),
];
