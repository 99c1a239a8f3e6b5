//! The verb vocabulary shared by the normalizer and autocomplete.

/// Canonical verbs in display order.
pub const CANONICAL_VERBS: [&str; 22] = [
    "dir",
    "cd",
    "pwd",
    "mkdir",
    "rmdir",
    "del",
    "type",
    "copy",
    "echo",
    "tree",
    "tasklist",
    "systeminfo",
    "mem",
    "cls",
    "help",
    "ver",
    "date",
    "time",
    "whoami",
    "hostname",
    "history",
    "exit",
];

/// Alternate spellings accepted for canonical verbs.
pub const VERB_ALIASES: [&str; 13] = [
    "ls", "chdir", "md", "rd", "rm", "erase", "cat", "cp", "ps", "cpu", "memory", "clear",
    "version",
];

/// Canned phrases offered after the verbs during autocomplete.
pub const SUGGESTED_PHRASES: [&str; 9] = [
    "show files",
    "create folder",
    "go to Documents",
    "show memory usage",
    "list processes",
    "current directory",
    "clear screen",
    "show cpu usage",
    "display tree structure",
];

/// Aliases that also open a phrase ("rm folder x", "cat file x"). Input
/// starting with one of these goes through the phrase cascade.
pub const PHRASE_ALIASES: [&str; 2] = ["rm", "cat"];

/// Whether input starting with `word` (any case) should run as typed.
pub fn is_known_verb(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    let lower = lower.as_str();
    CANONICAL_VERBS.contains(&lower)
        || (VERB_ALIASES.contains(&lower) && !PHRASE_ALIASES.contains(&lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_and_aliases_known() {
        assert!(is_known_verb("dir"));
        assert!(is_known_verb("DIR"));
        assert!(is_known_verb("Erase"));
        assert!(!is_known_verb("show"));
        assert!(!is_known_verb(""));
    }

    #[test]
    fn phrase_aliases_are_not_direct() {
        assert!(!is_known_verb("rm"));
        assert!(!is_known_verb("CAT"));
        assert!(is_known_verb("ls"));
        for alias in PHRASE_ALIASES {
            assert!(VERB_ALIASES.contains(&alias), "{alias}");
        }
    }

    #[test]
    fn no_alias_shadows_a_verb() {
        for alias in VERB_ALIASES {
            assert!(!CANONICAL_VERBS.contains(&alias), "{alias}");
        }
    }
}
