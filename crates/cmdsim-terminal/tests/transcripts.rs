//! End-to-end sessions: free text in, display lines out.

use cmdsim_nlp::vocabulary::{CANONICAL_VERBS, VERB_ALIASES};
use cmdsim_platform::{SeededPlatform, WallClock};
use cmdsim_terminal::{Session, ShellLine};
use cmdsim_types::config::ShellConfig;

fn session() -> Session {
    let config = ShellConfig::default();
    let platform = SeededPlatform::new(
        2026,
        WallClock::from_unix_secs(1_792_163_045),
        config.total_memory_mb,
    );
    Session::new(config, Box::new(platform)).unwrap()
}

/// Run each line and collect the non-echo lines as plain text.
fn run(session: &mut Session, lines: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    for line in lines {
        let submission = session.submit(line).unwrap();
        out.extend(
            submission
                .lines
                .iter()
                .filter(|l| !matches!(l, ShellLine::Command(_)))
                .map(|l| l.text().to_string()),
        );
    }
    out
}

#[test]
fn readme_reachable_from_home() {
    let mut s = session();
    let out = run(
        &mut s,
        &["cd Documents\\projects\\hackathon", "type README.md"],
    );
    assert_eq!(
        out,
        vec!["# CodeMate Hackathon Project\n\nThis is a Windows-style terminal project."]
    );
    assert_eq!(s.prompt(), "C:\\Users\\Administrator\\Documents\\projects\\hackathon>");
}

#[test]
fn phrases_drive_the_namespace() {
    let mut s = session();
    let out = run(
        &mut s,
        &[
            "create folder scratch",
            "go to scratch",
            "create file notes.txt",
            "say hello there",
            "go back",
        ],
    );
    assert_eq!(
        out,
        vec![
            "💡 Interpreted \"create folder scratch\" as \"mkdir scratch\"",
            "💡 Interpreted \"go to scratch\" as \"cd scratch\"",
            "💡 Interpreted \"create file notes.txt\" as \"echo > notes.txt\"",
            "💡 Interpreted \"say hello there\" as \"echo hello there\"",
            "hello there",
            "💡 Interpreted \"go back\" as \"cd ..\"",
        ]
    );
    assert_eq!(s.cwd(), "C:\\Users\\Administrator");
    assert_eq!(
        s.namespace()
            .read_file("scratch\\notes.txt")
            .unwrap(),
        ""
    );
}

#[test]
fn redirect_and_read_back() {
    let mut s = session();
    let out = run(
        &mut s,
        &[
            "echo first line > log.txt",
            "echo second line >> log.txt",
            "type log.txt",
        ],
    );
    assert_eq!(out, vec!["first line\nsecond line"]);
}

#[test]
fn recursive_delete_needs_flag() {
    let mut s = session();
    let sub = s.submit("rmdir Documents").unwrap();
    assert!(!sub.success);
    assert!(s.submit("rmdir /s Documents").unwrap().success);
    let listing = run(&mut s, &["dir"]).join("\n");
    assert!(!listing.contains("Documents"));
}

#[test]
fn protected_root_folders_survive() {
    let mut s = session();
    let out = run(&mut s, &["cd \\", "rmdir /s Windows", "del Users"]);
    assert_eq!(out, vec!["Access is denied.", "Access is denied."]);
    assert!(s.namespace().lookup("C:\\Windows").is_some());
}

#[test]
fn history_after_mixed_input() {
    let mut s = session();
    let out = run(&mut s, &["pwd", "pwd", "show files", "history"]);
    assert_eq!(
        out.last().map(String::as_str),
        Some("1  pwd\n2  show files\n3  history")
    );
}

#[test]
fn clock_verbs_use_platform() {
    let mut s = session();
    let out = run(&mut s, &["date", "time"]);
    assert_eq!(
        out,
        vec![
            "The current date is: Fri 10/16/2026",
            "The current time is: 03:04:05 PM"
        ]
    );
}

#[test]
fn drive_hop_and_tree() {
    let mut s = session();
    let out = run(&mut s, &["cd D:", "tree"]);
    assert_eq!(
        out,
        vec![
            "Folder PATH listing for volume Windows\n\
             Volume serial number is 1A2B-3C4D\n\
             D:\n\
             ├── Backup/\n\
             │   └── 2024/\n\
             ├── Games/\n\
             │   └── Steam/\n\
             └── Data/"
        ]
    );
}

#[test]
fn normalizer_vocabulary_matches_registry() {
    // A verb the normalizer passes through must be one the registry runs.
    let mut s = session();
    for verb in CANONICAL_VERBS.iter().chain(VERB_ALIASES.iter()) {
        if matches!(*verb, "exit" | "cls" | "clear") {
            continue;
        }
        let sub = s.submit(verb).unwrap();
        let recognized = !sub
            .lines
            .iter()
            .any(|l| matches!(l, ShellLine::Error(e) if e.contains("is not recognized")));
        assert!(recognized, "{verb} is not dispatchable");
    }
    assert!(!s.should_exit());
}

#[test]
fn exit_ends_session() {
    let mut s = session();
    let out = run(&mut s, &["exit"]);
    assert_eq!(out, vec!["Goodbye!"]);
    assert!(s.should_exit());
}

#[test]
fn rm_folder_phrase_removes_the_named_folder() {
    let mut s = session();
    let parsed = s.explain("rm folder test");
    assert_eq!(parsed.command, "rmdir test");
    assert!((parsed.confidence - 0.8).abs() < f32::EPSILON);

    let out = run(&mut s, &["mkdir test", "rm folder test"]);
    assert_eq!(out, vec!["💡 Interpreted \"rm folder test\" as \"rmdir test\""]);
    assert!(s.namespace().lookup("C:\\Users\\Administrator\\test").is_none());
}

#[test]
fn cat_file_phrase_reads_the_path() {
    let mut s = session();
    let out = run(&mut s, &["cat file Documents\\report.txt"]);
    assert_eq!(
        out,
        vec![
            "💡 Interpreted \"cat file Documents\\report.txt\" as \"type Documents\\report.txt\"",
            "Quarterly report data...",
        ]
    );
}
