//! Reference drive layout every new session starts from.

use crate::node::Directory;

/// Build the two-drive reference layout: a `C:` system drive with user
/// profiles and sample project files, and a `D:` data drive.
pub fn reference_layout() -> Directory {
    let hackathon = Directory::new()
        .with_file(
            "README.md",
            "# CodeMate Hackathon Project\n\nThis is a Windows-style terminal project.",
        )
        .with_file("app.py", "from flask import Flask\napp = Flask(__name__)")
        .with_file("requirements.txt", "Flask==2.0.1\npsutil==5.8.0");

    let administrator = Directory::new()
        .with_dir("Desktop", Directory::new())
        .with_dir(
            "Documents",
            Directory::new()
                .with_dir("projects", Directory::new().with_dir("hackathon", hackathon))
                .with_file("report.txt", "Quarterly report data..."),
        )
        .with_dir("Downloads", Directory::new())
        .with_dir("Pictures", Directory::new())
        .with_dir("Music", Directory::new())
        .with_dir("Videos", Directory::new());

    let users = Directory::new()
        .with_dir("Administrator", administrator)
        .with_dir(
            "Public",
            Directory::new()
                .with_dir("Documents", Directory::new())
                .with_dir("Desktop", Directory::new()),
        );

    let windows = Directory::new()
        .with_dir(
            "System32",
            Directory::new().with_dir("drivers", Directory::new()),
        )
        .with_dir("Temp", Directory::new());

    let program_files = Directory::new()
        .with_dir(
            "CodeMate",
            Directory::new()
                .with_dir("bin", Directory::new())
                .with_dir("config", Directory::new()),
        )
        .with_dir(
            "Python",
            Directory::new()
                .with_dir("Scripts", Directory::new())
                .with_dir("Lib", Directory::new()),
        )
        .with_dir("Microsoft Office", Directory::new());

    let c_drive = Directory::new()
        .with_dir("Users", users)
        .with_dir("Windows", windows)
        .with_dir("Program Files", program_files)
        .with_dir("ProgramData", Directory::new());

    let d_drive = Directory::new()
        .with_dir("Backup", Directory::new().with_dir("2024", Directory::new()))
        .with_dir("Games", Directory::new().with_dir("Steam", Directory::new()))
        .with_dir("Data", Directory::new());

    Directory::new()
        .with_dir("C:", c_drive)
        .with_dir("D:", d_drive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn two_drives_in_order() {
        let root = reference_layout();
        let drives: Vec<&str> = root.iter().map(|(n, _)| n).collect();
        assert_eq!(drives, vec!["C:", "D:"]);
    }

    #[test]
    fn every_drive_is_a_directory() {
        assert!(reference_layout().iter().all(|(_, node)| node.is_dir()));
    }

    #[test]
    fn report_file_seeded() {
        let root = reference_layout();
        let docs = root
            .get("C:")
            .and_then(Node::as_dir)
            .and_then(|c| c.get("Users"))
            .and_then(Node::as_dir)
            .and_then(|u| u.get("Administrator"))
            .and_then(Node::as_dir)
            .and_then(|a| a.get("Documents"))
            .and_then(Node::as_dir)
            .unwrap();
        assert_eq!(
            docs.get("report.txt"),
            Some(&Node::File("Quarterly report data...".into()))
        );
    }
}
