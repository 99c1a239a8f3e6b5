//! Namespace commands: dir, cd, pwd, mkdir, rmdir, del, type, copy, tree.

use cmdsim_types::error::{Result, ShellError};

use crate::interpreter::{Command, CommandOutput, Environment};

/// Arguments that are not `/x` or `-x` switches.
fn operands<'a>(args: &[&'a str]) -> impl Iterator<Item = &'a str> {
    args.iter()
        .copied()
        .filter(|a| !a.starts_with('/') && !a.starts_with('-'))
}

// ---------------------------------------------------------------------------
// dir
// ---------------------------------------------------------------------------

struct DirCmd;
impl Command for DirCmd {
    fn name(&self) -> &str {
        "dir"
    }
    fn aliases(&self) -> &[&str] {
        &["ls"]
    }
    fn description(&self) -> &str {
        "Display directory contents"
    }
    fn usage(&self) -> &str {
        "DIR [path]"
    }
    fn example(&self) -> Option<&str> {
        Some("dir, dir Documents")
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let target = args.iter().copied().find(|a| !a.starts_with('/'));
        let stamp = env.platform.now()?.listing_stamp();
        let listing = env.fs.list(target)?.stamped(stamp);
        Ok(CommandOutput::Text(listing.to_string()))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn aliases(&self) -> &[&str] {
        &["chdir"]
    }
    fn description(&self) -> &str {
        "Change current directory"
    }
    fn usage(&self) -> &str {
        "CD [path]"
    }
    fn example(&self) -> Option<&str> {
        Some("cd Documents, cd ..")
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        // `cd /d X` is accepted; drive switching needs no flag here.
        let args = match args.first() {
            Some(flag) if flag.eq_ignore_ascii_case("/d") => &args[1..],
            _ => args,
        };
        if args.is_empty() {
            return Ok(CommandOutput::Text(env.fs.cwd().to_string()));
        }
        env.fs.change_directory(&args.join(" "))?;
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Display current directory path"
    }
    fn usage(&self) -> &str {
        "PWD"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.fs.cwd().to_string()))
    }
}

// ---------------------------------------------------------------------------
// mkdir
// ---------------------------------------------------------------------------

struct MkdirCmd;
impl Command for MkdirCmd {
    fn name(&self) -> &str {
        "mkdir"
    }
    fn aliases(&self) -> &[&str] {
        &["md"]
    }
    fn description(&self) -> &str {
        "Create a new directory"
    }
    fn usage(&self) -> &str {
        "MKDIR <name>"
    }
    fn example(&self) -> Option<&str> {
        Some("mkdir newfolder")
    }
    fn min_args(&self) -> usize {
        1
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        env.fs.make_directory(args[0])?;
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// rmdir / del
// ---------------------------------------------------------------------------

/// Shared by `rmdir` and `del`: the first operand is the target, and
/// `/s`, `-r` or `-rf` (any case) allow removing a populated directory.
fn remove_target(args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
    let name = operands(args).next().ok_or(ShellError::Syntax)?;
    let recursive = args.iter().any(|a| {
        a.eq_ignore_ascii_case("/s") || a.eq_ignore_ascii_case("-rf") || a.eq_ignore_ascii_case("-r")
    });
    env.fs.remove(name, recursive)?;
    Ok(CommandOutput::None)
}

struct RmdirCmd;
impl Command for RmdirCmd {
    fn name(&self) -> &str {
        "rmdir"
    }
    fn aliases(&self) -> &[&str] {
        &["rd"]
    }
    fn description(&self) -> &str {
        "Remove a directory"
    }
    fn usage(&self) -> &str {
        "RMDIR <name>"
    }
    fn example(&self) -> Option<&str> {
        Some("rmdir oldfolder, rmdir /s projects")
    }
    fn min_args(&self) -> usize {
        1
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        remove_target(args, env)
    }
}

struct DelCmd;
impl Command for DelCmd {
    fn name(&self) -> &str {
        "del"
    }
    fn aliases(&self) -> &[&str] {
        &["rm", "erase"]
    }
    fn description(&self) -> &str {
        "Delete a file"
    }
    fn usage(&self) -> &str {
        "DEL <file>"
    }
    fn example(&self) -> Option<&str> {
        Some("del oldfile.txt")
    }
    fn min_args(&self) -> usize {
        1
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        remove_target(args, env)
    }
}

// ---------------------------------------------------------------------------
// type
// ---------------------------------------------------------------------------

struct TypeCmd;
impl Command for TypeCmd {
    fn name(&self) -> &str {
        "type"
    }
    fn aliases(&self) -> &[&str] {
        &["cat"]
    }
    fn description(&self) -> &str {
        "Display file contents"
    }
    fn usage(&self) -> &str {
        "TYPE <file>"
    }
    fn example(&self) -> Option<&str> {
        Some("type readme.txt")
    }
    fn min_args(&self) -> usize {
        1
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let content = env.fs.read_file(args[0])?;
        Ok(CommandOutput::Text(content.to_string()))
    }
}

// ---------------------------------------------------------------------------
// copy
// ---------------------------------------------------------------------------

struct CopyCmd;
impl Command for CopyCmd {
    fn name(&self) -> &str {
        "copy"
    }
    fn aliases(&self) -> &[&str] {
        &["cp"]
    }
    fn description(&self) -> &str {
        "Copy a file"
    }
    fn usage(&self) -> &str {
        "COPY <source> <destination>"
    }
    fn example(&self) -> Option<&str> {
        Some("copy file1.txt file2.txt")
    }
    fn min_args(&self) -> usize {
        2
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let destination = args[1];
        if destination.contains(['\\', '/', ':']) {
            return Err(ShellError::InvalidName {
                name: destination.to_string(),
            });
        }
        let target = env.fs.resolve(destination);
        if env.fs.lookup(&target).is_some_and(|n| n.is_dir()) {
            return Err(ShellError::AccessDenied {
                name: destination.to_string(),
            });
        }
        env.fs.copy_file(args[0], destination)?;
        Ok(CommandOutput::Text("        1 file(s) copied.".to_string()))
    }
}

// ---------------------------------------------------------------------------
// tree
// ---------------------------------------------------------------------------

struct TreeCmd;
impl Command for TreeCmd {
    fn name(&self) -> &str {
        "tree"
    }
    fn description(&self) -> &str {
        "Display directory structure as a tree"
    }
    fn usage(&self) -> &str {
        "TREE [path]"
    }
    fn example(&self) -> Option<&str> {
        Some("tree, tree D:\\Games")
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let target = args.iter().copied().find(|a| !a.starts_with('/'));
        let body = env.fs.render_tree(target)?;
        let root = match target {
            Some(p) => env.fs.resolve(p),
            None => env.fs.cwd().to_string(),
        };
        let mut out = format!(
            "Folder PATH listing for volume Windows\nVolume serial number is {}\n{root}",
            env.config.volume_serial
        );
        let body = body.trim_end_matches('\n');
        if !body.is_empty() {
            out.push('\n');
            out.push_str(body);
        }
        Ok(CommandOutput::Text(out))
    }
}

/// Register the namespace commands.
pub fn register_file_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(DirCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(MkdirCmd));
    reg.register(Box::new(RmdirCmd));
    reg.register(Box::new(DelCmd));
    reg.register(Box::new(TypeCmd));
    reg.register(Box::new(CopyCmd));
    reg.register(Box::new(TreeCmd));
}
