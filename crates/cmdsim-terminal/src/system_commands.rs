//! System information commands: tasklist, systeminfo, mem, date, time,
//! whoami, hostname, ver.

use cmdsim_types::error::Result;
use cmdsim_types::text::group_thousands;

use crate::interpreter::{Command, CommandOutput, Environment};

const TASKLIST_HEADER: &str = "\nImage Name                     PID Session Name        Session#    Mem Usage\n\
========================= ======== ================ =========== ============";

const PROCESSOR_LINE: &str =
    "                          [01]: Intel64 Family 6 Model 142 Stepping 12 GenuineIntel ~2.80 GHz";

const OS_BANNER: &str = "Microsoft Windows [Version 10.0.22621.2428]";

// ---------------------------------------------------------------------------
// tasklist
// ---------------------------------------------------------------------------

struct TasklistCmd;
impl Command for TasklistCmd {
    fn name(&self) -> &str {
        "tasklist"
    }
    fn aliases(&self) -> &[&str] {
        &["ps"]
    }
    fn description(&self) -> &str {
        "List all running processes"
    }
    fn usage(&self) -> &str {
        "TASKLIST"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let snapshot = env.platform.snapshot()?;
        let mut out = String::from(TASKLIST_HEADER);
        for proc in &snapshot.processes {
            let mem = format!("{:.1} MB", proc.mem_mb);
            out.push_str(&format!(
                "\n{:<25} {:>8} {:<16} {:>11} {:>12}",
                proc.name, proc.pid, "Console", "1", mem
            ));
        }
        Ok(CommandOutput::Text(out))
    }
}

// ---------------------------------------------------------------------------
// systeminfo
// ---------------------------------------------------------------------------

struct SysteminfoCmd;
impl Command for SysteminfoCmd {
    fn name(&self) -> &str {
        "systeminfo"
    }
    fn aliases(&self) -> &[&str] {
        &["cpu"]
    }
    fn description(&self) -> &str {
        "Display system information including CPU usage"
    }
    fn usage(&self) -> &str {
        "SYSTEMINFO"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let snapshot = env.platform.snapshot()?;
        let lines = [
            String::new(),
            format!("Host Name:                 {}", env.config.host_name),
            format!("OS Name:                   {}", env.config.os_name),
            format!("OS Version:                {}", env.config.os_version),
            "Processor(s):              1 Processor(s) Installed.".to_string(),
            PROCESSOR_LINE.to_string(),
            format!(
                "Total Physical Memory:     {} MB",
                snapshot.memory.total_mb
            ),
            format!(
                "Available Physical Memory: {} MB",
                snapshot.memory.available_mb()
            ),
            format!("CPU Usage:                 {}%", snapshot.cpu_percent),
        ];
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// mem
// ---------------------------------------------------------------------------

struct MemCmd;
impl Command for MemCmd {
    fn name(&self) -> &str {
        "mem"
    }
    fn aliases(&self) -> &[&str] {
        &["memory"]
    }
    fn description(&self) -> &str {
        "Display memory usage information"
    }
    fn usage(&self) -> &str {
        "MEM"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let memory = env.platform.snapshot()?.memory;
        Ok(CommandOutput::Text(format!(
            "\nMemory Status:\n\
             Total Physical Memory:     {} MB\n\
             Used Physical Memory:      {} MB ({:.1}%)\n\
             Available Physical Memory: {} MB",
            group_thousands(memory.total_mb),
            group_thousands(memory.used_mb),
            memory.used_percent(),
            group_thousands(memory.available_mb()),
        )))
    }
}

// ---------------------------------------------------------------------------
// date / time
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Display current date"
    }
    fn usage(&self) -> &str {
        "DATE"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let now = env.platform.now()?;
        Ok(CommandOutput::Text(format!(
            "The current date is: {}",
            now.date_string()
        )))
    }
}

struct TimeCmd;
impl Command for TimeCmd {
    fn name(&self) -> &str {
        "time"
    }
    fn description(&self) -> &str {
        "Display current time"
    }
    fn usage(&self) -> &str {
        "TIME"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let now = env.platform.now()?;
        Ok(CommandOutput::Text(format!(
            "The current time is: {}",
            now.time_string()
        )))
    }
}

// ---------------------------------------------------------------------------
// whoami / hostname / ver
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display the current user"
    }
    fn usage(&self) -> &str {
        "WHOAMI"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.config.qualified_user()))
    }
}

struct HostnameCmd;
impl Command for HostnameCmd {
    fn name(&self) -> &str {
        "hostname"
    }
    fn description(&self) -> &str {
        "Display the computer name"
    }
    fn usage(&self) -> &str {
        "HOSTNAME"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.config.host_name.clone()))
    }
}

struct VerCmd;
impl Command for VerCmd {
    fn name(&self) -> &str {
        "ver"
    }
    fn aliases(&self) -> &[&str] {
        &["version"]
    }
    fn description(&self) -> &str {
        "Display the Windows version"
    }
    fn usage(&self) -> &str {
        "VER"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(format!(
            "\n{OS_BANNER}\nCodeMate Terminal Emulator v{}",
            env!("CARGO_PKG_VERSION")
        )))
    }
}

/// Register the system information commands.
pub fn register_system_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(TasklistCmd));
    reg.register(Box::new(SysteminfoCmd));
    reg.register(Box::new(MemCmd));
    reg.register(Box::new(VerCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(TimeCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(HostnameCmd));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandRegistry, CommandResult};
    use cmdsim_platform::{SeededPlatform, WallClock};
    use cmdsim_types::config::ShellConfig;
    use cmdsim_vfs::Namespace;

    /// Fri 2026-10-16 15:04:05 UTC.
    const FRIDAY_AFTERNOON: u64 = 1_792_163_045;

    fn exec_with(config: &ShellConfig, line: &str) -> CommandResult {
        let mut reg = CommandRegistry::new();
        register_system_commands(&mut reg);
        let mut ns = Namespace::seeded(config).unwrap();
        let platform = SeededPlatform::new(
            42,
            WallClock::from_unix_secs(FRIDAY_AFTERNOON),
            config.total_memory_mb,
        );
        let mut env = Environment {
            fs: &mut ns,
            platform: &platform,
            config,
        };
        reg.run_line(line, &mut env)
    }

    fn exec(line: &str) -> String {
        let result = exec_with(&ShellConfig::default(), line);
        match result.output {
            CommandOutput::Text(s) => s,
            other => panic!("expected text for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn tasklist_columns() {
        let out = exec("tasklist");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with("Image Name"));
        assert!(lines[2].starts_with("========================= ========"));
        assert_eq!(lines.len(), 10);
        assert_eq!(
            lines[3],
            "explorer.exe                  1234 Console                    1      45.2 MB"
        );
        assert!(lines[9].starts_with("notepad.exe "));
        assert!(lines[9].ends_with("8.2 MB"));
    }

    #[test]
    fn ps_alias() {
        assert_eq!(exec("ps"), exec("TASKLIST"));
    }

    #[test]
    fn systeminfo_block() {
        let out = exec("systeminfo");
        assert!(out.starts_with("\nHost Name:                 CODEMATE-PC\n"));
        assert!(out.contains("OS Name:                   Microsoft Windows 11 Pro\n"));
        assert!(out.contains("OS Version:                10.0.22621 N/A Build 22621\n"));
        assert!(out.contains(PROCESSOR_LINE));
        assert!(out.contains("Total Physical Memory:     16384 MB\n"));
        let cpu_line = out.lines().last().unwrap();
        let pct: u8 = cpu_line
            .trim_start_matches("CPU Usage:")
            .trim()
            .trim_end_matches('%')
            .parse()
            .unwrap();
        assert!(pct < 100);
    }

    #[test]
    fn systeminfo_follows_config() {
        let config = ShellConfig {
            host_name: "BUILD-01".into(),
            total_memory_mb: 8_192,
            ..ShellConfig::default()
        };
        let out = exec_with(&config, "cpu").output.to_string();
        assert!(out.contains("Host Name:                 BUILD-01\n"));
        assert!(out.contains("Total Physical Memory:     8192 MB\n"));
    }

    #[test]
    fn mem_groups_thousands() {
        let out = exec("mem");
        assert!(out.starts_with("\nMemory Status:\nTotal Physical Memory:     16,384 MB\n"));
        let used = out.lines().nth(3).unwrap();
        assert!(used.starts_with("Used Physical Memory:      "));
        assert!(used.ends_with("%)"));
        assert!(out.lines().nth(4).unwrap().starts_with("Available Physical Memory: "));
    }

    #[test]
    fn date_and_time_use_clock() {
        assert_eq!(exec("date"), "The current date is: Fri 10/16/2026");
        assert_eq!(exec("time"), "The current time is: 03:04:05 PM");
    }

    #[test]
    fn identity_commands() {
        assert_eq!(exec("whoami"), "CODEMATE\\Administrator");
        assert_eq!(exec("hostname"), "CODEMATE-PC");
        let config = ShellConfig {
            user_domain: "LAB".into(),
            user_name: "ops".into(),
            ..ShellConfig::default()
        };
        assert_eq!(exec_with(&config, "whoami").output.to_string(), "LAB\\ops");
    }

    #[test]
    fn ver_banner() {
        let out = exec("version");
        assert!(out.starts_with("\nMicrosoft Windows [Version 10.0.22621.2428]\n"));
        assert!(out.contains("CodeMate Terminal Emulator v"));
    }
}
