//! Session configuration.
//!
//! Every field has a default matching the reference machine, so an empty TOML
//! document (or no config file at all) yields a working session.
//!
//! ```toml
//! host_name = "CODEMATE-PC"
//! primary_drive = "C:"
//! protected_names = ["Windows", "System32", "Program Files", "Users"]
//! hint_low = 0.5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};

/// Identity, volume, and display settings for one shell session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Reported by `hostname` and `systeminfo`.
    pub host_name: String,
    /// Domain half of `whoami`.
    pub user_domain: String,
    /// User half of `whoami`.
    pub user_name: String,
    /// Starting directory, also the target of "go home".
    pub home: String,
    /// Drive whose top-level names are protected from deletion.
    pub primary_drive: String,
    /// Names that cannot be removed while on the primary drive.
    pub protected_names: Vec<String>,
    /// Fake serial shown in `dir` and `tree` banners.
    pub volume_serial: String,
    /// Free-space figure shown at the bottom of `dir`.
    pub free_bytes: u64,
    pub os_name: String,
    pub os_version: String,
    /// Total physical memory reported by `mem` and `systeminfo`.
    pub total_memory_mb: u64,
    /// Maximum number of autocomplete suggestions returned.
    pub suggestion_limit: usize,
    /// Number of suggestions a shell should display.
    pub suggestions_shown: usize,
    /// Explanations are shown only when `hint_low < confidence < hint_high`.
    pub hint_low: f32,
    pub hint_high: f32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            host_name: "CODEMATE-PC".to_string(),
            user_domain: "CODEMATE".to_string(),
            user_name: "Administrator".to_string(),
            home: "C:\\Users\\Administrator".to_string(),
            primary_drive: "C:".to_string(),
            protected_names: ["Windows", "System32", "Program Files", "Users"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            volume_serial: "1A2B-3C4D".to_string(),
            free_bytes: 999_999_999_999,
            os_name: "Microsoft Windows 11 Pro".to_string(),
            os_version: "10.0.22621 N/A Build 22621".to_string(),
            total_memory_mb: 16_384,
            suggestion_limit: 10,
            suggestions_shown: 5,
            hint_low: 0.5,
            hint_high: 1.0,
        }
    }
}

impl ShellConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file from the host file system.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject settings the namespace engine cannot honor.
    pub fn validate(&self) -> Result<()> {
        if !is_drive_token(&self.primary_drive) {
            return Err(ShellError::Config(format!(
                "primary_drive must look like 'C:', got '{}'",
                self.primary_drive
            )));
        }
        if !self.home.contains(':') {
            return Err(ShellError::Config(format!(
                "home must be an absolute path, got '{}'",
                self.home
            )));
        }
        if !(0.0..=1.0).contains(&self.hint_low)
            || !(0.0..=1.0).contains(&self.hint_high)
            || self.hint_low >= self.hint_high
        {
            return Err(ShellError::Config(format!(
                "hint thresholds must satisfy 0 <= low < high <= 1 (low={}, high={})",
                self.hint_low, self.hint_high
            )));
        }
        if self.total_memory_mb == 0 {
            return Err(ShellError::Config(
                "total_memory_mb must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// `DOMAIN\user`, as printed by `whoami`.
    pub fn qualified_user(&self) -> String {
        format!("{}\\{}", self.user_domain, self.user_name)
    }

    /// Whether a parse confidence deserves an advisory hint line.
    pub fn wants_hint(&self, confidence: f32) -> bool {
        confidence > self.hint_low && confidence < self.hint_high
    }
}

/// A drive token is one ASCII letter followed by `:`.
pub fn is_drive_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
