//! Live secure settings read through the platform `settings` command.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::ports::SecureSettings;

/// Reads the secure settings namespace via `<program> get secure <key>`.
#[derive(Debug, Clone)]
pub struct LiveSecureSettings {
    program: PathBuf,
}

impl LiveSecureSettings {
    /// Creates a settings store that shells out to `program`.
    #[must_use]
    pub fn new(program: &Path) -> Self {
        Self { program: program.to_path_buf() }
    }
}

impl SecureSettings for LiveSecureSettings {
    fn get_string(&self, key: &str) -> Option<String> {
        let output = match Command::new(&self.program).args(["get", "secure", key]).output() {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("settings command unavailable: {e}");
                return None;
            }
        };
        if !output.status.success() {
            return None;
        }
        parse_setting(&String::from_utf8_lossy(&output.stdout))
    }
}

/// `settings get` prints the literal `null` for unset keys.
fn parse_setting(stdout: &str) -> Option<String> {
    let value = stdout.trim_end_matches(['\r', '\n']);
    (value != "null").then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_unset() {
        let settings = LiveSecureSettings::new(Path::new("/nonexistent/devid/settings"));
        assert_eq!(settings.get_string("android_id"), None);
    }

    #[test]
    fn strips_trailing_newline() {
        assert_eq!(parse_setting("9774d56d682e549c\n").as_deref(), Some("9774d56d682e549c"));
    }

    #[test]
    fn null_is_unset() {
        assert_eq!(parse_setting("null\n"), None);
    }

    #[test]
    fn empty_value_is_passed_through() {
        assert_eq!(parse_setting("\n").as_deref(), Some(""));
    }
}
