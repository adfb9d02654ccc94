//! Environment-driven configuration.

use std::path::PathBuf;

use thiserror::Error;
use tracing::Level;

use crate::ports::Capability;

/// Record every port interaction to this cassette path.
pub const RECORD_VAR: &str = "DEVID_RECORD";
/// Serve every port from this cassette path.
pub const REPLAY_VAR: &str = "DEVID_REPLAY";
/// Comma-separated granted capabilities, or `*`.
pub const GRANTED_VAR: &str = "DEVID_GRANTED";
/// Root of the sysfs tree live adapters read from.
pub const SYSFS_VAR: &str = "DEVID_SYSFS";
/// Program the live telephony adapter queries the modem with.
pub const MMCLI_VAR: &str = "DEVID_MMCLI";
/// Program the live settings adapter reads secure settings with.
pub const SETTINGS_BIN_VAR: &str = "DEVID_SETTINGS_BIN";
/// Default log level when `RUST_LOG` is unset.
pub const LOG_VAR: &str = "DEVID_LOG";

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Recording and replaying were both requested.
    #[error("DEVID_RECORD and DEVID_REPLAY cannot both be set")]
    RecordAndReplay,

    /// A capability name in the grant list is not recognised.
    #[error("Invalid DEVID_GRANTED: {0}")]
    UnknownCapability(String),

    /// The log level is not one of trace, debug, info, warn, error.
    #[error("Invalid DEVID_LOG: {0:?}")]
    InvalidLogLevel(String),
}

/// How platform ports are served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Probe the host directly.
    Live,
    /// Probe the host and record a cassette to the path.
    Record(PathBuf),
    /// Serve a recorded cassette from the path.
    Replay(PathBuf),
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Port mode.
    pub mode: Mode,
    /// Capabilities granted to the live permission checker.
    pub granted: Vec<Capability>,
    /// Root of the sysfs tree.
    pub sysfs_root: PathBuf,
    /// ModemManager command-line client.
    pub mmcli_program: PathBuf,
    /// Secure settings command.
    pub settings_program: PathBuf,
    /// Default log level.
    pub log_level: Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Live,
            granted: Capability::ALL.to_vec(),
            sysfs_root: PathBuf::from("/sys"),
            mmcli_program: PathBuf::from("mmcli"),
            settings_program: PathBuf::from("settings"),
            log_level: Level::WARN,
        }
    }
}

impl Settings {
    /// Loads settings from the process environment, after reading `.env`
    /// from the working directory if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through `lookup`, treating blank values as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();

        settings.mode = match (get(RECORD_VAR), get(REPLAY_VAR)) {
            (Some(_), Some(_)) => return Err(ConfigError::RecordAndReplay),
            (Some(path), None) => Mode::Record(PathBuf::from(path)),
            (None, Some(path)) => Mode::Replay(PathBuf::from(path)),
            (None, None) => Mode::Live,
        };
        if let Some(granted) = get(GRANTED_VAR) {
            settings.granted = parse_granted(&granted)?;
        }
        if let Some(root) = get(SYSFS_VAR) {
            settings.sysfs_root = PathBuf::from(root);
        }
        if let Some(program) = get(MMCLI_VAR) {
            settings.mmcli_program = PathBuf::from(program);
        }
        if let Some(program) = get(SETTINGS_BIN_VAR) {
            settings.settings_program = PathBuf::from(program);
        }
        if let Some(level) = get(LOG_VAR) {
            settings.log_level =
                level.trim().parse().map_err(|_| ConfigError::InvalidLogLevel(level))?;
        }
        Ok(settings)
    }
}

fn parse_granted(list: &str) -> Result<Vec<Capability>, ConfigError> {
    let mut granted = Vec::new();
    for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if name == "*" {
            return Ok(Capability::ALL.to_vec());
        }
        let capability: Capability = name.parse().map_err(ConfigError::UnknownCapability)?;
        if !granted.contains(&capability) {
            granted.push(capability);
        }
    }
    Ok(granted)
}
