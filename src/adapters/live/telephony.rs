//! Live telephony manager backed by ModemManager.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::ports::TelephonyManager;

const EQUIPMENT_ID_KEY: &str = "modem.generic.equipment-identifier";

/// Reads the modem's equipment identifier (IMEI/MEID) through `mmcli`.
#[derive(Debug, Clone)]
pub struct LiveTelephonyManager {
    program: PathBuf,
}

impl LiveTelephonyManager {
    /// Returns the telephony service if a modem answers through `program`.
    #[must_use]
    pub fn detect(program: &Path) -> Option<Self> {
        query_modem(program).map(|_| Self { program: program.to_path_buf() })
    }
}

impl TelephonyManager for LiveTelephonyManager {
    fn device_id(&self) -> Option<String> {
        query_modem(&self.program).and_then(|out| parse_equipment_identifier(&out))
    }
}

fn query_modem(program: &Path) -> Option<String> {
    let output = Command::new(program).args(["-m", "0", "-K"]).output().ok()?;
    if !output.status.success() {
        tracing::debug!(status = ?output.status.code(), "mmcli did not report a modem");
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Extracts the equipment identifier from `mmcli -K` key/value output.
///
/// `--` is how mmcli prints an unset value.
fn parse_equipment_identifier(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        if key.trim() != EQUIPMENT_ID_KEY {
            return None;
        }
        let value = value.trim();
        (value != "--").then(|| value.to_string())
    })
}
