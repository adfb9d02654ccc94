//! Live wifi manager reading the wireless interface from sysfs.

use std::path::{Path, PathBuf};

use crate::ports::WifiManager;

/// The first wireless network interface found under `<sysfs>/class/net`.
#[derive(Debug, Clone)]
pub struct LiveWifiManager {
    interface: PathBuf,
}

impl LiveWifiManager {
    /// Returns the wifi service if a wireless interface exists under `sysfs_root`.
    ///
    /// Interfaces are considered in name order so the choice is stable.
    #[must_use]
    pub fn detect(sysfs_root: &Path) -> Option<Self> {
        let mut interfaces: Vec<PathBuf> = std::fs::read_dir(sysfs_root.join("class/net"))
            .ok()?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect();
        interfaces.sort();
        let interface = interfaces.into_iter().find(|dir| dir.join("wireless").exists())?;
        tracing::debug!(interface = %interface.display(), "wireless interface found");
        Some(Self { interface })
    }
}

impl WifiManager for LiveWifiManager {
    fn mac_address(&self) -> Option<String> {
        read_address(&self.interface.join("address"))
    }
}

/// Reads a sysfs `address` attribute; missing or blank files yield `None`.
pub(crate) fn read_address(path: &Path) -> Option<String> {
    let raw = std::fs::read_to_string(path).ok()?;
    let address = raw.trim();
    (!address.is_empty()).then(|| address.to_uppercase())
}
