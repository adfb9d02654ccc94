//! Live bluetooth adapter reading the default controller from sysfs.

use std::path::{Path, PathBuf};

use super::wifi::read_address;
use crate::ports::BluetoothAdapter;

/// The default controller, `hci0`.
#[derive(Debug, Clone)]
pub struct LiveBluetoothAdapter {
    controller: PathBuf,
}

impl LiveBluetoothAdapter {
    /// Returns the default adapter if `<sysfs>/class/bluetooth/hci0` exists.
    #[must_use]
    pub fn detect(sysfs_root: &Path) -> Option<Self> {
        let controller = sysfs_root.join("class/bluetooth/hci0");
        controller.is_dir().then_some(Self { controller })
    }
}

impl BluetoothAdapter for LiveBluetoothAdapter {
    fn address(&self) -> Option<String> {
        read_address(&self.controller.join("address"))
    }
}
