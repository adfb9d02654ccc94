//! Replaying adapter for the `WifiManager` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::WifiManager;

/// Replays recorded wifi MAC addresses from a cassette.
pub struct ReplayingWifiManager {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingWifiManager {
    /// Creates a new replaying wifi manager from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl WifiManager for ReplayingWifiManager {
    fn mac_address(&self) -> Option<String> {
        next_output(&self.replayer, "wifi", "mac_address")
    }
}
