//! Replaying adapter for the `TelephonyManager` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::TelephonyManager;

/// Replays recorded telephony identifiers from a cassette.
pub struct ReplayingTelephonyManager {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingTelephonyManager {
    /// Creates a new replaying telephony manager from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl TelephonyManager for ReplayingTelephonyManager {
    fn device_id(&self) -> Option<String> {
        next_output(&self.replayer, "telephony", "device_id")
    }
}
