//! Replaying adapter for the `SecureSettings` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::SecureSettings;

/// Replays recorded settings values from a cassette.
pub struct ReplayingSecureSettings {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingSecureSettings {
    /// Creates a new replaying settings store from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl SecureSettings for ReplayingSecureSettings {
    fn get_string(&self, _key: &str) -> Option<String> {
        next_output(&self.replayer, "settings", "get_string")
    }
}
