//! Replaying adapter for the `PermissionChecker` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{Capability, PermissionChecker};

/// Replays recorded permission decisions from a cassette.
pub struct ReplayingPermissionChecker {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingPermissionChecker {
    /// Creates a new replaying permission checker from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl PermissionChecker for ReplayingPermissionChecker {
    fn check(&self, _capability: Capability) -> bool {
        next_output(&self.replayer, "permissions", "check")
    }
}
