//! Replaying adapter for the `BluetoothAdapter` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::BluetoothAdapter;

/// Replays recorded adapter addresses from a cassette.
pub struct ReplayingBluetoothAdapter {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingBluetoothAdapter {
    /// Creates a new replaying bluetooth adapter from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl BluetoothAdapter for ReplayingBluetoothAdapter {
    fn address(&self) -> Option<String> {
        next_output(&self.replayer, "bluetooth", "address")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::replayer_for;
    use serde_json::json;

    #[test]
    fn replays_missing_address() {
        let adapter =
            ReplayingBluetoothAdapter::new(replayer_for("bluetooth", "address", vec![json!(null)]));
        assert_eq!(adapter.address(), None);
    }
}
