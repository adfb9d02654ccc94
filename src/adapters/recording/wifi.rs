//! Recording adapter for the `WifiManager` port.

use std::sync::{Arc, Mutex};

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::WifiManager;

/// Records wifi lookups while delegating to an inner implementation.
pub struct RecordingWifiManager {
    inner: Box<dyn WifiManager>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingWifiManager {
    /// Creates a new recording wifi manager wrapping the given implementation.
    pub fn new(inner: Box<dyn WifiManager>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl WifiManager for RecordingWifiManager {
    fn mac_address(&self) -> Option<String> {
        let mac = self.inner.mac_address();
        record_interaction(&self.recorder, "wifi", "mac_address", &(), &mac);
        mac
    }
}
