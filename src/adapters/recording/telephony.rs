//! Recording adapter for the `TelephonyManager` port.

use std::sync::{Arc, Mutex};

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::TelephonyManager;

/// Records telephony lookups while delegating to an inner implementation.
pub struct RecordingTelephonyManager {
    inner: Box<dyn TelephonyManager>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingTelephonyManager {
    /// Creates a new recording telephony manager wrapping the given implementation.
    pub fn new(inner: Box<dyn TelephonyManager>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl TelephonyManager for RecordingTelephonyManager {
    fn device_id(&self) -> Option<String> {
        let id = self.inner.device_id();
        record_interaction(&self.recorder, "telephony", "device_id", &(), &id);
        id
    }
}
