//! Recording adapter for the `BluetoothAdapter` port.

use std::sync::{Arc, Mutex};

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::BluetoothAdapter;

/// Records adapter lookups while delegating to an inner implementation.
pub struct RecordingBluetoothAdapter {
    inner: Box<dyn BluetoothAdapter>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingBluetoothAdapter {
    /// Creates a new recording bluetooth adapter wrapping the given implementation.
    pub fn new(inner: Box<dyn BluetoothAdapter>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl BluetoothAdapter for RecordingBluetoothAdapter {
    fn address(&self) -> Option<String> {
        let address = self.inner.address();
        record_interaction(&self.recorder, "bluetooth", "address", &(), &address);
        address
    }
}
