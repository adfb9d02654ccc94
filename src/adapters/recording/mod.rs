//! Recording adapters that capture platform interactions to a cassette.

pub mod bluetooth;
pub mod permissions;
pub mod settings;
pub mod telephony;
pub mod wifi;

pub use bluetooth::RecordingBluetoothAdapter;
pub use permissions::RecordingPermissionChecker;
pub use settings::RecordingSecureSettings;
pub use telephony::RecordingTelephonyManager;
pub use wifi::RecordingWifiManager;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Record one port call's input and output.
///
/// Values that fail to serialize are recorded as `null`; a recording is
/// a diagnostic artefact and must never change what the caller sees.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize + ?Sized,
    O: Serialize + ?Sized,
{
    let input_json = serde_json::to_value(input).unwrap_or_default();
    let output_json = serde_json::to_value(output).unwrap_or_default();

    let mut guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
    guard.record(port, method, input_json, output_json);
}
