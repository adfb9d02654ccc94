//! Replaying adapters that serve recorded platform interactions.

pub mod bluetooth;
pub mod permissions;
pub mod settings;
pub mod telephony;
pub mod wifi;

pub use bluetooth::ReplayingBluetoothAdapter;
pub use permissions::ReplayingPermissionChecker;
pub use settings::ReplayingSecureSettings;
pub use telephony::ReplayingTelephonyManager;
pub use wifi::ReplayingWifiManager;

use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;

/// Take the next recorded output for `port::method` and decode it.
///
/// An output of the wrong shape decodes to `T::default()` with a warning.
pub(crate) fn next_output<T>(replayer: &Mutex<CassetteReplayer>, port: &str, method: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let interaction = {
        let mut replayer = replayer.lock().unwrap_or_else(PoisonError::into_inner);
        replayer.next_interaction(port, method)
    };
    serde_json::from_value(interaction.output).unwrap_or_else(|e| {
        tracing::warn!(seq = interaction.seq, "{port}::{method}: unexpected recorded output: {e}");
        T::default()
    })
}
