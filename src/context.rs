//! Platform context bundling all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::adapters::live::{
    LiveBluetoothAdapter, LivePermissionChecker, LiveSecureSettings, LiveTelephonyManager,
    LiveWifiManager,
};
use crate::adapters::recording::{
    record_interaction, RecordingBluetoothAdapter, RecordingPermissionChecker,
    RecordingSecureSettings, RecordingTelephonyManager, RecordingWifiManager,
};
use crate::adapters::replaying::{
    ReplayingBluetoothAdapter, ReplayingPermissionChecker, ReplayingSecureSettings,
    ReplayingTelephonyManager, ReplayingWifiManager,
};
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::Settings;
use crate::ports::{
    BluetoothAdapter, PermissionChecker, SecureSettings, TelephonyManager, WifiManager,
};

/// Port and method under which optional service presence is recorded.
const PLATFORM_PORT: &str = "platform";
const SERVICES_METHOD: &str = "services";

/// Bundles all platform ports into the handle providers are queried with.
///
/// Optional services are `None` when the device does not have them.
/// Constructors wire up different adapter implementations (live,
/// recording, replaying).
pub struct PlatformContext {
    /// Capability checks.
    pub permissions: Box<dyn PermissionChecker>,
    /// Telephony service, absent on devices without a modem.
    pub telephony: Option<Box<dyn TelephonyManager>>,
    /// Secure settings store.
    pub settings: Box<dyn SecureSettings>,
    /// Wifi service, absent on devices without a wireless interface.
    pub wifi: Option<Box<dyn WifiManager>>,
    /// Default bluetooth adapter, absent on devices without one.
    pub bluetooth: Option<Box<dyn BluetoothAdapter>>,
    /// Optional cassette recorder; written by `finish`, or on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl PlatformContext {
    /// Creates a context from explicit port implementations.
    #[must_use]
    pub fn new(
        permissions: Box<dyn PermissionChecker>,
        telephony: Option<Box<dyn TelephonyManager>>,
        settings: Box<dyn SecureSettings>,
        wifi: Option<Box<dyn WifiManager>>,
        bluetooth: Option<Box<dyn BluetoothAdapter>>,
    ) -> Self {
        Self { permissions, telephony, settings, wifi, bluetooth, recorder: None }
    }

    /// Creates a live context probing the host this process runs on.
    #[must_use]
    pub fn live(settings: &Settings) -> Self {
        Self::new(
            Box::new(LivePermissionChecker::new(settings.granted.clone())),
            LiveTelephonyManager::detect(&settings.mmcli_program)
                .map(|t| Box::new(t) as Box<dyn TelephonyManager>),
            Box::new(LiveSecureSettings::new(&settings.settings_program)),
            LiveWifiManager::detect(&settings.sysfs_root)
                .map(|w| Box::new(w) as Box<dyn WifiManager>),
            LiveBluetoothAdapter::detect(&settings.sysfs_root)
                .map(|b| Box::new(b) as Box<dyn BluetoothAdapter>),
        )
    }

    /// Creates a recording context that writes a cassette file on `finish`.
    ///
    /// Uses live adapters for actual work and records every port
    /// interaction, including which optional services were present.
    #[must_use]
    pub fn recording(path: &Path, settings: &Settings) -> Self {
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(path, "devid-session", "unknown")));

        let telephony = LiveTelephonyManager::detect(&settings.mmcli_program);
        let wifi = LiveWifiManager::detect(&settings.sysfs_root);
        let bluetooth = LiveBluetoothAdapter::detect(&settings.sysfs_root);

        let present: Vec<&str> = [
            telephony.as_ref().map(|_| "telephony"),
            wifi.as_ref().map(|_| "wifi"),
            bluetooth.as_ref().map(|_| "bluetooth"),
        ]
        .into_iter()
        .flatten()
        .collect();
        record_interaction(&recorder, PLATFORM_PORT, SERVICES_METHOD, &(), &present);

        Self {
            permissions: Box::new(RecordingPermissionChecker::new(
                Box::new(LivePermissionChecker::new(settings.granted.clone())),
                Arc::clone(&recorder),
            )),
            telephony: telephony.map(|inner| {
                let inner = Box::new(inner);
                Box::new(RecordingTelephonyManager::new(inner, Arc::clone(&recorder)))
                    as Box<dyn TelephonyManager>
            }),
            settings: Box::new(RecordingSecureSettings::new(
                Box::new(LiveSecureSettings::new(&settings.settings_program)),
                Arc::clone(&recorder),
            )),
            wifi: wifi.map(|inner| {
                Box::new(RecordingWifiManager::new(Box::new(inner), Arc::clone(&recorder)))
                    as Box<dyn WifiManager>
            }),
            bluetooth: bluetooth.map(|inner| {
                let inner = Box::new(inner);
                Box::new(RecordingBluetoothAdapter::new(inner, Arc::clone(&recorder)))
                    as Box<dyn BluetoothAdapter>
            }),
            recorder: Some(recorder),
        }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        Ok(Self::from_cassette(&cassette))
    }

    /// Creates a replaying context from an already loaded cassette.
    ///
    /// An optional service is present only if the cassette's
    /// `platform::services` interaction lists it.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        let present = present_services(cassette);
        let has = |service: &str| present.iter().any(|s| s == service);

        // Each port gets its own replayer so that per-port cursors are independent.
        Self::new(
            Box::new(ReplayingPermissionChecker::new(CassetteReplayer::new(cassette))),
            has("telephony").then(|| {
                Box::new(ReplayingTelephonyManager::new(CassetteReplayer::new(cassette)))
                    as Box<dyn TelephonyManager>
            }),
            Box::new(ReplayingSecureSettings::new(CassetteReplayer::new(cassette))),
            has("wifi").then(|| {
                Box::new(ReplayingWifiManager::new(CassetteReplayer::new(cassette)))
                    as Box<dyn WifiManager>
            }),
            has("bluetooth").then(|| {
                Box::new(ReplayingBluetoothAdapter::new(CassetteReplayer::new(cassette)))
                    as Box<dyn BluetoothAdapter>
            }),
        )
    }
}

fn present_services(cassette: &Cassette) -> Vec<String> {
    cassette
        .interactions
        .iter()
        .find(|i| i.port == PLATFORM_PORT && i.method == SERVICES_METHOD)
        .and_then(|i| serde_json::from_value(i.output.clone()).ok())
        .unwrap_or_default()
}

impl PlatformContext {
    /// Writes the recorded cassette, if this context is recording.
    ///
    /// Returns the cassette path, or `None` for contexts that do not record.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(mut self) -> Result<Option<PathBuf>, String> {
        let Some(recorder) = self.recorder.take() else { return Ok(None) };
        let guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
        let path = guard.save().map_err(|e| format!("Failed to write cassette: {e}"))?;
        Ok(Some(path))
    }
}

impl Drop for PlatformContext {
    fn drop(&mut self) {
        // Only reached when `finish` was not called.
        let Some(recorder) = self.recorder.take() else { return };
        let guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.save() {
            Ok(path) => tracing::info!(path = %path.display(), "cassette written"),
            Err(e) => tracing::warn!("failed to write cassette: {e}"),
        }
    }
}
