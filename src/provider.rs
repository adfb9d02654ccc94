//! Identifier providers, one per platform identifier source.

use tracing::{error, warn};

use crate::context::PlatformContext;
use crate::error::PermissionDenied;
use crate::ports::settings::ANDROID_ID;
use crate::ports::Capability;

/// Secure ID returned by a large population of devices and emulators.
///
/// See <http://code.google.com/p/android/issues/detail?id=10603>.
pub const KNOWN_BAD_ANDROID_ID: &str = "9774d56d682e549c";

const ANDROID_ID_BUG_MSG: &str =
    "The device suffers from the Android ID bug - its ID is the emulator ID : 9774d56d682e549c";

/// Outcome of asking a single provider for an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// A usable identifier.
    Success(String),
    /// A value that is known to be shared by many devices.
    NotUnique(String),
    /// The source is missing or reported nothing.
    Unavailable,
}

/// A single identifier source.
pub trait IdentifierProvider: Send + Sync {
    /// Short, stable name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Attempts to read this provider's identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PermissionDenied`] when a required capability is not
    /// granted. This is not a reason to try the next provider.
    fn produce(&self, ctx: &PlatformContext) -> Result<Probe, PermissionDenied>;
}

fn require(ctx: &PlatformContext, capability: Capability) -> Result<(), PermissionDenied> {
    if ctx.permissions.check(capability) {
        Ok(())
    } else {
        Err(PermissionDenied { capability })
    }
}

/// Maps a raw service reading onto a probe. `None` and blank are unavailable.
fn probe_value(source: &str, value: Option<String>) -> Probe {
    match value {
        Some(value) if !value.is_empty() => Probe::Success(value),
        _ => {
            warn!("{source} returned no identifier");
            Probe::Unavailable
        }
    }
}

/// Telephony device ID (IMEI/MEID). Requires [`Capability::ReadPhoneState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TelephonyId;

impl IdentifierProvider for TelephonyId {
    fn name(&self) -> &'static str {
        "telephony"
    }

    fn produce(&self, ctx: &PlatformContext) -> Result<Probe, PermissionDenied> {
        require(ctx, Capability::ReadPhoneState)?;
        let Some(telephony) = &ctx.telephony else {
            warn!("Telephony Manager not available");
            return Ok(Probe::Unavailable);
        };
        Ok(probe_value("Telephony Manager", telephony.device_id()))
    }
}

/// The secure-settings `android_id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidSecureId;

impl IdentifierProvider for AndroidSecureId {
    fn name(&self) -> &'static str {
        "android_id"
    }

    fn produce(&self, ctx: &PlatformContext) -> Result<Probe, PermissionDenied> {
        let value = ctx.settings.get_string(ANDROID_ID);
        if value.as_deref() == Some(KNOWN_BAD_ANDROID_ID) {
            error!("{}", ANDROID_ID_BUG_MSG);
            return Ok(Probe::NotUnique(ANDROID_ID_BUG_MSG.to_string()));
        }
        Ok(probe_value("Secure settings", value))
    }
}

/// Wifi MAC address. Requires [`Capability::AccessWifiState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WifiMacId;

impl IdentifierProvider for WifiMacId {
    fn name(&self) -> &'static str {
        "wifi_mac"
    }

    fn produce(&self, ctx: &PlatformContext) -> Result<Probe, PermissionDenied> {
        let Some(wifi) = &ctx.wifi else {
            warn!("Wifi Manager not available");
            return Ok(Probe::Unavailable);
        };
        require(ctx, Capability::AccessWifiState)?;
        Ok(probe_value("Wifi Manager", wifi.mac_address()))
    }
}

/// Default bluetooth adapter address. Requires [`Capability::Bluetooth`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BluetoothMacId;

impl IdentifierProvider for BluetoothMacId {
    fn name(&self) -> &'static str {
        "bluetooth_mac"
    }

    fn produce(&self, ctx: &PlatformContext) -> Result<Probe, PermissionDenied> {
        let Some(adapter) = &ctx.bluetooth else {
            warn!("Bluetooth Adapter not available");
            return Ok(Probe::Unavailable);
        };
        require(ctx, Capability::Bluetooth)?;
        Ok(probe_value("Bluetooth Adapter", adapter.address()))
    }
}

/// The providers in evaluation priority order.
#[must_use]
pub fn default_chain() -> Vec<Box<dyn IdentifierProvider>> {
    vec![
        Box::new(TelephonyId),
        Box::new(AndroidSecureId),
        Box::new(WifiMacId),
        Box::new(BluetoothMacId),
    ]
}


#[cfg(test)]
mod tests {
    use super::test_support::{context, context_with_services};
    use super::*;
    use serde_json::json;

    #[test]
    fn chain_is_in_priority_order() {
        let names: Vec<&str> = default_chain().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["telephony", "android_id", "wifi_mac", "bluetooth_mac"]);
    }

    #[test]
    fn telephony_checks_permission_before_service() {
        let ctx = context_with_services(&[], &[("permissions", "check", json!(false))]);
        let err = TelephonyId.produce(&ctx).unwrap_err();
        assert_eq!(err.capability, Capability::ReadPhoneState);
    }

    #[test]
    fn telephony_without_service_is_unavailable() {
        let ctx = context_with_services(&[], &[("permissions", "check", json!(true))]);
        assert_eq!(TelephonyId.produce(&ctx), Ok(Probe::Unavailable));
    }

    #[test]
    fn telephony_returns_device_id() {
        let ctx = context(&[
            ("permissions", "check", json!(true)),
            ("telephony", "device_id", json!("356938035643809")),
        ]);
        assert_eq!(TelephonyId.produce(&ctx), Ok(Probe::Success("356938035643809".into())));
    }

    #[test]
    fn android_id_sentinel_is_not_unique() {
        let ctx = context(&[("settings", "get_string", json!(KNOWN_BAD_ANDROID_ID))]);
        let Ok(Probe::NotUnique(reason)) = AndroidSecureId.produce(&ctx) else {
            panic!("expected NotUnique");
        };
        assert!(reason.contains("Android ID bug"));
    }

    #[test]
    fn android_id_unset_or_empty_is_unavailable() {
        let ctx = context(&[
            ("settings", "get_string", json!(null)),
            ("settings", "get_string", json!("")),
        ]);
        assert_eq!(AndroidSecureId.produce(&ctx), Ok(Probe::Unavailable));
        assert_eq!(AndroidSecureId.produce(&ctx), Ok(Probe::Unavailable));
    }

    #[test]
    fn wifi_checks_service_before_permission() {
        // No permission interaction recorded: replaying one would panic.
        let ctx = context_with_services(&[], &[]);
        assert_eq!(WifiMacId.produce(&ctx), Ok(Probe::Unavailable));
    }

    #[test]
    fn wifi_denied_permission_is_an_error() {
        let ctx = context_with_services(&["wifi"], &[("permissions", "check", json!(false))]);
        let err = WifiMacId.produce(&ctx).unwrap_err();
        assert_eq!(err.capability, Capability::AccessWifiState);
    }

    #[test]
    fn bluetooth_returns_adapter_address() {
        let ctx = context(&[
            ("permissions", "check", json!(true)),
            ("bluetooth", "address", json!("00:1A:7D:DA:71:13")),
        ]);
        assert_eq!(BluetoothMacId.produce(&ctx), Ok(Probe::Success("00:1A:7D:DA:71:13".into())));
    }
}
