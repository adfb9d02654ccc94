//! Permission port for checking granted platform capabilities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A restricted platform capability gating access to an identifier source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Read the device telephony state (IMEI/MEID).
    ReadPhoneState,
    /// Read the wifi connection state, including the MAC address.
    AccessWifiState,
    /// Talk to the default bluetooth adapter.
    Bluetooth,
}

impl Capability {
    /// All known capabilities.
    pub const ALL: [Self; 3] = [Self::ReadPhoneState, Self::AccessWifiState, Self::Bluetooth];

    /// The platform's fully qualified permission name.
    #[must_use]
    pub fn platform_name(self) -> &'static str {
        match self {
            Self::ReadPhoneState => "android.permission.READ_PHONE_STATE",
            Self::AccessWifiState => "android.permission.ACCESS_WIFI_STATE",
            Self::Bluetooth => "android.permission.BLUETOOTH",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Self::ReadPhoneState => "READ_PHONE_STATE",
            Self::AccessWifiState => "ACCESS_WIFI_STATE",
            Self::Bluetooth => "BLUETOOTH",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.platform_name())
    }
}

impl FromStr for Capability {
    type Err = String;

    /// Accepts either the short (`BLUETOOTH`) or the fully qualified name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.short_name().eq_ignore_ascii_case(s) || c.platform_name() == s)
            .ok_or_else(|| format!("Unknown capability: {s:?}"))
    }
}

/// Answers whether a capability has been granted to this process.
pub trait PermissionChecker: Send + Sync {
    /// Returns `true` when `capability` is granted.
    fn check(&self, capability: Capability) -> bool;
}
