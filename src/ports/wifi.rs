//! Wifi port exposing the wireless interface's hardware address.

/// Access to the wifi service.
pub trait WifiManager: Send + Sync {
    /// Returns the MAC address of the wireless interface, if known.
    fn mac_address(&self) -> Option<String>;
}
