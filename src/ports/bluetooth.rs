//! Bluetooth port exposing the default adapter's hardware address.

/// The default bluetooth adapter.
pub trait BluetoothAdapter: Send + Sync {
    /// Returns the adapter's hardware address, if known.
    fn address(&self) -> Option<String>;
}
