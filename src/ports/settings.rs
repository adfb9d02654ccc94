//! Secure settings port for persisted platform settings.

/// Settings key holding the 64-bit secure identifier generated on first boot.
pub const ANDROID_ID: &str = "android_id";

/// Read access to the secure settings store.
pub trait SecureSettings: Send + Sync {
    /// Returns the value stored under `key`, or `None` when unset.
    fn get_string(&self, key: &str) -> Option<String>;
}
