//! Live adapters probing the host this process runs on.

pub mod bluetooth;
pub mod permissions;
pub mod settings;
pub mod telephony;
pub mod wifi;

pub use bluetooth::LiveBluetoothAdapter;
pub use permissions::LivePermissionChecker;
pub use settings::LiveSecureSettings;
pub use telephony::LiveTelephonyManager;
pub use wifi::LiveWifiManager;
