//! Port traits defining platform boundaries.
//!
//! Each trait represents one platform collaborator the identifier
//! providers talk to (permissions, telephony, secure settings, wifi,
//! bluetooth). Implementations live in `src/adapters/`.

pub mod bluetooth;
pub mod permissions;
pub mod settings;
pub mod telephony;
pub mod wifi;

pub use bluetooth::BluetoothAdapter;
pub use permissions::{Capability, PermissionChecker};
pub use settings::SecureSettings;
pub use telephony::TelephonyManager;
pub use wifi::WifiManager;
