//! Telephony port exposing the device's telephony identifier.

/// Access to the telephony service.
pub trait TelephonyManager: Send + Sync {
    /// Returns the device identifier (IMEI for GSM, MEID for CDMA), if the
    /// service reports one.
    fn device_id(&self) -> Option<String>;
}
