//! Recording adapter for the `SecureSettings` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::SecureSettings;

/// Records settings lookups while delegating to an inner implementation.
pub struct RecordingSecureSettings {
    inner: Box<dyn SecureSettings>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSecureSettings {
    /// Creates a new recording settings store wrapping the given implementation.
    pub fn new(inner: Box<dyn SecureSettings>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct KeyInput<'a> {
    key: &'a str,
}

impl SecureSettings for RecordingSecureSettings {
    fn get_string(&self, key: &str) -> Option<String> {
        let value = self.inner.get_string(key);
        record_interaction(&self.recorder, "settings", "get_string", &KeyInput { key }, &value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::recording::test_support::{recorder_in, save_and_load};
    use serde_json::json;

    struct Fixed(Option<&'static str>);

    impl SecureSettings for Fixed {
        fn get_string(&self, _key: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn records_lookup_with_key() {
        let (recorder, dir) = recorder_in("devid_rec_settings_test");
        {
            let inner = Box::new(Fixed(Some("a1b2c3")));
            let settings = RecordingSecureSettings::new(inner, Arc::clone(&recorder));
            assert_eq!(settings.get_string("android_id").as_deref(), Some("a1b2c3"));
        }

        let cassette = save_and_load(&recorder, &dir);
        assert_eq!(cassette.interactions[0].method, "get_string");
        assert_eq!(cassette.interactions[0].input, json!({"key": "android_id"}));
        assert_eq!(cassette.interactions[0].output, json!("a1b2c3"));
    }

    #[test]
    fn records_unset_value_as_null() {
        let (recorder, dir) = recorder_in("devid_rec_settings_null_test");
        {
            let inner = Box::new(Fixed(None));
            let settings = RecordingSecureSettings::new(inner, Arc::clone(&recorder));
            assert_eq!(settings.get_string("android_id"), None);
        }

        let cassette = save_and_load(&recorder, &dir);
        assert_eq!(cassette.interactions[0].output, json!(null));
    }
}
