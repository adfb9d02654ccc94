//! Recording adapter for the `PermissionChecker` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{Capability, PermissionChecker};

/// Records permission checks while delegating to an inner implementation.
pub struct RecordingPermissionChecker {
    inner: Box<dyn PermissionChecker>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingPermissionChecker {
    /// Creates a new recording permission checker wrapping the given implementation.
    pub fn new(inner: Box<dyn PermissionChecker>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct CheckInput {
    capability: Capability,
}

impl PermissionChecker for RecordingPermissionChecker {
    fn check(&self, capability: Capability) -> bool {
        let granted = self.inner.check(capability);
        let input = CheckInput { capability };
        record_interaction(&self.recorder, "permissions", "check", &input, &granted);
        granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LivePermissionChecker;
    use crate::adapters::recording::test_support::{recorder_in, save_and_load};
    use serde_json::json;

    #[test]
    fn records_check_interaction() {
        let (recorder, dir) = recorder_in("devid_rec_permissions_test");
        {
            let checker = RecordingPermissionChecker::new(
                Box::new(LivePermissionChecker::new(vec![Capability::Bluetooth])),
                Arc::clone(&recorder),
            );
            assert!(checker.check(Capability::Bluetooth));
            assert!(!checker.check(Capability::ReadPhoneState));
        }

        let cassette = save_and_load(&recorder, &dir);
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].port, "permissions");
        assert_eq!(cassette.interactions[0].input, json!({"capability": "Bluetooth"}));
        assert_eq!(cassette.interactions[0].output, json!(true));
        assert_eq!(cassette.interactions[1].output, json!(false));
    }
}
