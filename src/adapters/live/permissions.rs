//! Live permission checker backed by the configured grant set.

use crate::ports::{Capability, PermissionChecker};

/// Grants exactly the capabilities it was constructed with.
///
/// Native hosts have no runtime permission model, so the grant set comes
/// from configuration (`DEVID_GRANTED`).
#[derive(Debug, Clone)]
pub struct LivePermissionChecker {
    granted: Vec<Capability>,
}

impl LivePermissionChecker {
    /// Creates a checker granting `granted`.
    #[must_use]
    pub fn new(granted: Vec<Capability>) -> Self {
        Self { granted }
    }
}

impl PermissionChecker for LivePermissionChecker {
    fn check(&self, capability: Capability) -> bool {
        self.granted.contains(&capability)
    }
}
