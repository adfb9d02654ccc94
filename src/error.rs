//! Error types for identifier resolution.

use thiserror::Error;

use crate::ports::Capability;

/// Resolution failed without a usable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Every provider was exhausted without producing a value.
    #[error("Could not retrieve a device ID")]
    NoIdentifierFound,

    /// A provider produced a value known to collide across devices.
    #[error("{reason}")]
    NotUnique {
        /// Why the value was rejected.
        reason: String,
    },
}

/// A restricted capability required by a provider has not been granted.
///
/// This is a configuration error of the host application, not a property of
/// the device, so it is kept out of [`IdentifierError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Permission {capability} is required")]
pub struct PermissionDenied {
    /// The missing capability.
    pub capability: Capability,
}

/// Everything [`crate::resolver::IdentifierResolver::resolve`] can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No unique identifier could be found.
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    /// A provider required a capability that is not granted.
    #[error(transparent)]
    Permission(#[from] PermissionDenied),
}

impl ResolveError {
    /// True when a known-bad value aborted the chain.
    #[must_use]
    pub fn is_not_unique(&self) -> bool {
        matches!(self, Self::Identifier(IdentifierError::NotUnique { .. }))
    }

    /// True when the chain was aborted by a missing capability.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::Permission(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_names_platform_permission() {
        let err = PermissionDenied { capability: Capability::ReadPhoneState };
        assert_eq!(err.to_string(), "Permission android.permission.READ_PHONE_STATE is required");
    }

    #[test]
    fn resolve_error_is_transparent() {
        let err: ResolveError = IdentifierError::NoIdentifierFound.into();
        assert_eq!(err.to_string(), "Could not retrieve a device ID");
        assert!(!err.is_not_unique());
        assert!(!err.is_permission_denied());
    }

    #[test]
    fn classifies_variants() {
        let not_unique: ResolveError = IdentifierError::NotUnique { reason: "dup".into() }.into();
        assert!(not_unique.is_not_unique());

        let denied: ResolveError = PermissionDenied { capability: Capability::Bluetooth }.into();
        assert!(denied.is_permission_denied());
    }
}
