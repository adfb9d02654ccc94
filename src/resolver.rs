//! Memoized device identifier resolution over a provider chain.

use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::{debug, info, warn};

use crate::context::PlatformContext;
use crate::error::{IdentifierError, ResolveError};
use crate::provider::{default_chain, IdentifierProvider, Probe};

/// Resolves a device identifier once and serves it for the resolver's lifetime.
///
/// Construct one per process (or per dependency-injection scope) and share it
/// by reference; the cache is never cleared.
pub struct IdentifierResolver {
    providers: Vec<Box<dyn IdentifierProvider>>,
    cached: OnceLock<String>,
    fill: Mutex<()>,
}

impl IdentifierResolver {
    /// Creates a resolver over the default provider chain.
    #[must_use]
    pub fn new() -> Self {
        Self::with_providers(default_chain())
    }

    /// Creates a resolver over `providers`, queried in list order.
    #[must_use]
    pub fn with_providers(providers: Vec<Box<dyn IdentifierProvider>>) -> Self {
        Self { providers, cached: OnceLock::new(), fill: Mutex::new(()) }
    }

    /// The memoized identifier, if one has been resolved.
    #[must_use]
    pub fn cached(&self) -> Option<&str> {
        self.cached.get().map(String::as_str)
    }

    /// Returns the device identifier, resolving and caching it on first success.
    ///
    /// Providers are queried in order until one succeeds. An unavailable
    /// provider, or one that succeeds with an empty value, is skipped. A
    /// known-bad value aborts the chain unless `ignore_known_bad` is set, in
    /// which case it is skipped too.
    ///
    /// # Errors
    ///
    /// - [`IdentifierError::NotUnique`] when a known-bad value is found and
    ///   `ignore_known_bad` is false.
    /// - [`IdentifierError::NoIdentifierFound`] when every provider is exhausted.
    /// - [`ResolveError::Permission`] as soon as a provider's capability check
    ///   fails; no later provider is queried.
    ///
    /// No error is possible once a value is cached.
    pub fn resolve(
        &self,
        ctx: &PlatformContext,
        ignore_known_bad: bool,
    ) -> Result<String, ResolveError> {
        if let Some(id) = self.cached.get() {
            return Ok(id.clone());
        }

        // The guarded data is `()`, so a panic in another resolver leaves
        // nothing inconsistent behind.
        let _fill = self.fill.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(id) = self.cached.get() {
            debug!("device identifier resolved by a concurrent caller");
            return Ok(id.clone());
        }

        for provider in &self.providers {
            match provider.produce(ctx)? {
                Probe::Success(id) if id.is_empty() => {
                    warn!(provider = provider.name(), "empty identifier, trying next");
                }
                Probe::Success(id) => {
                    info!(provider = provider.name(), "device identifier resolved");
                    return Ok(self.cached.get_or_init(|| id).clone());
                }
                Probe::Unavailable => {
                    debug!(provider = provider.name(), "provider unavailable, trying next");
                }
                Probe::NotUnique(reason) if ignore_known_bad => {
                    warn!(provider = provider.name(), "ignoring non-unique identifier: {reason}");
                }
                Probe::NotUnique(reason) => {
                    return Err(IdentifierError::NotUnique { reason }.into());
                }
            }
        }

        Err(IdentifierError::NoIdentifierFound.into())
    }
}

impl Default for IdentifierResolver {
    fn default() -> Self {
        Self::new()
    }
}
