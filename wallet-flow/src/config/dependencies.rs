use crate::errors::FlowError;
use std::sync::Arc;
use wallet_flow_registry::InMemoryRegistry;

/// `Dependencies` holds the external components the application needs: the
/// entity registry the outcome classifiers resolve tokens, vaults and
/// boosts against.
pub struct Dependencies {
    pub registry: Arc<InMemoryRegistry>,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance from the environment.
    ///
    /// Reads `REGISTRY_MANIFEST` (a path to the entity manifest JSON) and
    /// loads the registry from it.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or a
    /// `FlowError` if the manifest fails to load.
    pub fn new() -> Result<Self, FlowError> {
        let manifest_path =
            std::env::var("REGISTRY_MANIFEST").expect("REGISTRY_MANIFEST must be set");
        let registry = InMemoryRegistry::from_manifest_file(&manifest_path)?;

        Ok(Dependencies {
            registry: Arc::new(registry),
        })
    }
}
