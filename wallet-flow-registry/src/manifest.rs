use serde::Deserialize;
use wallet_flow_shared::types::{Boost, Token, Vault};

/// On-disk shape of the entity registry.
///
/// The dashboard host generates this manifest from its chain configuration;
/// every list may be empty.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RegistryManifest {
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub vaults: Vec<Vault>,
    #[serde(default)]
    pub boosts: Vec<Boost>,
}
