//! In-memory implementation of the `EntityResolver` trait, built either
//! programmatically or from a JSON manifest file.
use crate::errors::RegistryError;
use crate::interfaces::EntityResolver;
use crate::manifest::RegistryManifest;
use alloy::primitives::Address;
use std::collections::HashMap;
use std::path::Path;
use wallet_flow_shared::types::{Boost, ChainId, Token, Vault};

/// Immutable lookup tables for tokens, vaults and boosts.
///
/// Tokens are indexed by (chain, contract address) when they are ERC-20,
/// and by chain alone for native tokens. Inserting an entity twice
/// replaces the earlier entry.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    tokens_by_address: HashMap<(ChainId, Address), Token>,
    native_tokens: HashMap<ChainId, Token>,
    vaults: HashMap<String, Vault>,
    boosts: HashMap<String, Boost>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from an already-deserialized manifest.
    pub fn from_manifest(manifest: RegistryManifest) -> Self {
        let mut registry = Self::new();
        for token in manifest.tokens {
            registry.insert_token(token);
        }
        for vault in manifest.vaults {
            registry.insert_vault(vault);
        }
        for boost in manifest.boosts {
            registry.insert_boost(boost);
        }
        registry
    }

    /// Reads and parses a JSON manifest file into a registry.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if the file cannot be read or does not
    /// parse as a manifest.
    pub fn from_manifest_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: RegistryManifest =
            serde_json::from_str(&raw).map_err(|source| RegistryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_manifest(manifest))
    }

    /// Inserts a token, routing it to the address or native table by kind.
    pub fn insert_token(&mut self, token: Token) {
        match token.erc20_address() {
            Some(address) => {
                self.tokens_by_address
                    .insert((token.chain_id.clone(), address), token);
            }
            None => {
                self.native_tokens.insert(token.chain_id.clone(), token);
            }
        }
    }

    pub fn insert_vault(&mut self, vault: Vault) {
        self.vaults.insert(vault.id.clone(), vault);
    }

    pub fn insert_boost(&mut self, boost: Boost) {
        self.boosts.insert(boost.id.clone(), boost);
    }
}

impl EntityResolver for InMemoryRegistry {
    fn token_by_address(&self, chain_id: &str, address: Address) -> Option<&Token> {
        self.tokens_by_address
            .get(&(chain_id.to_string(), address))
    }

    fn native_token(&self, chain_id: &str) -> Option<&Token> {
        self.native_tokens.get(chain_id)
    }

    fn vault(&self, vault_id: &str) -> Option<&Vault> {
        self.vaults.get(vault_id)
    }

    fn boost(&self, boost_id: &str) -> Option<&Boost> {
        self.boosts.get(boost_id)
    }
}
