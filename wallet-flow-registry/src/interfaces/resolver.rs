//! This module defines the `EntityResolver` trait, the interface the
//! outcome classifiers use to look up tokens, vaults and boosts. All
//! lookups are synchronous, read-only projections over data the host
//! application already holds in memory.
use alloy::primitives::Address;
use wallet_flow_shared::types::{Boost, Token, Vault};

/// A trait that defines the read-only entity lookups used while
/// interpreting wallet-action receipts.
///
/// Every method returns `None` for unknown entities; callers degrade to
/// empty or default results rather than failing. Implementations must be
/// safe to call repeatedly and concurrently.
pub trait EntityResolver: Send + Sync {
    /// Resolves an ERC-20 token by its contract address on a chain.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - The chain the contract lives on.
    /// * `address` - The token contract address.
    ///
    /// # Returns
    ///
    /// The known `Token`, or `None` if the address is not in the registry.
    fn token_by_address(&self, chain_id: &str, address: Address) -> Option<&Token>;

    /// Resolves a chain's native (gas) token.
    fn native_token(&self, chain_id: &str) -> Option<&Token>;

    /// Resolves a vault by its id.
    fn vault(&self, vault_id: &str) -> Option<&Vault>;

    /// Resolves a boost by its id.
    fn boost(&self, boost_id: &str) -> Option<&Boost>;
}
