use super::token::ChainId;
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// A yield-generating vault position users deposit into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    pub id: String,
    pub name: String,
    pub chain_id: ChainId,
    pub contract_address: Address,
}
