use super::token::ChainId;
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// A secondary contract paying extra token rewards on top of a vault position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boost {
    pub id: String,
    pub name: String,
    pub chain_id: ChainId,
    pub contract_address: Address,
}
