use alloy::primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};

/// A decoded ERC-20 `Transfer` log.
///
/// `contract` is the token contract that emitted the log; `value` is the
/// transferred amount in the token's smallest unit. The (tx hash, log
/// index) pair is the uniqueness key within a receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEvent {
    pub contract: Address,
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub tx_hash: TxHash,
    pub log_index: u64,
}

/// A decoded zap-router `TokenReturned` log.
///
/// Emitted when a zap hands leftover input back to the user. A zero
/// `token` address means the chain's native token was returned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenReturnedEvent {
    /// Contract that emitted the log (the zap router).
    pub contract: Address,
    pub token: Address,
    pub amount: U256,
}
