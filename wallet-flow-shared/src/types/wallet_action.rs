use super::receipt::TransactionReceipt;
use super::token::{ChainId, Token};
use alloy::primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sub-state of the wallet transaction currently being executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletActionResult {
    /// No transaction in flight.
    #[default]
    Idle,
    /// Waiting for the user to sign in their wallet.
    AwaitingSignature,
    /// Broadcast but not yet confirmed on-chain.
    PendingConfirmation,
    Success,
    Error,
}

/// Request details for minting a vault's reward token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MintRequest {
    pub token: Token,
    /// Amount the user asked to mint, in token units.
    pub amount: Decimal,
}

/// Request details for claiming rewards from a boost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostClaimRequest {
    pub boost_id: String,
    /// The vault's own claim token, excluded from the reward list.
    pub token: Token,
    pub wallet_address: Address,
}

/// Request details for an all-in-one zap deposit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZapRequest {
    pub vault_id: String,
    /// Tokens the zap is expected to produce; anything else returned is dust.
    pub expected_tokens: Vec<Token>,
}

/// Request details for bridging a token to another chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRequest {
    pub from_chain_id: ChainId,
    pub to_chain_id: ChainId,
    pub token: Token,
    pub amount: Decimal,
}

/// What the user asked the wallet action to do.
///
/// Exactly one variant is attached to a wallet action for its whole
/// lifecycle; consumers match exhaustively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionMetadata {
    Mint(MintRequest),
    BoostClaim(BoostClaimRequest),
    Zap(ZapRequest),
    Bridge(BridgeRequest),
}

/// Immutable snapshot of a wallet action's lifecycle.
///
/// Created once when the user submits a transaction and read-only
/// afterward; the receipt appears once the transaction is mined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletAction {
    pub result: WalletActionResult,
    #[serde(default)]
    pub receipt: Option<TransactionReceipt>,
    #[serde(default)]
    pub metadata: Option<ActionMetadata>,
}

impl WalletAction {
    pub fn is_success(&self) -> bool {
        self.result == WalletActionResult::Success
    }
}
