mod boost;
mod outcome;
mod receipt;
mod stepper;
mod token;
mod transfer;
mod vault;
mod wallet_action;
mod wei;

pub use boost::Boost;
pub use outcome::MintOutcome;
pub use receipt::{EventLogs, RawLog, TransactionReceipt};
pub use stepper::{Step, StepContent, StepKind, StepperState};
pub use token::{ChainId, Token, TokenAmount, TokenKind};
pub use transfer::{TokenReturnedEvent, TransferEvent};
pub use vault::Vault;
pub use wallet_action::{
    ActionMetadata, BoostClaimRequest, BridgeRequest, MintRequest, WalletAction,
    WalletActionResult, ZapRequest,
};
pub use wei::{DUST_THRESHOLD, from_wei};
