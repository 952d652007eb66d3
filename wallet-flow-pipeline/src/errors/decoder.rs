//! Error types for the decoder stage of the wallet-flow pipeline.
//! Defines the errors raised when a receipt's raw logs do not match the
//! event ABI they claim to carry.
use alloy::primitives::TxHash;
use thiserror::Error;

/// Represents a strict ABI decode failure.
///
/// A log whose first topic matched an expected event signature but whose
/// topics/data did not decode indicates a malformed or unexpected receipt;
/// the whole decode call fails rather than silently coercing the log.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed Transfer log {log_index} in tx {tx_hash}")]
    Transfer {
        tx_hash: TxHash,
        log_index: u64,
        #[source]
        source: alloy::sol_types::Error,
    },
    #[error("malformed TokenReturned log {log_index} in tx {tx_hash}")]
    TokenReturned {
        tx_hash: TxHash,
        log_index: u64,
        #[source]
        source: alloy::sol_types::Error,
    },
}
