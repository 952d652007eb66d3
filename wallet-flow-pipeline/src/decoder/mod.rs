//! Decodes the raw logs of a transaction receipt into structured events.
//!
//! Wallet libraries hand receipts over with logs grouped into event-name
//! buckets, and the same log can appear under more than one name. The
//! decoder flattens those buckets, keeps only logs carrying the signature
//! it is asked for, collapses duplicates by (tx hash, log index) and
//! strict-decodes the survivors.
use crate::errors::DecodeError;
use alloy::primitives::B256;
use alloy::sol;
use alloy::sol_types::SolEvent;
use std::collections::HashSet;
use wallet_flow_shared::types::{EventLogs, TokenReturnedEvent, TransactionReceipt, TransferEvent};

sol! {
    event Transfer(address indexed from, address indexed to, uint256 value);
    event TokenReturned(address token, uint256 amount);
}

/// ERC-20 `Transfer` topic hash; a fixed part of the decoder's contract.
pub const TRANSFER_TOPIC: B256 = Transfer::SIGNATURE_HASH;

/// Receipt bucket name under which zap routers report returned tokens.
pub const TOKEN_RETURNED_EVENT: &str = "TokenReturned";

/// Decodes every ERC-20 `Transfer` log in the receipt.
///
/// Flattens all event-name buckets, keeps logs whose first topic is the
/// `Transfer` signature, and collapses duplicates by (tx hash, log index)
/// with the first occurrence winning; order is otherwise preserved.
///
/// # Errors
///
/// Returns a `DecodeError` if any surviving log fails strict ABI decoding.
pub fn transfer_events(receipt: &TransactionReceipt) -> Result<Vec<TransferEvent>, DecodeError> {
    let Some(events) = &receipt.events else {
        return Ok(Vec::new());
    };

    let mut seen: HashSet<(_, _)> = HashSet::new();
    let mut transfers = Vec::new();
    for log in events.values().flat_map(EventLogs::iter) {
        if log.topics.first() != Some(&TRANSFER_TOPIC) {
            continue;
        }
        if !seen.insert((log.transaction_hash, log.log_index)) {
            continue;
        }
        let event = Transfer::decode_raw_log(log.topics.iter().copied(), &log.data).map_err(
            |source| DecodeError::Transfer {
                tx_hash: log.transaction_hash,
                log_index: log.log_index,
                source,
            },
        )?;
        transfers.push(TransferEvent {
            contract: log.address,
            from: event.from,
            to: event.to,
            value: event.value,
            tx_hash: log.transaction_hash,
            log_index: log.log_index,
        });
    }

    Ok(transfers)
}

/// Decodes the logs of the receipt's `TokenReturned` bucket.
///
/// Only the named bucket is consulted; an absent bucket yields an empty
/// sequence. Filtering to the zap contract is left to the caller.
///
/// # Errors
///
/// Returns a `DecodeError` if any log in the bucket fails strict ABI
/// decoding.
pub fn returned_token_events(
    receipt: &TransactionReceipt,
) -> Result<Vec<TokenReturnedEvent>, DecodeError> {
    let Some(bucket) = receipt
        .events
        .as_ref()
        .and_then(|events| events.get(TOKEN_RETURNED_EVENT))
    else {
        return Ok(Vec::new());
    };

    bucket
        .iter()
        .map(|log| {
            let event = TokenReturned::decode_raw_log(log.topics.iter().copied(), &log.data)
                .map_err(|source| DecodeError::TokenReturned {
                    tx_hash: log.transaction_hash,
                    log_index: log.log_index,
                    source,
                })?;
            Ok(TokenReturnedEvent {
                contract: log.address,
                token: event.token,
                amount: event.amount,
            })
        })
        .collect()
}
