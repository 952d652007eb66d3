use crate::decoder::returned_token_events;
use crate::errors::OutcomeError;
use alloy::primitives::Address;
use rust_decimal::Decimal;
use std::collections::HashSet;
use wallet_flow_registry::EntityResolver;
use wallet_flow_shared::types::{
    ActionMetadata, DUST_THRESHOLD, TokenAmount, WalletAction, from_wei,
};

/// Lists the leftover ("dust") tokens a zap handed back to the user.
///
/// Only `TokenReturned` events emitted by the zap contract itself count. A
/// zero token address means the chain's native token. Tokens the zap was
/// expected to produce are not dust, and amounts below the display
/// threshold are noise; both are dropped. Event order is preserved.
///
/// Without a non-empty expected-token list there is no way to tell dust
/// from intended output, so the result is empty; the same applies to any
/// other missing state (not successful, no zap metadata, no receipt,
/// unknown vault).
///
/// # Errors
///
/// Returns an `OutcomeError` only if the receipt fails to decode.
pub fn zap_returned(
    action: &WalletAction,
    resolver: &dyn EntityResolver,
) -> Result<Vec<TokenAmount>, OutcomeError> {
    if !action.is_success() {
        return Ok(Vec::new());
    }
    let Some(ActionMetadata::Zap(request)) = &action.metadata else {
        return Ok(Vec::new());
    };
    let Some(receipt) = &action.receipt else {
        return Ok(Vec::new());
    };
    if request.vault_id.is_empty() || request.expected_tokens.is_empty() {
        return Ok(Vec::new());
    }
    let Some(vault) = resolver.vault(&request.vault_id) else {
        return Ok(Vec::new());
    };

    let expected: HashSet<&str> = request
        .expected_tokens
        .iter()
        .map(|token| token.id.as_str())
        .collect();

    let dust = returned_token_events(receipt)?
        .into_iter()
        .filter(|event| event.contract == receipt.to)
        .filter_map(|event| {
            let token = if event.token == Address::ZERO {
                resolver.native_token(&vault.chain_id)
            } else {
                resolver.token_by_address(&vault.chain_id, event.token)
            }?;
            let amount = from_wei(event.amount, token.decimals).unwrap_or(Decimal::ZERO);
            Some(TokenAmount {
                token: token.clone(),
                amount,
            })
        })
        .filter(|returned| !expected.contains(returned.token.id.as_str()))
        .filter(|returned| returned.amount >= DUST_THRESHOLD)
        .collect();

    Ok(dust)
}
