use crate::decoder::transfer_events;
use crate::errors::OutcomeError;
use rust_decimal::Decimal;
use wallet_flow_registry::EntityResolver;
use wallet_flow_shared::types::{
    ActionMetadata, BoostClaimRequest, TokenAmount, WalletAction, from_wei,
};

/// Lists the reward tokens a boost claim actually paid out.
///
/// Rewards are the transfers from the boost contract to the claiming
/// wallet, excluding the vault's own claim token (the principal being
/// withdrawn). Unresolved reward tokens and zero amounts are dropped
/// rather than shown; transfer order is preserved.
///
/// Missing state (not yet successful, no boost metadata, no receipt, no
/// events, unknown boost) degrades to an empty list.
///
/// # Errors
///
/// Returns an `OutcomeError` only if the receipt fails to decode.
pub fn boost_claimed(
    action: &WalletAction,
    resolver: &dyn EntityResolver,
) -> Result<Vec<TokenAmount>, OutcomeError> {
    if !action.is_success() {
        return Ok(Vec::new());
    }
    let Some(ActionMetadata::BoostClaim(request)) = &action.metadata else {
        return Ok(Vec::new());
    };
    let Some(receipt) = &action.receipt else {
        return Ok(Vec::new());
    };
    if request.boost_id.is_empty() || !receipt.has_events() {
        return Ok(Vec::new());
    }
    let Some(boost) = resolver.boost(&request.boost_id) else {
        return Ok(Vec::new());
    };

    let claim_token_address = request.token.erc20_address();
    let rewards = transfer_events(receipt)?
        .into_iter()
        .filter(|transfer| {
            transfer.from == boost.contract_address
                && transfer.to == request.wallet_address
                && Some(transfer.contract) != claim_token_address
        })
        .filter_map(|transfer| {
            let token = resolver.token_by_address(&boost.chain_id, transfer.contract)?;
            let amount = from_wei(transfer.value, token.decimals)?;
            (amount > Decimal::ZERO).then(|| TokenAmount {
                token: token.clone(),
                amount,
            })
        })
        .collect();

    Ok(rewards)
}

/// The boost-claim request attached to the action, if that is what it is.
pub fn boost_metadata(action: &WalletAction) -> Option<&BoostClaimRequest> {
    match &action.metadata {
        Some(ActionMetadata::BoostClaim(request)) => Some(request),
        _ => None,
    }
}
