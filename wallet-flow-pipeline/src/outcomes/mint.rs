use crate::decoder::transfer_events;
use crate::errors::OutcomeError;
use alloy::primitives::Address;
use wallet_flow_shared::types::{
    ActionMetadata, MintOutcome, MintRequest, TransactionReceipt, WalletAction, from_wei,
};

/// Derives the result of a mint action from its receipt.
///
/// The default result assumes the requested amount was freshly minted.
/// When the receipt shows no issuance transfer (zero address to the mint
/// contract) but does show the contract paying the user out of existing
/// supply, the action is reclassified as a secondary-market buy with the
/// observed amount.
///
/// # Errors
///
/// Returns an `OutcomeError` if the wallet action has not succeeded, does
/// not carry mint metadata, or its receipt fails to decode.
pub fn mint_result(action: &WalletAction) -> Result<MintOutcome, OutcomeError> {
    if !action.is_success() {
        return Err(OutcomeError::NotSuccess);
    }
    let request = match &action.metadata {
        Some(ActionMetadata::Mint(request)) => request,
        Some(_) => return Err(OutcomeError::UnexpectedAction { expected: "mint" }),
        None => return Err(OutcomeError::MissingMetadata),
    };
    classify(action.receipt.as_ref(), request)
}

fn classify(
    receipt: Option<&TransactionReceipt>,
    request: &MintRequest,
) -> Result<MintOutcome, OutcomeError> {
    let minted = MintOutcome::Minted {
        token: request.token.clone(),
        amount: request.amount,
    };

    let Some(token_address) = request.token.erc20_address() else {
        return Ok(minted);
    };
    let Some(receipt) = receipt else {
        return Ok(minted);
    };
    if !receipt.has_events() {
        return Ok(minted);
    }

    let transfers = transfer_events(receipt)?;
    let mint_transfer = transfers.iter().find(|transfer| {
        transfer.contract == token_address
            && transfer.from == Address::ZERO
            && transfer.to == receipt.to
    });
    let user_transfer = transfers.iter().find(|transfer| {
        transfer.contract == token_address
            && transfer.from == receipt.to
            && transfer.to == receipt.from
    });

    // No new issuance but the contract paid the user: the tokens came from
    // existing supply. Ambiguous receipts keep the mint default.
    if mint_transfer.is_none() {
        if let Some(transfer) = user_transfer {
            if let Some(amount) = from_wei(transfer.value, request.token.decimals) {
                return Ok(MintOutcome::Bought {
                    token: request.token.clone(),
                    amount,
                });
            }
        }
    }

    Ok(minted)
}
