use crate::errors::OutcomeError;
use wallet_flow_shared::types::{ActionMetadata, BridgeRequest, WalletAction};

/// The bridge request behind a successfully completed bridge action.
///
/// # Errors
///
/// Returns an `OutcomeError` if the wallet action has not succeeded or is
/// not a bridge action; callers must guard with the appropriate state
/// check first.
pub fn bridge_success(action: &WalletAction) -> Result<&BridgeRequest, OutcomeError> {
    if !action.is_success() {
        return Err(OutcomeError::NotSuccess);
    }
    match &action.metadata {
        Some(ActionMetadata::Bridge(request)) => Ok(request),
        Some(_) => Err(OutcomeError::UnexpectedAction { expected: "bridge" }),
        None => Err(OutcomeError::MissingMetadata),
    }
}
