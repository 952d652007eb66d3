//! Projects a wallet-action snapshot into the display-ready report the
//! dashboard renders: overall flow progress, bar states, and the
//! classified outcome of the completed action.
use crate::errors::FlowError;
use serde::{Deserialize, Serialize};
use wallet_flow_pipeline::outcomes;
use wallet_flow_pipeline::progress;
use wallet_flow_registry::EntityResolver;
use wallet_flow_shared::types::{
    ActionMetadata, BridgeRequest, MintOutcome, StepperState, TokenAmount, WalletAction,
};

/// The immutable state snapshot the wallet layer hands over: the action's
/// lifecycle state and the stepper flow it belongs to.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSnapshot {
    pub wallet_action: WalletAction,
    pub stepper: StepperState,
}

/// Classified outcome of a completed wallet action.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    Mint(MintOutcome),
    BoostClaim { rewards: Vec<TokenAmount> },
    Zap { dust: Vec<TokenAmount> },
    Bridge(BridgeRequest),
}

/// Everything the dashboard needs to render the stepper flow's state.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowReport {
    pub progress: f64,
    pub stepping: bool,
    pub error_bar: bool,
    pub success_bar: bool,
    pub outcome: Option<ActionOutcome>,
}

/// Derives the full report for a snapshot.
///
/// The outcome section is only populated once the wallet action has
/// succeeded; until then the report carries progress and bar states alone.
///
/// # Errors
///
/// Returns a `FlowError` if a successful action's receipt fails to decode.
pub fn build_report(
    snapshot: &ActionSnapshot,
    resolver: &dyn EntityResolver,
) -> Result<FlowReport, FlowError> {
    let action = &snapshot.wallet_action;

    let outcome = if action.is_success() {
        match &action.metadata {
            Some(ActionMetadata::Mint(_)) => {
                Some(ActionOutcome::Mint(outcomes::mint_result(action)?))
            }
            Some(ActionMetadata::BoostClaim(_)) => Some(ActionOutcome::BoostClaim {
                rewards: outcomes::boost_claimed(action, resolver)?,
            }),
            Some(ActionMetadata::Zap(_)) => Some(ActionOutcome::Zap {
                dust: outcomes::zap_returned(action, resolver)?,
            }),
            Some(ActionMetadata::Bridge(_)) => {
                Some(ActionOutcome::Bridge(outcomes::bridge_success(action)?.clone()))
            }
            None => None,
        }
    } else {
        None
    };

    Ok(FlowReport {
        progress: progress::stepper_progress(&snapshot.stepper, action.result),
        stepping: snapshot.stepper.is_stepping(),
        error_bar: progress::error_bar(action),
        success_bar: progress::success_bar(&snapshot.stepper),
        outcome,
    })
}
