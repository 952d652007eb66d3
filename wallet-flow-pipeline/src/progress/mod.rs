//! Estimates how far along a multi-step wallet flow is.
//!
//! Each step owns an equal share of the bar; the in-flight transaction
//! contributes a fraction of the active step's share.
use wallet_flow_shared::types::{StepContent, StepperState, WalletAction, WalletActionResult};

/// Progress percentage of a flow at `step_index` out of `total_steps`.
///
/// `total_steps` must be at least 1 and `step_index` strictly below it;
/// both are preconditions of the flow invariants, not runtime conditions.
/// The returned value is always within [0, 100] and non-decreasing as the
/// step index advances or the transaction moves toward confirmation.
pub fn compute_progress(
    step_index: usize,
    total_steps: usize,
    result: WalletActionResult,
) -> f64 {
    assert!(total_steps >= 1, "stepper flow must contain at least one step");
    assert!(step_index < total_steps, "current step index out of range");

    let per_step = 100.0 / total_steps as f64;
    step_index as f64 * per_step + per_step * tx_progress(result)
}

/// Progress of the whole stepper flow given the latest transaction result.
pub fn stepper_progress(stepper: &StepperState, result: WalletActionResult) -> f64 {
    compute_progress(stepper.current_step, stepper.items.len(), result)
}

/// Each transaction has three observable phases: waiting on the user's
/// signature, broadcast but unconfirmed, and confirmed. Only the middle
/// one contributes partial progress; confirmation shows up as the step
/// index advancing instead.
fn tx_progress(result: WalletActionResult) -> f64 {
    match result {
        WalletActionResult::PendingConfirmation => 0.5,
        _ => 0.0,
    }
}

/// Whether the progress bar should render in its error state.
pub fn error_bar(action: &WalletAction) -> bool {
    action.result == WalletActionResult::Error
}

/// Whether the progress bar should render in its completed state.
pub fn success_bar(stepper: &StepperState) -> bool {
    stepper.content == StepContent::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallet_flow_shared::types::{Step, StepKind};

    fn stepper(total: usize, current: usize, content: StepContent) -> StepperState {
        StepperState {
            chain_id: "ethereum".to_string(),
            modal: true,
            items: (0..total)
                .map(|_| Step {
                    kind: StepKind::Deposit,
                    message: "Confirm deposit".to_string(),
                    pending: false,
                })
                .collect(),
            current_step: current,
            content,
        }
    }

    #[test]
    fn test_four_step_flow_percentages() {
        assert_eq!(
            compute_progress(1, 4, WalletActionResult::PendingConfirmation),
            37.5
        );
        assert_eq!(compute_progress(2, 4, WalletActionResult::Idle), 50.0);
    }

    #[test]
    fn test_only_pending_confirmation_adds_partial_progress() {
        assert_eq!(compute_progress(0, 2, WalletActionResult::Idle), 0.0);
        assert_eq!(
            compute_progress(0, 2, WalletActionResult::AwaitingSignature),
            0.0
        );
        assert_eq!(
            compute_progress(0, 2, WalletActionResult::PendingConfirmation),
            25.0
        );
        assert_eq!(compute_progress(0, 2, WalletActionResult::Success), 0.0);
        assert_eq!(compute_progress(0, 2, WalletActionResult::Error), 0.0);
    }

    #[test]
    fn test_non_decreasing_in_step_index_and_substate() {
        for total in 1..=6usize {
            let mut previous = -1.0;
            for step in 0..total {
                let idle = compute_progress(step, total, WalletActionResult::Idle);
                let pending = compute_progress(step, total, WalletActionResult::PendingConfirmation);
                assert!(idle >= previous);
                assert!(pending >= idle);
                assert!((0.0..=100.0).contains(&pending));
                previous = pending;
            }
        }
    }

    #[test]
    fn test_stepper_progress_uses_state_fields() {
        let state = stepper(4, 1, StepContent::Stepping);
        assert_eq!(
            stepper_progress(&state, WalletActionResult::PendingConfirmation),
            37.5
        );
    }

    #[test]
    #[should_panic(expected = "at least one step")]
    fn test_empty_flow_is_a_precondition_violation() {
        compute_progress(0, 0, WalletActionResult::Idle);
    }

    #[test]
    fn test_bars() {
        let errored = WalletAction {
            result: WalletActionResult::Error,
            receipt: None,
            metadata: None,
        };
        assert!(error_bar(&errored));

        let idle = WalletAction {
            result: WalletActionResult::Idle,
            receipt: None,
            metadata: None,
        };
        assert!(!error_bar(&idle));

        assert!(success_bar(&stepper(2, 1, StepContent::Success)));
        assert!(!success_bar(&stepper(2, 1, StepContent::Stepping)));
    }
}
