use super::token::ChainId;
use serde::{Deserialize, Serialize};

/// Kind of transaction a step performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Approve,
    Deposit,
    Withdraw,
    Claim,
    Mint,
    Burn,
    Bridge,
    ZapIn,
    ZapOut,
}

/// One step of a multi-transaction wallet flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    pub message: String,
    pub pending: bool,
}

/// Which screen of the stepper flow is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepContent {
    /// The user is still composing the action.
    Editing,
    /// Transactions are being walked through.
    Stepping,
    /// The whole flow completed.
    Success,
}

/// UI state of the multi-step wallet flow.
///
/// `current_step` is 0-based and always less than `items.len()` while the
/// flow is active.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepperState {
    pub chain_id: ChainId,
    pub modal: bool,
    pub items: Vec<Step>,
    pub current_step: usize,
    pub content: StepContent,
}

impl StepperState {
    /// The step currently being executed, if the index is in range.
    pub fn current_step_data(&self) -> Option<&Step> {
        self.items.get(self.current_step)
    }

    /// Whether the flow is mid-execution: the modal is open and the flow
    /// has not reached its success screen.
    pub fn is_stepping(&self) -> bool {
        self.modal && self.content != StepContent::Success
    }
}
