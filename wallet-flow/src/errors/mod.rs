//! Error types for the wallet-flow application.
//! Consolidates the errors of the registry and pipeline crates with the
//! snapshot IO failures that can occur at the application boundary.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Registry error: {0}")]
    Registry(#[from] wallet_flow_registry::RegistryError),
    #[error("Outcome error: {0}")]
    Outcome(#[from] wallet_flow_pipeline::errors::OutcomeError),
    #[error("Snapshot read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
