//! Error types for the wallet-flow registry.
//! Defines the errors that can occur while loading the entity manifest.
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur while building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read registry manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse registry manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
