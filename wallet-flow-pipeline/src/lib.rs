//! # Wallet Flow Pipeline
//!
//! Pure derivations over a finalized wallet-action snapshot: decoding
//! ERC-20 transfer logs out of a receipt, classifying the action's actual
//! outcome (mint vs. buy, boost reward claims, zap dust) and estimating
//! stepper-flow progress. Every function here is a deterministic,
//! side-effect-free projection that is safe to call repeatedly.
pub mod decoder;
pub mod errors;
pub mod outcomes;
pub mod progress;
