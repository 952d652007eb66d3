//! # Wallet Flow Shared
//! This crate defines the shared data structures and types used across the
//! wallet-flow workspace. It includes common definitions for transaction
//! receipts, decoded events, wallet-action lifecycle state, stepper state,
//! and the token/vault/boost entities those refer to.
pub mod types;
