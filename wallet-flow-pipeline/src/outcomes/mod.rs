//! Classifies what a successful wallet action actually did, by reading the
//! decoded events of its receipt against the request metadata. One module
//! per action kind; each entry point guards its own preconditions and
//! returns plain data for the presentation layer.
mod boost;
mod bridge;
mod mint;
mod zap;

pub use boost::{boost_claimed, boost_metadata};
pub use bridge::bridge_success;
pub use mint::mint_result;
pub use zap::zap_returned;
