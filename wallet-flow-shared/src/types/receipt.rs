use alloy::primitives::{Address, B256, Bytes, TxHash};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single undecoded log entry attached to a transaction receipt.
///
/// Logs arrive exactly as the wallet layer observed them on-chain: the
/// emitting contract, the indexed topics, and the raw data payload. The
/// (transaction hash, log index) pair identifies a log uniquely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
    pub transaction_hash: TxHash,
    pub log_index: u64,
}

/// One-or-many raw logs filed under a receipt's event-name bucket.
///
/// Wallet libraries put a lone log directly under the event name and switch
/// to an array once a second log with the same name shows up, so both shapes
/// must deserialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventLogs {
    Single(RawLog),
    Many(Vec<RawLog>),
}

impl EventLogs {
    /// Iterates the bucket's logs in their recorded order.
    pub fn iter(&self) -> impl Iterator<Item = &RawLog> {
        match self {
            EventLogs::Single(log) => std::slice::from_ref(log).iter(),
            EventLogs::Many(logs) => logs.iter(),
        }
    }
}

/// A finalized transaction receipt as supplied by the wallet-action layer.
///
/// `from` is the transaction sender, `to` the contract the wallet
/// interacted with. `events` maps event names to the logs the wallet layer
/// attributed to that name; it is absent entirely when the transaction
/// emitted no logs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub from: Address,
    pub to: Address,
    #[serde(default)]
    pub events: Option<BTreeMap<String, EventLogs>>,
}

impl TransactionReceipt {
    /// Whether the receipt carries any logs at all.
    pub fn has_events(&self) -> bool {
        self.events.as_ref().is_some_and(|events| !events.is_empty())
    }
}
