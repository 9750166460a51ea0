//! Quorum transaction receipt.

use serde::Deserialize;

use super::null_as_default;

/// Receipt returned by `eth_getTransactionReceipt`.
///
/// Mirrors the node's receipt object as-is: quantities stay hex strings and
/// log entries stay raw JSON, so the shape survives node versions that add
/// fields. Absence of a receipt (pending or unknown hash) is surfaced by the
/// facade as `None`, never as a null reaching the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default)]
    pub transaction_index: Option<String>,
    #[serde(default)]
    pub block_hash: Option<String>,
    #[serde(default)]
    pub block_number: Option<String>,
    #[serde(default)]
    pub cumulative_gas_used: Option<String>,
    #[serde(default)]
    pub gas_used: Option<String>,
    /// Populated only for contract-creation transactions.
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logs: Vec<serde_json::Value>,
    #[serde(default)]
    pub logs_bloom: Option<String>,
    /// Pre-Byzantium state root; mutually exclusive with `status` on public
    /// chains, both absent on some private-state receipts.
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
