//! Istanbul BFT response types.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::null_as_default;

/// Voting snapshot returned by `istanbul_getSnapshot` and
/// `istanbul_getSnapshotAtHash`.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub epoch: u64,
    pub number: u64,
    pub hash: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub votes: Vec<Vote>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tally: BTreeMap<String, Tally>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub validators: Vec<String>,
}

/// A single authorization vote cast by a validator.
#[derive(Debug, Clone, Deserialize)]
pub struct Vote {
    pub validator: String,
    pub address: String,
    pub authorize: bool,
    #[serde(default)]
    pub block: Option<u64>,
}

/// Running vote count for one candidate address.
#[derive(Debug, Clone, Deserialize)]
pub struct Tally {
    pub authorize: bool,
    pub votes: u64,
}
