//! Raft consensus response types.

use serde::Deserialize;

/// One entry of the `raft_cluster` response.
///
/// Older nodes report `ip`, newer ones `hostname`; both are kept optional so
/// either vintage decodes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterMember {
    pub raft_id: u64,
    pub node_id: String,
    pub p2p_port: u16,
    pub raft_port: u16,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    pub node_active: bool,
    #[serde(default)]
    pub role: Option<String>,
}
