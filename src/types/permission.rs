//! Permissioning response types.
//!
//! Shapes mirror the node's `quorumPermission_*` result objects. The write
//! operations (`addOrg`, `approveOrg`, ...) return a plain status string and
//! need no dedicated type.

use serde::Deserialize;

use super::null_as_default;

/// Organization entry from `quorumPermission_orgList`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgInfo {
    pub full_org_id: String,
    pub org_id: String,
    pub level: u64,
    #[serde(default)]
    pub parent_org_id: Option<String>,
    pub status: u64,
    #[serde(default)]
    pub sub_org_list: Option<Vec<String>>,
    pub ultimate_parent: String,
}

/// Node entry from `quorumPermission_nodeList`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub org_id: String,
    pub status: u64,
    pub url: String,
}

/// Role entry from `quorumPermission_roleList`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleInfo {
    pub org_id: String,
    pub role_id: String,
    pub access: u64,
    pub active: bool,
    pub is_admin: bool,
    pub is_voter: bool,
}

/// Account entry from `quorumPermission_acctList`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub acct_id: String,
    pub org_id: String,
    pub role_id: String,
    pub status: u64,
    pub is_org_admin: bool,
}

/// Aggregate view from `quorumPermission_getOrgDetails`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub acct_list: Vec<AccountInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub node_list: Vec<NodeInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role_list: Vec<RoleInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_org_list: Vec<OrgInfo>,
}
