//! Request/response types for the Quorum method families.

mod istanbul;
mod permission;
mod raft;
mod receipt;
mod transaction;

pub use istanbul::{Snapshot, Tally, Vote};
pub use permission::{AccountInfo, NodeInfo, OrgDetails, OrgInfo, RoleInfo};
pub use raft::ClusterMember;
pub use receipt::TransactionReceipt;
pub use transaction::{PrivateFor, PrivateTransaction, PrivateTransactionBuilder};

use serde::{Deserialize, Deserializer};

/// Decode a collection field that the node may report as JSON null.
///
/// Go marshals nil slices and maps as null, so list-valued response fields
/// must accept null as empty.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
