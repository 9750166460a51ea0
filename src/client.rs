//! Quorum Client Implementation

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::decode::{decode, decode_optional};
use crate::error::Result;
use crate::transport::{to_param, HttpTransport, Transport};
use crate::types::{
    AccountInfo, ClusterMember, NodeInfo, OrgDetails, OrgInfo, PrivateFor, PrivateTransaction,
    RoleInfo, Snapshot, TransactionReceipt,
};

/// Quorum JSON-RPC Client
///
/// Typed bindings for the Quorum-specific RPC surface: private transactions,
/// Raft and Istanbul consensus queries, and permissioning. Every method is a
/// thin build-submit-decode pipeline over a [`Transport`]; the client holds no
/// mutable state and is safe to share across tasks.
///
/// # Example
///
/// ```no_run
/// use quorum_sdk::QuorumClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = QuorumClient::connect("http://127.0.0.1:22000")?;
/// let role = client.raft_role().await?;
/// println!("node role: {}", role);
/// # Ok(())
/// # }
/// ```
pub struct QuorumClient<T: Transport = HttpTransport> {
    transport: T,
}

impl QuorumClient<HttpTransport> {
    /// Connect to a Quorum node RPC endpoint over HTTP.
    pub fn connect(url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(url)?,
        })
    }
}

impl<T: Transport> QuorumClient<T> {
    /// Build a client over a caller-supplied transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    async fn call<R: DeserializeOwned>(&self, method: &str, params: Vec<Value>) -> Result<R> {
        let raw = self.transport.submit(method, params).await?;
        decode(raw)
    }

    async fn call_optional<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Option<R>> {
        let raw = self.transport.submit(method, params).await?;
        decode_optional(raw)
    }

    /// For methods whose success answer is null; the result value is ignored.
    async fn call_unit(&self, method: &str, params: Vec<Value>) -> Result<()> {
        self.transport.submit(method, params).await?;
        Ok(())
    }

    // --- Private transactions ------------------------------------------------

    /// Submit a private transaction, returning the transaction hash.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use quorum_sdk::{QuorumClient, PrivateTransaction};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = QuorumClient::connect("http://127.0.0.1:22000")?;
    /// let tx = PrivateTransaction::builder("0xed9d02e382b34818e88b88a309c7fe71e65f419d")
    ///     .to("0xca843569e3427144cead5e4d5999a3d0ccf92b8e")
    ///     .gas(4_700_000)
    ///     .private_for(vec!["ROAZBWtSacxXQrOe3FGAqJDyJjFePR5ce4TSIzmJ0Bc=".to_string()])
    ///     .build()?;
    ///
    /// let hash = client.eth_send_transaction(&tx).await?;
    /// println!("submitted: {}", hash);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn eth_send_transaction(&self, tx: &PrivateTransaction) -> Result<String> {
        self.call("eth_sendTransaction", vec![to_param(tx)?]).await
    }

    /// Submit a pre-signed transaction.
    pub async fn eth_send_raw_transaction(&self, signed_tx: &str) -> Result<String> {
        self.call("eth_sendRawTransaction", vec![to_param(&signed_tx)?])
            .await
    }

    /// Submit a pre-signed private transaction.
    ///
    /// The recipient list travels as a `{"privateFor": [...]}` object in the
    /// second positional parameter; this method is the only one that wraps a
    /// list this way.
    pub async fn eth_send_raw_private_transaction(
        &self,
        signed_tx: &str,
        private_for: Vec<String>,
    ) -> Result<String> {
        let wrapper = PrivateFor { private_for };
        self.call(
            "eth_sendRawPrivateTransaction",
            vec![to_param(&signed_tx)?, to_param(&wrapper)?],
        )
        .await
    }

    /// Fetch the decrypted private payload for a transaction manager digest.
    /// Returns `None` when this node is not a party to the payload.
    pub async fn eth_get_quorum_payload(&self, id: &str) -> Result<Option<String>> {
        self.call_optional("eth_getQuorumPayload", vec![to_param(&id)?])
            .await
    }

    /// Submit a private transaction without waiting for it to enter the pool.
    pub async fn eth_send_transaction_async(&self, tx: &PrivateTransaction) -> Result<String> {
        self.call("eth_sendTransactionAsync", vec![to_param(tx)?])
            .await
    }

    /// Fetch the receipt for a transaction hash, or `None` while the
    /// transaction is pending or unknown.
    pub async fn eth_get_transaction_receipt(
        &self,
        tx_hash: &str,
    ) -> Result<Option<TransactionReceipt>> {
        self.call_optional("eth_getTransactionReceipt", vec![to_param(&tx_hash)?])
            .await
    }

    // --- Raft ----------------------------------------------------------------

    /// Role of this node in the Raft cluster (`minter`, `verifier`, ...).
    pub async fn raft_role(&self) -> Result<String> {
        self.call("raft_role", vec![]).await
    }

    /// Enode id of the current Raft leader.
    pub async fn raft_leader(&self) -> Result<String> {
        self.call("raft_leader", vec![]).await
    }

    /// Membership of the Raft cluster.
    pub async fn raft_cluster(&self) -> Result<Vec<ClusterMember>> {
        self.call("raft_cluster", vec![]).await
    }

    /// Remove a peer by raft id.
    pub async fn raft_remove_peer(&self, raft_id: u64) -> Result<()> {
        self.call_unit("raft_removePeer", vec![to_param(&raft_id)?])
            .await
    }

    /// Add a peer by enode URL, returning its assigned raft id.
    pub async fn raft_add_peer(&self, enode: &str) -> Result<u64> {
        self.call("raft_addPeer", vec![to_param(&enode)?]).await
    }

    // --- Istanbul BFT --------------------------------------------------------

    /// Voting snapshot at a block number or tag (`"latest"`, hex number, ...).
    pub async fn istanbul_get_snapshot(&self, block: &str) -> Result<Snapshot> {
        self.call("istanbul_getSnapshot", vec![to_param(&block)?])
            .await
    }

    /// Voting snapshot at a block hash.
    pub async fn istanbul_get_snapshot_at_hash(&self, block_hash: &str) -> Result<Snapshot> {
        self.call("istanbul_getSnapshotAtHash", vec![to_param(&block_hash)?])
            .await
    }

    /// Validator set at a block number or tag.
    pub async fn istanbul_get_validators(&self, block: &str) -> Result<Vec<String>> {
        self.call("istanbul_getValidators", vec![to_param(&block)?])
            .await
    }

    /// Validator set at a block hash.
    pub async fn istanbul_get_validators_at_hash(&self, block_hash: &str) -> Result<Vec<String>> {
        self.call("istanbul_getValidatorsAtHash", vec![to_param(&block_hash)?])
            .await
    }

    /// Vote to add (`true`) or drop (`false`) a validator candidate.
    pub async fn istanbul_propose(&self, address: &str, auth: bool) -> Result<()> {
        self.call_unit("istanbul_propose", vec![to_param(&address)?, to_param(&auth)?])
            .await
    }

    /// Drop a pending proposal for a candidate address.
    pub async fn istanbul_discard(&self, address: &str) -> Result<()> {
        self.call_unit("istanbul_discard", vec![to_param(&address)?])
            .await
    }

    /// Candidates this node is currently voting on, with their proposed
    /// authorization.
    pub async fn istanbul_candidates(&self) -> Result<BTreeMap<String, bool>> {
        self.call("istanbul_candidates", vec![]).await
    }

    // --- Permissioning -------------------------------------------------------

    /// List all organizations known to the permissioning model.
    pub async fn permission_org_list(&self) -> Result<Vec<OrgInfo>> {
        self.call("quorumPermission_orgList", vec![]).await
    }

    /// List all permissioned nodes.
    pub async fn permission_node_list(&self) -> Result<Vec<NodeInfo>> {
        self.call("quorumPermission_nodeList", vec![]).await
    }

    /// List all roles across organizations.
    pub async fn permission_role_list(&self) -> Result<Vec<RoleInfo>> {
        self.call("quorumPermission_roleList", vec![]).await
    }

    /// List all permissioned accounts.
    pub async fn permission_account_list(&self) -> Result<Vec<AccountInfo>> {
        self.call("quorumPermission_acctList", vec![]).await
    }

    /// Propose a new organization. The write operations in this family return
    /// the node's status message and take the signing transaction as their
    /// final parameter.
    pub async fn permission_add_org(
        &self,
        org_id: &str,
        enode_url: &str,
        address: &str,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_addOrg",
            vec![
                to_param(&org_id)?,
                to_param(&enode_url)?,
                to_param(&address)?,
                to_param(tx)?,
            ],
        )
        .await
    }

    /// Approve a pending organization proposal.
    pub async fn permission_approve_org(
        &self,
        org_id: &str,
        enode_url: &str,
        address: &str,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_approveOrg",
            vec![
                to_param(&org_id)?,
                to_param(&enode_url)?,
                to_param(&address)?,
                to_param(tx)?,
            ],
        )
        .await
    }

    /// Create a sub-organization under an existing one.
    pub async fn permission_add_sub_org(
        &self,
        parent_org_id: &str,
        sub_org_id: &str,
        enode_url: &str,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_addSubOrg",
            vec![
                to_param(&parent_org_id)?,
                to_param(&sub_org_id)?,
                to_param(&enode_url)?,
                to_param(tx)?,
            ],
        )
        .await
    }

    /// Update an organization's status. Status codes pass through as bare
    /// JSON numbers, not hex quantities.
    pub async fn permission_update_org_status(
        &self,
        org_id: &str,
        action: i32,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_updateOrgStatus",
            vec![to_param(&org_id)?, to_param(&action)?, to_param(tx)?],
        )
        .await
    }

    /// Approve an organization status change.
    pub async fn permission_approve_org_status(
        &self,
        org_id: &str,
        action: i32,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_approveOrgStatus",
            vec![to_param(&org_id)?, to_param(&action)?, to_param(tx)?],
        )
        .await
    }

    /// Add a node to an organization.
    pub async fn permission_add_node(
        &self,
        org_id: &str,
        enode_url: &str,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_addNode",
            vec![to_param(&org_id)?, to_param(&enode_url)?, to_param(tx)?],
        )
        .await
    }

    /// Update the status of an organization's node.
    pub async fn permission_update_node_status(
        &self,
        org_id: &str,
        enode_url: &str,
        action: i32,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_updateNodeStatus",
            vec![
                to_param(&org_id)?,
                to_param(&enode_url)?,
                to_param(&action)?,
                to_param(tx)?,
            ],
        )
        .await
    }

    /// Assign an org admin or network admin role to an account.
    pub async fn permission_assign_admin_role(
        &self,
        org_id: &str,
        address: &str,
        role_id: &str,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_assignAdminRole",
            vec![
                to_param(&org_id)?,
                to_param(&address)?,
                to_param(&role_id)?,
                to_param(tx)?,
            ],
        )
        .await
    }

    /// Approve a pending admin role assignment.
    pub async fn permission_approve_admin_role(
        &self,
        org_id: &str,
        address: &str,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_approveAdminRole",
            vec![to_param(&org_id)?, to_param(&address)?, to_param(tx)?],
        )
        .await
    }

    /// Create a role within an organization. `access` is the node's numeric
    /// access code; the two flags mark voter and admin capabilities.
    pub async fn permission_add_new_role(
        &self,
        org_id: &str,
        role_id: &str,
        access: i32,
        is_voter: bool,
        is_admin: bool,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_addNewRole",
            vec![
                to_param(&org_id)?,
                to_param(&role_id)?,
                to_param(&access)?,
                to_param(&is_voter)?,
                to_param(&is_admin)?,
                to_param(tx)?,
            ],
        )
        .await
    }

    /// Remove a role from an organization.
    pub async fn permission_remove_role(
        &self,
        org_id: &str,
        role_id: &str,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_removeRole",
            vec![to_param(&org_id)?, to_param(&role_id)?, to_param(tx)?],
        )
        .await
    }

    /// Add an account to an organization with a role.
    pub async fn permission_add_account_to_org(
        &self,
        address: &str,
        org_id: &str,
        role_id: &str,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_addAccountToOrg",
            vec![
                to_param(&address)?,
                to_param(&org_id)?,
                to_param(&role_id)?,
                to_param(tx)?,
            ],
        )
        .await
    }

    /// Change the role of an existing account.
    pub async fn permission_change_account_role(
        &self,
        address: &str,
        org_id: &str,
        role_id: &str,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_changeAccountRole",
            vec![
                to_param(&address)?,
                to_param(&org_id)?,
                to_param(&role_id)?,
                to_param(tx)?,
            ],
        )
        .await
    }

    /// Update an account's status within an organization.
    pub async fn permission_update_account_status(
        &self,
        org_id: &str,
        address: &str,
        action: i32,
        tx: &PrivateTransaction,
    ) -> Result<String> {
        self.call(
            "quorumPermission_updateAccountStatus",
            vec![to_param(&org_id)?, to_param(&address)?, to_param(&action)?, to_param(tx)?],
        )
        .await
    }

    /// Full detail view of one organization: accounts, nodes, roles and
    /// sub-organizations.
    pub async fn permission_get_org_details(&self, org_id: &str) -> Result<OrgDetails> {
        self.call("quorumPermission_getOrgDetails", vec![to_param(&org_id)?])
            .await
    }
}
