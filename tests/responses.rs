//! Response decode tests.
//!
//! Verifies the decode laws: a null result becomes an explicit `None`, a
//! structured result populates the typed shape, unknown fields are ignored,
//! and a shape mismatch is a decode error rather than a node error.

mod common;

use common::RecordingTransport;
use quorum_sdk::{ClientError, QuorumClient};
use serde_json::json;

#[tokio::test]
async fn payload_present_decodes_to_some() {
    let transport = RecordingTransport::replying(json!("0xdeadbeef"));
    let client = QuorumClient::with_transport(transport);

    let payload = client.eth_get_quorum_payload("0x").await.unwrap();

    assert_eq!(payload.as_deref(), Some("0xdeadbeef"));
}

#[tokio::test]
async fn payload_null_decodes_to_none() {
    let transport = RecordingTransport::replying(json!(null));
    let client = QuorumClient::with_transport(transport);

    assert!(client.eth_get_quorum_payload("0x").await.unwrap().is_none());
}

#[tokio::test]
async fn receipt_decodes_and_ignores_unknown_fields() {
    let transport = RecordingTransport::replying(json!({
        "transactionHash": "0xtx",
        "transactionIndex": "0x0",
        "blockHash": "0xblock",
        "blockNumber": "0x1b4",
        "cumulativeGasUsed": "0x33bc",
        "gasUsed": "0x4dc",
        "contractAddress": null,
        "from": "0xfrom",
        "to": "0xto",
        "logs": [{"address": "0xlog", "topics": [], "data": "0x"}],
        "logsBloom": "0x0",
        "status": "0x1",
        "someFutureField": 42
    }));
    let client = QuorumClient::with_transport(transport);

    let receipt = client
        .eth_get_transaction_receipt("0xtx")
        .await
        .unwrap()
        .expect("receipt should be present");

    assert_eq!(receipt.transaction_hash, "0xtx");
    assert_eq!(receipt.block_number.as_deref(), Some("0x1b4"));
    assert_eq!(receipt.status.as_deref(), Some("0x1"));
    assert!(receipt.contract_address.is_none());
    assert_eq!(receipt.logs.len(), 1);
}

#[tokio::test]
async fn missing_receipt_is_none() {
    let transport = RecordingTransport::replying(json!(null));
    let client = QuorumClient::with_transport(transport);

    assert!(client
        .eth_get_transaction_receipt("0xpending")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn cluster_members_decode() {
    let transport = RecordingTransport::replying(json!([
        {
            "raftId": 1,
            "nodeId": "abc123",
            "p2pPort": 21000,
            "raftPort": 50401,
            "ip": "127.0.0.1",
            "nodeActive": true,
            "role": "minter"
        },
        {
            "raftId": 2,
            "nodeId": "def456",
            "p2pPort": 21001,
            "raftPort": 50402,
            "hostname": "node2",
            "nodeActive": false
        }
    ]));
    let client = QuorumClient::with_transport(transport);

    let cluster = client.raft_cluster().await.unwrap();

    assert_eq!(cluster.len(), 2);
    assert_eq!(cluster[0].raft_id, 1);
    assert_eq!(cluster[0].ip.as_deref(), Some("127.0.0.1"));
    assert_eq!(cluster[1].hostname.as_deref(), Some("node2"));
    assert!(!cluster[1].node_active);
}

#[tokio::test]
async fn snapshot_decodes_with_votes_and_tally() {
    let transport = RecordingTransport::replying(json!({
        "epoch": 30000,
        "number": 5,
        "hash": "0xsnap",
        "votes": [
            {"validator": "0xval", "address": "0xcand", "authorize": true, "block": 4}
        ],
        "tally": {"0xcand": {"authorize": true, "votes": 1}},
        "validators": ["0xval"]
    }));
    let client = QuorumClient::with_transport(transport);

    let snapshot = client.istanbul_get_snapshot("latest").await.unwrap();

    assert_eq!(snapshot.number, 5);
    assert_eq!(snapshot.votes.len(), 1);
    assert!(snapshot.votes[0].authorize);
    assert_eq!(snapshot.tally["0xcand"].votes, 1);
    assert_eq!(snapshot.validators, vec!["0xval".to_string()]);
}

#[tokio::test]
async fn snapshot_tolerates_null_collections() {
    // Nil slices and maps marshal as null on the node side.
    let transport = RecordingTransport::replying(json!({
        "epoch": 30000,
        "number": 0,
        "hash": "0xgenesis",
        "votes": null,
        "tally": null,
        "validators": null
    }));
    let client = QuorumClient::with_transport(transport);

    let snapshot = client.istanbul_get_snapshot("0x0").await.unwrap();

    assert!(snapshot.votes.is_empty());
    assert!(snapshot.tally.is_empty());
    assert!(snapshot.validators.is_empty());
}

#[tokio::test]
async fn candidates_decode_as_ordered_map() {
    let transport = RecordingTransport::replying(json!({"0xb": false, "0xa": true}));
    let client = QuorumClient::with_transport(transport);

    let candidates = client.istanbul_candidates().await.unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates["0xa"], true);
    assert_eq!(candidates["0xb"], false);
}

#[tokio::test]
async fn org_list_decodes() {
    let transport = RecordingTransport::replying(json!([{
        "fullOrgId": "ORG1",
        "orgId": "ORG1",
        "level": 1,
        "parentOrgId": null,
        "status": 2,
        "subOrgList": null,
        "ultimateParent": "ORG1"
    }]));
    let client = QuorumClient::with_transport(transport);

    let orgs = client.permission_org_list().await.unwrap();

    assert_eq!(orgs.len(), 1);
    assert_eq!(orgs[0].org_id, "ORG1");
    assert_eq!(orgs[0].status, 2);
    assert!(orgs[0].parent_org_id.is_none());
}

#[tokio::test]
async fn org_details_decode_with_null_lists() {
    let transport = RecordingTransport::replying(json!({
        "acctList": [{
            "acctId": "0xacct",
            "orgId": "ORG1",
            "roleId": "ADMIN",
            "status": 2,
            "isOrgAdmin": true
        }],
        "nodeList": null,
        "roleList": null,
        "subOrgList": null
    }));
    let client = QuorumClient::with_transport(transport);

    let details = client.permission_get_org_details("ORG1").await.unwrap();

    assert_eq!(details.acct_list.len(), 1);
    assert!(details.acct_list[0].is_org_admin);
    assert!(details.node_list.is_empty());
    assert!(details.role_list.is_empty());
}

#[tokio::test]
async fn shape_mismatch_is_a_decode_error() {
    // A string where a validator list is expected.
    let transport = RecordingTransport::replying(json!("not-a-list"));
    let client = QuorumClient::with_transport(transport);

    let err = client.istanbul_get_validators("latest").await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[test]
fn rpc_error_keeps_code_and_message() {
    let err = jsonrpsee::core::ClientError::Call(jsonrpsee::types::ErrorObject::owned(
        -32601,
        "method not found",
        None::<()>,
    ));

    match ClientError::from(err) {
        ClientError::Rpc { code, message } => {
            assert_eq!(code, -32601);
            assert_eq!(message, "method not found");
        }
        other => panic!("expected Rpc error, got {other:?}"),
    }
}
