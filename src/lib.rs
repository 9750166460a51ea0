//! Quorum SDK - Rust Client Library
//!
//! Typed JSON-RPC bindings for the Quorum-specific API surface: private
//! transactions, Raft and Istanbul BFT consensus queries, and network
//! permissioning. The crate builds positional request parameters and decodes
//! typed results; the network exchange itself goes through a pluggable
//! [`Transport`] (HTTP over jsonrpsee by default).
//!
//! # Example
//!
//! ```no_run
//! use quorum_sdk::{PrivateTransaction, QuorumClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect to a node
//!     let client = QuorumClient::connect("http://127.0.0.1:22000")?;
//!
//!     // Submit a private transaction
//!     let tx = PrivateTransaction::builder("0xed9d02e382b34818e88b88a309c7fe71e65f419d")
//!         .to("0xca843569e3427144cead5e4d5999a3d0ccf92b8e")
//!         .gas(4_700_000)
//!         .private_for(vec!["ROAZBWtSacxXQrOe3FGAqJDyJjFePR5ce4TSIzmJ0Bc=".to_string()])
//!         .build()?;
//!
//!     let hash = client.eth_send_transaction(&tx).await?;
//!     println!("Transaction submitted: {}", hash);
//!
//!     // Poll for the receipt
//!     if let Some(receipt) = client.eth_get_transaction_receipt(&hash).await? {
//!         println!("Mined in block {:?}", receipt.block_number);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod decode;
mod error;
mod transport;
mod types;

pub use client::QuorumClient;
pub use error::{ClientError, Result};
pub use transport::{HttpTransport, RequestEnvelope, Transport};
pub use types::{
    AccountInfo, ClusterMember, NodeInfo, OrgDetails, OrgInfo, PrivateFor, PrivateTransaction,
    PrivateTransactionBuilder, RoleInfo, Snapshot, Tally, TransactionReceipt, Vote,
};
