//! Private transaction parameter model.
//!
//! Quorum extends the regular transaction call object with `privateFrom` and
//! `privateFor`. The node is strict about the encoding: quantities are
//! `0x`-prefixed lowercase hex, the payload always gains a `0x` prefix, and
//! unset optional fields are omitted from the JSON object rather than sent as
//! null.

use serde::{Serialize, Serializer};

use crate::error::{ClientError, Result};

/// Transaction call object with Quorum privacy fields.
///
/// Field order matches the node's canonical shape and is significant for the
/// reference request vectors: `from, to, gas, gasPrice, value, data, nonce,
/// privateFrom, privateFor`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateTransaction {
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "hex_quantity")]
    pub gas: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "hex_quantity")]
    pub gas_price: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "hex_quantity")]
    pub value: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "prefixed_data")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "hex_quantity")]
    pub nonce: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_for: Option<Vec<String>>,
}

impl PrivateTransaction {
    /// Start building a transaction from the sender address.
    pub fn builder(from: impl Into<String>) -> PrivateTransactionBuilder {
        PrivateTransactionBuilder {
            tx: PrivateTransaction {
                from: from.into(),
                to: None,
                gas: None,
                gas_price: None,
                value: None,
                data: None,
                nonce: None,
                private_from: None,
                private_for: None,
            },
        }
    }
}

/// Builder for [`PrivateTransaction`].
///
/// `build` validates the caller contract before anything is serialized, so a
/// bad transaction never reaches the wire.
#[derive(Debug, Clone)]
pub struct PrivateTransactionBuilder {
    tx: PrivateTransaction,
}

impl PrivateTransactionBuilder {
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.tx.to = Some(to.into());
        self
    }

    pub fn gas(mut self, gas: u128) -> Self {
        self.tx.gas = Some(gas);
        self
    }

    pub fn gas_price(mut self, gas_price: u128) -> Self {
        self.tx.gas_price = Some(gas_price);
        self
    }

    pub fn value(mut self, value: u128) -> Self {
        self.tx.value = Some(value);
        self
    }

    /// Raw payload. Serialized with a `0x` prefix prepended verbatim; the
    /// value itself is treated as opaque and never inspected.
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.tx.data = Some(data.into());
        self
    }

    pub fn nonce(mut self, nonce: u128) -> Self {
        self.tx.nonce = Some(nonce);
        self
    }

    pub fn private_from(mut self, private_from: impl Into<String>) -> Self {
        self.tx.private_from = Some(private_from.into());
        self
    }

    pub fn private_for(mut self, private_for: Vec<String>) -> Self {
        self.tx.private_for = Some(private_for);
        self
    }

    pub fn build(self) -> Result<PrivateTransaction> {
        if self.tx.from.is_empty() {
            return Err(ClientError::Construction(
                "transaction `from` address must not be empty".to_string(),
            ));
        }
        Ok(self.tx)
    }
}

/// Companion object for `eth_sendRawPrivateTransaction`.
///
/// That method takes the recipient list wrapped in an object as its second
/// positional parameter instead of a bare array. The wrapping is specific to
/// this one method.
#[derive(Debug, Clone, Serialize)]
pub struct PrivateFor {
    #[serde(rename = "privateFor")]
    pub private_for: Vec<String>,
}

fn hex_quantity<S>(value: &Option<u128>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_str(&format!("{v:#x}")),
        None => serializer.serialize_none(),
    }
}

fn prefixed_data<S>(value: &Option<String>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(d) => serializer.serialize_str(&format!("0x{d}")),
        None => serializer.serialize_none(),
    }
}
