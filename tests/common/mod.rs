//! Shared test fixtures: a recording transport and the reference transaction.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quorum_sdk::{PrivateTransaction, RequestEnvelope, Result, Transport};
use serde_json::Value;

/// Transport double that records every submission and answers with a canned
/// result value.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    calls: Mutex<Vec<(String, Vec<Value>)>>,
    reply: Mutex<Value>,
}

impl RecordingTransport {
    pub fn replying(reply: Value) -> Self {
        let transport = Self::default();
        *transport.inner.reply.lock().unwrap() = reply;
        transport
    }

    pub fn last_call(&self) -> (String, Vec<Value>) {
        self.inner
            .calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was submitted")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn submit(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        self.inner
            .calls
            .lock()
            .unwrap()
            .push((method.to_string(), params));
        Ok(self.inner.reply.lock().unwrap().clone())
    }
}

/// Frame the last recorded call the way it appears on the wire, with the id
/// fixed at 1 for reproducible comparison.
pub fn wire(transport: &RecordingTransport) -> String {
    let (method, params) = transport.last_call();
    serde_json::to_string(&RequestEnvelope::new(method, params, 1)).unwrap()
}

/// The transaction used by the reference request vectors.
pub fn sample_tx() -> PrivateTransaction {
    PrivateTransaction::builder("FROM")
        .nonce(1)
        .gas(10)
        .to("TO")
        .value(10)
        .data("DATA")
        .private_from("privateFrom")
        .private_for(vec!["privateFor1".to_string(), "privateFor2".to_string()])
        .build()
        .unwrap()
}
