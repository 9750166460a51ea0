//! Result decoding.
//!
//! Two decode shapes cover every method: `decode` for results that must be
//! present, `decode_optional` for methods where the node answers null when
//! there is nothing to report. The null case maps to `None` so a raw null
//! never reaches the caller; a shape mismatch is a decode error, distinct
//! from both "no data" and a node-side RPC error.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result};

pub(crate) fn decode<T: DeserializeOwned>(raw: Value) -> Result<T> {
    serde_json::from_value(raw).map_err(|e| ClientError::Decode(e.to_string()))
}

pub(crate) fn decode_optional<T: DeserializeOwned>(raw: Value) -> Result<Option<T>> {
    match raw {
        Value::Null => Ok(None),
        other => decode(other).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_result_is_explicit_absence() {
        let decoded: Option<String> = decode_optional(Value::Null).unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn present_result_is_wrapped() {
        let decoded: Option<String> = decode_optional(json!("0xpayload")).unwrap();
        assert_eq!(decoded.as_deref(), Some("0xpayload"));
    }

    #[test]
    fn shape_mismatch_is_a_decode_error() {
        let err = decode::<Vec<String>>(json!("not-a-list")).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
