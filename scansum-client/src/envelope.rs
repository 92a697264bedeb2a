//! Pure decoding of the API's `{success, data, message}` response envelope.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ClientError;

/// Decode an envelope that carries the success/failure contract.
///
/// `success: false` becomes [`ClientError::Api`] with the server-supplied
/// `message`, falling back to `fallback` when the message is absent. A
/// missing or ill-typed `data` field is a malformed body and surfaces as
/// [`ClientError::Network`].
pub fn decode_envelope<T: DeserializeOwned>(
    mut body: Value,
    fallback: &str,
) -> Result<T, ClientError> {
    let success = body
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !success {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string();
        return Err(ClientError::Api(message));
    }

    take_data(&mut body)
}

/// Extract and deserialize the `data` field of a response body, ignoring
/// the success flag. Used for GET endpoints where the original client
/// only ever read `data`.
pub fn take_data<T: DeserializeOwned>(body: &mut Value) -> Result<T, ClientError> {
    let data = body
        .get_mut("data")
        .map(Value::take)
        .ok_or_else(|| ClientError::Network("response body has no 'data' field".into()))?;
    serde_json::from_value(data)
        .map_err(|e| ClientError::Network(format!("malformed 'data' field: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scansum_types::HostData;
    use serde_json::json;

    #[test]
    fn success_envelope_yields_data() {
        let body = json!({
            "success": true,
            "data": {"hosts": [{"ip": "1.2.3.4"}], "count": 1},
            "message": "File uploaded successfully"
        });
        let data: HostData = decode_envelope(body, "Upload failed").unwrap();
        assert_eq!(data.hosts.len(), 1);
        assert_eq!(data.count, Some(1));
    }

    #[test]
    fn failure_envelope_carries_server_message() {
        let body = json!({"success": false, "message": "Only JSON files are supported"});
        let err = decode_envelope::<HostData>(body, "Upload failed").unwrap_err();
        match err {
            ClientError::Api(msg) => assert_eq!(msg, "Only JSON files are supported"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn failure_envelope_without_message_uses_fallback() {
        let body = json!({"success": false});
        let err = decode_envelope::<HostData>(body, "Summarization failed").unwrap_err();
        assert_eq!(err.to_string(), "Summarization failed");
    }

    #[test]
    fn missing_success_flag_is_failure() {
        // A body that never declares success is treated as a failed call,
        // same as the original client's falsy check.
        let body = json!({"data": {"hosts": []}});
        assert!(decode_envelope::<HostData>(body, "Upload failed").is_err());
    }

    #[test]
    fn missing_data_is_a_malformed_body() {
        let body = json!({"success": true, "message": "ok"});
        let err = decode_envelope::<HostData>(body, "Upload failed").unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
    }

    #[test]
    fn take_data_ignores_success_flag() {
        let mut body = json!({"data": {"hosts": [{"ip": "8.8.8.8"}]}});
        let data: HostData = take_data(&mut body).unwrap();
        assert_eq!(data.hosts[0].ip, "8.8.8.8");
    }
}
