use masking::Secret;

use crate::router_request_types::GatewayOperation;

/// Everything a connector needs to turn one operation into one vendor request.
#[derive(Debug, Clone)]
pub struct RouterData {
    pub connector: String,
    pub connector_auth_type: ConnectorAuthType,
    /// Contains operation-specific data required to construct a request and send it to the connector.
    pub request: GatewayOperation,
    /// Unique per request; vendors use it to detect duplicate submissions.
    pub connector_request_reference_id: String,
    pub test_mode: bool,
}

// Different patterns of authentication.
#[derive(Default, Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(tag = "auth_type")]
pub enum ConnectorAuthType {
    HeaderKey {
        api_key: Secret<String>,
    },
    BodyKey {
        api_key: Secret<String>,
        key1: Secret<String>,
    },
    #[default]
    NoKey,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use masking::PeekInterface;

    use super::*;

    #[test]
    fn body_key_credentials_from_json() {
        let auth_type: ConnectorAuthType = serde_json::from_str(
            r#"{"auth_type":"BodyKey","api_key":"609035","key1":"PUSHPAY"}"#,
        )
        .unwrap();

        let ConnectorAuthType::BodyKey { api_key, key1 } = auth_type else {
            panic!("expected BodyKey credentials");
        };
        assert_eq!(api_key.peek(), "609035");
        assert_eq!(key1.peek(), "PUSHPAY");
    }
}
