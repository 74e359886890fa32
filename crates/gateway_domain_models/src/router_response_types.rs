use std::collections::HashMap;

use serde::Serialize;

/// Why an operation failed once the vendor had answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FailureClassification {
    /// Well-formed reply carrying an error code outside the success set.
    GatewayError { code: String },
    /// Body that is not the vendor's XML document (parse failure, HTML fragment).
    ProtocolError { reason: String },
}

/// The normalized result of one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GatewayResponse {
    pub success: bool,
    pub message: String,
    /// Vendor transaction id, used later for capture and refund.
    pub authorization: Option<String>,
    /// Every field the vendor returned, keyed by snake-case name.
    pub params: HashMap<String, String>,
    /// Token for a stored card.
    pub token: Option<String>,
    pub test: bool,
    pub failure: Option<FailureClassification>,
}

impl GatewayResponse {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Vendor error code of a gateway failure.
    pub fn get_error_code(&self) -> Option<&str> {
        match &self.failure {
            Some(FailureClassification::GatewayError { code }) => Some(code),
            Some(FailureClassification::ProtocolError { .. }) | None => None,
        }
    }
}
