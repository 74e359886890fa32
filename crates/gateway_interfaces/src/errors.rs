//! Errors interface

/// Connector Errors
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConnectorError {
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Failed to convert amount to required type")]
    AmountConversionFailed,
    #[error("Failed to execute a processing step")]
    ProcessingStepFailed,
    #[error("Failed to obtain authentication type")]
    FailedToObtainAuthType,
    #[error("{message} is not supported by {connector}")]
    NotSupported {
        message: String,
        connector: &'static str,
    },
}

/// Errors raised by an HTTP transport before a response body is available.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum HttpClientError {
    #[error("Failed to construct the HTTP client")]
    ClientConstructionFailed,
    #[error("Invalid proxy configuration")]
    InvalidProxyConfiguration,
    #[error("URL parsing failed")]
    UrlParsingFailed,
    #[error("Failed to send request to the connector: {0}")]
    RequestNotSent(String),
    #[error("Request timed out")]
    RequestTimeoutReceived,
    #[error("Failed to read the response body")]
    ResponseDecodingFailed,
}
