//! Types interface

use serde::Deserialize;

/// Raw reply of a connector, as handed back by the transport.
#[derive(Clone, Debug)]
pub struct Response {
    /// response
    pub response: bytes::Bytes,
    /// status code
    pub status_code: u16,
}

impl Response {
    /// Body as text, with invalid UTF-8 replaced.
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.response)
    }
}

/// Proxy configuration of the outbound HTTP client.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Proxy {
    /// The URL of the HTTP proxy server.
    pub http_url: Option<String>,

    /// The URL of the HTTPS proxy server.
    pub https_url: Option<String>,

    /// The timeout duration (in seconds) for idle connections in the proxy pool.
    pub idle_pool_connection_timeout: Option<u64>,

    /// A comma-separated list of hosts that should bypass the proxy.
    pub bypass_proxy_hosts: Option<String>,
}
