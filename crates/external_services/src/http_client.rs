//! Blocking HTTP transport for connector requests.

use std::time::Duration;

use common_utils::{
    consts,
    errors::CustomResult,
    request::{Method, Request},
};
use error_stack::ResultExt;
use gateway_interfaces::{
    api::HttpTransport,
    configs::Settings,
    errors::HttpClientError,
    types::{Proxy, Response},
};
use masking::PeekInterface;
use router_env::{instrument, logger};

/// client module
pub mod client;

/// [`HttpTransport`] backed by a blocking `reqwest` client. Sends each request once.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    /// Client honouring the proxy settings, timing out after `timeout_secs`
    /// (thirty seconds when not given).
    pub fn new(proxy: &Proxy, timeout_secs: Option<u64>) -> CustomResult<Self, HttpClientError> {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(consts::REQUEST_TIME_OUT));
        Ok(Self {
            client: client::create_client(proxy, timeout)?,
        })
    }

    /// Client configured from the application settings.
    pub fn from_settings(settings: &Settings) -> CustomResult<Self, HttpClientError> {
        Self::new(&settings.proxy, settings.request_timeout)
    }
}

impl HttpTransport for HttpClient {
    #[instrument(skip_all, fields(url = %request.url))]
    fn post(&self, request: &Request) -> CustomResult<Response, HttpClientError> {
        logger::info!(method = %request.method, headers = ?request.headers, payload = ?request.body);

        let url = url::Url::parse(&request.url).change_context(HttpClientError::UrlParsingFailed)?;

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
        };

        let builder = request
            .headers
            .iter()
            .fold(self.client.request(method, url), |builder, (name, value)| {
                builder.header(name.as_str(), value.as_str())
            });
        let builder = match request.body.as_ref() {
            Some(body) => builder.body(body.get_inner_value().peek().clone()),
            None => builder,
        };

        let response = builder
            .send()
            .map_err(|error| match error {
                error if error.is_timeout() => HttpClientError::RequestTimeoutReceived,
                _ => HttpClientError::RequestNotSent(error.to_string()),
            })
            .attach_printable("Unable to send request to connector")?;

        let status_code = response.status().as_u16();
        let body = response
            .bytes()
            .change_context(HttpClientError::ResponseDecodingFailed)?;

        Ok(Response {
            response: body,
            status_code,
        })
    }
}
