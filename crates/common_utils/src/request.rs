//! Outbound request handed to an HTTP transport.

use error_stack::ResultExt;
use masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};

use crate::{
    consts,
    errors::{CustomResult, ParsingError},
};

/// Request headers, in insertion order.
pub type Headers = Vec<(String, String)>;

#[allow(missing_docs)]
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

/// Encoded request body. The text is kept in a [`Secret`] so that `Debug` on a [`Request`]
/// never prints card data; use [`masking::FormScrubber`] to obtain a loggable copy.
pub enum RequestContent {
    /// `application/x-www-form-urlencoded` body.
    FormUrlEncoded(Secret<String>),
}

impl RequestContent {
    /// Encode ordered key/value pairs as a form body. Pair order is preserved on the wire.
    pub fn form_url_encoded<K, V>(pairs: &[(K, V)]) -> CustomResult<Self, ParsingError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs = pairs
            .iter()
            .map(|(key, value)| (key.as_ref(), value.as_ref()))
            .collect::<Vec<_>>();
        let encoded = serde_urlencoded::to_string(pairs)
            .change_context(ParsingError)
            .attach_printable("Unable to form-encode request body")?;
        Ok(Self::FormUrlEncoded(Secret::new(encoded)))
    }

    /// `Content-Type` matching the body.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::FormUrlEncoded(_) => consts::FORM_URL_ENCODED,
        }
    }

    /// The encoded body as it goes on the wire.
    pub fn get_inner_value(&self) -> &Secret<String> {
        match self {
            Self::FormUrlEncoded(body) => body,
        }
    }

    /// Length of the encoded body in bytes.
    pub fn len(&self) -> usize {
        self.get_inner_value().peek().len()
    }

    /// Whether the encoded body is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::FormUrlEncoded(_) => "FormUrlEncodedRequestBody",
        })
    }
}

#[allow(missing_docs)]
#[derive(Debug)]
pub struct Request {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

impl Request {
    /// Creates a new instance of HttpRequest with the specified HTTP method and URL.
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: String::from(url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Sets the body of the request.
    pub fn set_body<T: Into<RequestContent>>(&mut self, body: T) {
        self.body.replace(body.into());
    }

    /// Adds a header, replacing an earlier value with the same (case-insensitive) name.
    pub fn add_header(&mut self, header: &str, value: &str) {
        self.headers
            .retain(|(name, _)| !name.eq_ignore_ascii_case(header));
        self.headers.push((header.to_owned(), value.to_owned()));
    }
}

#[allow(missing_docs)]
#[derive(Debug)]
pub struct RequestBuilder {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

impl RequestBuilder {
    /// Starts a `GET` request with no URL, headers or body.
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(1024),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Sets the URL for the HTTP request and returns the modified instance.
    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the method for the request and returns the modified instance.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Adds the provided headers to the existing headers of the HTTP request.
    pub fn headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Sets the body and a matching `Content-Type` header.
    pub fn set_body<T: Into<RequestContent>>(mut self, body: T) -> Self {
        let body = body.into();
        if !self
            .headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("Content-Type"))
        {
            self.headers
                .push(("Content-Type".to_string(), body.content_type().to_string()));
        }
        self.body.replace(body);
        self
    }

    /// Finalise the request.
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
