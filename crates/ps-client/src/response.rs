//! HTTP response handling and error classification.

use crate::error::{Error, ErrorKind, Result};
use crate::request::Request;
use crate::xml;

/// Wrapper around an HTTP response from the web service.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// PrestaShop version reported by the shop.
    pub fn shop_version(&self) -> Option<&str> {
        self.header("psws-version")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Get the response body as bytes.
    pub async fn bytes(self) -> Result<bytes::Bytes> {
        self.inner.bytes().await.map_err(Into::into)
    }

    /// Turn a non-2xx response into a `RemoteService` error.
    pub(crate) async fn check_webservice_error(self, request: &Request) -> Result<Response> {
        if self.is_success() {
            return Ok(self);
        }

        let status = self.status();
        let reason = self
            .inner
            .status()
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string();
        let body = self.text().await.unwrap_or_default();
        Err(remote_error(status, &reason, &body, request))
    }
}

/// Build the single error returned for every failed call.
fn remote_error(status: u16, reason: &str, body: &str, request: &Request) -> Error {
    let message = xml::parse_error_message(body).unwrap_or_else(|| reason.to_string());
    let mut request_dump = request.dump();
    request_dump.push_str("ws_key=[REDACTED]\n");

    Error::new(ErrorKind::RemoteService {
        status,
        message: sanitize_error_message(&message),
        body: redact_key(body),
        request_dump,
    })
}

/// Remove anything that looks like a `ws_key` query value.
fn redact_key(text: &str) -> String {
    let key_pattern = regex_lite::Regex::new(r"ws_key=[^&\s<>]+").unwrap();
    key_pattern
        .replace_all(text, "ws_key=[REDACTED]")
        .to_string()
}

/// Sanitize an error message to prevent exposing the web service key.
///
/// Truncates messages longer than 500 characters.
fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = redact_key(message);
    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
