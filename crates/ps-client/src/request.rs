//! Request descriptors for web service calls.

use std::fmt::Write as _;
use std::path::Path;

use bytes::Bytes;

use crate::error::Result;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One outbound web service call: resource path, verb, query parameters,
/// optional body and the element the response is expected to be rooted at.
///
/// The `ws_key` is not part of the descriptor; the client attaches it when
/// the request is executed.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub(crate) method: RequestMethod,
    pub(crate) resource: String,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) body: Option<RequestBody>,
    pub(crate) root_element: Option<String>,
}

/// Request body content.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// `application/xml` document.
    Xml(String),
    /// Multipart upload with a single `image` file part.
    Image(ImageUpload),
}

impl Request {
    /// Create a new request for a resource path relative to the base URL.
    pub fn new(method: RequestMethod, resource: impl Into<String>) -> Self {
        Self {
            method,
            resource: resource.into(),
            query_params: Vec::new(),
            body: None,
            root_element: None,
        }
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Set an XML body.
    pub fn xml(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Xml(body.into()));
        self
    }

    /// Set an image upload body.
    pub fn image(mut self, upload: ImageUpload) -> Self {
        self.body = Some(RequestBody::Image(upload));
        self
    }

    /// Set the element the response is rooted at.
    pub fn root_element(mut self, name: impl Into<String>) -> Self {
        self.root_element = Some(name.into());
        self
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query_params
    }

    /// First value of the named query parameter.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// XML body text, if the body is XML.
    pub fn xml_body(&self) -> Option<&str> {
        match &self.body {
            Some(RequestBody::Xml(xml)) => Some(xml),
            _ => None,
        }
    }

    pub fn expected_root(&self) -> Option<&str> {
        self.root_element.as_deref()
    }

    /// Human readable dump of the parameters and body, attached to remote
    /// service errors.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:?} {}", self.method, self.resource);
        for (name, value) in &self.query_params {
            let _ = writeln!(out, "{}={}", name, value);
        }
        match &self.body {
            Some(RequestBody::Xml(xml)) => {
                let _ = writeln!(out, "{}", xml);
            }
            Some(RequestBody::Image(upload)) => {
                let _ = writeln!(
                    out,
                    "image: {} ({} bytes)",
                    upload.file_name,
                    upload.bytes.len()
                );
            }
            None => {}
        }
        out
    }
}

/// Image payload sent as the `image` file part of a multipart request.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub(crate) file_name: String,
    pub(crate) bytes: Bytes,
}

impl ImageUpload {
    /// Upload in-memory bytes under a default file name.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: "image.png".to_string(),
            bytes: bytes.into(),
        }
    }

    /// Read an image file, keeping its file name.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image.png".to_string());
        Ok(Self {
            file_name,
            bytes: Bytes::from(bytes),
        })
    }

    /// Override the file name sent with the part.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub(crate) fn to_form(&self) -> reqwest::multipart::Form {
        let part = reqwest::multipart::Part::bytes(self.bytes.to_vec())
            .file_name(self.file_name.clone());
        reqwest::multipart::Form::new().part("image", part)
    }
}
