//! HTTP client for the PrestaShop web service.

use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::{ClientConfig, Credentials};
use crate::error::{Error, ErrorKind, Result};
use crate::request::{Request, RequestBody};
use crate::response::Response;
use crate::xml;

/// HTTP client bound to one shop: base URL plus web service key.
///
/// The key is attached as the `ws_key` query parameter of every request and
/// is redacted in Debug output and tracing spans. Cloning is cheap; clones
/// share the connection pool.
#[derive(Clone)]
pub struct PrestaShopClient {
    inner: reqwest::Client,
    base_url: Url,
    ws_key: String,
    config: ClientConfig,
}

impl std::fmt::Debug for PrestaShopClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrestaShopClient")
            .field("base_url", &self.base_url.as_str())
            .field("ws_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl PrestaShopClient {
    /// Create a client for the web service at `base_url` (e.g. `https://shop.example/api`).
    pub fn new(base_url: impl AsRef<str>, ws_key: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, ws_key, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(
        base_url: impl AsRef<str>,
        ws_key: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let mut base_url = Url::parse(base_url.as_ref())?;
        if base_url.cannot_be_a_base() {
            return Err(Error::new(ErrorKind::Config(format!(
                "{} cannot be used as a base URL",
                base_url
            ))));
        }
        // Resource paths are joined relative to the base, so it must end in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            base_url,
            ws_key: ws_key.into(),
            config,
        })
    }

    /// Create a client from stored credentials.
    pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
        Self::new(credentials.base_url(), credentials.ws_key())
    }

    /// Get the base URL (always ends with `/`).
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for a request, with its query parameters and the `ws_key`.
    pub(crate) fn url_for(&self, request: &Request) -> Result<Url> {
        let mut url = self
            .base_url
            .join(request.resource.trim_start_matches('/'))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &request.query_params {
                pairs.append_pair(name, value);
            }
            pairs.append_pair("ws_key", &self.ws_key);
        }
        Ok(url)
    }

    /// Execute a request and classify the outcome.
    ///
    /// Any non-2xx status becomes an `ErrorKind::RemoteService` error. The
    /// call is attempted exactly once.
    #[instrument(skip(self, request), fields(method = ?request.method, resource = %request.resource))]
    pub async fn execute(&self, request: &Request) -> Result<Response> {
        let url = self.url_for(request)?;
        let mut req = self.inner.request(request.method.to_reqwest(), url);

        req = match &request.body {
            Some(RequestBody::Xml(body)) => req
                .header(reqwest::header::CONTENT_TYPE, "application/xml")
                .body(body.clone()),
            Some(RequestBody::Image(upload)) => req.multipart(upload.to_form()),
            None => req,
        };

        if self.config.enable_tracing {
            debug!(
                method = ?request.method,
                resource = %request.resource,
                params = request.query_params.len(),
                "Sending request"
            );
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            let content_length = response.content_length();

            if response.status().is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        Response::new(response).check_webservice_error(request).await
    }

    /// Execute a request and decode the element named by the request's root
    /// element.
    pub async fn execute_entity<T: DeserializeOwned>(&self, request: &Request) -> Result<T> {
        let root = request
            .expected_root()
            .ok_or_else(|| Error::new(ErrorKind::Other("request has no root element".into())))?;
        let body = self.execute(request).await?.text().await?;
        xml::from_fragment(xml::extract_element(&body, root)?)
    }

    /// Execute a request and decode every outermost `item` element.
    ///
    /// When the request names a root element (the plural wrapper) only items
    /// inside the first such wrapper are decoded; a missing wrapper means an
    /// empty list. Without a root element the whole body is scanned.
    pub async fn execute_list<T: DeserializeOwned>(
        &self,
        request: &Request,
        item: &str,
    ) -> Result<Vec<T>> {
        let body = self.execute(request).await?.text().await?;
        let scope = match request.expected_root() {
            Some(root) => match xml::extract_elements(&body, root)?.into_iter().next() {
                Some(wrapper) => wrapper,
                None => return Ok(Vec::new()),
            },
            None => body.as_str(),
        };

        xml::extract_elements(scope, item)?
            .into_iter()
            .map(xml::from_fragment::<T>)
            .collect()
    }

    /// Execute a listing request and collect the `id` attribute of every
    /// `element`.
    pub async fn execute_for_ids(&self, request: &Request, element: &str) -> Result<Vec<u64>> {
        let body = self.execute(request).await?.text().await?;
        xml::extract_ids(&body, element)
    }

    /// Execute a request and return the raw payload (image downloads).
    pub async fn execute_for_image(&self, request: &Request) -> Result<bytes::Bytes> {
        self.execute(request).await?.bytes().await
    }
}
