//! Client configuration and web service credentials.

use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Transport settings shared by every request a [`PrestaShopClient`] sends.
///
/// [`PrestaShopClient`]: crate::PrestaShopClient
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upper bound for one exchange, body included. Full `display=full`
    /// listings of large catalogs are the slow case.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Ask for gzip/deflate. Web service XML is verbose (every value sits in
    /// CDATA, every association carries an `xlink:href`) and compresses
    /// well, so this is on unless a proxy in front of the shop mangles it.
    pub accept_compressed: bool,
    /// Sent as `User-Agent`; shows up in the shop's access logs.
    pub user_agent: String,
    /// Emit `debug!`/`info!` events for each request and response.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            accept_compressed: true,
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Chained setters over [`ClientConfig::default`].
///
/// ```rust,ignore
/// let config = ClientConfig::builder()
///     .with_timeout(Duration::from_secs(120))
///     .with_compression(false)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Turn response compression on or off.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Silence the per-request events; spans from `#[instrument]` remain.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Shop address and web service key.
///
/// The key is redacted in Debug output.
#[derive(Clone)]
pub struct Credentials {
    base_url: String,
    ws_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("ws_key", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Create credentials for the web service at `base_url` (e.g. `https://shop.example/api`).
    pub fn new(base_url: impl Into<String>, ws_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ws_key: ws_key.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Reads `PRESTASHOP_BASE_URL` / `PRESTASHOP_WS_KEY`, falling back to
    /// `PS_BASE_URL` / `PS_WS_KEY`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("PRESTASHOP_BASE_URL")
            .or_else(|_| std::env::var("PS_BASE_URL"))
            .map_err(|_| {
                Error::new(ErrorKind::Config(
                    "PRESTASHOP_BASE_URL is not set".to_string(),
                ))
            })?;

        let ws_key = std::env::var("PRESTASHOP_WS_KEY")
            .or_else(|_| std::env::var("PS_WS_KEY"))
            .map_err(|_| {
                Error::new(ErrorKind::Config(
                    "PRESTASHOP_WS_KEY is not set".to_string(),
                ))
            })?;

        Ok(Self::new(base_url, ws_key))
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the web service key.
    pub fn ws_key(&self) -> &str {
        &self.ws_key
    }
}
