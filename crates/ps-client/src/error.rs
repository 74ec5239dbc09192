//! Error types for prestashop-ws-client.

/// Result type alias for prestashop-ws-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for prestashop-ws-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Shorthand for a `MissingIdentifier` error.
    pub fn missing_identifier(operation: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingIdentifier(operation.into()))
    }

    /// Shorthand for a `MalformedResponse` error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedResponse(message.into()))
    }

    /// Returns true if an operation was refused locally for lack of an id.
    pub fn is_missing_identifier(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingIdentifier(_))
    }

    /// Returns true if the web service answered with a non-success status.
    pub fn is_remote(&self) -> bool {
        matches!(self.kind, ErrorKind::RemoteService { .. })
    }

    /// Returns true if the web service answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// HTTP status code of a remote service error.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::RemoteService { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// An operation that needs an id (update, delete, image mutation) got none.
    #[error("Missing identifier: {0} requires an id")]
    MissingIdentifier(String),

    /// The web service answered with a non-2xx status.
    #[error("PrestaShop web service error: {status} {message}")]
    RemoteService {
        status: u16,
        message: String,
        body: String,
        request_dump: String,
    },

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Entity could not be serialized to XML.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local I/O failed (reading an image file).
    #[error("IO error: {0}")]
    Io(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the ws_key.
        let err = err.without_url();
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::with_source(ErrorKind::Io(err.to_string()), err)
    }
}
