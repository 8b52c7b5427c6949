/// Fixed message shown for a 2xx response whose body is not JSON.
///
/// The raw body is deliberately not surfaced alongside it.
pub const FORMAT_ERROR_MESSAGE: &str = "Unexpected response format from API. Expected JSON.";

/// Top-level error type for the public client API.
///
/// Every variant is terminal for the current action only: callers surface
/// the message and may immediately retry, and no variant ever leaves
/// session state partially committed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Invalid user input caught before any network call (missing API key,
    /// missing required field for the selected content type, blank
    /// feedback text).
    #[error("validation error: {0}")]
    Validation(String),
    /// Transport or I/O failure reaching the gateway (DNS, timeout,
    /// connection refused). Exactly one attempt is made; there is no retry.
    #[error("transport error: {message}")]
    Transport { message: String },
    /// Gateway answered with a non-2xx status, or a 2xx body carrying an
    /// application-level `error` field. No status-specific handling exists
    /// at this layer.
    #[error("api error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },
    /// Gateway answered 2xx with a non-JSON content type or an
    /// undecodable body.
    #[error("{}", FORMAT_ERROR_MESSAGE)]
    Format,
    /// Client construction failed (HTTP client build).
    #[error("config error: {0}")]
    Config(String),
}

impl ClientError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a transport-level error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a gateway-level error.
    pub fn api(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self::Api {
            message: message.into(),
            status_code,
        }
    }

    /// Returns the human-readable message for this error.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// True when the error was raised before any network call was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
