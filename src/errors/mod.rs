//! Error handling module for the admin client.
//!
//! Controllers only distinguish success from failure; the variants below
//! exist for logs and for library callers that want more detail.

/// Client error type.
#[derive(Debug)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, body read)
    Transport(String),
    /// Backend answered with a non-success HTTP status
    Status { status: u16, url: String },
    /// Response body could not be decoded
    Decode(String),
    /// Operation requires a backend-assigned identifier the entity lacks
    MissingId(&'static str),
}

impl ClientError {
    /// Get the HTTP status, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "transport error: {}", msg),
            ClientError::Status { status, url } => {
                write!(f, "unexpected status {} from {}", status, url)
            }
            ClientError::Decode(msg) => write!(f, "decode error: {}", msg),
            ClientError::MissingId(resource) => {
                write!(f, "{}: entity has no identifier yet", resource)
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP error: {:?}", err);
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ClientError::Decode(err.to_string())
    }
}

/// Field-level validation failure reported by an entity form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
