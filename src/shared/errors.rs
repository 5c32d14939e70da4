use thiserror::Error;

/// Error taxonomy shared by every handler.
///
/// Each variant maps to exactly one HTTP status in the interface layer:
/// `InvalidInput` → 400, `NotFound` → 404, `RateLimited` → 429,
/// `DuplicateResource` / `ServiceUnavailable` / `Configuration` → 500.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Missing or malformed request fields. `error` is the short label
    /// returned to the caller, `message` the conversational explanation.
    #[error("Invalid input: {error}: {message}")]
    InvalidInput {
        error: &'static str,
        message: String,
    },

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// A generated identifier collided with an existing row.
    #[error("Duplicate {entity}: {value}")]
    DuplicateResource { entity: &'static str, value: String },

    /// Store or provider failure. The payload is for server logs only.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Server-side misconfiguration (e.g. missing provider credential).
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn invalid(error: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            error,
            message: message.into(),
        }
    }

    /// Whether the caller may simply repeat the request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::DuplicateResource { .. })
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider responded with {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<InfraError> for DomainError {
    fn from(err: InfraError) -> Self {
        DomainError::ServiceUnavailable(err.to_string())
    }
}
