//! Error types for DOI metadata resolution.

/// Errors that can occur while resolving a DOI into metadata.
///
/// The first five variants are the outcomes a single request to the
/// citation-resolution service can end in. All of them are fatal to the
/// request that produced them; whether they are fatal to an enclosing
/// [`resolve`](crate::DoiClient::resolve) depends on which request failed.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// The resolver does not know the identifier (HTTP 404).
    #[error("Identifier not found")]
    IdentifierNotFound,

    /// The identifier exists but the service has no metadata for it (HTTP 204).
    #[error("No metadata available for identifier")]
    NoMetadataAvailable,

    /// The service cannot produce the requested representation (HTTP 406).
    #[error("Requested representation is not supported")]
    UnsupportedRepresentation,

    /// Any other status, or the request never got a response at all.
    #[error("Citation service unreachable{}: {message}", status_suffix(.status))]
    ServiceUnreachable {
        status: Option<u16>,
        message: String,
    },

    /// The response body is not a CSL-JSON object.
    #[error("Malformed metadata: {0}")]
    MalformedMetadata(String),

    /// The input does not look like a DOI.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MetadataError {
    /// Stable snake_case name of the error kind, for logs and CLI output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::IdentifierNotFound => "identifier_not_found",
            Self::NoMetadataAvailable => "no_metadata_available",
            Self::UnsupportedRepresentation => "unsupported_representation",
            Self::ServiceUnreachable { .. } => "service_unreachable",
            Self::MalformedMetadata(_) => "malformed_metadata",
            Self::InvalidIdentifier(_) => "invalid_identifier",
            Self::Config(_) => "config",
            Self::Json(_) => "json",
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl From<reqwest::Error> for MetadataError {
    fn from(err: reqwest::Error) -> Self {
        Self::ServiceUnreachable {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Convenience alias for Results using [`MetadataError`].
pub type Result<T> = std::result::Result<T, MetadataError>;
