use std::fmt;
use thiserror::Error;

use crate::ErrorEnvelope;

/// The error type for cloudreq operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    reason: Option<String>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Credentials exist but are invalid/malformed (empty identity or secret).
    CredentialInvalid,

    /// A header the provider's signing algorithm covers is absent.
    MissingRequiredHeader,

    /// Request cannot be signed (missing authority, bad header values, etc.)
    RequestInvalid,

    /// Configuration error (missing fields, invalid values, unknown operation)
    ConfigInvalid,

    /// The provider reported that the target does not exist.
    NotFound,

    /// The call failed in a way the caller may retry.
    Retryable,

    /// The provider rejected the call; the original envelope is attached.
    ProviderFailure,

    /// A client-side illegal-state condition.
    IllegalState,

    /// Unexpected errors (I/O, encoding, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            reason: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this is a credential error
    pub fn is_credential_error(&self) -> bool {
        self.kind == ErrorKind::CredentialInvalid
    }

    /// Check if the caller's retry policy may retry this call.
    pub fn is_retryable(&self) -> bool {
        self.kind == ErrorKind::Retryable
    }

    /// The classified retry reason, such as `ServiceUnavailable` or `SlowDown`.
    pub fn retry_reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// The provider error envelope this error was built from, if any.
    pub fn envelope(&self) -> Option<&ErrorEnvelope> {
        self.source
            .as_ref()
            .and_then(|err| err.downcast_ref::<ErrorEnvelope>())
    }

    /// The provider error code carried by this error, if any.
    pub fn provider_code(&self) -> Option<&str> {
        self.envelope().and_then(|env| env.code())
    }
}

// Convenience constructors
impl Error {
    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a missing required header error
    pub fn missing_required_header(header: &str) -> Self {
        Self::new(
            ErrorKind::MissingRequiredHeader,
            format!("required header {header} is missing"),
        )
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a not found error carrying the provider envelope.
    pub fn not_found(envelope: ErrorEnvelope) -> Self {
        Self::new(ErrorKind::NotFound, format!("not found: {envelope}")).with_source(envelope)
    }

    /// Create a retryable error with the classified reason.
    pub fn retryable(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let mut err = Self::new(
            ErrorKind::Retryable,
            format!("retryable failure: {reason}"),
        );
        err.reason = Some(reason);
        err
    }

    /// Create a provider failure error carrying the provider envelope.
    pub fn provider_failure(envelope: ErrorEnvelope) -> Self {
        Self::new(ErrorKind::ProviderFailure, format!("provider failure: {envelope}"))
            .with_source(envelope)
    }

    /// Create an illegal state error
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalState, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::MissingRequiredHeader => write!(f, "missing required header"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::Retryable => write!(f, "retryable failure"),
            ErrorKind::ProviderFailure => write!(f, "provider failure"),
            ErrorKind::IllegalState => write!(f, "illegal state"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUriParts> for Error {
    fn from(err: http::uri::InvalidUriParts) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_envelope_survives_propagation() {
        let envelope = ErrorEnvelope::new(StatusCode::CONFLICT)
            .with_code("BucketAlreadyExists")
            .with_message("The requested bucket name is not available.");

        let err = Error::provider_failure(envelope.clone());
        assert_eq!(err.kind(), ErrorKind::ProviderFailure);
        assert_eq!(err.envelope(), Some(&envelope));
        assert_eq!(err.provider_code(), Some("BucketAlreadyExists"));
        assert!(err.to_string().contains("BucketAlreadyExists"));
    }

    #[test]
    fn test_retryable_reason() {
        let err = Error::retryable("ServiceUnavailable");
        assert!(err.is_retryable());
        assert_eq!(err.retry_reason(), Some("ServiceUnavailable"));
        assert!(err.envelope().is_none());
    }
}
