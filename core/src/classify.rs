use std::collections::HashSet;
use std::fmt;

use http::StatusCode;
use log::debug;

use crate::{Error, ErrorEnvelope, OperationContext};

/// Failure is a failed call as the transport reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The provider answered with an error status.
    Response(ErrorEnvelope),
    /// The client refused to continue, e.g. a bucket created twice in one session.
    IllegalState(String),
    /// The connection was reset before a response arrived.
    ConnectionReset(String),
    /// The call timed out.
    Timeout(String),
}

impl Failure {
    /// The provider envelope, if the failure carries one.
    pub fn envelope(&self) -> Option<&ErrorEnvelope> {
        match self {
            Failure::Response(envelope) => Some(envelope),
            _ => None,
        }
    }

    /// Turn the failure into an error that keeps the provider context.
    pub fn into_error(self) -> Error {
        match self {
            Failure::Response(envelope) => Error::provider_failure(envelope),
            Failure::IllegalState(msg) => Error::illegal_state(msg),
            Failure::ConnectionReset(msg) => Error::unexpected(format!("connection reset: {msg}")),
            Failure::Timeout(msg) => Error::unexpected(format!("timed out: {msg}")),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Response(envelope) => write!(f, "{envelope}"),
            Failure::IllegalState(msg) => write!(f, "illegal state: {msg}"),
            Failure::ConnectionReset(msg) => write!(f, "connection reset: {msg}"),
            Failure::Timeout(msg) => write!(f, "timed out: {msg}"),
        }
    }
}

impl std::error::Error for Failure {}

/// Why a failure was considered benign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenignReason {
    /// The provider code is exempted by the operation.
    ExemptCode(ErrorEnvelope),
    /// The client reported an illegal state.
    IllegalState(String),
}

/// Outcome of a call, after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The call succeeded.
    Success(T),
    /// The call failed in a way the operation expects.
    KnownBenignFailure(BenignReason),
    /// The target does not exist.
    NotFound(ErrorEnvelope),
    /// The call may succeed if retried.
    RetryableFailure {
        /// Provider code or status name, e.g. `SlowDown` or `ServiceUnavailable`.
        reason: String,
        /// The failure as reported.
        cause: Failure,
    },
    /// Anything else.
    FatalFailure(Failure),
}

/// The outcome kinds an operation may map to a fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// See [`Outcome::KnownBenignFailure`].
    KnownBenignFailure,
    /// See [`Outcome::NotFound`].
    NotFound,
    /// See [`Outcome::RetryableFailure`].
    RetryableFailure,
}

impl<T> Outcome<T> {
    /// The mappable kind of this outcome.
    ///
    /// `Success` and `FatalFailure` have none: the former is returned as is and
    /// the latter always propagates.
    pub fn kind(&self) -> Option<OutcomeKind> {
        match self {
            Outcome::KnownBenignFailure(_) => Some(OutcomeKind::KnownBenignFailure),
            Outcome::NotFound(_) => Some(OutcomeKind::NotFound),
            Outcome::RetryableFailure { .. } => Some(OutcomeKind::RetryableFailure),
            Outcome::Success(_) | Outcome::FatalFailure(_) => None,
        }
    }
}

/// Classifier decides what a failure means to the caller.
///
/// It is pure and holds no state besides its tables.
#[derive(Debug, Clone)]
pub struct Classifier {
    retryable_statuses: HashSet<StatusCode>,
    retryable_codes: HashSet<String>,
    not_found_codes: HashSet<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            retryable_statuses: [
                StatusCode::TOO_MANY_REQUESTS,
                StatusCode::INTERNAL_SERVER_ERROR,
                StatusCode::BAD_GATEWAY,
                StatusCode::SERVICE_UNAVAILABLE,
                StatusCode::GATEWAY_TIMEOUT,
            ]
            .into_iter()
            .collect(),
            retryable_codes: HashSet::new(),
            not_found_codes: HashSet::new(),
        }
    }
}

impl Classifier {
    /// Treat the given provider code as a throttle signal regardless of status.
    pub fn with_retryable_code(mut self, code: impl Into<String>) -> Self {
        self.retryable_codes.insert(code.into());
        self
    }

    /// Treat the given status as retryable.
    pub fn with_retryable_status(mut self, status: StatusCode) -> Self {
        self.retryable_statuses.insert(status);
        self
    }

    /// Treat the given provider code as not found regardless of status.
    pub fn with_not_found_code(mut self, code: impl Into<String>) -> Self {
        self.not_found_codes.insert(code.into());
        self
    }

    /// Classify a failure in the context of one operation.
    ///
    /// Rules apply in order and the first match wins:
    ///
    /// 1. the provider code is exempted by the operation
    /// 2. the client reported an illegal state the operation accepts
    /// 3. status 404 or a not found code
    /// 4. a retryable status, a throttle code, a reset or a timeout
    /// 5. fatal
    pub fn classify<T>(&self, failure: Failure, ctx: &OperationContext) -> Outcome<T> {
        let outcome = self.decide(failure, ctx);
        debug!("classified failure as {:?}", outcome.kind());
        outcome
    }

    fn decide<T>(&self, failure: Failure, ctx: &OperationContext) -> Outcome<T> {
        let envelope = match failure {
            Failure::Response(envelope) => envelope,
            Failure::IllegalState(msg) if ctx.is_illegal_state_benign() => {
                return Outcome::KnownBenignFailure(BenignReason::IllegalState(msg))
            }
            Failure::IllegalState(_) => return Outcome::FatalFailure(failure),
            Failure::ConnectionReset(_) => {
                return Outcome::RetryableFailure {
                    reason: "ConnectionReset".to_string(),
                    cause: failure,
                }
            }
            Failure::Timeout(_) => {
                return Outcome::RetryableFailure {
                    reason: "Timeout".to_string(),
                    cause: failure,
                }
            }
        };

        let code = envelope.code();
        if code.is_some_and(|c| ctx.is_exempt(c)) {
            return Outcome::KnownBenignFailure(BenignReason::ExemptCode(envelope));
        }

        if envelope.status() == StatusCode::NOT_FOUND
            || code.is_some_and(|c| self.not_found_codes.contains(c))
        {
            return Outcome::NotFound(envelope);
        }

        if self.retryable_statuses.contains(&envelope.status())
            || code.is_some_and(|c| self.retryable_codes.contains(c))
        {
            return Outcome::RetryableFailure {
                reason: retry_reason(&envelope),
                cause: Failure::Response(envelope),
            };
        }

        Outcome::FatalFailure(Failure::Response(envelope))
    }
}

/// Provider code if present, otherwise the status name without spaces.
fn retry_reason(envelope: &ErrorEnvelope) -> String {
    if let Some(code) = envelope.code() {
        return code.to_string();
    }
    match envelope.status().canonical_reason() {
        Some(reason) => reason.split_whitespace().collect(),
        None => envelope.status().as_u16().to_string(),
    }
}
