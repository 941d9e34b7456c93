use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use log::debug;

use crate::{BenignReason, Error, Failure, Outcome, OutcomeKind, Result};

/// Fallback is the value an operation returns instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallback {
    /// `false`
    False,
    /// `true`
    True,
    /// `None`
    Null,
    /// An empty collection.
    Empty,
    /// `()`
    Void,
}

/// OutcomePolicy maps outcome kinds to fallback values.
///
/// Kinds without a mapping propagate as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomePolicy {
    fallbacks: HashMap<OutcomeKind, Fallback>,
}

impl OutcomePolicy {
    /// Map the kind to a fallback.
    pub fn on(mut self, kind: OutcomeKind, fallback: Fallback) -> Self {
        self.fallbacks.insert(kind, fallback);
        self
    }

    /// Fallback declared for the kind.
    pub fn fallback(&self, kind: OutcomeKind) -> Option<Fallback> {
        self.fallbacks.get(&kind).copied()
    }
}

/// Types an operation can return as a fallback.
pub trait FromFallback: Sized {
    /// Convert the fallback, or `None` if it does not fit this type.
    fn from_fallback(fallback: Fallback) -> Option<Self>;
}

impl FromFallback for bool {
    fn from_fallback(fallback: Fallback) -> Option<Self> {
        match fallback {
            Fallback::False => Some(false),
            Fallback::True => Some(true),
            _ => None,
        }
    }
}

impl FromFallback for () {
    fn from_fallback(fallback: Fallback) -> Option<Self> {
        match fallback {
            Fallback::Void => Some(()),
            _ => None,
        }
    }
}

impl<T> FromFallback for Option<T> {
    fn from_fallback(fallback: Fallback) -> Option<Self> {
        match fallback {
            Fallback::Null => Some(None),
            _ => None,
        }
    }
}

macro_rules! empty_fallback {
    ($($ty:ty => [$($bound:tt)*]),* $(,)?) => {
        $(
            impl<$($bound)*> FromFallback for $ty {
                fn from_fallback(fallback: Fallback) -> Option<Self> {
                    match fallback {
                        Fallback::Empty => Some(Default::default()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

empty_fallback!(
    Vec<T> => [T],
    HashSet<T> => [T: Eq + Hash],
    BTreeSet<T> => [T: Ord],
    HashMap<K, V> => [K: Eq + Hash, V],
    BTreeMap<K, V> => [K: Ord, V],
    String => [],
);

/// Resolve an outcome into the operation's result.
///
/// `Success` is returned as is, mapped kinds return their fallback and
/// everything else propagates with the provider context attached.
pub fn resolve<T: FromFallback>(outcome: Outcome<T>, policy: &OutcomePolicy) -> Result<T> {
    if let Some(kind) = outcome.kind() {
        if let Some(fallback) = policy.fallback(kind) {
            debug!("resolved {kind:?} to {fallback:?}");
            return T::from_fallback(fallback).ok_or_else(|| {
                Error::config_invalid(format!(
                    "fallback {fallback:?} does not fit {}",
                    std::any::type_name::<T>()
                ))
            });
        }
    }

    match outcome {
        Outcome::Success(value) => Ok(value),
        Outcome::KnownBenignFailure(BenignReason::ExemptCode(envelope)) => {
            Err(Error::provider_failure(envelope))
        }
        Outcome::KnownBenignFailure(BenignReason::IllegalState(msg)) => {
            Err(Error::illegal_state(msg))
        }
        Outcome::NotFound(envelope) => Err(Error::not_found(envelope)),
        Outcome::RetryableFailure { reason, cause } => {
            let err = Error::retryable(reason);
            Err(match cause {
                Failure::Response(envelope) => err.with_source(envelope),
                other => err.with_source(other),
            })
        }
        Outcome::FatalFailure(cause) => Err(cause.into_error()),
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ErrorEnvelope, ErrorKind};

    fn envelope(status: StatusCode, code: &str) -> ErrorEnvelope {
        ErrorEnvelope::new(status).with_code(code)
    }

    #[test]
    fn test_success_passes_through() -> Result<()> {
        let v: Vec<String> = resolve(
            Outcome::Success(vec!["a".to_string()]),
            &OutcomePolicy::default(),
        )?;
        assert_eq!(v, vec!["a".to_string()]);
        Ok(())
    }

    #[test]
    fn test_fallbacks() -> Result<()> {
        let policy = OutcomePolicy::default()
            .on(OutcomeKind::KnownBenignFailure, Fallback::False)
            .on(OutcomeKind::NotFound, Fallback::Null);

        let benign = Outcome::KnownBenignFailure(BenignReason::ExemptCode(envelope(
            StatusCode::CONFLICT,
            "BucketAlreadyOwnedByYou",
        )));
        assert!(!resolve::<bool>(benign, &policy)?);

        let missing: Option<Vec<u8>> = resolve(
            Outcome::NotFound(ErrorEnvelope::new(StatusCode::NOT_FOUND)),
            &OutcomePolicy::default().on(OutcomeKind::NotFound, Fallback::Null),
        )?;
        assert_eq!(missing, None);

        let empty: BTreeMap<String, String> = resolve(
            Outcome::NotFound(ErrorEnvelope::new(StatusCode::NOT_FOUND)),
            &OutcomePolicy::default().on(OutcomeKind::NotFound, Fallback::Empty),
        )?;
        assert!(empty.is_empty());

        let deleted: bool = resolve(
            Outcome::NotFound(ErrorEnvelope::new(StatusCode::NOT_FOUND)),
            &OutcomePolicy::default().on(OutcomeKind::NotFound, Fallback::True),
        )?;
        assert!(deleted);

        resolve::<()>(
            Outcome::NotFound(ErrorEnvelope::new(StatusCode::NOT_FOUND)),
            &OutcomePolicy::default().on(OutcomeKind::NotFound, Fallback::Void),
        )?;
        Ok(())
    }

    #[test]
    fn test_unmapped_kinds_propagate() {
        let policy = OutcomePolicy::default();

        let err = resolve::<bool>(
            Outcome::NotFound(envelope(StatusCode::NOT_FOUND, "NoSuchBucket")),
            &policy,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.provider_code(), Some("NoSuchBucket"));

        let err = resolve::<bool>(
            Outcome::RetryableFailure {
                reason: "ServiceUnavailable".to_string(),
                cause: Failure::Response(ErrorEnvelope::new(StatusCode::SERVICE_UNAVAILABLE)),
            },
            &policy,
        )
        .unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(err.retry_reason(), Some("ServiceUnavailable"));
        assert_eq!(
            err.envelope().map(|e| e.status()),
            Some(StatusCode::SERVICE_UNAVAILABLE)
        );

        let err = resolve::<bool>(
            Outcome::KnownBenignFailure(BenignReason::IllegalState("twice".to_string())),
            &policy,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalState);
    }

    #[test]
    fn test_retryable_keeps_transport_detail() {
        let err = resolve::<bool>(
            Outcome::RetryableFailure {
                reason: "ConnectionReset".to_string(),
                cause: Failure::ConnectionReset("peer 10.0.0.7:443 sent RST".to_string()),
            },
            &OutcomePolicy::default(),
        )
        .unwrap_err();
        assert_eq!(err.retry_reason(), Some("ConnectionReset"));

        let source = std::error::Error::source(&err).expect("transport failure must be kept");
        assert_eq!(source.to_string(), "connection reset: peer 10.0.0.7:443 sent RST");
    }

    #[test]
    fn test_fatal_always_propagates() {
        let policy = OutcomePolicy::default()
            .on(OutcomeKind::KnownBenignFailure, Fallback::False)
            .on(OutcomeKind::NotFound, Fallback::False)
            .on(OutcomeKind::RetryableFailure, Fallback::False);

        let err = resolve::<bool>(
            Outcome::FatalFailure(Failure::Response(envelope(
                StatusCode::CONFLICT,
                "BucketAlreadyExists",
            ))),
            &policy,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProviderFailure);
        assert_eq!(err.provider_code(), Some("BucketAlreadyExists"));
    }

    #[test]
    fn test_mismatched_fallback() {
        let err = resolve::<Option<String>>(
            Outcome::NotFound(ErrorEnvelope::new(StatusCode::NOT_FOUND)),
            &OutcomePolicy::default().on(OutcomeKind::NotFound, Fallback::False),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
