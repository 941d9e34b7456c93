use crate::time::DateTime;
use crate::{Authorization, CanonicalRequest, Context, Result, SigningMethod, SigningRequest};
use http::HeaderName;
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    ///
    /// Credentials with an empty identity or secret are never valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used to load credentials from the environment.
///
/// Service may require different credential to sign the request, for example, S3 requires
/// access key and secret key, while CloudFiles requires a session token.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load credential from current env.
    ///
    /// Returns `Ok(None)` when this provider has nothing to offer.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// ComputeSignature is the capability every keyed signing algorithm exposes.
///
/// Implementations hold the key material and turn the provider's string to sign
/// into raw signature bytes. Encoding the bytes (base64, hex, ...) is up to the caller.
pub trait ComputeSignature: Debug + Send + Sync {
    /// Compute the signature of the given content.
    fn compute_signature(&self, content: &[u8]) -> Result<Vec<u8>>;
}

/// SignRequest implements one provider's signing algorithm.
///
/// The signer drives it in three steps:
///
/// 1. [`SignRequest::prepare`] stamps time-derived headers (date, content hash, ...)
///    onto the request before it is canonicalized.
/// 2. The request is reduced to a [`CanonicalRequest`], which fails when any of
///    [`SignRequest::required_headers`] is absent.
/// 3. [`SignRequest::sign`] computes the authorization to inject.
///
/// None of the steps may keep state between calls.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: SigningCredential;

    /// Headers that must be present once [`SignRequest::prepare`] has run.
    fn required_headers(&self, _method: SigningMethod) -> &[HeaderName] {
        &[]
    }

    /// Stamp provider specific headers derived from the signing time.
    fn prepare(
        &self,
        _req: &mut SigningRequest,
        _cred: &Self::Credential,
        _method: SigningMethod,
        _now: DateTime,
    ) -> Result<()> {
        Ok(())
    }

    /// Compute the authorization for the canonical request.
    ///
    /// Must be a pure function of `(cred, creq, method)`; the signing time is
    /// carried by `creq.timestamp`.
    fn sign(
        &self,
        cred: &Self::Credential,
        creq: &CanonicalRequest,
        method: SigningMethod,
    ) -> Result<Authorization>;
}
