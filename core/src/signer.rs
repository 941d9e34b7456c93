use std::sync::Arc;
use std::time::Duration;

use http::request::Parts;
use log::debug;

use crate::time::{now, DateTime};
use crate::{
    CanonicalRequest, Error, Result, SignRequest, SignedRequest, SigningCredential, SigningMethod,
    SigningRequest,
};

/// Signer is the main struct used to sign the request.
///
/// It holds the provider's algorithm and nothing else: credentials are passed in
/// per call, so one signer can be shared by concurrent requests.
#[derive(Clone, Debug)]
pub struct Signer<C: SigningCredential> {
    builder: Arc<dyn SignRequest<Credential = C>>,
}

impl<C: SigningCredential> Signer<C> {
    /// Create a new signer.
    pub fn new(builder: impl SignRequest<Credential = C>) -> Self {
        Self {
            builder: Arc::new(builder),
        }
    }

    /// Sign the request with an authorization header.
    pub fn sign(&self, parts: Parts, cred: &C) -> Result<SignedRequest> {
        self.sign_at(parts, cred, SigningMethod::Header, now())
    }

    /// Sign the request into a presigned URL valid for `expires_in`.
    pub fn presign(&self, parts: Parts, cred: &C, expires_in: Duration) -> Result<SignedRequest> {
        self.sign_at(parts, cred, SigningMethod::Query(expires_in), now())
    }

    /// Sign the request at the given time.
    ///
    /// The output only depends on the inputs: signing the same request with the
    /// same credential and time twice yields identical requests.
    pub fn sign_at(
        &self,
        mut parts: Parts,
        cred: &C,
        method: SigningMethod,
        now: DateTime,
    ) -> Result<SignedRequest> {
        if !cred.is_valid() {
            return Err(Error::credential_invalid(
                "credential is malformed: identity and secret must not be empty",
            ));
        }

        let mut req = SigningRequest::build(&mut parts)?;
        self.builder.prepare(&mut req, cred, method, now)?;

        let creq = CanonicalRequest::build(&req, self.builder.required_headers(method), now)?;
        let auth = self.builder.sign(cred, &creq, method)?;
        debug!("signed {} {}{} with {:?}", creq.method, creq.host, creq.path, method);

        auth.apply(&mut req);
        req.apply(&mut parts)?;
        Ok(SignedRequest::new(parts))
    }
}
