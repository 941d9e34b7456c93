use std::sync::Arc;
use std::time::Duration;

use http::request::Parts;
use log::debug;

use crate::{
    resolve, Failure, FromFallback, OperationTable, Outcome, Result, SignedRequest, Signer,
    SigningCredential,
};

/// Pipeline ties a provider's signer to its operation table.
///
/// Outbound requests are signed, inbound responses are classified and resolved
/// per operation. The pipeline holds no mutable state and can be shared across
/// tasks.
#[derive(Debug, Clone)]
pub struct Pipeline<C: SigningCredential> {
    signer: Signer<C>,
    table: Arc<OperationTable>,
}

impl<C: SigningCredential> Pipeline<C> {
    /// Create a new pipeline.
    pub fn new(signer: Signer<C>, table: OperationTable) -> Self {
        Self {
            signer,
            table: Arc::new(table),
        }
    }

    /// The signer.
    pub fn signer(&self) -> &Signer<C> {
        &self.signer
    }

    /// The operation table.
    pub fn table(&self) -> &OperationTable {
        &self.table
    }

    /// Sign the request with an authorization header.
    pub fn sign(&self, parts: Parts, cred: &C) -> Result<SignedRequest> {
        self.signer.sign(parts, cred)
    }

    /// Sign the request into a presigned URL.
    pub fn presign(&self, parts: Parts, cred: &C, expires_in: Duration) -> Result<SignedRequest> {
        self.signer.presign(parts, cred, expires_in)
    }

    /// Classify a failure of the named operation.
    pub fn classify(&self, op: &str, failure: Failure) -> Result<Outcome<()>> {
        let spec = self.table.get(op)?;
        Ok(self.table.classifier().classify(failure, spec.context()))
    }

    /// Handle the response of the named operation.
    ///
    /// Successful responses go through `parse`, failed ones are parsed with the
    /// operation's error format, classified and resolved.
    pub fn handle<B, T, F>(&self, op: &str, resp: http::Response<B>, parse: F) -> Result<T>
    where
        B: AsRef<[u8]>,
        T: FromFallback,
        F: FnOnce(http::Response<B>) -> Result<T>,
    {
        let spec = self.table.get(op)?;
        if resp.status().is_success() {
            return parse(resp);
        }

        let format = self.table.error_format_of(spec);
        let envelope = format.parse(resp.status(), resp.headers(), resp.body().as_ref());
        debug!("operation {op} failed: {envelope}");
        self.handle_failure(op, Failure::Response(envelope))
    }

    /// Handle a failure of the named operation.
    pub fn handle_failure<T: FromFallback>(&self, op: &str, failure: Failure) -> Result<T> {
        let spec = self.table.get(op)?;
        let outcome = self.table.classifier().classify(failure, spec.context());
        resolve(outcome, spec.policy())
    }
}
