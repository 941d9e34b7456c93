//! Core components for signing cloud API requests and classifying their failures.
//!
//! This crate provides the foundational types and traits for the cloudreq ecosystem.
//! Provider crates plug their signing algorithm and operation tables into it.
//!
//! ## Overview
//!
//! A call flows through two halves:
//!
//! - **Outbound**: a [`Signer`] reduces the request to a [`CanonicalRequest`] and
//!   asks the provider's [`SignRequest`] for an [`Authorization`] to inject.
//! - **Inbound**: a failed response is parsed into an [`ErrorEnvelope`], turned
//!   into an [`Outcome`] by the [`Classifier`] and mapped to the operation's
//!   declared fallback by [`resolve`].
//!
//! [`Pipeline`] wires both halves for one provider.
//!
//! ## Example
//!
//! ```
//! use cloudreq_core::{
//!     Authorization, CanonicalRequest, Classifier, ErrorFormat, Fallback, OperationSpec,
//!     OperationTable, OutcomeKind, Pipeline, Result, SignRequest, Signer, SigningCredential,
//!     SigningMethod,
//! };
//! use http::HeaderName;
//!
//! #[derive(Clone, Debug)]
//! struct Token(String);
//!
//! impl SigningCredential for Token {
//!     fn is_valid(&self) -> bool {
//!         !self.0.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct TokenSigner;
//!
//! impl SignRequest for TokenSigner {
//!     type Credential = Token;
//!
//!     fn sign(&self, cred: &Token, _: &CanonicalRequest, _: SigningMethod) -> Result<Authorization> {
//!         Authorization::header(HeaderName::from_static("x-auth-token"), &cred.0)
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let table = OperationTable::new(Classifier::default(), ErrorFormat::PlainText).with_operation(
//!     OperationSpec::new("get_object").on(OutcomeKind::NotFound, Fallback::Null),
//! );
//! let pipeline = Pipeline::new(Signer::new(TokenSigner), table);
//!
//! let parts = http::Request::get("https://storage.example.com/v1/container/object")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! let signed = pipeline.sign(parts, &Token("token".to_string()))?;
//! assert_eq!(signed.parts().headers["x-auth-token"], "token");
//!
//! let resp = http::Response::builder().status(404).body(Vec::new())?;
//! let object: Option<Vec<u8>> = pipeline.handle("get_object", resp, |resp| Ok(Some(resp.into_body())))?;
//! assert_eq!(object, None);
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`FileRead`]: For asynchronous file reading
//! - [`Env`]: For environment variable access
//! - [`ProvideCredential`]: For loading credentials from various sources
//! - [`SignRequest`]: For a provider's signing algorithm
//! - [`ComputeSignature`]: For keyed signature primitives
//! - [`SigningCredential`]: For validating credentials
//! - [`FromFallback`]: For result types that accept a fallback value
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, FileRead, NoopEnv, NoopFileRead, OsEnv, StaticEnv};

mod api;
pub use api::{ComputeSignature, ProvideCredential, SignRequest, SigningCredential};
mod algorithm;
pub use algorithm::{HmacSha1, HmacSha256};
mod request;
pub use request::{SigningMethod, SigningRequest, QUERY_ENCODE_SET};
mod canonical;
pub use canonical::CanonicalRequest;
mod signed;
pub use signed::{Authorization, SignedRequest};
mod signer;
pub use signer::Signer;
mod chain;
pub use chain::ProvideCredentialChain;

mod envelope;
pub use envelope::{ErrorEnvelope, ErrorFormat};
mod classify;
pub use classify::{BenignReason, Classifier, Failure, Outcome, OutcomeKind};
mod resolve;
pub use resolve::{resolve, Fallback, FromFallback, OutcomePolicy};
mod operation;
pub use operation::{OperationContext, OperationSpec, OperationTable};
mod pipeline;
pub use pipeline::Pipeline;

mod error;
pub use error::{Error, ErrorKind, Result};
