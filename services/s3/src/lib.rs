//! S3 REST signing and response handling for cloudreq.
//!
//! This crate signs requests with the S3 HMAC-SHA1 scheme and declares how
//! each S3 operation treats failures.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cloudreq_core::{Context, OsEnv, Pipeline, ProvideCredential, Result, Signer};
//! use cloudreq_s3::{operations, DefaultCredentialProvider, RequestSigner};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!     let Some(cred) = DefaultCredentialProvider::new().provide_credential(&ctx).await? else {
//!         return Ok(());
//!     };
//!
//!     let pipeline = Pipeline::new(
//!         Signer::new(RequestSigner::new().with_bucket("bucket")),
//!         operations::table(),
//!     );
//!
//!     let req = http::Request::get("https://bucket.s3.amazonaws.com/object.txt")
//!         .body(())?
//!         .into_parts()
//!         .0;
//!     let signed = pipeline.sign(req, &cred)?;
//!     println!("{:?}", signed.parts().headers);
//!     Ok(())
//! }
//! ```
//!
//! ## Failures
//!
//! Responses are handed back to the pipeline with the operation name:
//!
//! ```
//! # use cloudreq_core::{Pipeline, Result, Signer};
//! # use cloudreq_s3::{operations, RequestSigner};
//! # fn main() -> Result<()> {
//! # let pipeline = Pipeline::new(Signer::new(RequestSigner::new()), operations::table());
//! let resp = http::Response::builder()
//!     .status(409)
//!     .body("<Error><Code>BucketAlreadyOwnedByYou</Code></Error>")?;
//! let created: bool = pipeline.handle(operations::CREATE_BUCKET, resp, |_| Ok(true))?;
//! assert!(!created);
//! # Ok(())
//! # }
//! ```
//!
//! ## Credential Sources
//!
//! ```bash
//! export AWS_ACCESS_KEY_ID=your-access-key-id
//! export AWS_SECRET_ACCESS_KEY=your-secret-access-key
//! export AWS_SESSION_TOKEN=your-session-token  # Optional
//! ```

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;

pub mod operations;
