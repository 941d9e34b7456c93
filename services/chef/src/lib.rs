//! Opscode Chef server request signing and response handling for cloudreq.
//!
//! Chef authenticates every request with the client's RSA key following the
//! signed header protocol version 1.0:
//!
//! - `X-Ops-Sign`, `X-Ops-Userid`, `X-Ops-Timestamp` and `X-Ops-Content-Hash`
//!   describe the request.
//! - `X-Ops-Authorization-N` carry the base64 signature in 60 character lines.
//!
//! Bodiless requests get their content hash stamped. Requests carrying a body
//! must set `X-Ops-Content-Hash` to [`content_hash`] of the body.
//!
//! ```no_run
//! use cloudreq_chef::{content_hash, operations, DefaultCredentialProvider, RequestSigner};
//! use cloudreq_core::{Context, OsEnv, Pipeline, ProvideCredential, Result, Signer};
//! use cloudreq_file_read_tokio::TokioFileRead;
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
//! let cred = DefaultCredentialProvider::new()
//!     .provide_credential(&ctx)
//!     .await?
//!     .expect("CHEF_USER_ID must be set");
//!
//! let pipeline = Pipeline::new(
//!     Signer::new(RequestSigner::new().with_chef_version("0.9.0")),
//!     operations::table(),
//! );
//!
//! let body = br#"{"clientname":"adam"}"#;
//! let req = http::Request::post("https://api.opscode.com/organizations/acme/clients")
//!     .header("X-Ops-Content-Hash", content_hash(body))
//!     .body(())?
//!     .into_parts()
//!     .0;
//! let signed = pipeline.sign(req, &cred)?;
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::content_hash;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;

pub mod operations;
