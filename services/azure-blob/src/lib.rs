//! Azure Blob storage signing and response handling for cloudreq.
//!
//! Requests are signed with [Shared Key](https://docs.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key)
//! authorization: HMAC-SHA256 keyed with the base64 decoded account key.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cloudreq_azure_blob::{operations, Config, DefaultCredentialProvider, RequestSigner};
//! use cloudreq_core::{Context, OsEnv, Pipeline, ProvideCredential, Result, Signer};
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let config = Config::default().from_env(&ctx);
//! let cred = DefaultCredentialProvider::with_config(&config)
//!     .provide_credential(&ctx)
//!     .await?
//!     .expect("azure storage credential must be configured");
//!
//! let pipeline = Pipeline::new(Signer::new(RequestSigner::new()), operations::table());
//! let req = http::Request::put("https://myaccount.blob.core.windows.net/mycontainer?restype=container")
//!     .header("x-ms-version", "2019-12-12")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! let signed = pipeline.sign(req, &cred)?;
//!
//! // Send `signed.into_request(body)` with any http client, then:
//! # let resp = http::Response::new(bytes::Bytes::new());
//! let created: bool = pipeline.handle(operations::CREATE_CONTAINER, resp, |_| Ok(true))?;
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::Config;
mod connection_string;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;

pub mod operations;
