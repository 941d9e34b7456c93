//! EC2 query API signing and response handling for cloudreq.
//!
//! Requests are signed with query signature version 2 (HmacSHA256). The
//! defaults target the Eucalyptus Community Cloud, override them with
//! `EC2_ENDPOINT` and `EC2_API_VERSION`.
//!
//! ```
//! use cloudreq_core::{Context, Pipeline, Result, Signer};
//! use cloudreq_ec2::{operations, Config, Credential, RequestSigner};
//!
//! # fn main() -> Result<()> {
//! let config = Config::default().from_env(&Context::new());
//! let pipeline = Pipeline::new(
//!     Signer::new(RequestSigner::from_config(&config)),
//!     operations::table(),
//! );
//!
//! let req = http::Request::get(format!("{}?Action=DescribeInstances", config.endpoint()))
//!     .body(())?
//!     .into_parts()
//!     .0;
//! let signed = pipeline.sign(req, &Credential::new("access_key_id", "secret_access_key"))?;
//! assert!(signed.parts().uri.query().unwrap_or_default().contains("Signature="));
//! # Ok(())
//! # }
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
