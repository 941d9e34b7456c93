//! Session token authentication for Rackspace CloudFiles, vCloud and bearer APIs.
//!
//! The token is obtained out of band (e.g. from the provider's auth endpoint)
//! and attached to each request as is.
//!
//! ```
//! use cloudreq_core::{Pipeline, Result, Signer};
//! use cloudreq_token::{operations::cloudfiles, Credential, RequestSigner};
//!
//! # fn main() -> Result<()> {
//! let pipeline = Pipeline::new(Signer::new(RequestSigner::rackspace()), cloudfiles::table());
//!
//! let req = http::Request::head("https://storage.clouddrive.com/v1/MossoCloudFS_abc/photos/cat.jpg")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! let signed = pipeline.sign(req, &Credential::new("886d1a1f-0ad0-4c79-b12e-example"))?;
//! assert!(signed.parts().headers.contains_key("x-auth-token"));
//!
//! let resp = http::Response::builder().status(404).body(Vec::<u8>::new())?;
//! let meta: Option<usize> = pipeline.handle(cloudfiles::HEAD_OBJECT, resp, |_| Ok(Some(0)))?;
//! assert_eq!(meta, None);
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod scheme;
pub use scheme::TokenScheme;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;

pub mod operations;
