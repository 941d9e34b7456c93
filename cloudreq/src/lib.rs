#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use cloudreq_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

#[cfg(feature = "azure")]
pub mod azure {
    pub use cloudreq_azure_blob::*;
}

#[cfg(feature = "chef")]
pub mod chef {
    pub use cloudreq_chef::*;
}

#[cfg(feature = "ec2")]
pub mod ec2 {
    pub use cloudreq_ec2::*;
}

#[cfg(feature = "s3")]
pub mod s3 {
    pub use cloudreq_s3::*;
}

#[cfg(feature = "token")]
pub mod token {
    pub use cloudreq_token::*;
}
