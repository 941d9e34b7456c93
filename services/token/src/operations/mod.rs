//! Operation tables for token authenticated services.

pub mod cloudfiles;
pub mod vcloud;
