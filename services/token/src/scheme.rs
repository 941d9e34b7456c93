use http::header::AUTHORIZATION;
use http::HeaderName;

use crate::constants::*;

/// TokenScheme decides where the session token is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScheme {
    /// Rackspace CloudFiles: `X-Auth-Token: <token>`.
    Rackspace,
    /// vCloud and Terremark: `x-vcloud-authorization: <token>`.
    VCloud,
    /// OAuth style: `Authorization: Bearer <token>`.
    Bearer,
}

impl TokenScheme {
    /// The header carrying the token.
    pub fn header_name(&self) -> HeaderName {
        match self {
            TokenScheme::Rackspace => HeaderName::from_static(X_AUTH_TOKEN),
            TokenScheme::VCloud => HeaderName::from_static(X_VCLOUD_AUTHORIZATION),
            TokenScheme::Bearer => AUTHORIZATION,
        }
    }

    /// The header value for the given token.
    pub fn header_value(&self, token: &str) -> String {
        match self {
            TokenScheme::Bearer => format!("Bearer {token}"),
            _ => token.to_string(),
        }
    }

    /// The env value a token for this scheme is loaded from, if any.
    pub fn env_var(&self) -> Option<&'static str> {
        match self {
            TokenScheme::Rackspace => Some(RACKSPACE_AUTH_TOKEN),
            TokenScheme::VCloud => Some(VCLOUD_AUTH_TOKEN),
            TokenScheme::Bearer => None,
        }
    }
}
