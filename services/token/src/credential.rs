use cloudreq_core::utils::Redact;
use cloudreq_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential holding a session token issued by the provider's auth endpoint.
#[derive(Default, Clone)]
pub struct Credential {
    /// The session token.
    pub token: String,
}

impl Credential {
    /// Create a credential from a session token.
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &Redact::from(&self.token))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(Credential::new("886d1a1f-0ad0-4c79-b12e-example").is_valid());
        assert!(!Credential::new("").is_valid());
        assert!(!Credential::new("  ").is_valid());
    }
}
