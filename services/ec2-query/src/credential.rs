use cloudreq_core::utils::Redact;
use cloudreq_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the access key and secret key.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key id, sent as `AWSAccessKeyId`.
    pub access_key_id: String,
    /// Secret key used to compute `Signature`.
    pub secret_access_key: String,
}

impl Credential {
    /// Create a credential from an access key pair.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}
