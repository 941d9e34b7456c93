use cloudreq_core::utils::Redact;
use cloudreq_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential for SharedKey authorization.
#[derive(Default, Clone)]
pub struct Credential {
    /// Storage account name.
    pub account_name: String,
    /// Base64 encoded storage account key.
    pub account_key: String,
}

impl Credential {
    /// Create a credential from account name and base64 account key.
    pub fn new(account_name: &str, account_key: &str) -> Self {
        Self {
            account_name: account_name.to_string(),
            account_key: account_key.to_string(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("account_name", &self.account_name)
            .field("account_key", &Redact::from(&self.account_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.account_name.is_empty() && !self.account_key.is_empty()
    }
}
