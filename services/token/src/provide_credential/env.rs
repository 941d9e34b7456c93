use crate::{Credential, TokenScheme};
use async_trait::async_trait;
use cloudreq_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads a session token from the scheme's env value.
///
/// - Rackspace: `RACKSPACE_AUTH_TOKEN`
/// - vCloud: `VCLOUD_AUTH_TOKEN`
///
/// Bearer tokens have no env value and never load.
#[derive(Debug)]
pub struct EnvCredentialProvider {
    scheme: TokenScheme,
}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider for the given scheme.
    pub fn new(scheme: TokenScheme) -> Self {
        Self { scheme }
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let Some(key) = self.scheme.env_var() else {
            return Ok(None);
        };

        Ok(ctx
            .env_var(key)
            .filter(|v| !v.trim().is_empty())
            .map(|token| Credential { token }))
    }
}
