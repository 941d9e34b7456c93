use crate::provide_credential::{EnvCredentialProvider, StaticCredentialProvider};
use crate::{Config, Credential};
use async_trait::async_trait;
use cloudreq_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider tries the configured key pair, then the environment.
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a provider that only reads the environment.
    pub fn new() -> Self {
        Self {
            chain: ProvideCredentialChain::new().push(EnvCredentialProvider::new()),
        }
    }

    /// Create a provider that prefers the key pair set in config.
    pub fn with_config(config: &Config) -> Self {
        let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());
        Self {
            chain: match StaticCredentialProvider::from_config(config) {
                Some(p) => chain.push_front(p),
                None => chain,
            },
        }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_config_key_pair() -> Result<()> {
        let cfg = Config {
            access_key_id: Some("cfg_ak".to_string()),
            secret_access_key: Some("cfg_sk".to_string()),
            ..Default::default()
        };

        let cred = DefaultCredentialProvider::with_config(&cfg)
            .provide_credential(&Context::new())
            .await?;
        assert_eq!(cred.map(|c| c.access_key_id), Some("cfg_ak".to_string()));

        let cred = DefaultCredentialProvider::new()
            .provide_credential(&Context::new())
            .await?;
        assert!(cred.is_none());
        Ok(())
    }
}
