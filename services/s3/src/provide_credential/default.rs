use crate::provide_credential::{EnvCredentialProvider, StaticCredentialProvider};
use crate::{Config, Credential};
use async_trait::async_trait;
use cloudreq_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider is a loader that will try to load credential via default chains.
///
/// Resolution order:
///
/// 1. Static credential from [`Config`], if configured
/// 2. Environment variables
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
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new() -> Self {
        Self {
            chain: ProvideCredentialChain::new().push(EnvCredentialProvider::new()),
        }
    }

    /// Create a provider that prefers the key pair set in config.
    pub fn with_config(config: &Config) -> Self {
        let provider = Self::new();
        match StaticCredentialProvider::from_config(config) {
            Some(p) => provider.push_front(p),
            None => provider,
        }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    pub fn push_front(mut self, provider: impl ProvideCredential<Credential = Credential>) -> Self {
        self.chain = self.chain.push_front(provider);
        self
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
    use crate::constants::*;
    use cloudreq_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_default_loader_without_env() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv::default());
        let cred = DefaultCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_config_wins_over_env() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (AWS_ACCESS_KEY_ID.to_string(), "env_ak".to_string()),
                (AWS_SECRET_ACCESS_KEY.to_string(), "env_sk".to_string()),
            ]),
        });

        let cred = DefaultCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .unwrap();
        assert_eq!(cred.access_key_id, "env_ak");

        let cfg = Config {
            access_key_id: Some("cfg_ak".to_string()),
            secret_access_key: Some("cfg_sk".to_string()),
            ..Default::default()
        };
        let cred = DefaultCredentialProvider::with_config(&cfg)
            .provide_credential(&ctx)
            .await?
            .unwrap();
        assert_eq!(cred.access_key_id, "cfg_ak");
        Ok(())
    }
}
