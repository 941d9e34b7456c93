use crate::provide_credential::EnvCredentialProvider;
use crate::{Config, Credential};
use async_trait::async_trait;
use cloudreq_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider loads the chef identity the way knife does.
///
/// Resolution order:
///
/// 1. Providers pushed with [`DefaultCredentialProvider::push_front`]
/// 2. [`Config`] and env values, with the key read from disk
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
        Self::with_config(Config::default())
    }

    /// Create a provider that prefers the values set in config.
    pub fn with_config(config: Config) -> Self {
        Self {
            chain: ProvideCredentialChain::new().push(EnvCredentialProvider::with_config(config)),
        }
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
    use crate::StaticCredentialProvider;

    #[tokio::test]
    async fn test_pushed_provider_wins() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let provider = DefaultCredentialProvider::with_config(Config {
            user_id: Some("admin".to_string()),
            client_key: Some("/nonexistent/client.pem".to_string()),
        })
        .push_front(StaticCredentialProvider::from_pem(
            "validator",
            include_str!("../../tests/testdata/client.pem"),
        )?);

        let cred = provider.provide_credential(&Context::new()).await?;
        assert_eq!(cred.map(|c| c.user_id).as_deref(), Some("validator"));
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_key_read_is_skipped() -> Result<()> {
        let provider = DefaultCredentialProvider::with_config(Config {
            user_id: Some("admin".to_string()),
            client_key: Some("/nonexistent/client.pem".to_string()),
        });

        // NoopFileRead fails the read, the chain logs it and yields nothing.
        assert!(provider.provide_credential(&Context::new()).await?.is_none());
        Ok(())
    }
}
