use crate::provide_credential::{EnvCredentialProvider, StaticCredentialProvider};
use crate::{Config, Credential};
use async_trait::async_trait;
use cloudreq_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider tries the configured shared key, then the environment.
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
        Self::with_chain(ProvideCredentialChain::new().push(EnvCredentialProvider::new()))
    }

    /// Create a provider that prefers the shared key set in config.
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

    /// Add a credential provider to the front of the chain.
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
