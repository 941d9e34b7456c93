use crate::{Config, Credential};
use async_trait::async_trait;
use cloudreq_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the shared key from environment variables.
///
/// `AZURE_STORAGE_ACCOUNT_NAME` and `AZURE_STORAGE_ACCOUNT_KEY` win over the
/// fields of `AZURE_STORAGE_CONNECTION_STRING`.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let cfg = Config::default().from_env(ctx);

        match (cfg.account_name, cfg.account_key) {
            (Some(account_name), Some(account_key)) => Ok(Some(Credential {
                account_name,
                account_key,
            })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use cloudreq_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (AZURE_STORAGE_ACCOUNT_NAME.to_string(), "myaccount".to_string()),
                (AZURE_STORAGE_ACCOUNT_KEY.to_string(), "a2V5".to_string()),
            ]),
        });

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.account_name, "myaccount");
        assert_eq!(cred.account_key, "a2V5");
        Ok(())
    }

    #[tokio::test]
    async fn test_development_storage() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([(
                AZURE_STORAGE_CONNECTION_STRING.to_string(),
                "UseDevelopmentStorage=true".to_string(),
            )]),
        });

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.account_name, AZURITE_ACCOUNT_NAME);
        assert_eq!(cred.account_key, AZURITE_ACCOUNT_KEY);
        Ok(())
    }

    #[tokio::test]
    async fn test_partial_env() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([(
                AZURE_STORAGE_ACCOUNT_NAME.to_string(),
                "myaccount".to_string(),
            )]),
        });

        assert!(EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .is_none());
        Ok(())
    }
}
