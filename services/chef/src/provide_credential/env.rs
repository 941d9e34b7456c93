use crate::{Config, Credential};
use async_trait::async_trait;
use cloudreq_core::{Context, Error, ProvideCredential, Result};
use log::debug;

/// EnvCredentialProvider loads the chef identity from config and env.
///
/// - `CHEF_USER_ID`: the client or user name
/// - `CHEF_CLIENT_KEY`: path of the PEM private key, default to `~/.chef/client.pem`
///
/// The key is read through the context's [`cloudreq_core::FileRead`].
#[derive(Debug, Default)]
pub struct EnvCredentialProvider {
    config: Config,
}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use explicit config values, env fills the rest.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let cfg = self.config.clone().from_env(ctx);
        let Some(user_id) = cfg.user_id.as_deref() else {
            debug!("chef user id is not configured");
            return Ok(None);
        };

        let path = ctx.expand_home_dir(cfg.client_key()).ok_or_else(|| {
            Error::config_invalid(format!(
                "can't expand {} without a home directory",
                cfg.client_key()
            ))
        })?;
        let pem = ctx.file_read_as_string(&path).await?;

        Credential::from_pem(user_id, &pem).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use cloudreq_core::{ErrorKind, StaticEnv};
    use cloudreq_file_read_tokio::TokioFileRead;
    use std::collections::HashMap;

    fn ctx(envs: HashMap<String, String>, home: Option<&std::path::Path>) -> Context {
        Context::new().with_file_read(TokioFileRead).with_env(StaticEnv {
            home_dir: home.map(|p| p.to_path_buf()),
            envs,
        })
    }

    #[tokio::test]
    async fn test_load_from_home() -> Result<()> {
        let home = tempfile::tempdir()?;
        std::fs::create_dir(home.path().join(".chef"))?;
        std::fs::write(
            home.path().join(".chef/client.pem"),
            include_str!("../../tests/testdata/client.pem"),
        )?;

        let ctx = ctx(
            HashMap::from([(CHEF_USER_ID.to_string(), "admin".to_string())]),
            Some(home.path()),
        );
        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.user_id, "admin");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx(
            HashMap::from([
                (CHEF_USER_ID.to_string(), "admin".to_string()),
                (
                    CHEF_CLIENT_KEY.to_string(),
                    dir.path().join("absent.pem").to_string_lossy().to_string(),
                ),
            ]),
            None,
        );

        let err = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[tokio::test]
    async fn test_without_user_id() -> Result<()> {
        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx(HashMap::new(), None))
            .await?;
        assert!(cred.is_none());
        Ok(())
    }
}
