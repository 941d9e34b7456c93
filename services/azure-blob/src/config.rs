use super::constants::*;
use crate::connection_string;
use cloudreq_core::{Context, Error, Result};

/// Config carries all the configuration for azure blob services.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `account_name` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_STORAGE_ACCOUNT_NAME`]
    /// - `AccountName` in env value [`AZURE_STORAGE_CONNECTION_STRING`]
    pub account_name: Option<String>,
    /// `account_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_STORAGE_ACCOUNT_KEY`]
    /// - `AccountKey` in env value [`AZURE_STORAGE_CONNECTION_STRING`]
    pub account_key: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - `BlobEndpoint` or the endpoint parts in env value [`AZURE_STORAGE_CONNECTION_STRING`]
    pub endpoint: Option<String>,
}

impl Config {
    /// Load config from env.
    ///
    /// A malformed connection string is ignored with a warning, explicit
    /// values and the plain env values still apply.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(AZURE_STORAGE_ACCOUNT_NAME) {
            self.account_name.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AZURE_STORAGE_ACCOUNT_KEY) {
            self.account_key.get_or_insert(v);
        }

        if let Some(conn) = ctx.env_var(AZURE_STORAGE_CONNECTION_STRING) {
            match Config::from_connection_string(&conn) {
                Ok(cfg) => self = self.merge(cfg),
                Err(err) => log::warn!("ignoring invalid {AZURE_STORAGE_CONNECTION_STRING}: {err}"),
            }
        }

        self
    }

    /// Parse an [Azure connection string][1].
    ///
    /// [1]: https://learn.microsoft.com/en-us/azure/storage/common/storage-configure-connection-string
    pub fn from_connection_string(conn: &str) -> Result<Self> {
        connection_string::parse(conn).map_err(|e| {
            Error::config_invalid("failed to parse azure storage connection string").with_source(e)
        })
    }

    fn merge(mut self, other: Config) -> Self {
        if let Some(v) = other.account_name {
            self.account_name.get_or_insert(v);
        }
        if let Some(v) = other.account_key {
            self.account_key.get_or_insert(v);
        }
        if let Some(v) = other.endpoint {
            self.endpoint.get_or_insert(v);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudreq_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (AZURE_STORAGE_ACCOUNT_NAME.to_string(), "myaccount".to_string()),
                (
                    AZURE_STORAGE_CONNECTION_STRING.to_string(),
                    "AccountName=other;AccountKey=a2V5;EndpointSuffix=core.windows.net;DefaultEndpointsProtocol=https".to_string(),
                ),
            ]),
        });

        let cfg = Config::default().from_env(&ctx);
        assert_eq!(cfg.account_name.as_deref(), Some("myaccount"));
        assert_eq!(cfg.account_key.as_deref(), Some("a2V5"));
        assert_eq!(
            cfg.endpoint.as_deref(),
            Some("https://other.blob.core.windows.net")
        );
    }

    #[test]
    fn test_invalid_connection_string() {
        let err = Config::from_connection_string("AccountName").unwrap_err();
        assert_eq!(err.kind(), cloudreq_core::ErrorKind::ConfigInvalid);
    }
}
