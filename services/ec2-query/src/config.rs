use super::constants::*;
use cloudreq_core::Context;

/// Config carries all the configuration for ec2 query services.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`EC2_ENDPOINT`]
    /// - default to the Eucalyptus Community Cloud endpoint
    pub endpoint: Option<String>,
    /// `api_version` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`EC2_API_VERSION`]
    /// - default to `2009-11-30`
    pub api_version: Option<String>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(AWS_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AWS_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(EC2_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(EC2_API_VERSION) {
            self.api_version.get_or_insert(v);
        }

        self
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// The API version sent as `Version`.
    pub fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudreq_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let cfg = Config::default().from_env(&Context::new());
        assert_eq!(
            cfg.endpoint(),
            "http://173.205.188.130:8773/services/Eucalyptus"
        );
        assert_eq!(cfg.api_version(), "2009-11-30");
    }

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (EC2_ENDPOINT.to_string(), "https://ec2.amazonaws.com".to_string()),
                (EC2_API_VERSION.to_string(), "2010-08-31".to_string()),
            ]),
        });

        let cfg = Config::default().from_env(&ctx);
        assert_eq!(cfg.endpoint(), "https://ec2.amazonaws.com");
        assert_eq!(cfg.api_version(), "2010-08-31");
    }
}
