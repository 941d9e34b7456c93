use super::constants::*;
use cloudreq_core::Context;

/// Config carries all the configuration for s3 services.
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
    /// `session_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SESSION_TOKEN`]
    pub session_token: Option<String>,
    /// `bucket` is set when requests use virtual host style addressing,
    /// e.g. `https://bucket.s3.amazonaws.com/key`. It will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_S3_BUCKET`]
    pub bucket: Option<String>,
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
        if let Some(v) = ctx.env_var(AWS_SESSION_TOKEN) {
            self.session_token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AWS_S3_BUCKET) {
            self.bucket.get_or_insert(v);
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
    fn test_from_env_keeps_explicit_values() {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (AWS_ACCESS_KEY_ID.to_string(), "env_ak".to_string()),
                (AWS_SECRET_ACCESS_KEY.to_string(), "env_sk".to_string()),
                (AWS_S3_BUCKET.to_string(), "johnsmith".to_string()),
            ]),
        });

        let cfg = Config {
            access_key_id: Some("explicit_ak".to_string()),
            ..Default::default()
        }
        .from_env(&ctx);

        assert_eq!(cfg.access_key_id.as_deref(), Some("explicit_ak"));
        assert_eq!(cfg.secret_access_key.as_deref(), Some("env_sk"));
        assert_eq!(cfg.session_token, None);
        assert_eq!(cfg.bucket.as_deref(), Some("johnsmith"));
    }
}
