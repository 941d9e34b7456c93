use super::constants::*;
use cloudreq_core::Context;

/// Config carries all the configuration for chef services.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `user_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`CHEF_USER_ID`]
    pub user_id: Option<String>,
    /// `client_key` is the path of the PEM private key, `~` is expanded.
    /// It will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`CHEF_CLIENT_KEY`]
    /// - default to `~/.chef/client.pem`
    pub client_key: Option<String>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(CHEF_USER_ID) {
            self.user_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(CHEF_CLIENT_KEY) {
            self.client_key.get_or_insert(v);
        }

        self
    }

    /// The configured key path, or the knife default.
    pub fn client_key(&self) -> &str {
        self.client_key.as_deref().unwrap_or(DEFAULT_CLIENT_KEY)
    }
}
