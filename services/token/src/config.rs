use super::constants::*;
use cloudreq_core::Context;

/// Config carries the session tokens for token authenticated services.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `rackspace_auth_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RACKSPACE_AUTH_TOKEN`]
    pub rackspace_auth_token: Option<String>,
    /// `vcloud_auth_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`VCLOUD_AUTH_TOKEN`]
    pub vcloud_auth_token: Option<String>,
    /// `bearer_token` is only set explicitly.
    pub bearer_token: Option<String>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(RACKSPACE_AUTH_TOKEN) {
            self.rackspace_auth_token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(VCLOUD_AUTH_TOKEN) {
            self.vcloud_auth_token.get_or_insert(v);
        }

        self
    }
}
