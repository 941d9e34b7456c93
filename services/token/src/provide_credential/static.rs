// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


use crate::{Config, Credential, TokenScheme};
use async_trait::async_trait;
use cloudreq_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed session token.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    token: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with a session token.
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }

    /// Build from the config token of the given scheme, returns `None` if unset.
    pub fn from_config(config: &Config, scheme: TokenScheme) -> Option<Self> {
        let token = match scheme {
            TokenScheme::Rackspace => &config.rackspace_auth_token,
            TokenScheme::VCloud => &config.vcloud_auth_token,
            TokenScheme::Bearer => &config.bearer_token,
        };
        token.as_deref().map(Self::new)
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential::new(&self.token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_config() -> Result<()> {
        let cfg = Config {
            bearer_token: Some("tok".to_string()),
            ..Default::default()
        };

        assert!(StaticCredentialProvider::from_config(&cfg, TokenScheme::VCloud).is_none());
        let cred = StaticCredentialProvider::from_config(&cfg, TokenScheme::Bearer)
            .expect("bearer token is configured")
            .provide_credential(&Context::new())
            .await?;
        assert_eq!(cred.map(|c| c.token).as_deref(), Some("tok"));
        Ok(())
    }
}
