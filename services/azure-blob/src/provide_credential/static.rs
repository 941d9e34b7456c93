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


use crate::{Config, Credential};
use async_trait::async_trait;
use cloudreq_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed account name and key.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    account_name: String,
    account_key: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with account name and base64 account key.
    pub fn new(account_name: &str, account_key: &str) -> Self {
        Self {
            account_name: account_name.to_string(),
            account_key: account_key.to_string(),
        }
    }

    /// Build from config, returns `None` unless both fields are configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        match (&config.account_name, &config.account_key) {
            (Some(name), Some(key)) => Some(Self::new(name, key)),
            _ => None,
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential::new(&self.account_name, &self.account_key)))
    }
}
