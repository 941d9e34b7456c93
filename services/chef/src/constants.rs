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


// Env values used in chef services.
pub const CHEF_USER_ID: &str = "CHEF_USER_ID";
pub const CHEF_CLIENT_KEY: &str = "CHEF_CLIENT_KEY";
pub const DEFAULT_CLIENT_KEY: &str = "~/.chef/client.pem";

// Headers used in chef services.
pub const X_CHEF_VERSION: &str = "x-chef-version";
pub const X_OPS_SIGN: &str = "x-ops-sign";
pub const X_OPS_USERID: &str = "x-ops-userid";
pub const X_OPS_TIMESTAMP: &str = "x-ops-timestamp";
pub const X_OPS_CONTENT_HASH: &str = "x-ops-content-hash";
pub const X_OPS_AUTHORIZATION_PREFIX: &str = "x-ops-authorization-";

pub const SIGNING_DESCRIPTION: &str = "algorithm=sha1;version=1.0;";
/// Width of each `X-Ops-Authorization-N` header value.
pub const AUTHORIZATION_LINE_WIDTH: usize = 60;
