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


// Env values used in ec2 services.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const EC2_ENDPOINT: &str = "EC2_ENDPOINT";
pub const EC2_API_VERSION: &str = "EC2_API_VERSION";

// Query parameters used in ec2 query signing.
pub const AWS_ACCESS_KEY_ID_PARAM: &str = "AWSAccessKeyId";
pub const SIGNATURE_METHOD: &str = "SignatureMethod";
pub const SIGNATURE_VERSION: &str = "SignatureVersion";
pub const SIGNATURE: &str = "Signature";
pub const TIMESTAMP: &str = "Timestamp";
pub const EXPIRES: &str = "Expires";
pub const VERSION: &str = "Version";

pub const HMAC_SHA256: &str = "HmacSHA256";

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

// Eucalyptus Community Cloud.
pub const DEFAULT_ENDPOINT: &str = "http://173.205.188.130:8773/services/Eucalyptus";
pub const DEFAULT_API_VERSION: &str = "2009-11-30";
