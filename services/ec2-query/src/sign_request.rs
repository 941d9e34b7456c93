use std::fmt::Write;

use http::header::CONTENT_TYPE;
use log::debug;
use percent_encoding::utf8_percent_encode;

use cloudreq_core::hash::base64_encode;
use cloudreq_core::time::{format_rfc3339, DateTime};
use cloudreq_core::{
    Authorization, CanonicalRequest, ComputeSignature, Error, HmacSha256, Result, SignRequest,
    SigningMethod, SigningRequest, QUERY_ENCODE_SET,
};

use crate::constants::*;
use crate::{Config, Credential};

/// RequestSigner for the EC2 query API, signature version 2 with HmacSHA256.
///
/// The signature always travels in the query string. Header signing stamps
/// `Timestamp`, query signing stamps `Expires` instead.
///
/// Only query parameters are signed. Requests with a form encoded body are
/// rejected: send the parameters in the query string instead.
#[derive(Debug)]
pub struct RequestSigner {
    api_version: String,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new(DEFAULT_API_VERSION)
    }
}

impl RequestSigner {
    /// Create a signer sending the given API version.
    pub fn new(api_version: &str) -> Self {
        Self {
            api_version: api_version.to_string(),
        }
    }

    /// Create a signer from config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_version())
    }

    fn build_string_to_sign(&self, creq: &CanonicalRequest) -> Result<String> {
        let mut s = String::new();
        writeln!(&mut s, "{}", creq.method)?;
        writeln!(&mut s, "{}", creq.host)?;
        writeln!(&mut s, "{}", if creq.path.is_empty() { "/" } else { creq.path.as_str() })?;

        for (idx, (k, v)) in creq.query_with_filter(|k| k != SIGNATURE).into_iter().enumerate() {
            if idx > 0 {
                s.push('&');
            }
            write!(
                &mut s,
                "{}={}",
                utf8_percent_encode(k, &QUERY_ENCODE_SET),
                utf8_percent_encode(v, &QUERY_ENCODE_SET)
            )?;
        }

        Ok(s)
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn prepare(
        &self,
        req: &mut SigningRequest,
        cred: &Self::Credential,
        method: SigningMethod,
        now: DateTime,
    ) -> Result<()> {
        if req.query.iter().any(|(k, _)| k == SIGNATURE) {
            return Err(Error::request_invalid("request is already signed"));
        }
        let is_form = req
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim_start().to_ascii_lowercase().starts_with(FORM_URLENCODED));
        if is_form {
            return Err(Error::request_invalid(
                "form encoded bodies are not signed, send the parameters in the query string",
            ));
        }

        let time_param = match method {
            SigningMethod::Header => (TIMESTAMP, format_rfc3339(now)),
            SigningMethod::Query(expires_in) => {
                let delta = chrono::TimeDelta::from_std(expires_in).map_err(|e| {
                    Error::request_invalid(format!("invalid expiration duration: {e}"))
                })?;
                (EXPIRES, format_rfc3339(now + delta))
            }
        };

        let params = [
            (AWS_ACCESS_KEY_ID_PARAM, cred.access_key_id.clone()),
            (SIGNATURE_METHOD, HMAC_SHA256.to_string()),
            (SIGNATURE_VERSION, "2".to_string()),
            time_param,
            (VERSION, self.api_version.clone()),
        ];
        for (k, v) in params {
            if !req.query.iter().any(|(key, _)| key == k) {
                req.query_push(k, v);
            }
        }
        Ok(())
    }

    fn sign(
        &self,
        cred: &Self::Credential,
        creq: &CanonicalRequest,
        _: SigningMethod,
    ) -> Result<Authorization> {
        let string_to_sign = self.build_string_to_sign(creq)?;
        debug!("calculated string to sign: {string_to_sign}");

        let signature = HmacSha256::new(cred.secret_access_key.as_bytes())
            .compute_signature(string_to_sign.as_bytes())?;
        Ok(Authorization::Query(vec![(
            SIGNATURE.to_string(),
            base64_encode(&signature),
        )]))
    }
}
