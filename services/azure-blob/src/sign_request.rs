use std::collections::BTreeMap;
use std::fmt::Write;

use http::header::{
    AUTHORIZATION, CONTENT_ENCODING, CONTENT_LANGUAGE, CONTENT_LENGTH, CONTENT_TYPE, DATE,
    IF_MATCH, IF_MODIFIED_SINCE, IF_NONE_MATCH, IF_UNMODIFIED_SINCE, RANGE,
};
use http::HeaderName;
use log::debug;

use cloudreq_core::hash::{base64_decode, base64_encode};
use cloudreq_core::time::{format_http_date, DateTime};
use cloudreq_core::{
    Authorization, CanonicalRequest, ComputeSignature, Error, HmacSha256, Result, SignRequest,
    SigningMethod, SigningRequest,
};

use crate::constants::*;
use crate::Credential;

/// RequestSigner that implements Azure Storage Shared Key authorization.
///
/// - [Authorize with Shared Key](https://docs.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key)
///
/// Callers must set `x-ms-version`. `x-ms-date` is stamped with the signing
/// time unless present. Presigned URLs are not supported.
#[derive(Debug)]
pub struct RequestSigner {
    required: Vec<HeaderName>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a new signer for Azure Blob storage.
    pub fn new() -> Self {
        Self {
            required: vec![
                HeaderName::from_static(X_MS_VERSION),
                HeaderName::from_static(X_MS_DATE),
            ],
        }
    }

    /// Construct string to sign
    ///
    /// ## Format
    ///
    /// ```text
    /// VERB + "\n" +
    /// Content-Encoding + "\n" +
    /// Content-Language + "\n" +
    /// Content-Length + "\n" +
    /// Content-MD5 + "\n" +
    /// Content-Type + "\n" +
    /// Date + "\n" +
    /// If-Modified-Since + "\n" +
    /// If-Match + "\n" +
    /// If-None-Match + "\n" +
    /// If-Unmodified-Since + "\n" +
    /// Range + "\n" +
    /// CanonicalizedHeaders +
    /// CanonicalizedResource;
    /// ```
    fn build_string_to_sign(&self, creq: &CanonicalRequest, account_name: &str) -> Result<String> {
        let mut s = String::with_capacity(128);
        writeln!(&mut s, "{}", creq.method)?;
        writeln!(&mut s, "{}", creq.header_or_default(CONTENT_ENCODING.as_str()))?;
        writeln!(&mut s, "{}", creq.header_or_default(CONTENT_LANGUAGE.as_str()))?;
        writeln!(&mut s, "{}", {
            let length = creq.header_or_default(CONTENT_LENGTH.as_str());
            if length == "0" {
                ""
            } else {
                length
            }
        })?;
        writeln!(&mut s, "{}", creq.header_or_default(CONTENT_MD5))?;
        writeln!(&mut s, "{}", creq.header_or_default(CONTENT_TYPE.as_str()))?;
        // x-ms-date is always present and takes precedence over Date.
        writeln!(
            &mut s,
            "{}",
            if creq.header(X_MS_DATE).is_some() {
                ""
            } else {
                creq.header_or_default(DATE.as_str())
            }
        )?;
        for name in [IF_MODIFIED_SINCE, IF_MATCH, IF_NONE_MATCH, IF_UNMODIFIED_SINCE, RANGE] {
            writeln!(&mut s, "{}", creq.header_or_default(name.as_str()))?;
        }

        for (k, v) in creq.headers_with_prefix(X_MS_PREFIX) {
            writeln!(&mut s, "{k}:{v}")?;
        }
        s.write_str(&canonicalize_resource(creq, account_name))?;

        Ok(s)
    }
}

/// ## Reference
///
/// - [Constructing the canonicalized resource string](https://docs.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key#constructing-the-canonicalized-resource-string)
fn canonicalize_resource(creq: &CanonicalRequest, account_name: &str) -> String {
    let mut resource = format!("/{account_name}{}", creq.path);

    // Keys are lowercased and sorted, repeated keys have their values joined by `,`.
    let mut params: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for (k, v) in &creq.query {
        params.entry(k.to_lowercase()).or_default().push(v);
    }
    for (k, mut values) in params {
        values.sort_unstable();
        write!(&mut resource, "\n{k}:{}", values.join(",")).ok();
    }
    resource
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn required_headers(&self, _: SigningMethod) -> &[HeaderName] {
        &self.required
    }

    fn prepare(
        &self,
        req: &mut SigningRequest,
        _: &Self::Credential,
        method: SigningMethod,
        now: DateTime,
    ) -> Result<()> {
        if let SigningMethod::Query(_) = method {
            return Err(Error::request_invalid(
                "SharedKey can't be used in query string",
            ));
        }

        req.header_insert_if_absent(HeaderName::from_static(X_MS_DATE), &format_http_date(now))
    }

    fn sign(
        &self,
        cred: &Self::Credential,
        creq: &CanonicalRequest,
        _: SigningMethod,
    ) -> Result<Authorization> {
        let string_to_sign = self.build_string_to_sign(creq, &cred.account_name)?;
        debug!("calculated string to sign: {string_to_sign}");

        let key = base64_decode(&cred.account_key)?;
        let signature = HmacSha256::new(key).compute_signature(string_to_sign.as_bytes())?;

        Authorization::header(
            AUTHORIZATION,
            &format!(
                "SharedKey {}:{}",
                cred.account_name,
                base64_encode(&signature)
            ),
        )
    }
}
