use std::fmt::Write;

use http::{HeaderName, HeaderValue, Method};
use log::debug;
use rsa::Pkcs1v15Sign;

use cloudreq_core::hash::{base64_encode, base64_sha1};
use cloudreq_core::time::{format_rfc3339, DateTime};
use cloudreq_core::{
    Authorization, CanonicalRequest, Error, Result, SignRequest, SigningMethod, SigningRequest,
};

use crate::constants::*;
use crate::Credential;

/// Hash a request body the way `X-Ops-Content-Hash` expects it.
///
/// Requests carrying a body must set this header before signing.
pub fn content_hash(body: &[u8]) -> String {
    base64_sha1(body)
}

/// RequestSigner for the Chef server signed header protocol, version 1.0.
///
/// The canonical request is signed with the client's RSA private key and the
/// base64 signature is split over `X-Ops-Authorization-1..N` headers.
#[derive(Debug)]
pub struct RequestSigner {
    chef_version: Option<String>,
    required: Vec<HeaderName>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a signer, callers must set `X-Chef-Version` themselves.
    pub fn new() -> Self {
        Self {
            chef_version: None,
            required: vec![
                HeaderName::from_static(X_CHEF_VERSION),
                HeaderName::from_static(X_OPS_TIMESTAMP),
                HeaderName::from_static(X_OPS_CONTENT_HASH),
            ],
        }
    }

    /// Stamp `X-Chef-Version` on requests that don't carry one.
    pub fn with_chef_version(mut self, version: &str) -> Self {
        self.chef_version = Some(version.to_string());
        self
    }

    fn build_string_to_sign(&self, creq: &CanonicalRequest, user_id: &str) -> Result<String> {
        let mut s = String::new();
        writeln!(&mut s, "Method:{}", creq.method)?;
        writeln!(
            &mut s,
            "Hashed Path:{}",
            base64_sha1(canonicalize_path(&creq.path).as_bytes())
        )?;
        writeln!(
            &mut s,
            "X-Ops-Content-Hash:{}",
            creq.header_or_default(X_OPS_CONTENT_HASH)
        )?;
        writeln!(
            &mut s,
            "X-Ops-Timestamp:{}",
            creq.header_or_default(X_OPS_TIMESTAMP)
        )?;
        write!(&mut s, "X-Ops-UserId:{user_id}")?;
        Ok(s)
    }
}

/// Collapse repeated slashes and drop the trailing one.
fn canonicalize_path(path: &str) -> String {
    let mut s = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && s.ends_with('/') {
            continue;
        }
        s.push(c);
    }
    if s.len() > 1 && s.ends_with('/') {
        s.pop();
    }
    if s.is_empty() {
        s.push('/');
    }
    s
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn required_headers(&self, _: SigningMethod) -> &[HeaderName] {
        &self.required
    }

    fn prepare(
        &self,
        req: &mut SigningRequest,
        cred: &Self::Credential,
        method: SigningMethod,
        now: DateTime,
    ) -> Result<()> {
        if let SigningMethod::Query(_) = method {
            return Err(Error::request_invalid(
                "chef signed headers can't be used in query string",
            ));
        }

        if let Some(version) = &self.chef_version {
            req.header_insert_if_absent(HeaderName::from_static(X_CHEF_VERSION), version)?;
        }
        // Only bodiless requests get their hash stamped.
        if matches!(req.method, Method::GET | Method::HEAD | Method::DELETE) {
            req.header_insert_if_absent(
                HeaderName::from_static(X_OPS_CONTENT_HASH),
                &content_hash(&[]),
            )?;
        }
        req.header_insert_if_absent(
            HeaderName::from_static(X_OPS_TIMESTAMP),
            &format_rfc3339(now),
        )?;
        req.headers.insert(
            HeaderName::from_static(X_OPS_SIGN),
            HeaderValue::from_static(SIGNING_DESCRIPTION),
        );
        req.headers.insert(
            HeaderName::from_static(X_OPS_USERID),
            HeaderValue::from_str(&cred.user_id)?,
        );
        Ok(())
    }

    fn sign(
        &self,
        cred: &Self::Credential,
        creq: &CanonicalRequest,
        _: SigningMethod,
    ) -> Result<Authorization> {
        let string_to_sign = self.build_string_to_sign(creq, &cred.user_id)?;
        debug!("calculated string to sign: {string_to_sign}");

        // The canonical request is signed as is, without a digest prefix.
        let signature = cred
            .private_key
            .sign(Pkcs1v15Sign::new_unprefixed(), string_to_sign.as_bytes())
            .map_err(|e| Error::credential_invalid("failed to sign request").with_source(e))?;
        let signature = base64_encode(&signature);

        let mut headers = Vec::new();
        for (idx, line) in signature
            .as_bytes()
            .chunks(AUTHORIZATION_LINE_WIDTH)
            .enumerate()
        {
            let name = HeaderName::from_bytes(
                format!("{X_OPS_AUTHORIZATION_PREFIX}{}", idx + 1).as_bytes(),
            )?;
            let mut value = HeaderValue::from_bytes(line)?;
            value.set_sensitive(true);
            headers.push((name, value));
        }
        Ok(Authorization::Headers(headers))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use cloudreq_core::{ErrorKind, Signer};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn cred() -> Credential {
        Credential::from_pem("admin", include_str!("../tests/testdata/client.pem"))
            .expect("test key must be valid")
    }

    fn time() -> DateTime {
        Utc.with_ymd_and_hms(2011, 10, 3, 15, 19, 30).unwrap()
    }

    #[test_case("/clients/adam", "/clients/adam")]
    #[test_case("/clients/adam/", "/clients/adam")]
    #[test_case("//cookbooks///apache2", "/cookbooks/apache2")]
    #[test_case("/", "/")]
    #[test_case("", "/")]
    fn test_canonicalize_path(input: &str, expected: &str) {
        assert_eq!(canonicalize_path(input), expected);
    }

    #[test]
    fn test_content_hash() {
        assert_eq!(content_hash(b""), "2jmj7l5rSw0yVb/vlWAYkK/YBwk=");
    }

    #[test]
    fn test_string_to_sign() -> Result<()> {
        let signer = RequestSigner::new().with_chef_version("0.9.0");
        let mut parts = http::Request::get("https://api.opscode.com/clients/adam/")
            .body(())
            .unwrap()
            .into_parts()
            .0;
        let mut sreq = SigningRequest::build(&mut parts)?;
        signer.prepare(&mut sreq, &cred(), SigningMethod::Header, time())?;
        let creq = CanonicalRequest::build(&sreq, signer.required_headers(SigningMethod::Header), time())?;

        assert_eq!(
            signer.build_string_to_sign(&creq, "admin")?,
            "Method:GET\n\
             Hashed Path:1t23gEXI5OcyW6KC0oD2UlXg5WM=\n\
             X-Ops-Content-Hash:2jmj7l5rSw0yVb/vlWAYkK/YBwk=\n\
             X-Ops-Timestamp:2011-10-03T15:19:30Z\n\
             X-Ops-UserId:admin"
        );
        Ok(())
    }

    #[test]
    fn test_post_requires_content_hash() {
        let signer = Signer::new(RequestSigner::new().with_chef_version("0.9.0"));
        let parts = http::Request::post("https://api.opscode.com/clients")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let err = signer.sign(parts, &cred()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredHeader);
    }

    #[test]
    fn test_chef_version_is_required() {
        let signer = Signer::new(RequestSigner::new());
        let parts = http::Request::get("https://api.opscode.com/clients")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let err = signer.sign(parts, &cred()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredHeader);
    }
}
