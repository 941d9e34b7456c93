use std::mem;
use std::str::FromStr;
use std::time::Duration;

use http::header::HeaderName;
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use http::Uri;
use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

use crate::{Error, Result};

/// Unreserved characters of RFC 3986 are left as is, everything else is encoded.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Signing context for request.
///
/// Query pairs are kept percent-decoded while signing and encoded again by
/// [`SigningRequest::apply`].
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path.
    pub path: String,
    /// HTTP query parameters.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTP),
            authority: uri.authority.ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?,
            path: paq.path().to_string(),
            query: paq
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = Some(self.scheme);
            uri_parts.authority = Some(self.authority);
            uri_parts.path_and_query = {
                let mut paq = self.path;
                if !self.query.is_empty() {
                    paq.push('?');
                    for (i, (k, v)) in self.query.iter().enumerate() {
                        if i > 0 {
                            paq.push('&');
                        }

                        paq.extend(utf8_percent_encode(k, &QUERY_ENCODE_SET));
                        if !v.is_empty() {
                            paq.push('=');
                            paq.extend(utf8_percent_encode(v, &QUERY_ENCODE_SET));
                        }
                    }
                }

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Push a new query pair into query list.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Check if the request carries the given header.
    #[inline]
    pub fn has_header(&self, key: &HeaderName) -> bool {
        self.headers.contains_key(key)
    }

    /// Insert the header only when the caller did not set it.
    pub fn header_insert_if_absent(&mut self, key: HeaderName, value: &str) -> Result<()> {
        if !self.headers.contains_key(&key) {
            self.headers.insert(key, HeaderValue::from_str(value)?);
        }
        Ok(())
    }
}

/// SigningMethod is the method that used in signing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SigningMethod {
    /// Signing with header.
    Header,
    /// Signing with query, the signature expires after the given duration.
    Query(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(uri: &str) -> http::request::Parts {
        http::Request::get(uri)
            .header("x-amz-meta-a", "b")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[test]
    fn test_build_and_apply() -> Result<()> {
        let mut p = parts("https://bucket.s3.amazonaws.com/key?acl&prefix=a%2Fb");
        let req = SigningRequest::build(&mut p)?;

        assert_eq!(req.path, "/key");
        assert_eq!(
            req.query,
            vec![
                ("acl".to_string(), "".to_string()),
                ("prefix".to_string(), "a/b".to_string())
            ]
        );
        assert!(p.headers.is_empty());

        req.apply(&mut p)?;
        assert_eq!(
            p.uri.to_string(),
            "https://bucket.s3.amazonaws.com/key?acl&prefix=a%2Fb"
        );
        assert_eq!(p.headers["x-amz-meta-a"], "b");
        Ok(())
    }

    #[test]
    fn test_build_requires_authority() {
        let mut p = http::Request::get("/relative")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let err = SigningRequest::build(&mut p).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_header_insert_if_absent() -> Result<()> {
        let mut p = parts("https://example.com/");
        let mut req = SigningRequest::build(&mut p)?;

        req.header_insert_if_absent(HeaderName::from_static("x-amz-meta-a"), "c")?;
        req.header_insert_if_absent(HeaderName::from_static("x-amz-meta-d"), "e")?;
        assert_eq!(req.headers["x-amz-meta-a"], "b");
        assert_eq!(req.headers["x-amz-meta-d"], "e");
        Ok(())
    }
}
