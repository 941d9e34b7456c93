use http::HeaderName;
use http::Method;
use log::debug;

use crate::time::DateTime;
use crate::{Error, Result, SigningRequest};

/// CanonicalRequest is the read-only view of a request a signing algorithm covers.
///
/// - header names are lowercased, values trimmed, repeated values joined with `,`
/// - headers are sorted by name, query pairs by key then value
///
/// so two requests that only differ in header insertion order produce equal
/// canonical requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    /// HTTP method.
    pub method: Method,
    /// Lowercased host, including a non-default port.
    pub host: String,
    /// Raw request path, as sent on the wire.
    pub path: String,
    /// Decoded query pairs, sorted.
    pub query: Vec<(String, String)>,
    /// Canonical headers, sorted by lowercase name.
    pub headers: Vec<(String, String)>,
    /// The signing time.
    pub timestamp: DateTime,
}

impl CanonicalRequest {
    /// Reduce a signing request into its canonical form.
    ///
    /// Fails with [`crate::ErrorKind::MissingRequiredHeader`] if any of `required`
    /// is absent from the request.
    pub fn build(
        req: &SigningRequest,
        required: &[HeaderName],
        timestamp: DateTime,
    ) -> Result<Self> {
        if let Some(missing) = required.iter().find(|h| !req.headers.contains_key(*h)) {
            debug!("request is missing required header {missing}");
            return Err(Error::missing_required_header(missing.as_str()));
        }

        let mut headers: Vec<(String, String)> = Vec::with_capacity(req.headers.keys_len());
        for name in req.headers.keys() {
            let mut values = Vec::new();
            for value in req.headers.get_all(name) {
                values.push(normalize_header_value(value.to_str()?));
            }
            // HeaderName is lowercase already.
            headers.push((name.as_str().to_string(), values.join(",")));
        }
        headers.sort();

        let mut query = req.query.clone();
        query.sort();

        Ok(CanonicalRequest {
            method: req.method.clone(),
            host: req.authority.as_str().to_lowercase(),
            path: req.path.clone(),
            query,
            headers,
            timestamp,
        })
    }

    /// Get header value by lowercase name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .binary_search_by(|(k, _)| k.as_str().cmp(name))
            .ok()
            .map(|idx| self.headers[idx].1.as_str())
    }

    /// Get header value by lowercase name, or an empty string if absent.
    pub fn header_or_default(&self, name: &str) -> &str {
        self.header(name).unwrap_or_default()
    }

    /// Iterate headers whose name starts with the given lowercase prefix.
    pub fn headers_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.headers
            .iter()
            .filter(move |(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sorted header names.
    pub fn header_names(&self) -> Vec<&str> {
        self.headers.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Query pairs whose key passes the filter, in canonical order.
    pub fn query_with_filter(&self, filter: impl Fn(&str) -> bool) -> Vec<(&str, &str)> {
        self.query
            .iter()
            .filter(|(k, _)| filter(k))
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// Join `(name, value)` pairs as `name{sep}value` separated by `join`.
    ///
    /// Empty values are written without separator, as sub-resources like `?acl` are.
    ///
    /// ```shell
    /// [(a, b), (c, d)] => "a:b\nc:d"
    /// ```
    pub fn join_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
        sep: &str,
        join: &str,
    ) -> String {
        let mut s = String::with_capacity(16);

        for (idx, (k, v)) in pairs.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(k);
            if !v.is_empty() {
                s.push_str(sep);
                s.push_str(v);
            }
        }

        s
    }
}

/// Trim leading and trailing spaces, collapse inner runs of spaces.
fn normalize_header_value(v: &str) -> String {
    v.split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use http::header::{CONTENT_TYPE, DATE};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ErrorKind;

    fn timestamp() -> DateTime {
        Utc.with_ymd_and_hms(2010, 3, 1, 12, 0, 0).unwrap()
    }

    fn signing_request(headers: &[(&str, &str)]) -> SigningRequest {
        let mut builder = http::Request::put("https://Bucket.S3.amazonaws.com/photo.jpg?b=2&a=1");
        for (k, v) in headers {
            builder = builder.header(*k, *v);
        }
        let mut parts = builder.body(()).unwrap().into_parts().0;
        SigningRequest::build(&mut parts).unwrap()
    }

    #[test]
    fn test_header_order_does_not_matter() -> Result<()> {
        let left = signing_request(&[
            ("X-Amz-Meta-Color", "blue"),
            ("Content-Type", "image/jpeg"),
            ("Date", "Tue, 27 Mar 2007 21:15:45 +0000"),
        ]);
        let right = signing_request(&[
            ("date", "Tue, 27 Mar 2007 21:15:45 +0000"),
            ("x-amz-meta-color", "  blue "),
            ("CONTENT-TYPE", "image/jpeg"),
        ]);

        let left = CanonicalRequest::build(&left, &[], timestamp())?;
        let right = CanonicalRequest::build(&right, &[], timestamp())?;
        assert_eq!(left, right);
        assert_eq!(
            left.header_names(),
            vec!["content-type", "date", "x-amz-meta-color"]
        );
        Ok(())
    }

    #[test]
    fn test_canonical_view() -> Result<()> {
        let req = signing_request(&[
            ("x-amz-meta-tag", "a"),
            ("x-amz-meta-tag", "b"),
            ("x-amz-acl", "public-read   now"),
        ]);
        let creq = CanonicalRequest::build(&req, &[], timestamp())?;

        assert_eq!(creq.host, "bucket.s3.amazonaws.com");
        assert_eq!(creq.path, "/photo.jpg");
        assert_eq!(
            creq.query,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
        assert_eq!(creq.header("x-amz-meta-tag"), Some("a,b"));
        assert_eq!(creq.header("x-amz-acl"), Some("public-read now"));
        assert_eq!(creq.header_or_default("content-md5"), "");
        assert_eq!(
            CanonicalRequest::join_pairs(creq.headers_with_prefix("x-amz-"), ":", "\n"),
            "x-amz-acl:public-read now\nx-amz-meta-tag:a,b"
        );
        Ok(())
    }

    #[test]
    fn test_missing_required_header() {
        let req = signing_request(&[("Content-Type", "image/jpeg")]);

        let err = CanonicalRequest::build(&req, &[CONTENT_TYPE, DATE], timestamp()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredHeader);
        assert!(err.to_string().contains("date"));

        let req = signing_request(&[("Content-Type", "image/jpeg"), ("Date", "now")]);
        assert!(CanonicalRequest::build(&req, &[CONTENT_TYPE, DATE], timestamp()).is_ok());
    }

    #[test]
    fn test_join_pairs() {
        assert_eq!(
            CanonicalRequest::join_pairs([("acl", ""), ("versionId", "3")], "=", "&"),
            "acl&versionId=3"
        );
        assert_eq!(
            CanonicalRequest::join_pairs(Vec::<(&str, &str)>::new(), "=", "&"),
            ""
        );
    }
}
