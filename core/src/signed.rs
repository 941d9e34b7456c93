use http::request::Parts;
use http::{HeaderName, HeaderValue};

use crate::{Result, SigningRequest};

/// Authorization is what a signing algorithm injects into the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// A single header, e.g. `Authorization: AWS id:signature`.
    Header(HeaderName, HeaderValue),
    /// Several headers, e.g. Chef's `X-Ops-Authorization-N` lines.
    Headers(Vec<(HeaderName, HeaderValue)>),
    /// Query parameters, e.g. presigned URLs or the EC2 query API.
    Query(Vec<(String, String)>),
}

impl Authorization {
    /// Build a header authorization with the value marked sensitive.
    pub fn header(name: HeaderName, value: &str) -> Result<Self> {
        let mut value = HeaderValue::from_str(value)?;
        value.set_sensitive(true);
        Ok(Authorization::Header(name, value))
    }

    pub(crate) fn apply(self, req: &mut SigningRequest) {
        match self {
            Authorization::Header(name, value) => {
                req.headers.insert(name, value);
            }
            Authorization::Headers(headers) => {
                for (name, value) in headers {
                    req.headers.insert(name, value);
                }
            }
            Authorization::Query(pairs) => req.query.extend(pairs),
        }
    }
}

/// SignedRequest is a request ready to be dispatched by the transport.
///
/// It can only be consumed once.
#[derive(Debug)]
pub struct SignedRequest {
    parts: Parts,
}

impl SignedRequest {
    pub(crate) fn new(parts: Parts) -> Self {
        Self { parts }
    }

    /// Borrow the signed request parts.
    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    /// Consume into the signed request parts.
    pub fn into_parts(self) -> Parts {
        self.parts
    }

    /// Consume into a full request carrying the given body.
    pub fn into_request<B>(self, body: B) -> http::Request<B> {
        http::Request::from_parts(self.parts, body)
    }
}
