use std::fmt;

use http::{HeaderMap, StatusCode};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// ErrorEnvelope is the parsed representation of a provider error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    status: StatusCode,
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

impl ErrorEnvelope {
    /// Create an envelope that only knows the status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            code: None,
            message: None,
            request_id: None,
        }
    }

    /// Set the provider error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the provider error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the provider request id.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// HTTP status code of the failed response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Provider error code, e.g. `BucketAlreadyOwnedByYou`.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Provider error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Provider request id, useful when reporting issues upstream.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}", self.status.as_u16())?;
        if let Some(code) = &self.code {
            write!(f, ", code {code}")?;
        }
        if let Some(message) = &self.message {
            write!(f, ", message {message:?}")?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, ", request id {request_id}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorEnvelope {}

/// ErrorFormat selects how a provider's error body is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFormat {
    /// `<Error><Code/><Message/><RequestId/></Error>` with `x-amz-request-id` fallback.
    S3Xml,
    /// `<Error><Code/><Message/></Error>` with `x-ms-error-code` fallback.
    AzureXml,
    /// `<Response><Errors><Error><Code/><Message/></Error></Errors><RequestID/></Response>`
    Ec2Xml,
    /// `<Error minorErrorCode="" majorErrorCode="" message=""/>`
    VCloudXml,
    /// JSON bodies such as `{"error": ["msg"]}` or `{"code": "", "message": ""}`.
    Json,
    /// Free text bodies, kept as the message.
    PlainText,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct XmlError {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Ec2Response {
    #[serde(rename = "Errors", default)]
    errors: Ec2Errors,
    #[serde(rename = "RequestID")]
    request_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Ec2Errors {
    #[serde(rename = "Error", default)]
    error: Vec<XmlError>,
}

#[derive(Debug, Deserialize)]
struct VCloudError {
    #[serde(rename = "@minorErrorCode")]
    minor_error_code: Option<String>,
    #[serde(rename = "@majorErrorCode")]
    major_error_code: Option<String>,
    #[serde(rename = "@message")]
    message: Option<String>,
}

impl ErrorFormat {
    /// Parse a failed response into an envelope.
    ///
    /// Never fails: a body that does not match the format is kept as the message
    /// so the provider's words reach the caller.
    pub fn parse(&self, status: StatusCode, headers: &HeaderMap, body: &[u8]) -> ErrorEnvelope {
        let text = String::from_utf8_lossy(body);
        let text = text.trim_start_matches('\u{feff}').trim();

        let mut envelope = if text.is_empty() {
            ErrorEnvelope::new(status)
        } else {
            match self.parse_body(status, text) {
                Some(envelope) => envelope,
                None => {
                    debug!("error body does not match {self:?}, keeping it as message");
                    ErrorEnvelope::new(status).with_message(text)
                }
            }
        };

        match self {
            ErrorFormat::S3Xml if envelope.request_id.is_none() => {
                envelope.request_id = header_str(headers, "x-amz-request-id");
            }
            ErrorFormat::AzureXml => {
                if envelope.code.is_none() {
                    envelope.code = header_str(headers, "x-ms-error-code");
                }
                if envelope.request_id.is_none() {
                    envelope.request_id = header_str(headers, "x-ms-request-id");
                }
            }
            _ => {}
        }

        envelope
    }

    fn parse_body(&self, status: StatusCode, text: &str) -> Option<ErrorEnvelope> {
        match self {
            ErrorFormat::S3Xml | ErrorFormat::AzureXml => {
                let err: XmlError = quick_xml::de::from_str(text).ok()?;
                if err.code.is_none() && err.message.is_none() {
                    return None;
                }
                Some(ErrorEnvelope {
                    status,
                    code: err.code,
                    message: err.message,
                    request_id: err.request_id,
                })
            }
            ErrorFormat::Ec2Xml => {
                let resp: Ec2Response = quick_xml::de::from_str(text).ok()?;
                let first = resp.errors.error.into_iter().next()?;
                Some(ErrorEnvelope {
                    status,
                    code: first.code,
                    message: first.message,
                    request_id: resp.request_id,
                })
            }
            ErrorFormat::VCloudXml => {
                let err: VCloudError = quick_xml::de::from_str(text).ok()?;
                if err.minor_error_code.is_none() && err.major_error_code.is_none() {
                    return None;
                }
                Some(ErrorEnvelope {
                    status,
                    code: err.minor_error_code.or(err.major_error_code),
                    message: err.message,
                    request_id: None,
                })
            }
            ErrorFormat::Json => parse_json(status, text),
            ErrorFormat::PlainText => Some(ErrorEnvelope::new(status).with_message(text)),
        }
    }
}

fn parse_json(status: StatusCode, text: &str) -> Option<ErrorEnvelope> {
    let value: Value = serde_json::from_str(text).ok()?;
    let mut envelope = ErrorEnvelope::new(status);

    let inner = match value.get("error") {
        // Chef: {"error": ["msg", ...]}
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            envelope.message = Some(messages.join("; "));
            return Some(envelope);
        }
        Some(Value::String(msg)) => {
            envelope.message = Some(msg.clone());
            return Some(envelope);
        }
        Some(obj @ Value::Object(_)) => obj,
        // OpenStack: {"itemNotFound": {"code": 404, "message": "..."}}
        _ => match value.as_object() {
            Some(map) if map.len() == 1 && value.get("code").is_none() => {
                let (name, inner) = map.iter().next()?;
                if inner.is_object() {
                    envelope.code = Some(name.clone());
                    inner
                } else {
                    &value
                }
            }
            _ => &value,
        },
    };

    if let Some(code) = inner.get("code").and_then(Value::as_str) {
        envelope.code = Some(code.to_string());
    }
    if let Some(message) = inner.get("message").and_then(Value::as_str) {
        envelope.message = Some(message.to_string());
    }
    if envelope.code.is_none() && envelope.message.is_none() {
        return None;
    }
    Some(envelope)
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}
