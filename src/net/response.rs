//! Buffered HTTP response model.
//!
//! A [`Response`] is returned once the whole body has been received. It
//! carries the final URL, status code and reason, the response headers, and
//! the [`Body`].
//!
//! ## Notes
//! - The body is either raw bytes or decoded text, depending on whether an
//!   [`Encoding`](crate::net::Encoding) was requested. The variant is fixed
//!   when the request is made.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//!
use http::header::CONTENT_TYPE;
use http::HeaderMap;

/// Fully received response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// No encoding was requested.
    Bytes(Vec<u8>),
    /// Body decoded with the requested encoding.
    Text(String),
}

impl Body {
    pub fn is_text(&self) -> bool {
        matches!(self, Body::Text(_))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Body::Bytes(b) => b.as_slice(),
            Body::Text(s) => s.as_bytes(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(s) => Some(s.as_str()),
            Body::Bytes(_) => None,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Body::Bytes(b) => b,
            Body::Text(s) => s.into_bytes(),
        }
    }

    /// Text body as-is; a byte body is converted lossily from UTF-8.
    pub fn into_text(self) -> String {
        match self {
            Body::Text(s) => s,
            Body::Bytes(b) => String::from_utf8(b)
                .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    ///
    /// May be `"Unknown"` for non-standard codes.
    pub status_text: String,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    pub body: Body,
}

impl Response {
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }
}
