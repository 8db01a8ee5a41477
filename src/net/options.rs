use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::net::Encoding;

const JSON_CONTENT_TYPE: &str = r"^(application/json|text/plain)";

static JSON_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(JSON_CONTENT_TYPE).expect("json content-type pattern is valid"));

/// Matcher for the `content-type` header of a response.
///
/// Matching is a search, not a full match: anchor the expression with `^`
/// to require a prefix.
#[derive(Debug, Clone)]
pub struct ContentTypePattern(Regex);

impl ContentTypePattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self(Regex::new(pattern)?))
    }

    /// Accepts `application/json` and `text/plain`, with or without parameters.
    pub fn json() -> Self {
        Self(JSON_PATTERN.clone())
    }

    /// A response without a `content-type` header is tested as the empty string.
    pub fn matches(&self, content_type: Option<&str>) -> bool {
        self.0.is_match(content_type.unwrap_or(""))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Regex> for ContentTypePattern {
    fn from(re: Regex) -> Self {
        Self(re)
    }
}

impl FromStr for ContentTypePattern {
    type Err = regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Per-request options for [`raw_request`](crate::net::raw_request).
///
/// The default checks nothing and yields raw bytes.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Reject responses whose `content-type` does not match.
    pub expected_content_type: Option<ContentTypePattern>,
    /// Decode the body to text. Without it the body stays as bytes.
    pub encoding: Option<Encoding>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expected_content_type(mut self, pattern: ContentTypePattern) -> Self {
        self.expected_content_type = Some(pattern);
        self
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Options used by JSON requests: JSON or plain text, decoded as UTF-8.
    pub fn json() -> Self {
        Self::new()
            .expected_content_type(ContentTypePattern::json())
            .encoding(Encoding::Utf8)
    }
}
