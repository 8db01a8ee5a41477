use crate::config::FetchConfigError;

/// The payload received from a remote endpoint could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct DataInvalid(pub String);

impl DataInvalid {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request Failed. Status Code: {0}")]
    UnexpectedStatus(u16),

    /// Carries the received `content-type`, or `(none)` when the header is missing.
    #[error("Invalid content-type {0}")]
    InvalidContentType(String),

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error(transparent)]
    DataInvalid(#[from] DataInvalid),

    #[error("Invalid configuration: {0}")]
    Config(#[from] FetchConfigError),
}

impl FetchError {
    /// Status code of a rejected response, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::UnexpectedStatus(code) => Some(*code),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message() {
        let err = FetchError::UnexpectedStatus(404);
        assert_eq!(err.to_string(), "Request Failed. Status Code: 404");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn content_type_error_message() {
        let err = FetchError::InvalidContentType("text/html".into());
        assert_eq!(err.to_string(), "Invalid content-type text/html");
        assert_eq!(err.status(), None);

        let err = FetchError::InvalidContentType("(none)".into());
        assert_eq!(err.to_string(), "Invalid content-type (none)");
    }

    #[test]
    fn data_invalid_is_transparent() {
        let err: FetchError = DataInvalid::new("Invalid json response: nope").into();
        assert_eq!(err.to_string(), "Invalid json response: nope");
    }
}
