use std::fmt;
use url::Url;

use crate::config::FetchConfig;

/// Connection flavour used for a request, picked from the URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Plain TCP, for `http` URLs only.
    Plain,
    /// TLS. Everything that is not `http` ends up here, including schemes
    /// neither transport can serve; those fail when the request is sent.
    Secure,
}

impl Transport {
    pub fn for_url(url: &Url) -> Self {
        if url.scheme() == "http" {
            Transport::Plain
        } else {
            Transport::Secure
        }
    }

    /// Builds a single-use client for this transport. Idle connections are
    /// not kept, so nothing is shared between calls. Redirects are not
    /// followed and bodies are passed through without content decoding.
    pub(crate) fn client(self, config: &FetchConfig) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .redirect(reqwest::redirect::Policy::none())
            .no_gzip()
            .no_brotli()
            .no_deflate();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if self == Transport::Secure {
            builder = builder.https_only(true);
        }

        builder.build()
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Plain => write!(f, "plain"),
            Transport::Secure => write!(f, "secure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(url: &str) -> Transport {
        Transport::for_url(&Url::parse(url).unwrap())
    }

    #[test]
    fn http_uses_plain_transport() {
        assert_eq!(transport("http://example.org/api"), Transport::Plain);
        assert_eq!(transport("HTTP://example.org"), Transport::Plain);
        assert_eq!(transport("http://127.0.0.1:8080/?q=1"), Transport::Plain);
    }

    #[test]
    fn everything_else_uses_secure_transport() {
        assert_eq!(transport("https://example.org"), Transport::Secure);
        assert_eq!(transport("ftp://example.org/file"), Transport::Secure);
        assert_eq!(transport("ws://example.org/socket"), Transport::Secure);
        assert_eq!(transport("httpx://example.org"), Transport::Secure);
    }

    #[test]
    fn clients_build_for_both_transports() {
        let cfg = FetchConfig::default();
        assert!(Transport::Plain.client(&cfg).is_ok());
        assert!(Transport::Secure.client(&cfg).is_ok());
    }
}
