use http::header::{CONTENT_TYPE, USER_AGENT};
use http::StatusCode;
use url::Url;

use crate::config::FetchConfig;
use crate::errors::FetchError;
use crate::net::encoding::TextDecoder;
use crate::net::{Body, Encoding, RequestOptions, Response, Transport};

/// Issues GET requests with a fixed identity.
///
/// A fetcher holds no connections; every call opens its own and owns its own
/// body buffer, so a single fetcher can be shared freely between tasks.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    config: FetchConfig,
}

impl Fetcher {
    /// Create a new fetcher. If `config` is `None`, [`FetchConfig::default`] is used.
    pub fn new(config: Option<FetchConfig>) -> Self {
        Self {
            config: config.unwrap_or_default(),
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Loads an URL and returns the fully buffered response.
    ///
    /// Responses with a status other than `200`, or whose `content-type` does
    /// not match `options.expected_content_type`, are rejected before the body
    /// is read.
    pub async fn fetch(&self, url: &str, options: Option<RequestOptions>) -> Result<Response, FetchError> {
        let options = options.unwrap_or_default();
        let url = Url::parse(url)?;
        let transport = Transport::for_url(&url);

        log::debug!("GET {} over {} transport", url, transport);

        let client = transport.client(&self.config)?;
        let mut res = client
            .get(url.clone())
            .header(USER_AGENT, self.config.user_agent.as_str())
            .send()
            .await
            .map_err(|e| {
                log::error!("GET {}: {}", url, e);
                e
            })?;

        let status = res.status();
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

        if let Err(e) = check_response(status, content_type.as_deref(), &options) {
            log::warn!("GET {}: {}", url, e);
            return Err(e);
        }

        // Fetch results
        let final_url = res.url().clone();
        let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();
        let headers = res.headers().clone();

        let mut acc = Accumulator::new(options.encoding);
        while let Some(chunk) = res.chunk().await? {
            log::trace!("GET {}: received {} bytes", url, chunk.len());
            acc.push(&chunk);
        }
        let body = acc.finish();

        log::debug!("GET {}: {} {} ({} bytes)", url, status.as_u16(), status_text, body.len());

        Ok(Response {
            url: final_url,
            status: status.as_u16(),
            status_text,
            headers,
            body,
        })
    }

    /// Loads an URL and returns only its body.
    ///
    /// With an encoding in `options` the result is [`Body::Text`], otherwise
    /// [`Body::Bytes`]. `None` behaves exactly like `Some(RequestOptions::default())`.
    pub async fn raw_request(&self, url: &str, options: Option<RequestOptions>) -> Result<Body, FetchError> {
        Ok(self.fetch(url, options).await?.body)
    }
}

/// [`Fetcher::raw_request`] with the default configuration.
pub async fn raw_request(url: &str, options: Option<RequestOptions>) -> Result<Body, FetchError> {
    Fetcher::default().raw_request(url, options).await
}

fn check_response(
    status: StatusCode,
    content_type: Option<&str>,
    options: &RequestOptions,
) -> Result<(), FetchError> {
    if status != StatusCode::OK {
        return Err(FetchError::UnexpectedStatus(status.as_u16()));
    }

    if let Some(pattern) = &options.expected_content_type {
        if !pattern.matches(content_type) {
            return Err(FetchError::InvalidContentType(
                content_type.unwrap_or("(none)").to_string(),
            ));
        }
    }

    Ok(())
}

/// Body buffer for a single call, in the mode chosen by the request options.
enum Accumulator {
    Bytes(Vec<u8>),
    Text { decoder: TextDecoder, text: String },
}

impl Accumulator {
    fn new(encoding: Option<Encoding>) -> Self {
        match encoding {
            Some(encoding) => Accumulator::Text {
                decoder: encoding.decoder(),
                text: String::new(),
            },
            None => Accumulator::Bytes(Vec::new()),
        }
    }

    fn push(&mut self, chunk: &[u8]) {
        match self {
            Accumulator::Bytes(buf) => buf.extend_from_slice(chunk),
            Accumulator::Text { decoder, text } => decoder.write(chunk, text),
        }
    }

    fn finish(self) -> Body {
        match self {
            Accumulator::Bytes(buf) => Body::Bytes(buf),
            Accumulator::Text { decoder, mut text } => {
                decoder.finish(&mut text);
                Body::Text(text)
            }
        }
    }
}
