use serde::de::DeserializeOwned;

use crate::errors::{DataInvalid, FetchError};
use crate::net::{Fetcher, RequestOptions};

impl Fetcher {
    /// Loads an URL and parses its body as JSON into `T`.
    ///
    /// The response must be `200` with an `application/json` or `text/plain`
    /// content type. A body that does not parse into `T` yields
    /// [`FetchError::DataInvalid`] carrying the raw text.
    pub async fn json_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let raw = self
            .raw_request(url, Some(RequestOptions::json()))
            .await?
            .into_text();

        serde_json::from_str(&raw).map_err(|e| {
            log::debug!("GET {}: cannot parse json: {}", url, e);
            DataInvalid::new(format!("Invalid json response: {raw}")).into()
        })
    }
}

/// [`Fetcher::json_request`] with the default configuration.
pub async fn json_request<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    Fetcher::default().json_request(url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(body: &str, content_type: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), content_type))
            .mount(&server)
            .await;
        server
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Counter {
        a: u32,
    }

    #[tokio::test]
    async fn parses_json_body() {
        let server = serve(r#"{"a":1}"#, "application/json").await;
        let url = format!("{}/api", server.uri());

        let value: Value = json_request(&url).await.unwrap();
        assert_eq!(value, json!({"a": 1}));

        let typed: Counter = json_request(&url).await.unwrap();
        assert_eq!(typed, Counter { a: 1 });
    }

    #[tokio::test]
    async fn accepts_text_plain_with_charset() {
        let server = serve("[1,2,3]", "text/plain; charset=utf-8").await;

        let value: Vec<u8> = json_request(&format!("{}/api", server.uri())).await.unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn invalid_json_is_data_invalid() {
        let server = serve("not json", "application/json").await;

        let err = json_request::<Value>(&format!("{}/api", server.uri())).await.unwrap_err();
        match err {
            FetchError::DataInvalid(e) => {
                assert!(e.message().contains("not json"));
                assert_eq!(e.message(), "Invalid json response: not json");
            }
            other => panic!("expected DataInvalid, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn wrong_shape_is_data_invalid() {
        let server = serve(r#"{"b":2}"#, "application/json").await;

        let err = json_request::<Counter>(&format!("{}/api", server.uri())).await.unwrap_err();
        assert!(matches!(err, FetchError::DataInvalid(_)));
    }

    #[tokio::test]
    async fn html_is_rejected_before_parsing() {
        let server = serve(r#"{"a":1}"#, "text/html").await;

        let err = json_request::<Value>(&format!("{}/api", server.uri())).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidContentType(ref ct) if ct == "text/html"));
    }

    #[tokio::test]
    async fn status_errors_propagate_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_raw("{}", "application/json"))
            .mount(&server)
            .await;

        let err = json_request::<Value>(&server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::UnexpectedStatus(500)));
    }
}
