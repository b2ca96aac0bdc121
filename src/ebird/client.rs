//! Blocking HTTP client for the eBird v2 API.

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::config::EbirdConfig;

use super::error::{EbirdError, Result};
use super::params::QueryParams;

/// Header carrying the eBird API token.
const API_TOKEN_HEADER: &str = "X-eBirdApiToken";

/// Request dispatcher for the eBird API.
///
/// Owns the base URL, the API token, and a blocking `reqwest` client with
/// a bounded timeout. Stateless between calls: every invocation of
/// [`get`](Self::get) performs exactly one GET request, with no caching
/// and no retry.
///
/// The client is blocking, so calls must run outside the async runtime
/// (the tool routes dispatch through `spawn_blocking`).
#[derive(Debug, Clone)]
pub struct EbirdClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_token: String,
}

impl EbirdClient {
    /// Build a client from the eBird configuration section.
    pub fn new(config: &EbirdConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one GET request against `{base_url}/{endpoint}`.
    ///
    /// The parameter mapping is URL-encoded into the query string and the
    /// token header is attached. A 2xx response is decoded as JSON and
    /// returned unchanged (object or array, per endpoint); any other
    /// status becomes [`EbirdError::Http`] carrying the status code and
    /// the raw body.
    pub fn get(&self, endpoint: &str, params: &QueryParams) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, params = params.len(), "requesting eBird API");

        let mut request = self.http.get(&url).header(API_TOKEN_HEADER, &self.api_token);
        if !params.is_empty() {
            request = request.query(params.pairs());
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), %url, "eBird API request failed");
            return Err(EbirdError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response.json().map_err(EbirdError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> EbirdConfig {
        EbirdConfig {
            api_token: "test-token".to_string(),
            base_url: base_url.to_string(),
            timeout_secs: 5,
        }
    }

    /// Run a dispatch on a blocking thread, the way tool routes do.
    ///
    /// The blocking client must not be built or used inside the async
    /// test runtime.
    async fn dispatch(base_url: String, endpoint: &'static str, params: QueryParams) -> Result<Value> {
        tokio::task::spawn_blocking(move || {
            let client = EbirdClient::new(&test_config(&base_url))?;
            client.get(endpoint, &params)
        })
        .await
        .expect("dispatch thread panicked")
    }

    #[tokio::test]
    async fn test_success_returns_array_body_unchanged() {
        let server = MockServer::start().await;
        let body = json!([{"speciesCode": "norcar", "comName": "Northern Cardinal"}]);

        Mock::given(method("GET"))
            .and(path("/data/obs/US-NY/recent"))
            .and(header("X-eBirdApiToken", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let result = dispatch(server.uri(), "data/obs/US-NY/recent", QueryParams::new())
            .await
            .unwrap();
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_success_returns_object_body_unchanged() {
        let server = MockServer::start().await;
        let body = json!({"subId": "S12345", "numSpecies": 23});

        Mock::given(method("GET"))
            .and(path("/product/checklist/view/S12345"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let result = dispatch(server.uri(), "product/checklist/view/S12345", QueryParams::new())
            .await
            .unwrap();
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_query_parameters_are_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/obs/US-NY/recent"))
            .and(query_param("back", "14"))
            .and(query_param("maxResults", "100"))
            .and(query_param("includeProvisional", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let params = QueryParams::new()
            .set("back", 14)
            .set("maxResults", 100)
            .set("includeProvisional", false);
        let result = dispatch(server.uri(), "data/obs/US-NY/recent", params).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_error_statuses_surface_as_http_error() {
        for status in [400u16, 401, 404, 500] {
            let server = MockServer::start().await;

            Mock::given(method("GET"))
                .and(path("/ref/taxonomy/ebird"))
                .respond_with(ResponseTemplate::new(status).set_body_string("error detail"))
                .mount(&server)
                .await;

            let err = dispatch(server.uri(), "ref/taxonomy/ebird", QueryParams::new())
                .await
                .unwrap_err();
            match err {
                EbirdError::Http { status: got, body } => {
                    assert_eq!(got, status);
                    assert_eq!(body, "error detail");
                }
                other => panic!("expected Http error for {status}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_unauthorized_carries_status_401() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/obs/US-NY/recent"))
            .respond_with(ResponseTemplate::new(401).set_body_string("User does not exist"))
            .mount(&server)
            .await;

        let err = dispatch(server.uri(), "data/obs/US-NY/recent", QueryParams::new())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_repeated_calls_produce_identical_requests() {
        let server = MockServer::start().await;

        // Both invocations must hit the same path with the same query.
        Mock::given(method("GET"))
            .and(path("/data/obs/US-NY/recent"))
            .and(query_param("back", "7"))
            .and(query_param("maxResults", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        for _ in 0..2 {
            let params = QueryParams::new().set("back", 7).set("maxResults", 50);
            dispatch(server.uri(), "data/obs/US-NY/recent", params)
                .await
                .unwrap();
        }
        // expect(2) is verified when the mock server drops.
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ref/taxonomy/versions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = dispatch(server.uri(), "ref/taxonomy/versions", QueryParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, EbirdError::Decode(_)));
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_is_normalized() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ref/hotspot/info/L99381"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let base = format!("{}/", server.uri());
        let result = dispatch(base, "ref/hotspot/info/L99381", QueryParams::new()).await;
        assert!(result.is_ok());
    }
}
