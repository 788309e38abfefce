use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::form::LeadPayload;

const FALLBACK_API_ERROR: &str = "Something went wrong. Please try again.";

/// Client for the lead capture endpoint. Issues exactly one request per
/// submission attempt; there are no retries and no request queue.
#[derive(Debug, Clone)]
pub struct LeadApiClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl LeadApiClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub async fn submit(&self, payload: &LeadPayload) -> Result<String, SubmitFailure> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(|err| {
                tracing::debug!("lead submission request failed: {err}");
                SubmitFailure::Network
            })?;

        let status = response.status();
        let body = response
            .json::<ResponseBody>()
            .await
            .map_err(|_| SubmitFailure::Network)?;

        if status.is_success() {
            Ok(body
                .message
                .unwrap_or_else(|| "Form submitted successfully".into()))
        } else {
            Err(SubmitFailure::Api(
                body.error.unwrap_or_else(|| FALLBACK_API_ERROR.into()),
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitFailure {
    #[error("{0}")]
    Api(String),
    #[error("Network error. Please check your connection and try again.")]
    Network,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    message: Option<String>,
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use httpmock::{Method::POST, MockServer};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/submit").json_body(json!({
                    "name": "Dr. Jane Doe",
                    "email": "jane@example.com",
                    "message": "Interested",
                }));
                then.status(200).json_body(json!({
                    "success": true,
                    "message": "Form submitted successfully",
                }));
            })
            .await;

        let result = make_sut(&server).submit(&make_payload()).await;

        assert_eq!(result, Ok("Form submitted successfully".into()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn api_error_message_is_surfaced() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/submit");
                then.status(500)
                    .json_body(json!({ "error": "Server configuration error" }));
            })
            .await;

        let result = make_sut(&server).submit(&make_payload()).await;

        assert_eq!(
            result,
            Err(SubmitFailure::Api("Server configuration error".into()))
        );
    }

    #[tokio::test]
    async fn missing_error_field_falls_back_to_generic_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/submit");
                then.status(502).json_body(json!({}));
            })
            .await;

        let result = make_sut(&server).submit(&make_payload()).await;

        assert_eq!(
            result,
            Err(SubmitFailure::Api(
                "Something went wrong. Please try again.".into()
            ))
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_failure() {
        let client = LeadApiClient::new("http://127.0.0.1:9/api/submit".parse().unwrap());

        let result = client.submit(&make_payload()).await;

        assert_eq!(result, Err(SubmitFailure::Network));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Network error. Please check your connection and try again."
        );
    }

    fn make_sut(server: &MockServer) -> LeadApiClient {
        LeadApiClient::new(server.url("/api/submit").parse().unwrap())
    }

    fn make_payload() -> LeadPayload {
        LeadPayload {
            name: "Dr. Jane Doe".into(),
            email: "jane@example.com".into(),
            message: "Interested".into(),
            form_type: None,
        }
    }
}
