//! Shared HTTP response helpers.
//!
//! Status-code mapping lives here (401/403 → [`ClientError::Unauthorized`],
//! other non-success → [`ClientError::Api`]) so the endpoint methods only
//! build requests and pick response types.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Check an HTTP response for error statuses. Returns it unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(ClientError::Unauthorized);
    }
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the body and decode it as JSON, mapping decode failures to
/// [`ClientError::Parse`].
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use fleet_core::entities::DashboardMetrics;

    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_unauthorized() {
        for status in [401, 403] {
            let err = check_response(mock_response(status, "")).await.unwrap_err();
            assert!(matches!(err, ClientError::Unauthorized), "status {status}");
        }
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let err = check_response(mock_response(500, "database down"))
            .await
            .unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }

    #[tokio::test]
    async fn read_json_decodes_metrics() {
        let metrics: DashboardMetrics = read_json(mock_response(200, r#"{"totalAssets": 3}"#))
            .await
            .unwrap();
        assert_eq!(metrics.total_assets, 3);
    }

    #[tokio::test]
    async fn read_json_maps_bad_body_to_parse() {
        let err = read_json::<DashboardMetrics>(mock_response(200, "<html>oops</html>"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }
}
