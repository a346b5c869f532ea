//! # fleet-client
//!
//! Async HTTP client for the fleetdeck admin API:
//! - `POST /api/admin/login` exchanges credentials for a bearer token.
//! - `GET /api/dashboard` returns the dashboard counters.
//!
//! Failures surface as [`ClientError`]. Nothing is retried.

mod error;
mod http;

pub use error::ClientError;

use std::time::Duration;

use fleet_core::entities::DashboardMetrics;
use fleet_core::responses::LoginResponse;
use serde::Serialize;

use crate::http::{check_response, read_json};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct FleetClient {
    http: reqwest::Client,
    base_url: String,
}

impl FleetClient {
    /// Build a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("fleetdeck/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Exchange admin credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidCredentials`] on any non-success status or a
    /// response without a token; [`ClientError::Network`] on transport
    /// failure; [`ClientError::Parse`] on an undecodable success body.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ClientError> {
        tracing::debug!(base_url = %self.base_url, "login request");
        let resp = self
            .http
            .post(self.url("/api/admin/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        token_from_response(resp).await
    }

    /// Fetch the dashboard counters.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unauthorized`] on 401/403, [`ClientError::Api`] on any
    /// other non-success status, [`ClientError::Network`] on transport
    /// failure, [`ClientError::Parse`] on an undecodable body.
    pub async fn fetch_dashboard_metrics(&self, token: &str) -> Result<DashboardMetrics, ClientError> {
        tracing::debug!(base_url = %self.base_url, "dashboard request");
        let resp = self
            .http
            .get(self.url("/api/dashboard"))
            .bearer_auth(token)
            .send()
            .await?;
        read_json(check_response(resp).await?).await
    }
}

async fn token_from_response(resp: reqwest::Response) -> Result<String, ClientError> {
    if !resp.status().is_success() {
        tracing::debug!(status = resp.status().as_u16(), "login rejected");
        return Err(ClientError::InvalidCredentials);
    }
    let body: LoginResponse = read_json(resp).await?;
    body.token
        .filter(|token| !token.is_empty())
        .ok_or(ClientError::InvalidCredentials)
}
