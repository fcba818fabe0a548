//! Shared HTTP client for the booking API.
//!
//! DESIGN
//! ======
//! Every directory service goes through one [`ApiClient`]. It joins paths
//! onto the configured base URL, attaches `Authorization: Bearer <token>`
//! whenever the session holds an identity, and turns non-success statuses
//! into [`ApiError`] variants. Bodies are read as text first and parsed
//! separately so parse failures and empty acknowledgements are handled in one
//! place.

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ClientConfig;
use crate::state::SessionView;

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionView,
}

impl ApiClient {
    /// Build a client from typed config. `session` supplies the bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &ClientConfig, session: SessionView) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), session })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status, or
    /// a body that does not decode as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.execute(Method::GET, path, None::<&()>).await?;
        parse_body(&text)
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self.execute(Method::POST, path, Some(body)).await?;
        parse_body(&text)
    }

    /// `PUT` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self.execute(Method::PUT, path, Some(body)).await?;
        parse_body(&text)
    }

    /// Send a request whose response carries nothing the caller needs.
    /// Any acknowledgement body is discarded.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-success status.
    pub async fn send_ack<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, path, body).await?;
        Ok(())
    }

    async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = endpoint(&self.base_url, path);
        let mut request = self.authorize(self.http.request(method.clone(), &url));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        tracing::debug!(%method, %path, status, "api call");
        if !(200..300).contains(&status) {
            tracing::warn!(%method, %path, status, "api call rejected");
            return Err(ApiError::from_status(status, text));
        }
        Ok(text)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Join an API path like `api/session/1` onto the base URL.
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Decode a response body. An empty body decodes as JSON `null`, which
/// satisfies `()` and `Option<_>`.
fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let source = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(source).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
