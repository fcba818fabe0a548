//! Authentication endpoints: credential login and account registration.

use reqwest::Method;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{LoginRequest, RegisterRequest, SessionInformation};

const LOGIN_PATH: &str = "api/auth/login";
const REGISTER_PATH: &str = "api/auth/register";

/// Issues credentials. Enables mocking in flow tests.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange email/password for a session identity.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] for bad credentials, or any transport error.
    async fn login(&self, request: &LoginRequest) -> Result<SessionInformation, ApiError>;

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// [`ApiError::BadRequest`] when the email is already registered.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl AuthApi for AuthService {
    async fn login(&self, request: &LoginRequest) -> Result<SessionInformation, ApiError> {
        self.client.post(LOGIN_PATH, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.client.send_ack(Method::POST, REGISTER_PATH, Some(request)).await
    }
}
