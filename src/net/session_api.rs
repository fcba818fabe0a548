//! Session directory: CRUD on bookable yoga sessions plus participation.

use reqwest::Method;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{Session, SessionPayload};

const SESSIONS_PATH: &str = "api/session";

#[async_trait::async_trait]
pub trait SessionApi: Send + Sync {
    /// # Errors
    ///
    /// Any transport or decode error.
    async fn all(&self) -> Result<Vec<Session>, ApiError>;

    /// # Errors
    ///
    /// [`ApiError::NotFound`] if no such session.
    async fn detail(&self, id: u64) -> Result<Session, ApiError>;

    /// # Errors
    ///
    /// [`ApiError::BadRequest`] if the server rejects the payload.
    async fn create(&self, payload: &SessionPayload) -> Result<Session, ApiError>;

    /// # Errors
    ///
    /// [`ApiError::BadRequest`] if the server rejects the payload.
    async fn update(&self, id: u64, payload: &SessionPayload) -> Result<Session, ApiError>;

    /// # Errors
    ///
    /// [`ApiError::NotFound`] if no such session.
    async fn delete(&self, id: u64) -> Result<(), ApiError>;

    /// Add `user_id` to the session's participants.
    ///
    /// # Errors
    ///
    /// [`ApiError::BadRequest`] if already participating,
    /// [`ApiError::NotFound`] if the session or user is unknown.
    async fn participate(&self, id: u64, user_id: u64) -> Result<(), ApiError>;

    /// Remove `user_id` from the session's participants.
    ///
    /// # Errors
    ///
    /// [`ApiError::BadRequest`] if not participating,
    /// [`ApiError::NotFound`] if the session is unknown.
    async fn un_participate(&self, id: u64, user_id: u64) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct SessionApiService {
    client: ApiClient,
}

impl SessionApiService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl SessionApi for SessionApiService {
    async fn all(&self) -> Result<Vec<Session>, ApiError> {
        self.client.get(SESSIONS_PATH).await
    }

    async fn detail(&self, id: u64) -> Result<Session, ApiError> {
        self.client.get(&session_path(id)).await
    }

    async fn create(&self, payload: &SessionPayload) -> Result<Session, ApiError> {
        self.client.post(SESSIONS_PATH, payload).await
    }

    async fn update(&self, id: u64, payload: &SessionPayload) -> Result<Session, ApiError> {
        self.client.put(&session_path(id), payload).await
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client.send_ack(Method::DELETE, &session_path(id), None::<&()>).await
    }

    async fn participate(&self, id: u64, user_id: u64) -> Result<(), ApiError> {
        self.client.send_ack(Method::POST, &participation_path(id, user_id), None::<&()>).await
    }

    async fn un_participate(&self, id: u64, user_id: u64) -> Result<(), ApiError> {
        self.client.send_ack(Method::DELETE, &participation_path(id, user_id), None::<&()>).await
    }
}

fn session_path(id: u64) -> String {
    format!("{SESSIONS_PATH}/{id}")
}

fn participation_path(id: u64, user_id: u64) -> String {
    format!("{SESSIONS_PATH}/{id}/participate/{user_id}")
}

#[cfg(test)]
#[path = "session_api_test.rs"]
mod tests;
