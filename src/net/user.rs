//! User directory: fetch or delete one account by id.

use reqwest::Method;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::User;

#[async_trait::async_trait]
pub trait UserApi: Send + Sync {
    /// # Errors
    ///
    /// [`ApiError::NotFound`] if no such user, or any transport error.
    async fn get_by_id(&self, id: u64) -> Result<User, ApiError>;

    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] when deleting someone else's account.
    async fn delete(&self, id: u64) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl UserApi for UserService {
    async fn get_by_id(&self, id: u64) -> Result<User, ApiError> {
        self.client.get(&user_path(id)).await
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client.send_ack(Method::DELETE, &user_path(id), None::<&()>).await
    }
}

fn user_path(id: u64) -> String {
    format!("api/user/{id}")
}
