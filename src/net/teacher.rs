//! Teacher directory (read-only).

use super::client::ApiClient;
use super::error::ApiError;
use super::types::Teacher;

const TEACHERS_PATH: &str = "api/teacher";

#[async_trait::async_trait]
pub trait TeacherApi: Send + Sync {
    /// # Errors
    ///
    /// Any transport or decode error.
    async fn all(&self) -> Result<Vec<Teacher>, ApiError>;

    /// # Errors
    ///
    /// [`ApiError::NotFound`] if no such teacher.
    async fn detail(&self, id: u64) -> Result<Teacher, ApiError>;
}

#[derive(Debug, Clone)]
pub struct TeacherService {
    client: ApiClient,
}

impl TeacherService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl TeacherApi for TeacherService {
    async fn all(&self) -> Result<Vec<Teacher>, ApiError> {
        self.client.get(TEACHERS_PATH).await
    }

    async fn detail(&self, id: u64) -> Result<Teacher, ApiError> {
        self.client.get(&format!("{TEACHERS_PATH}/{id}")).await
    }
}
