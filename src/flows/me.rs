//! The "my account" page: profile display and self-service deletion.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{FlowError, Notification, Notifier, Route};
use crate::net::UserApi;
use crate::net::types::User;
use crate::state::SessionState;

pub const ACCOUNT_DELETED_MESSAGE: &str = "Your account has been deleted !";

/// What the account page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    /// First name followed by the upper-cased last name.
    pub display_name: String,
    pub email: String,
    pub is_admin: bool,
    /// Administrators are never offered self-deletion.
    pub can_delete: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfileView {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            display_name: format!("{} {}", user.first_name, user.last_name.to_uppercase()),
            email: user.email.clone(),
            is_admin: user.admin,
            can_delete: !user.admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

pub struct MeFlow {
    users: Arc<dyn UserApi>,
    session: SessionState,
    notifier: Arc<dyn Notifier>,
}

impl MeFlow {
    #[must_use]
    pub fn new(users: Arc<dyn UserApi>, session: SessionState, notifier: Arc<dyn Notifier>) -> Self {
        Self { users, session, notifier }
    }

    /// Fetch the logged-in user's record.
    ///
    /// # Errors
    ///
    /// [`FlowError::NotLoggedIn`] while anonymous, [`FlowError::Api`] if the
    /// lookup fails.
    pub async fn load(&self) -> Result<ProfileView, FlowError> {
        let user_id = self.session.view().user_id().ok_or(FlowError::NotLoggedIn)?;
        let user = self.users.get_by_id(user_id).await?;
        Ok(ProfileView::from_user(&user))
    }

    /// Delete the logged-in account, then log out.
    ///
    /// # Errors
    ///
    /// [`FlowError::NotLoggedIn`] while anonymous, [`FlowError::Forbidden`]
    /// for administrators, [`FlowError::Api`] if the delete fails (the
    /// session is left untouched in that case).
    pub async fn delete_account(&self) -> Result<Route, FlowError> {
        let view = self.session.view();
        let user_id = view.user_id().ok_or(FlowError::NotLoggedIn)?;
        if view.is_admin() {
            return Err(FlowError::Forbidden("administrators cannot delete their own account"));
        }

        self.users.delete(user_id).await?;
        tracing::info!(user_id, "account deleted");
        self.notifier.notify(Notification::new(ACCOUNT_DELETED_MESSAGE));
        self.session.log_out();
        Ok(Route::Home)
    }
}

#[cfg(test)]
#[path = "me_test.rs"]
mod tests;
