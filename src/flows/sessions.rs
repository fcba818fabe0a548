//! Session listing and the session detail page.

use std::sync::Arc;

use serde::Serialize;

use super::{FlowError, Notification, Notifier, Route};
use crate::net::types::{Session, Teacher};
use crate::net::{ApiError, SessionApi, TeacherApi};
use crate::state::SessionView;

pub const SESSION_DELETED_MESSAGE: &str = "Session deleted !";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionList {
    pub sessions: Vec<Session>,
    /// Only administrators get the create action.
    pub can_create: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionDetail {
    pub session: Session,
    /// `None` when the session points at a teacher that no longer exists.
    pub teacher: Option<Teacher>,
    pub is_participant: bool,
    pub is_admin: bool,
}

impl SessionDetail {
    #[must_use]
    pub fn attendees(&self) -> usize {
        self.session.users.len()
    }
}

pub struct SessionsFlow {
    sessions: Arc<dyn SessionApi>,
    teachers: Arc<dyn TeacherApi>,
    view: SessionView,
    notifier: Arc<dyn Notifier>,
}

impl SessionsFlow {
    #[must_use]
    pub fn new(
        sessions: Arc<dyn SessionApi>,
        teachers: Arc<dyn TeacherApi>,
        view: SessionView,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self { sessions, teachers, view, notifier }
    }

    /// # Errors
    ///
    /// [`FlowError::Api`] if the listing fails.
    pub async fn list(&self) -> Result<SessionList, FlowError> {
        let sessions = self.sessions.all().await?;
        Ok(SessionList { sessions, can_create: self.view.is_admin() })
    }

    /// Load one session with its teacher and the current user's standing.
    ///
    /// # Errors
    ///
    /// [`FlowError::NotLoggedIn`] while anonymous, [`FlowError::Api`] if
    /// either lookup fails for a reason other than a missing teacher.
    pub async fn detail(&self, session_id: u64) -> Result<SessionDetail, FlowError> {
        let user_id = self.view.user_id().ok_or(FlowError::NotLoggedIn)?;
        let session = self.sessions.detail(session_id).await?;
        let teacher = match self.teachers.detail(session.teacher_id).await {
            Ok(teacher) => Some(teacher),
            Err(ApiError::NotFound) => {
                tracing::warn!(session_id, teacher_id = session.teacher_id, "session teacher missing");
                None
            }
            Err(err) => return Err(err.into()),
        };
        Ok(SessionDetail {
            is_participant: session.has_participant(user_id),
            is_admin: self.view.is_admin(),
            session,
            teacher,
        })
    }

    /// Join the session as the current user and return the refreshed detail.
    ///
    /// # Errors
    ///
    /// [`FlowError::NotLoggedIn`] while anonymous, [`FlowError::Api`] if the
    /// server refuses.
    pub async fn participate(&self, session_id: u64) -> Result<SessionDetail, FlowError> {
        let user_id = self.view.user_id().ok_or(FlowError::NotLoggedIn)?;
        self.sessions.participate(session_id, user_id).await?;
        tracing::info!(session_id, user_id, "joined session");
        self.detail(session_id).await
    }

    /// Leave the session and return the refreshed detail.
    ///
    /// # Errors
    ///
    /// Same as [`SessionsFlow::participate`].
    pub async fn un_participate(&self, session_id: u64) -> Result<SessionDetail, FlowError> {
        let user_id = self.view.user_id().ok_or(FlowError::NotLoggedIn)?;
        self.sessions.un_participate(session_id, user_id).await?;
        tracing::info!(session_id, user_id, "left session");
        self.detail(session_id).await
    }

    /// Administrator-only removal of a session.
    ///
    /// # Errors
    ///
    /// [`FlowError::Forbidden`] for non-administrators, [`FlowError::Api`]
    /// if the delete fails.
    pub async fn delete(&self, session_id: u64) -> Result<Route, FlowError> {
        if !self.view.is_admin() {
            return Err(FlowError::Forbidden("only administrators can delete sessions"));
        }
        self.sessions.delete(session_id).await?;
        tracing::info!(session_id, "session deleted");
        self.notifier.notify(Notification::new(SESSION_DELETED_MESSAGE));
        Ok(Route::Sessions)
    }
}

#[cfg(test)]
#[path = "sessions_test.rs"]
mod tests;
