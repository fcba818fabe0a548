//! Administrator form for creating and editing sessions.

use std::sync::Arc;

use super::{FlowError, Notification, Notifier, Route};
use crate::forms::SessionForm;
use crate::net::types::Teacher;
use crate::net::{SessionApi, TeacherApi};
use crate::state::SessionView;

pub const SESSION_CREATED_MESSAGE: &str = "Session created !";
pub const SESSION_UPDATED_MESSAGE: &str = "Session updated !";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(u64),
}

/// Everything the form needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFormState {
    pub mode: FormMode,
    pub form: SessionForm,
    /// Choices for the teacher selector.
    pub teachers: Vec<Teacher>,
}

/// Outcome of opening the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opened {
    Ready(SessionFormState),
    /// The user may not use the form; go here instead.
    Redirect(Route),
}

pub struct SessionFormFlow {
    sessions: Arc<dyn SessionApi>,
    teachers: Arc<dyn TeacherApi>,
    view: SessionView,
    notifier: Arc<dyn Notifier>,
}

impl SessionFormFlow {
    #[must_use]
    pub fn new(
        sessions: Arc<dyn SessionApi>,
        teachers: Arc<dyn TeacherApi>,
        view: SessionView,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self { sessions, teachers, view, notifier }
    }

    /// Prepare the form. Non-administrators are sent back to the list.
    ///
    /// # Errors
    ///
    /// [`FlowError::Api`] if the teacher list or the edited session cannot
    /// be fetched.
    pub async fn open(&self, mode: FormMode) -> Result<Opened, FlowError> {
        if !self.view.is_admin() {
            tracing::debug!(?mode, "session form refused for non-admin");
            return Ok(Opened::Redirect(Route::Sessions));
        }
        let teachers = self.teachers.all().await?;
        let form = match mode {
            FormMode::Create => SessionForm::default(),
            FormMode::Update(id) => SessionForm::from_session(&self.sessions.detail(id).await?),
        };
        Ok(Opened::Ready(SessionFormState { mode, form, teachers }))
    }

    /// Validate and save.
    ///
    /// # Errors
    ///
    /// [`FlowError::Forbidden`] for non-administrators,
    /// [`FlowError::Invalid`] without calling the API when the form is
    /// invalid, [`FlowError::Api`] if the save fails.
    pub async fn submit(&self, mode: FormMode, form: &SessionForm) -> Result<Route, FlowError> {
        if !self.view.is_admin() {
            return Err(FlowError::Forbidden("only administrators can edit sessions"));
        }
        let payload = form.validate()?;
        let message = match mode {
            FormMode::Create => {
                let created = self.sessions.create(&payload).await?;
                tracing::info!(session_id = created.id, "session created");
                SESSION_CREATED_MESSAGE
            }
            FormMode::Update(id) => {
                self.sessions.update(id, &payload).await?;
                tracing::info!(session_id = id, "session updated");
                SESSION_UPDATED_MESSAGE
            }
        };
        self.notifier.notify(Notification::new(message));
        Ok(Route::Sessions)
    }
}

#[cfg(test)]
#[path = "session_form_test.rs"]
mod tests;
