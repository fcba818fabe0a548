//! Login and registration.

use std::sync::Arc;

use super::{FlowError, Route};
use crate::forms::{LoginForm, RegisterForm};
use crate::net::AuthApi;
use crate::state::SessionState;

pub struct LoginFlow {
    auth: Arc<dyn AuthApi>,
    session: SessionState,
}

impl LoginFlow {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>, session: SessionState) -> Self {
        Self { auth, session }
    }

    /// Validate, authenticate, then record the identity.
    ///
    /// The session is only touched on success.
    ///
    /// # Errors
    ///
    /// [`FlowError::Invalid`] without calling the API when the form is
    /// invalid, [`FlowError::Api`] when authentication fails.
    pub async fn submit(&self, form: &LoginForm) -> Result<Route, FlowError> {
        let request = form.validate()?;
        match self.auth.login(&request).await {
            Ok(information) => {
                tracing::info!(user_id = information.id, admin = information.admin, "login succeeded");
                self.session.log_in(information);
                Ok(Route::Sessions)
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                Err(err.into())
            }
        }
    }
}

pub struct RegisterFlow {
    auth: Arc<dyn AuthApi>,
}

impl RegisterFlow {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self { auth }
    }

    /// Validate and create the account. The user still has to log in.
    ///
    /// # Errors
    ///
    /// [`FlowError::Invalid`] without calling the API when the form is
    /// invalid, [`FlowError::Api`] when the server refuses (see
    /// [`crate::net::ApiError::is_email_taken`]).
    pub async fn submit(&self, form: &RegisterForm) -> Result<Route, FlowError> {
        let request = form.validate()?;
        if let Err(err) = self.auth.register(&request).await {
            tracing::warn!(error = %err, "registration failed");
            return Err(err.into());
        }
        tracing::info!("registration succeeded");
        Ok(Route::Login)
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
