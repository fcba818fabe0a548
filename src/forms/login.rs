//! Login form.

use super::{FormErrors, email, first_failure, required};
use crate::net::types::LoginRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.to_owned(), password: password.to_owned() }
    }

    /// # Errors
    ///
    /// Every invalid field: email is required and must be well-formed,
    /// password is required.
    pub fn validate(&self) -> Result<LoginRequest, FormErrors> {
        let mut errors = FormErrors::default();
        errors.check("email", first_failure(&[required(&self.email), email(&self.email)]));
        errors.check("password", required(&self.password));
        errors.into_result(|| LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() })
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
