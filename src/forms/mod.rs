//! Input validation for the login, registration and session forms.
//!
//! DESIGN
//! ======
//! Each form is a plain struct with a `validate` method that either yields the
//! request payload or every failing field at once, so a caller can flag all
//! invalid inputs in one pass. Field names match the server's JSON keys.

pub mod login;
pub mod register;
pub mod session;

pub use login::LoginForm;
pub use register::RegisterForm;
pub use session::SessionForm;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("is required")]
    Required,
    #[error("is not a valid email address")]
    InvalidEmail,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("must be at most {max} characters")]
    TooLong { max: usize },
    #[error("is not a valid value")]
    Malformed,
}

/// Every invalid field of one submission, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: Vec<(&'static str, FieldError)>,
}

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<FieldError> {
        self.fields.iter().find(|(name, _)| *name == field).map(|(_, err)| *err)
    }

    #[must_use]
    pub fn is_invalid(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FieldError)> + '_ {
        self.fields.iter().copied()
    }

    pub(crate) fn check(&mut self, field: &'static str, result: Result<(), FieldError>) {
        if let Err(err) = result {
            self.fields.push((field, err));
        }
    }

    pub(crate) fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.fields.iter().map(|(name, err)| format!("{name} {err}")).collect();
        write!(f, "invalid form: {}", rendered.join(", "))
    }
}

impl std::error::Error for FormErrors {}

// =============================================================================
// VALIDATORS
// =============================================================================

pub(crate) fn required(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() { Err(FieldError::Required) } else { Ok(()) }
}

/// Length bounds in characters. Empty input is left to [`required`].
pub(crate) fn length(value: &str, min: usize, max: usize) -> Result<(), FieldError> {
    let count = value.chars().count();
    if count == 0 {
        return Ok(());
    }
    if count < min {
        return Err(FieldError::TooShort { min });
    }
    if count > max {
        return Err(FieldError::TooLong { max });
    }
    Ok(())
}

/// `local@domain` with no inner whitespace and a domain made of non-empty
/// labels. Surrounding whitespace is ignored, as in [`required`].
pub(crate) fn email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let Some((local, domain)) = value.split_once('@') else {
        return Err(FieldError::InvalidEmail);
    };
    let well_formed = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain.split('.').all(|label| !label.is_empty());
    if well_formed { Ok(()) } else { Err(FieldError::InvalidEmail) }
}

/// Run validators in order and keep the first failure.
pub(crate) fn first_failure(checks: &[Result<(), FieldError>]) -> Result<(), FieldError> {
    checks.iter().copied().find(Result::is_err).unwrap_or(Ok(()))
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
