//! Registration form.

use super::{FormErrors, email, first_failure, length, required};
use crate::net::types::RegisterRequest;

pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 20;
pub const PASSWORD_MIN: usize = 3;
pub const PASSWORD_MAX: usize = 40;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Every invalid field: names 3–20 characters, a well-formed email, and a
    /// password of 3–40 characters, all required.
    pub fn validate(&self) -> Result<RegisterRequest, FormErrors> {
        let mut errors = FormErrors::default();
        errors.check(
            "firstName",
            first_failure(&[required(&self.first_name), length(&self.first_name, NAME_MIN, NAME_MAX)]),
        );
        errors.check(
            "lastName",
            first_failure(&[required(&self.last_name), length(&self.last_name, NAME_MIN, NAME_MAX)]),
        );
        errors.check("email", first_failure(&[required(&self.email), email(&self.email)]));
        errors.check(
            "password",
            first_failure(&[required(&self.password), length(&self.password, PASSWORD_MIN, PASSWORD_MAX)]),
        );
        errors.into_result(|| RegisterRequest {
            email: self.email.trim().to_owned(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
#[path = "register_test.rs"]
mod tests;
