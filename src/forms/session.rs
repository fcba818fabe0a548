//! Create/update form for a yoga session.

use chrono::NaiveDate;

use super::{FieldError, FormErrors, first_failure, length, required};
use crate::net::types::{Session, SessionPayload};

pub const DESCRIPTION_MAX: usize = 2000;

/// Raw form values. `date` is the `YYYY-MM-DD` text of a date picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionForm {
    pub name: String,
    pub date: String,
    pub teacher_id: Option<u64>,
    pub description: String,
}

impl SessionForm {
    /// Pre-fill from an existing session for editing.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            name: session.name.clone(),
            date: session.date.date_naive().format("%Y-%m-%d").to_string(),
            teacher_id: Some(session.teacher_id),
            description: session.description.clone(),
        }
    }

    /// # Errors
    ///
    /// Every invalid field: name, date, teacher and description are required,
    /// the date must be `YYYY-MM-DD`, the description at most 2000 characters.
    pub fn validate(&self) -> Result<SessionPayload, FormErrors> {
        let mut errors = FormErrors::default();
        errors.check("name", required(&self.name));

        let date = parse_date(&self.date);
        errors.check("date", date.map(|_| ()));
        errors.check("teacher_id", self.teacher_id.map(|_| ()).ok_or(FieldError::Required));
        errors.check(
            "description",
            first_failure(&[required(&self.description), length(&self.description, 0, DESCRIPTION_MAX)]),
        );

        let (Ok(date), Some(teacher_id)) = (date, self.teacher_id) else {
            return Err(errors);
        };
        errors.into_result(|| SessionPayload {
            name: self.name.trim().to_owned(),
            date,
            teacher_id,
            description: self.description.clone(),
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, FieldError> {
    required(raw)?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| FieldError::Malformed)
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
