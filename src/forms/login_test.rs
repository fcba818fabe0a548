use super::*;
use crate::forms::FieldError;

#[test]
fn valid_form_yields_request() {
    let request = LoginForm::new(" test@test.com ", "test!1234").validate().unwrap();
    assert_eq!(request.email, "test@test.com");
    assert_eq!(request.password, "test!1234");
}

#[test]
fn empty_fields_are_flagged() {
    let errors = LoginForm::default().validate().unwrap_err();
    assert_eq!(errors.get("email"), Some(FieldError::Required));
    assert_eq!(errors.get("password"), Some(FieldError::Required));
}

#[test]
fn malformed_email_is_flagged() {
    let errors = LoginForm::new("yoga.studio.com", "pw").validate().unwrap_err();
    assert_eq!(errors.get("email"), Some(FieldError::InvalidEmail));
    assert!(!errors.is_invalid("password"));
}

#[test]
fn leading_space_in_email_is_ignored() {
    let request = LoginForm::new(" yoga@studio.com", "test!1234").validate().unwrap();
    assert_eq!(request.email, "yoga@studio.com");
}
