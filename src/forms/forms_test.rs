use super::*;

#[test]
fn required_rejects_blank() {
    assert_eq!(required(""), Err(FieldError::Required));
    assert_eq!(required("   "), Err(FieldError::Required));
    assert_eq!(required("Toto"), Ok(()));
}

#[test]
fn length_counts_characters() {
    assert_eq!(length("Pa", 3, 40), Err(FieldError::TooShort { min: 3 }));
    assert_eq!(length("Zoé", 3, 3), Ok(()));
    assert_eq!(length(&"x".repeat(41), 3, 40), Err(FieldError::TooLong { max: 40 }));
    assert_eq!(length("", 3, 40), Ok(()));
}

#[test]
fn email_shapes() {
    assert_eq!(email("toto5@toto.com"), Ok(()));
    assert_eq!(email("yoga@studio"), Ok(()));
    assert_eq!(email("invalid-email"), Err(FieldError::InvalidEmail));
    assert_eq!(email("@toto.com"), Err(FieldError::InvalidEmail));
    assert_eq!(email("a@b@c"), Err(FieldError::InvalidEmail));
    assert_eq!(email("a b@c.com"), Err(FieldError::InvalidEmail));
    assert_eq!(email("a@b..com"), Err(FieldError::InvalidEmail));
    assert_eq!(email(" yoga@studio.com "), Ok(()));
    assert_eq!(email("  "), Ok(()));
}

#[test]
fn first_failure_keeps_order() {
    let result = first_failure(&[Ok(()), Err(FieldError::InvalidEmail), Err(FieldError::Required)]);
    assert_eq!(result, Err(FieldError::InvalidEmail));
    assert_eq!(first_failure(&[Ok(()), Ok(())]), Ok(()));
}

#[test]
fn form_errors_display_lists_fields() {
    let mut errors = FormErrors::default();
    errors.check("email", Err(FieldError::Required));
    errors.check("password", Ok(()));
    errors.check("firstName", Err(FieldError::TooShort { min: 3 }));
    assert!(errors.is_invalid("email"));
    assert!(!errors.is_invalid("password"));
    assert_eq!(errors.iter().count(), 2);
    assert_eq!(errors.to_string(), "invalid form: email is required, firstName must be at least 3 characters");
}
