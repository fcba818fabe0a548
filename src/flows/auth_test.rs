use super::*;
use crate::flows::fakes::{FakeAuth, identity};
use crate::net::ApiError;

fn register_form() -> RegisterForm {
    RegisterForm {
        first_name: "Toto".to_owned(),
        last_name: "Titi".to_owned(),
        email: "toto5@toto.com".to_owned(),
        password: "test!1234".to_owned(),
    }
}

// =============================================================================
// LoginFlow
// =============================================================================

#[tokio::test]
async fn login_success_logs_in_and_routes_to_sessions() {
    let auth = Arc::new(FakeAuth::succeeding(identity(1, false)));
    let session = SessionState::new();
    let flow = LoginFlow::new(auth.clone(), session.clone());

    let route = flow.submit(&LoginForm::new("test@test.com", "test!1234")).await.unwrap();

    assert_eq!(route, Route::Sessions);
    assert_eq!(auth.login_calls(), 1);
    assert_eq!(auth.logins.lock().unwrap()[0].email, "test@test.com");
    assert_eq!(session.session_information(), Some(identity(1, false)));
    assert_eq!(session.is_logged().try_next(), Some(true));
}

#[tokio::test]
async fn login_failure_leaves_session_anonymous() {
    let auth = Arc::new(FakeAuth::failing(ApiError::Unauthorized));
    let session = SessionState::new();
    let flow = LoginFlow::new(auth.clone(), session.clone());

    let err = flow.submit(&LoginForm::new("test@test.com", "test!1234")).await.unwrap_err();

    assert!(matches!(err, FlowError::Api(ApiError::Unauthorized)));
    assert_eq!(err.user_message(), "An error occurred");
    assert!(session.session_information().is_none());
    assert_eq!(session.is_logged().try_next(), Some(false));
}

#[tokio::test]
async fn login_invalid_form_skips_api() {
    let auth = Arc::new(FakeAuth::succeeding(identity(1, false)));
    let session = SessionState::new();
    let flow = LoginFlow::new(auth.clone(), session.clone());

    let err = flow.submit(&LoginForm::new("", "")).await.unwrap_err();

    let FlowError::Invalid(errors) = err else {
        panic!("expected invalid form, got {err:?}");
    };
    assert!(errors.is_invalid("email"));
    assert!(errors.is_invalid("password"));
    assert_eq!(auth.login_calls(), 0);
    assert!(session.session_information().is_none());
}

// =============================================================================
// RegisterFlow
// =============================================================================

#[tokio::test]
async fn register_success_routes_to_login() {
    let auth = Arc::new(FakeAuth::default());
    let flow = RegisterFlow::new(auth.clone());

    let route = flow.submit(&register_form()).await.unwrap();

    assert_eq!(route, Route::Login);
    let sent = auth.registrations.lock().unwrap()[0].clone();
    assert_eq!(sent.first_name, "Toto");
    assert_eq!(sent.email, "toto5@toto.com");
}

#[tokio::test]
async fn register_with_missing_field_fails_without_calling_api() {
    let auth = Arc::new(FakeAuth::default());
    let flow = RegisterFlow::new(auth.clone());
    let form = RegisterForm { first_name: String::new(), ..register_form() };

    let err = flow.submit(&form).await.unwrap_err();

    assert!(matches!(err, FlowError::Invalid(_)));
    assert_eq!(auth.register_calls(), 0);
}

#[tokio::test]
async fn register_duplicate_email_is_reported() {
    let auth = Arc::new(FakeAuth::failing(ApiError::BadRequest("Error: Email is already taken!".to_owned())));
    let flow = RegisterFlow::new(auth.clone());

    let err = flow.submit(&register_form()).await.unwrap_err();

    assert_eq!(auth.register_calls(), 1);
    assert_eq!(err.user_message(), "Email is already taken");
}
