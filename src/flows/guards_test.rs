use super::*;
use crate::flows::fakes::identity;
use crate::state::SessionState;

#[test]
fn auth_guard_redirects_anonymous_to_login() {
    let state = SessionState::new();
    let guard = AuthGuard::new(state.view());
    assert_eq!(guard.can_activate(), Err(Route::Login));

    state.log_in(identity(1, false));
    assert_eq!(guard.can_activate(), Ok(()));
}

#[test]
fn unauth_guard_redirects_logged_in_to_sessions() {
    let state = SessionState::new();
    let guard = UnauthGuard::new(state.view());
    assert_eq!(guard.can_activate(), Ok(()));

    state.log_in(identity(1, false));
    assert_eq!(guard.can_activate(), Err(Route::Sessions));

    state.log_out();
    assert_eq!(guard.can_activate(), Ok(()));
}
