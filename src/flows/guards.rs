//! Route guards keyed on the logged-in state.

use super::Route;
use crate::state::SessionView;

/// Admits authenticated users; everyone else goes to the login page.
#[derive(Debug, Clone)]
pub struct AuthGuard {
    view: SessionView,
}

impl AuthGuard {
    #[must_use]
    pub fn new(view: SessionView) -> Self {
        Self { view }
    }

    /// # Errors
    ///
    /// The route to redirect to when access is refused.
    pub fn can_activate(&self) -> Result<(), Route> {
        if self.view.logged_in_now() { Ok(()) } else { Err(Route::Login) }
    }
}

/// Admits anonymous users (login, register); logged-in users go to sessions.
#[derive(Debug, Clone)]
pub struct UnauthGuard {
    view: SessionView,
}

impl UnauthGuard {
    #[must_use]
    pub fn new(view: SessionView) -> Self {
        Self { view }
    }

    /// # Errors
    ///
    /// The route to redirect to when access is refused.
    pub fn can_activate(&self) -> Result<(), Route> {
        if self.view.logged_in_now() { Err(Route::Sessions) } else { Ok(()) }
    }
}

#[cfg(test)]
#[path = "guards_test.rs"]
mod tests;
