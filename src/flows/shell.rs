//! Top-level application shell: the logged-in indicator and logout control.

use super::Route;
use crate::state::{LoggedIn, SessionState};

pub struct AppShell {
    session: SessionState,
}

impl AppShell {
    #[must_use]
    pub fn new(session: SessionState) -> Self {
        Self { session }
    }

    /// Drives the navigation bar: shows account links while `true`.
    #[must_use]
    pub fn is_logged(&self) -> LoggedIn {
        self.session.is_logged()
    }

    pub fn logout(&self) -> Route {
        self.session.log_out();
        tracing::info!("logged out");
        Route::Home
    }
}

#[cfg(test)]
#[path = "shell_test.rs"]
mod tests;
