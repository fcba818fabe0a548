//! Client core for the yoga studio booking API.
//!
//! The process owns one [`state::SessionState`]; everything that needs to know
//! who is logged in is handed a clone of it (writers) or a
//! [`state::SessionView`] (readers) at construction.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Session state holder and its logged-in signal |
//! | [`net`] | HTTP client, wire types and the four directory services |
//! | [`forms`] | Validation for login, registration and session forms |
//! | [`flows`] | Screen-level behaviour: login, account, sessions, guards |
//! | [`config`] | Environment-driven client configuration |

pub mod config;
pub mod flows;
pub mod forms;
pub mod net;
pub mod state;

use std::sync::Arc;

use config::ClientConfig;
use flows::{AppShell, AuthGuard, LoginFlow, MeFlow, Notifier, RegisterFlow, SessionFormFlow, SessionsFlow, UnauthGuard};
use net::{ApiClient, ApiError, AuthService, SessionApiService, TeacherService, UserService};
use state::SessionState;

/// Everything a front end needs, wired to one session and one HTTP client.
#[derive(Clone)]
pub struct Client {
    session: SessionState,
    notifier: Arc<dyn Notifier>,
    auth: Arc<AuthService>,
    users: Arc<UserService>,
    sessions: Arc<SessionApiService>,
    teachers: Arc<TeacherService>,
}

impl Client {
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &ClientConfig, notifier: Arc<dyn Notifier>) -> Result<Self, ApiError> {
        let session = SessionState::new();
        let api = ApiClient::new(config, session.view())?;
        Ok(Self {
            session,
            notifier,
            auth: Arc::new(AuthService::new(api.clone())),
            users: Arc::new(UserService::new(api.clone())),
            sessions: Arc::new(SessionApiService::new(api.clone())),
            teachers: Arc::new(TeacherService::new(api)),
        })
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn shell(&self) -> AppShell {
        AppShell::new(self.session.clone())
    }

    #[must_use]
    pub fn login(&self) -> LoginFlow {
        LoginFlow::new(self.auth.clone(), self.session.clone())
    }

    #[must_use]
    pub fn register(&self) -> RegisterFlow {
        RegisterFlow::new(self.auth.clone())
    }

    #[must_use]
    pub fn me(&self) -> MeFlow {
        MeFlow::new(self.users.clone(), self.session.clone(), self.notifier.clone())
    }

    #[must_use]
    pub fn sessions(&self) -> SessionsFlow {
        SessionsFlow::new(self.sessions.clone(), self.teachers.clone(), self.session.view(), self.notifier.clone())
    }

    #[must_use]
    pub fn session_form(&self) -> SessionFormFlow {
        SessionFormFlow::new(self.sessions.clone(), self.teachers.clone(), self.session.view(), self.notifier.clone())
    }

    #[must_use]
    pub fn teachers(&self) -> Arc<TeacherService> {
        self.teachers.clone()
    }

    #[must_use]
    pub fn auth_guard(&self) -> AuthGuard {
        AuthGuard::new(self.session.view())
    }

    #[must_use]
    pub fn unauth_guard(&self) -> UnauthGuard {
        UnauthGuard::new(self.session.view())
    }
}
