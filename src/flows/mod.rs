//! Application flows: what each screen does with the services and the
//! session state, minus the rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! A flow never navigates or draws by itself. It returns the [`Route`] the
//! caller should move to and pushes transient messages through a
//! [`Notifier`]. Flows that change who is logged in hold a
//! [`crate::state::SessionState`]; all others hold a read-only
//! [`crate::state::SessionView`].

pub mod auth;
pub mod guards;
pub mod me;
pub mod session_form;
pub mod sessions;
pub mod shell;

#[cfg(test)]
#[path = "fakes_test.rs"]
pub(crate) mod fakes;

use std::fmt;
use std::time::Duration;

use crate::forms::FormErrors;
use crate::net::ApiError;

pub use auth::{LoginFlow, RegisterFlow};
pub use guards::{AuthGuard, UnauthGuard};
pub use me::{MeFlow, ProfileView};
pub use session_form::{FormMode, Opened, SessionFormFlow, SessionFormState};
pub use sessions::{SessionDetail, SessionList, SessionsFlow};
pub use shell::AppShell;

/// Generic text shown when a request fails for a reason the user cannot fix.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

// =============================================================================
// ROUTES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Me,
    Sessions,
    SessionCreate,
    SessionUpdate(u64),
    SessionDetail(u64),
    NotFound,
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Me => "/me".to_owned(),
            Self::Sessions => "/sessions".to_owned(),
            Self::SessionCreate => "/sessions/create".to_owned(),
            Self::SessionUpdate(id) => format!("/sessions/update/{id}"),
            Self::SessionDetail(id) => format!("/sessions/detail/{id}"),
            Self::NotFound => "/404".to_owned(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

pub const NOTIFICATION_ACTION: &str = "Close";
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

/// A short-lived message with a dismiss action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub action: &'static str,
    pub duration: Duration,
}

impl Notification {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self { message: message.to_owned(), action: NOTIFICATION_ACTION, duration: NOTIFICATION_DURATION }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Emits notifications as `info` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            message = %notification.message,
            duration_ms = u64::try_from(notification.duration.as_millis()).unwrap_or(u64::MAX),
            "notification"
        );
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The flow needs the current user id and nobody is logged in.
    #[error("not logged in")]
    NotLoggedIn,

    /// The current user lacks the role this action needs.
    #[error("forbidden: {0}")]
    Forbidden(&'static str),

    #[error(transparent)]
    Invalid(#[from] FormErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FlowError {
    /// Text for the error indicator next to a form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(errors) => errors.to_string(),
            Self::Api(err) if err.is_email_taken() => "Email is already taken".to_owned(),
            _ => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }
}
