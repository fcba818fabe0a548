//! Authentication state for the current client process.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow, the logout control and the account-deletion flow write
//! through [`SessionState`]. Route guards, views and directory flows read
//! through [`SessionView`], which cannot mutate.
//!
//! DESIGN
//! ======
//! One identity cell plus a list of observer channels, both behind a single
//! mutex so a mutation and its notifications are applied together. Every
//! observer gets its own unbounded channel: the current value is queued at
//! subscribe time, then each transition is pushed synchronously, in
//! registration order, from inside `log_in` / `log_out`. Dropped observers are
//! pruned on the next notification. Only transitions of the boolean are
//! pushed, so re-login while authenticated and logout while anonymous are
//! silent.

use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;

use crate::net::types::SessionInformation;

#[derive(Default)]
struct Inner {
    information: Option<SessionInformation>,
    observers: Vec<mpsc::UnboundedSender<bool>>,
}

impl Inner {
    fn is_logged(&self) -> bool {
        self.information.is_some()
    }

    fn notify(&mut self, value: bool) {
        self.observers.retain(|tx| tx.send(value).is_ok());
    }
}

#[derive(Clone, Default)]
struct Shared(Arc<Mutex<Inner>>);

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        // The cell holds plain data; a panic elsewhere cannot leave it half-written.
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// WRITER
// =============================================================================

/// Owner handle for the authenticated identity.
///
/// Construct one per client process and hand clones to the flows that log the
/// user in or out. Everything else should receive a [`SessionView`].
#[derive(Clone, Default)]
pub struct SessionState {
    shared: Shared,
}

impl SessionState {
    /// Start anonymous.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any current identity with `information`.
    pub fn log_in(&self, information: SessionInformation) {
        let mut inner = self.shared.lock();
        let was_logged = inner.is_logged();
        tracing::debug!(user_id = information.id, admin = information.admin, "session: log in");
        inner.information = Some(information);
        if !was_logged {
            inner.notify(true);
        }
    }

    /// Clear the identity. Calling this while anonymous changes nothing.
    pub fn log_out(&self) {
        let mut inner = self.shared.lock();
        if inner.information.take().is_some() {
            tracing::debug!("session: log out");
            inner.notify(false);
        }
    }

    /// Read-only handle onto the same state.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView { shared: self.shared.clone() }
    }

    /// Subscribe to the logged-in signal. See [`SessionView::is_logged`].
    #[must_use]
    pub fn is_logged(&self) -> LoggedIn {
        self.view().is_logged()
    }

    #[must_use]
    pub fn session_information(&self) -> Option<SessionInformation> {
        self.view().session_information()
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.shared.lock();
        f.debug_struct("SessionState")
            .field("user_id", &inner.information.as_ref().map(|info| info.id))
            .field("observers", &inner.observers.len())
            .finish()
    }
}

// =============================================================================
// READER
// =============================================================================

/// Read-only handle onto a [`SessionState`].
#[derive(Clone)]
pub struct SessionView {
    shared: Shared,
}

impl SessionView {
    /// Live logged-in signal.
    ///
    /// The returned observer yields the current value first, then every later
    /// transition. Each call creates an independent observer; dropping it
    /// unsubscribes.
    #[must_use]
    pub fn is_logged(&self) -> LoggedIn {
        let mut inner = self.shared.lock();
        let (tx, rx) = mpsc::unbounded_channel();
        if tx.send(inner.is_logged()).is_ok() {
            inner.observers.push(tx);
        }
        LoggedIn { rx }
    }

    /// Point-in-time snapshot of the current identity.
    #[must_use]
    pub fn session_information(&self) -> Option<SessionInformation> {
        self.shared.lock().information.clone()
    }

    #[must_use]
    pub fn logged_in_now(&self) -> bool {
        self.shared.lock().is_logged()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<u64> {
        self.shared.lock().information.as_ref().map(|info| info.id)
    }

    /// `false` while anonymous.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.shared.lock().information.as_ref().is_some_and(|info| info.admin)
    }

    /// Bearer credential for outgoing requests, if logged in.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.shared.lock().information.as_ref().map(|info| info.token.clone())
    }
}

impl std::fmt::Debug for SessionView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionView").field("user_id", &self.user_id()).finish()
    }
}

// =============================================================================
// OBSERVER
// =============================================================================

/// One subscription to the logged-in signal.
#[derive(Debug)]
pub struct LoggedIn {
    rx: mpsc::UnboundedReceiver<bool>,
}

impl LoggedIn {
    /// Wait for the next value. `None` once the owning state is gone.
    pub async fn next_value(&mut self) -> Option<bool> {
        self.rx.recv().await
    }

    /// Take the next queued value without waiting.
    pub fn try_next(&mut self) -> Option<bool> {
        self.rx.try_recv().into_iter().next()
    }

    /// Drain everything queued and return the most recent value, if any.
    pub fn latest(&mut self) -> Option<bool> {
        let mut last = None;
        while let Some(value) = self.try_next() {
            last = Some(value);
        }
        last
    }
}

impl Stream for LoggedIn {
    type Item = bool;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<bool>> {
        self.rx.poll_recv(cx)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
