//! Client-side state shared across flows.

pub mod session;

pub use session::{LoggedIn, SessionState, SessionView};
