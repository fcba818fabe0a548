//! HTTP collaborators of the booking API.
//!
//! Each directory is an async trait (for fakes in flow tests) with one
//! reqwest-backed implementation sharing an [`client::ApiClient`].

pub mod auth;
pub mod client;
pub mod error;
pub mod session_api;
pub mod teacher;
pub mod types;
pub mod user;

pub use auth::{AuthApi, AuthService};
pub use client::ApiClient;
pub use error::ApiError;
pub use session_api::{SessionApi, SessionApiService};
pub use teacher::{TeacherApi, TeacherService};
pub use user::{UserApi, UserService};
