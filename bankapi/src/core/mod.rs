pub mod config;

/// Errors surfaced at the HTTP boundary.
///
/// Response bodies follow the `{"detail": ...}` convention: a message for
/// missing resources, a list of `{loc, msg, type}` issues for rejected input.
///
pub mod error;
pub mod state;

pub mod prelude {
    pub use super::{config::Config, error::ApiError, state::AppState};
}
