//! Request extractors

mod auth;
mod validated;

pub use auth::{AdminUser, AuthUser, AUTH_COOKIE};
pub use validated::ValidatedJson;
