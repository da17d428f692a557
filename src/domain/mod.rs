//! Domain types and DTOs

pub mod auth_users;
pub mod users;

pub use auth_users::{AuthUser, AuthUserSummary, CreateAuthUserRequest};
pub use users::{CreateUserRequest, User, UserSummary};
