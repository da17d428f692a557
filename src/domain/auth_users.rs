//! Auth user domain types

use serde::{Deserialize, Serialize};

use crate::model::Model;

/// Auth record entity mapped to the `auth_users` table. Usernames are
/// unique; passwords are stored as given.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AuthUser {
    pub id: i64,
    pub user_name: Option<String>,
    pub password: Option<String>,
}

impl Model for AuthUser {
    const TABLE: Option<&'static str> = Some("auth_users");
}

/// Listing row: only the username is exposed.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AuthUserSummary {
    pub user_name: Option<String>,
}

/// Request DTO for creating an auth user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthUserRequest {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

pub(crate) fn create_table_sql() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\
         id BIGSERIAL PRIMARY KEY, \
         user_name VARCHAR(50) UNIQUE, \
         password VARCHAR(20))",
        AuthUser::table_name()
    )
}
