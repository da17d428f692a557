//! Address-book domain types

use serde::{Deserialize, Serialize};

use crate::model::Model;

/// Address record entity mapped to the `users` table.
///
/// Every column except the key is nullable; records are only ever created
/// and listed, never updated or deleted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub home_phone: Option<i64>,
    pub work_phone: Option<i64>,
}

impl Model for User {
    const TABLE: Option<&'static str> = Some("users");
}

/// The columns the listing endpoint exposes.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub name: Option<String>,
    pub home_phone: Option<i64>,
}

/// Request DTO for creating an address record
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub home_phone: Option<i64>,
    #[serde(default)]
    pub work_phone: Option<i64>,
}

pub(crate) fn create_table_sql() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\
         id BIGSERIAL PRIMARY KEY, \
         name VARCHAR(50), \
         address VARCHAR(100), \
         home_phone BIGINT, \
         work_phone BIGINT)",
        User::table_name()
    )
}
