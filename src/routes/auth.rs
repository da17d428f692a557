//! Auth user routes
//!
//! Listing and creation of auth user records.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::{paginate, Created, CreatedId, PaginationParams};
use crate::app::AppState;
use crate::domain::{AuthUser, AuthUserSummary, CreateAuthUserRequest};
use crate::error::{ApiError, ApiResult};
use crate::model::Model;

/// GET /auth
///
/// Lists every stored username. Accepts the same optional `page`/`per_page`
/// parameters as the address listing.
pub async fn list_auth_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Response> {
    let table = AuthUser::table_name();

    if params.is_paged() {
        let window_sql = format!("SELECT user_name FROM {table} ORDER BY id LIMIT $1 OFFSET $2");
        let count_sql = format!("SELECT COUNT(*) FROM {table}");

        let page = paginate(
            &params,
            sqlx::query_as::<_, AuthUserSummary>(&window_sql)
                .bind(params.limit())
                .bind(params.offset())
                .fetch_all(&state.db),
            sqlx::query_scalar::<_, i64>(&count_sql).fetch_one(&state.db),
        )
        .await?;

        return Ok(page.into_response());
    }

    let sql = format!("SELECT user_name FROM {table} ORDER BY id");
    let names = sqlx::query_as::<_, AuthUserSummary>(&sql)
        .fetch_all(&state.db)
        .await?;

    Ok(Json(names).into_response())
}

/// POST /auth
///
/// Inserts a new auth user and answers with its id. A taken username maps
/// to 409 through the unique constraint.
pub async fn create_auth_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAuthUserRequest>,
) -> ApiResult<Created<CreatedId>> {
    let sql = format!(
        "INSERT INTO {} (user_name, password) VALUES ($1, $2) \
         RETURNING id, user_name, password",
        AuthUser::table_name()
    );

    let user: AuthUser = sqlx::query_as(&sql)
        .bind(&req.user_name)
        .bind(&req.password)
        .fetch_one(&state.db)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::conflict("user_name already taken")
            }
            _ => ApiError::from(e),
        })?;

    tracing::info!(id = user.id, "Auth user created");

    Ok(Created(CreatedId { id: user.id }))
}
