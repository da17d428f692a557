//! Address-book routes
//!
//! Listing and creation of address records.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::{paginate, Created, CreatedId, PaginationParams};
use crate::app::AppState;
use crate::domain::{CreateUserRequest, User, UserSummary};
use crate::error::ApiResult;
use crate::model::Model;

/// GET /user
///
/// Lists every address record's id, name and home phone. With explicit
/// `page`/`per_page` parameters the listing is windowed and wrapped in the
/// pagination envelope instead.
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Response> {
    let table = User::table_name();

    if params.is_paged() {
        let window_sql =
            format!("SELECT id, name, home_phone FROM {table} ORDER BY id LIMIT $1 OFFSET $2");
        let count_sql = format!("SELECT COUNT(*) FROM {table}");

        let page = paginate(
            &params,
            sqlx::query_as::<_, UserSummary>(&window_sql)
                .bind(params.limit())
                .bind(params.offset())
                .fetch_all(&state.db),
            sqlx::query_scalar::<_, i64>(&count_sql).fetch_one(&state.db),
        )
        .await?;

        return Ok(page.into_response());
    }

    let sql = format!("SELECT id, name, home_phone FROM {table} ORDER BY id");
    let users = sqlx::query_as::<_, UserSummary>(&sql)
        .fetch_all(&state.db)
        .await?;

    Ok(Json(users).into_response())
}

/// POST /user
///
/// Inserts a new address record and answers with its id.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<Created<CreatedId>> {
    let sql = format!(
        "INSERT INTO {} (name, address, home_phone, work_phone) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id, name, address, home_phone, work_phone",
        User::table_name()
    );

    let user: User = sqlx::query_as(&sql)
        .bind(&req.name)
        .bind(&req.address)
        .bind(req.home_phone)
        .bind(req.work_phone)
        .fetch_one(&state.db)
        .await?;

    tracing::info!(id = user.id, "Address record created");

    Ok(Created(CreatedId { id: user.id }))
}
