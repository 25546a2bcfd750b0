use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use bookstack_core::{AppError, PaginationParams};

use crate::modules::notifications::model::PaginatedNotificationsResponse;
use crate::modules::notifications::service::NotificationService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/notifications",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated notification feed", body = PaginatedNotificationsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrator privileges required")
    ),
    tag = "Notifications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_notifications(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedNotificationsResponse>, AppError> {
    let response = NotificationService::get_notifications(&state.db, &pagination).await?;

    Ok(Json(response))
}
