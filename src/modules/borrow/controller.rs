use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use bookstack_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::modules::borrow::model::BorrowRecord;
use crate::modules::borrow::service::BorrowService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/books/{id}/borrow",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 201, description = "Book borrowed", body = BorrowRecord),
        (status = 400, description = "No copies available or book already held"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Borrowing limit reached"),
        (status = 404, description = "Book or user not found")
    ),
    tag = "Borrowing",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn borrow_book(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(book_id): Path<Uuid>,
) -> Result<(StatusCode, Json<BorrowRecord>), AppError> {
    let user_id = auth_user.user_id()?;
    let record =
        BorrowService::borrow_book(&state.db, &state.borrow_config, user_id, book_id).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    put,
    path = "/api/books/{id}/return",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = BorrowRecord),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No active loan for this book")
    ),
    tag = "Borrowing",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn return_book(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(book_id): Path<Uuid>,
) -> Result<Json<BorrowRecord>, AppError> {
    let user_id = auth_user.user_id()?;
    let record = BorrowService::return_book(&state.db, user_id, book_id).await?;

    Ok(Json(record))
}
