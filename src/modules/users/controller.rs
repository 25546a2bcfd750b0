use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use bookstack_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::borrow::service::BorrowService;
use crate::modules::users::model::{
    ChangePasswordDto, LoanRecord, UpdateMembershipDto, UpdateProfileDto, User,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/users/profile",
    responses(
        (status = 200, description = "The authenticated user's profile", body = User),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<User>, AppError> {
    let user_id = auth_user.user_id()?;
    let user = UserService::get_user(&state.db, user_id).await?;

    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/api/users/profile",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = User),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation error")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<Json<User>, AppError> {
    let user_id = auth_user.user_id()?;
    let user = UserService::update_profile(&state.db, user_id, dto).await?;

    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/users/profile/change-password",
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 401, description = "Unauthorized or wrong current password"),
        (status = 422, description = "Validation error")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ChangePasswordDto>,
) -> Result<StatusCode, AppError> {
    let user_id = auth_user.user_id()?;
    UserService::change_password(&state.db, user_id, dto).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/users/profile/loans",
    responses(
        (status = 200, description = "The user's borrow history", body = Vec<LoanRecord>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_loan_history(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<LoanRecord>>, AppError> {
    let user_id = auth_user.user_id()?;
    let loans = BorrowService::loan_history(&state.db, user_id).await?;

    Ok(Json(loans))
}

#[utoipa::path(
    patch,
    path = "/api/users/{id}/membership",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateMembershipDto,
    responses(
        (status = 200, description = "Membership tier changed", body = User),
        (status = 400, description = "Unrecognized membership tier"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrator privileges required"),
        (status = 404, description = "User not found")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_membership(
    State(state): State<AppState>,
    RequireAdmin(_auth_user): RequireAdmin,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateMembershipDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::update_membership(&state.db, id, dto.membership).await?;

    Ok(Json(user))
}
