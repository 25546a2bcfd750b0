use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use bookstack_core::AppError;

use crate::utils::password::{hash_password, verify_password};

use super::model::{ChangePasswordDto, MembershipTier, UpdateProfileDto, User};

const USER_COLUMNS: &str =
    "id, first_name, last_name, email, role, membership, created_at, updated_at";

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User with id {} not found", id)))?;

        Ok(user)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_profile(
        db: &PgPool,
        id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users
             SET first_name = COALESCE($2, first_name),
                 last_name = COALESCE($3, last_name),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User with id {} not found", id)))?;

        Ok(user)
    }

    #[instrument(skip(db, dto))]
    pub async fn change_password(
        db: &PgPool,
        id: Uuid,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        let current_hash = sqlx::query_scalar::<_, String>(
            "SELECT password FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User with id {} not found", id)))?;

        if !verify_password(&dto.current_password, &current_hash)? {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Current password is incorrect"
            )));
        }

        let new_hash = hash_password(&dto.new_password)?;

        sqlx::query("UPDATE users SET password = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(&new_hash)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(())
    }

    /// Change a user's membership tier (admin operation).
    #[instrument(skip(db))]
    pub async fn update_membership(
        db: &PgPool,
        id: Uuid,
        membership: MembershipTier,
    ) -> Result<User, AppError> {
        if membership == MembershipTier::Unknown {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Membership must be one of bronze, silver or gold"
            )));
        }

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET membership = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(membership.as_str())
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User with id {} not found", id)))?;

        Ok(user)
    }
}
