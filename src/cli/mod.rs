//! Command-line administration utilities.
//!
//! Admin accounts cannot be created through the API; they are provisioned
//! with `bookstack create-admin` against the configured database.

use sqlx::PgPool;

use bookstack_core::AppError;

use crate::utils::password::hash_password;

/// Create an admin account, failing if the email is already registered.
pub async fn create_admin(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    let existing: Option<(uuid::Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(AppError::database)?;

    if existing.is_some() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "A user with email {} already exists",
            email
        )));
    }

    let hashed = hash_password(password)?;

    sqlx::query(
        "INSERT INTO users (first_name, last_name, email, password, role, membership)
         VALUES ($1, $2, $3, $4, 'admin', 'gold')",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(&hashed)
    .execute(pool)
    .await
    .map_err(AppError::database)?;

    Ok(())
}
