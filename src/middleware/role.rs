//! Role-based authorization middleware.
//!
//! Two approaches are provided:
//! 1. Layer-based middleware via [`require_admin`]
//! 2. Extractor-based access control via [`RequireAdmin`]

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use bookstack_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;

/// Middleware function that checks if the authenticated user has one of the
/// required roles.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    // Extract the authenticated user from request parts
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    let user_role = parse_role_from_string(&auth_user.0.role)?;

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required roles: {:?}, but user has role: {:?}",
            allowed_roles,
            user_role
        )));
    }

    // Reconstruct the request and continue
    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Middleware for admin-only routes.
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/notifications", get(notifications_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Extractor for admin-level access.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        let user_role = parse_role_from_string(&auth_user.0.role)?;

        if user_role != UserRole::Admin {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Access denied. Administrator privileges required."
            )));
        }

        Ok(RequireAdmin(auth_user))
    }
}

/// Helper function to check if a user has a specific role in controller logic.
pub fn check_role(auth_user: &AuthUser, required_role: UserRole) -> Result<(), AppError> {
    let user_role = parse_role_from_string(&auth_user.0.role)?;

    if user_role != required_role {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required role: {:?}, but user has role: {:?}",
            required_role,
            user_role
        )));
    }

    Ok(())
}

/// Parse a role string into a UserRole enum
pub fn parse_role_from_string(role_str: &str) -> Result<UserRole, AppError> {
    match role_str {
        "admin" => Ok(UserRole::Admin),
        "member" => Ok(UserRole::Member),
        _ => Err(AppError::internal(anyhow::anyhow!(
            "Invalid role: {}",
            role_str
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role_from_string() {
        assert!(matches!(
            parse_role_from_string("admin"),
            Ok(UserRole::Admin)
        ));
        assert!(matches!(
            parse_role_from_string("member"),
            Ok(UserRole::Member)
        ));
        assert!(parse_role_from_string("superuser").is_err());
        assert!(parse_role_from_string("").is_err());
    }
}
