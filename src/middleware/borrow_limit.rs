//! Borrow-eligibility middleware.
//!
//! Guards the borrow route: loads the requesting user's membership tier and
//! unreturned-loan count, applies the quota policy, and either forwards the
//! request unchanged or short-circuits with a 403 and the fixed
//! limit-reached body. The check is advisory at request time; the borrow
//! service re-applies the quota inside its transaction.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use bookstack_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::config::borrow::BorrowConfig;
use crate::modules::borrow::model::{BorrowDeniedResponse, BorrowerProfile};
use crate::modules::borrow::policy::can_borrow;
use crate::modules::borrow::service::BorrowService;
use crate::state::AppState;

/// Outcome of the eligibility evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowGate {
    /// Within quota; hand the request to the next handler untouched.
    Proceed,
    /// Over quota (or no quota entry for the tier); respond 403.
    Deny,
    /// The authenticated user no longer exists; respond 404.
    UserMissing,
}

/// Evaluate the gate for a looked-up borrower profile.
///
/// Pure so the decision table is testable without a database. A missing
/// profile is an explicit outcome here, not an unhandled failure.
pub fn evaluate(config: &BorrowConfig, profile: Option<BorrowerProfile>) -> BorrowGate {
    match profile {
        None => BorrowGate::UserMissing,
        Some(profile) => {
            if can_borrow(config, profile.membership, profile.unreturned_count) {
                BorrowGate::Proceed
            } else {
                BorrowGate::Deny
            }
        }
    }
}

/// Middleware applied to the borrow route.
pub async fn enforce_borrow_limit(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    let auth_user = match AuthUser::from_request_parts(&mut parts, &state).await {
        Ok(user) => user,
        Err(e) => return e.into_response(),
    };

    let user_id = match auth_user.user_id() {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    let profile = match BorrowService::load_borrower_profile(&state.db, user_id).await {
        Ok(profile) => profile,
        Err(e) => return e.into_response(),
    };

    match evaluate(&state.borrow_config, profile) {
        BorrowGate::Proceed => {
            let req = Request::from_parts(parts, body);
            next.run(req).await
        }
        BorrowGate::Deny => (
            StatusCode::FORBIDDEN,
            Json(BorrowDeniedResponse::limit_reached()),
        )
            .into_response(),
        BorrowGate::UserMissing => AppError::not_found(anyhow::anyhow!(
            "User account for this token no longer exists"
        ))
        .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::model::MembershipTier;

    fn profile(membership: MembershipTier, unreturned_count: i64) -> Option<BorrowerProfile> {
        Some(BorrowerProfile {
            membership,
            unreturned_count,
        })
    }

    #[test]
    fn test_within_quota_proceeds() {
        let config = BorrowConfig::default();
        assert_eq!(
            evaluate(&config, profile(MembershipTier::Silver, 2)),
            BorrowGate::Proceed
        );
    }

    #[test]
    fn test_over_quota_denies() {
        let config = BorrowConfig::default();
        assert_eq!(
            evaluate(&config, profile(MembershipTier::Silver, 6)),
            BorrowGate::Deny
        );
    }

    #[test]
    fn test_unknown_tier_denies() {
        let config = BorrowConfig::default();
        assert_eq!(
            evaluate(&config, profile(MembershipTier::Unknown, 0)),
            BorrowGate::Deny
        );
    }

    #[test]
    fn test_missing_user_is_its_own_outcome() {
        let config = BorrowConfig::default();
        assert_eq!(evaluate(&config, None), BorrowGate::UserMissing);
    }
}
