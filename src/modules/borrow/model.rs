use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::users::model::MembershipTier;

/// A borrow record relating a user to a book.
///
/// Records are created when a borrow is approved and mutated when the book
/// comes back; they are never deleted.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BorrowRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub book_id: Uuid,
    pub returned: bool,
    pub borrowed_at: chrono::DateTime<chrono::Utc>,
    pub returned_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// What the eligibility check needs to know about a borrower: their tier and
/// how many books they currently hold unreturned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorrowerProfile {
    pub membership: MembershipTier,
    pub unreturned_count: i64,
}

/// Fixed message returned when a user is over their borrowing quota.
pub const BORROW_LIMIT_MESSAGE: &str = "You have reached your borrowing limit. \
     Return some books or upgrade your account type to borrow more";

/// Body of the 403 response sent when the borrowing limit is reached.
#[derive(Debug, Serialize, ToSchema)]
pub struct BorrowDeniedResponse {
    pub success: bool,
    pub message: String,
}

impl BorrowDeniedResponse {
    pub fn limit_reached() -> Self {
        Self {
            success: false,
            message: BORROW_LIMIT_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_response_shape() {
        let body = BorrowDeniedResponse::limit_reached();
        let serialized = serde_json::to_string(&body).unwrap();
        assert!(serialized.contains(r#""success":false"#));
        assert!(serialized.contains("borrowing limit"));
    }
}
