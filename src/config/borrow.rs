use std::env;

use crate::modules::users::model::MembershipTier;

/// Borrowing quotas per membership tier.
///
/// Loaded once at startup and held immutably in the application state; there
/// is no hot reload. A tier without a quota entry ([`MembershipTier::Unknown`])
/// cannot borrow at all.
#[derive(Clone, Debug)]
pub struct BorrowConfig {
    /// Maximum concurrently unreturned books for bronze members
    pub bronze_quota: i64,
    /// Maximum concurrently unreturned books for silver members
    pub silver_quota: i64,
    /// Maximum concurrently unreturned books for gold members
    pub gold_quota: i64,
}

impl Default for BorrowConfig {
    fn default() -> Self {
        Self {
            bronze_quota: 2,
            silver_quota: 5,
            gold_quota: 10,
        }
    }
}

impl BorrowConfig {
    pub fn from_env() -> Self {
        Self {
            bronze_quota: env::var("BORROW_QUOTA_BRONZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            silver_quota: env::var("BORROW_QUOTA_SILVER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            gold_quota: env::var("BORROW_QUOTA_GOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Quota for a membership tier, or `None` for tiers without an entry.
    pub fn quota_for(&self, tier: MembershipTier) -> Option<i64> {
        match tier {
            MembershipTier::Bronze => Some(self.bronze_quota),
            MembershipTier::Silver => Some(self.silver_quota),
            MembershipTier::Gold => Some(self.gold_quota),
            MembershipTier::Unknown => None,
        }
    }
}
