//! Borrowing-quota policy.
//!
//! A pure decision function: no database access, no side effects. The quota
//! table is supplied by [`BorrowConfig`], loaded once at startup.

use crate::config::borrow::BorrowConfig;
use crate::modules::users::model::MembershipTier;

/// Whether a user on `tier` holding `unreturned_count` books may borrow
/// another.
///
/// A tier without a quota entry (`Unknown`) always denies; quota exhaustion
/// is a normal deny, never an error.
pub fn can_borrow(config: &BorrowConfig, tier: MembershipTier, unreturned_count: i64) -> bool {
    match config.quota_for(tier) {
        Some(quota) => unreturned_count <= quota,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_quota_allows() {
        let config = BorrowConfig::default();
        assert!(can_borrow(&config, MembershipTier::Bronze, 0));
        assert!(can_borrow(&config, MembershipTier::Silver, 3));
        assert!(can_borrow(&config, MembershipTier::Gold, 10));
    }

    #[test]
    fn test_bronze_boundary() {
        // bronze quota is 2: a count of 2 still passes, 3 does not
        let config = BorrowConfig::default();
        assert!(can_borrow(&config, MembershipTier::Bronze, 2));
        assert!(!can_borrow(&config, MembershipTier::Bronze, 3));
    }

    #[test]
    fn test_unknown_tier_always_denies() {
        let config = BorrowConfig::default();
        for count in 0..20 {
            assert!(!can_borrow(&config, MembershipTier::Unknown, count));
        }
    }

    #[test]
    fn test_matches_quota_table() {
        let config = BorrowConfig {
            bronze_quota: 1,
            silver_quota: 4,
            gold_quota: 7,
        };
        let tiers = [
            MembershipTier::Bronze,
            MembershipTier::Silver,
            MembershipTier::Gold,
        ];
        for tier in tiers {
            let quota = config.quota_for(tier).unwrap();
            for count in 0..=quota + 3 {
                assert_eq!(can_borrow(&config, tier, count), count <= quota);
            }
        }
    }
}
