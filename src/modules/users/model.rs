//! User data models and DTOs.
//!
//! This module contains all data structures related to user management,
//! including the user entity, membership tiers, request/response DTOs, and
//! the user's loan history view.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A user account.
///
/// The password column is never selected into this struct; handlers can
/// return it directly.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// System role slug: "admin" or "member"
    pub role: String,
    /// Membership tier slug: "bronze", "silver" or "gold"
    pub membership: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// System roles.
///
/// Admins manage the catalog and read notifications; members browse and
/// borrow. Admin accounts are created from the CLI, not the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Member,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Member => "member",
        }
    }
}

/// Membership tier determining the borrowing quota.
///
/// Tiers are stored as free text in the database; anything that is not a
/// recognized tier parses to `Unknown`, which has no quota entry and can
/// never borrow. The deny-by-default case is deliberate, not a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MembershipTier {
    Bronze,
    Silver,
    Gold,
    #[serde(other)]
    Unknown,
}

impl MembershipTier {
    /// Parse a tier slug, falling back to `Unknown` for unrecognized values.
    pub fn parse(slug: &str) -> Self {
        match slug {
            "bronze" => MembershipTier::Bronze,
            "silver" => MembershipTier::Silver,
            "gold" => MembershipTier::Gold,
            _ => MembershipTier::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipTier::Bronze => "bronze",
            MembershipTier::Silver => "silver",
            MembershipTier::Gold => "gold",
            MembershipTier::Unknown => "unknown",
        }
    }
}

/// DTO for updating user profile.
///
/// Only name fields can be updated through this DTO.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
}

/// DTO for changing user password.
///
/// Requires the current password for verification before allowing the change.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordDto {
    #[validate(length(min = 1))]
    #[serde(alias = "old_password")]
    pub current_password: String,
    #[validate(length(min = 8))]
    #[schema(example = "newPassword123")]
    pub new_password: String,
}

/// DTO for changing a user's membership tier (admin only).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateMembershipDto {
    pub membership: MembershipTier,
}

/// One row of a user's borrow history: a borrow record joined to its book.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct LoanRecord {
    pub id: Uuid,
    pub book_id: Uuid,
    pub title: String,
    pub authors: String,
    pub returned: bool,
    pub borrowed_at: chrono::DateTime<chrono::Utc>,
    pub returned_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_tier_parse_known() {
        assert_eq!(MembershipTier::parse("bronze"), MembershipTier::Bronze);
        assert_eq!(MembershipTier::parse("silver"), MembershipTier::Silver);
        assert_eq!(MembershipTier::parse("gold"), MembershipTier::Gold);
    }

    #[test]
    fn test_membership_tier_parse_unknown_falls_back() {
        assert_eq!(MembershipTier::parse("platinum"), MembershipTier::Unknown);
        assert_eq!(MembershipTier::parse(""), MembershipTier::Unknown);
        assert_eq!(MembershipTier::parse("Bronze"), MembershipTier::Unknown);
    }

    #[test]
    fn test_membership_tier_serialization() {
        let json = serde_json::to_string(&MembershipTier::Silver).unwrap();
        assert_eq!(json, "\"silver\"");

        let tier: MembershipTier = serde_json::from_str("\"gold\"").unwrap();
        assert_eq!(tier, MembershipTier::Gold);

        // Unrecognized tiers deserialize to Unknown rather than failing
        let tier: MembershipTier = serde_json::from_str("\"platinum\"").unwrap();
        assert_eq!(tier, MembershipTier::Unknown);
    }

    #[test]
    fn test_update_profile_dto_validation() {
        let dto = UpdateProfileDto {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
        };
        assert!(dto.validate().is_ok());

        let dto_empty = UpdateProfileDto {
            first_name: Some("".to_string()),
            last_name: Some("Valid".to_string()),
        };
        assert!(dto_empty.validate().is_err());
    }

    #[test]
    fn test_change_password_dto_validation() {
        let dto = ChangePasswordDto {
            current_password: "currentPass".to_string(),
            new_password: "newPassword123".to_string(),
        };
        assert!(dto.validate().is_ok());

        let dto_short = ChangePasswordDto {
            current_password: "current".to_string(),
            new_password: "short".to_string(),
        };
        assert!(dto_short.validate().is_err());
    }

    #[test]
    fn test_user_serialization() {
        let user = User {
            id: Uuid::new_v4(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            role: "member".to_string(),
            membership: "bronze".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let serialized = serde_json::to_string(&user).unwrap();
        assert!(serialized.contains("john@example.com"));
        assert!(serialized.contains("bronze"));
        assert!(!serialized.contains("password"));
    }
}
