use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An activity notification shown to admins ("Jane Doe borrowed Dune").
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub user_id: Option<Uuid>,
    pub book_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Pagination metadata for the notification feed.
///
/// Serialized in camelCase, the wire shape the feed client consumes
/// (`{pageSize, pageNumber, pageCount}`). `page_size` echoes the requested
/// limit; `page_number` is 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPageMeta {
    pub page_size: i64,
    pub page_number: i64,
    pub page_count: i64,
}

/// Paginated response containing notifications.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedNotificationsResponse {
    pub data: Vec<Notification>,
    pub meta: NotificationPageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_serializes_camel_case() {
        let meta = NotificationPageMeta {
            page_size: 12,
            page_number: 2,
            page_count: 5,
        };
        let serialized = serde_json::to_string(&meta).unwrap();
        assert!(serialized.contains(r#""pageSize":12"#));
        assert!(serialized.contains(r#""pageNumber":2"#));
        assert!(serialized.contains(r#""pageCount":5"#));
    }

    #[test]
    fn test_page_meta_round_trip() {
        let json = r#"{"pageSize":12,"pageNumber":1,"pageCount":3}"#;
        let meta: NotificationPageMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.page_size, 12);
        assert_eq!(meta.page_number, 1);
        assert_eq!(meta.page_count, 3);
    }
}
