use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use bookstack_core::{AppError, PaginationParams};

use super::model::{Notification, NotificationPageMeta, PaginatedNotificationsResponse};

pub struct NotificationService;

impl NotificationService {
    /// Record an activity notification.
    ///
    /// Generic over the executor so callers can write the row inside their
    /// own transaction (the borrow flow does).
    #[instrument(skip(executor))]
    pub async fn create<'e, E>(
        executor: E,
        message: &str,
        user_id: Option<Uuid>,
        book_id: Option<Uuid>,
    ) -> Result<Notification, AppError>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let notification = sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (message, user_id, book_id)
             VALUES ($1, $2, $3)
             RETURNING id, message, user_id, book_id, created_at",
        )
        .bind(message)
        .bind(user_id)
        .bind(book_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::database)?;

        Ok(notification)
    }

    /// List notifications newest first, with feed pagination metadata.
    ///
    /// `page_number` reports which page the returned offset falls on
    /// (1-indexed) and `page_count` how many pages exist in total, so the
    /// feed client can decide whether another fetch is worthwhile.
    #[instrument(skip(db))]
    pub async fn get_notifications(
        db: &PgPool,
        pagination: &PaginationParams,
    ) -> Result<PaginatedNotificationsResponse, AppError> {
        let limit = pagination.limit();
        let offset = pagination.offset();

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notifications")
            .fetch_one(db)
            .await
            .map_err(AppError::database)?;

        let data = sqlx::query_as::<_, Notification>(
            "SELECT id, message, user_id, book_id, created_at
             FROM notifications
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        let meta = NotificationPageMeta {
            page_size: limit,
            page_number: offset / limit + 1,
            page_count: (total + limit - 1) / limit,
        };

        Ok(PaginatedNotificationsResponse { data, meta })
    }
}
