use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use bookstack_core::AppError;

use crate::config::borrow::BorrowConfig;
use crate::modules::notifications::service::NotificationService;
use crate::modules::users::model::{LoanRecord, MembershipTier};

use super::model::{BORROW_LIMIT_MESSAGE, BorrowRecord, BorrowerProfile};
use super::policy::can_borrow;

pub struct BorrowService;

impl BorrowService {
    /// Load the membership tier and unreturned-loan count for a user.
    ///
    /// Returns `Ok(None)` when no such user exists; query failures surface
    /// as errors. Callers map the three outcomes to distinct responses.
    #[instrument(skip(db))]
    pub async fn load_borrower_profile(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<BorrowerProfile>, AppError> {
        let row = sqlx::query_as::<_, (String, i64)>(
            "SELECT u.membership,
                    COUNT(br.id) FILTER (WHERE br.returned = FALSE)
             FROM users u
             LEFT JOIN borrow_records br ON br.user_id = u.id
             WHERE u.id = $1
             GROUP BY u.id, u.membership",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        Ok(row.map(|(membership, unreturned_count)| BorrowerProfile {
            membership: MembershipTier::parse(&membership),
            unreturned_count,
        }))
    }

    /// Borrow a book for a user.
    ///
    /// The eligibility middleware has already screened the request, but that
    /// check is advisory: two concurrent requests could both pass it. The
    /// quota is therefore re-applied here inside a transaction that locks the
    /// user row, so concurrent borrows by the same user serialize and the
    /// second one sees the first one's record.
    #[instrument(skip(db, config))]
    pub async fn borrow_book(
        db: &PgPool,
        config: &BorrowConfig,
        user_id: Uuid,
        book_id: Uuid,
    ) -> Result<BorrowRecord, AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        let borrower = sqlx::query_as::<_, (String, String, String)>(
            "SELECT membership, first_name, last_name FROM users WHERE id = $1 FOR UPDATE",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User with id {} not found", user_id)))?;

        let (membership, first_name, last_name) = borrower;

        let unreturned_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM borrow_records WHERE user_id = $1 AND returned = FALSE",
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::database)?;

        if !can_borrow(config, MembershipTier::parse(&membership), unreturned_count) {
            return Err(AppError::forbidden(anyhow::anyhow!(BORROW_LIMIT_MESSAGE)));
        }

        let already_out = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM borrow_records
             WHERE user_id = $1 AND book_id = $2 AND returned = FALSE",
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::database)?;

        if already_out > 0 {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "You already have an unreturned copy of this book"
            )));
        }

        let book = sqlx::query_as::<_, (String, i64)>(
            "SELECT title, total FROM books WHERE id = $1 FOR UPDATE",
        )
        .bind(book_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Book with id {} not found", book_id)))?;

        let (title, total) = book;

        let copies_out = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM borrow_records WHERE book_id = $1 AND returned = FALSE",
        )
        .bind(book_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::database)?;

        if copies_out >= total {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "No copies of this book are currently available"
            )));
        }

        let record = sqlx::query_as::<_, BorrowRecord>(
            "INSERT INTO borrow_records (user_id, book_id)
             VALUES ($1, $2)
             RETURNING id, user_id, book_id, returned, borrowed_at, returned_at",
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::database)?;

        NotificationService::create(
            &mut *tx,
            &format!("{} {} borrowed {}", first_name, last_name, title),
            Some(user_id),
            Some(book_id),
        )
        .await?;

        tx.commit().await.map_err(AppError::database)?;

        Ok(record)
    }

    /// Return a borrowed book.
    ///
    /// Flips the `returned` flag on the active record and stamps the return
    /// time; the record itself is kept forever.
    #[instrument(skip(db))]
    pub async fn return_book(
        db: &PgPool,
        user_id: Uuid,
        book_id: Uuid,
    ) -> Result<BorrowRecord, AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        let record = sqlx::query_as::<_, BorrowRecord>(
            "UPDATE borrow_records
             SET returned = TRUE, returned_at = NOW()
             WHERE user_id = $1 AND book_id = $2 AND returned = FALSE
             RETURNING id, user_id, book_id, returned, borrowed_at, returned_at",
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("No active loan found for this book"))
        })?;

        let names = sqlx::query_as::<_, (String, String, String)>(
            "SELECT u.first_name, u.last_name, b.title
             FROM users u, books b
             WHERE u.id = $1 AND b.id = $2",
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::database)?;

        NotificationService::create(
            &mut *tx,
            &format!("{} {} returned {}", names.0, names.1, names.2),
            Some(user_id),
            Some(book_id),
        )
        .await?;

        tx.commit().await.map_err(AppError::database)?;

        Ok(record)
    }

    /// The user's full borrow history, newest first.
    #[instrument(skip(db))]
    pub async fn loan_history(db: &PgPool, user_id: Uuid) -> Result<Vec<LoanRecord>, AppError> {
        let loans = sqlx::query_as::<_, LoanRecord>(
            "SELECT br.id, br.book_id, b.title, b.authors, br.returned,
                    br.borrowed_at, br.returned_at
             FROM borrow_records br
             JOIN books b ON b.id = br.book_id
             WHERE br.user_id = $1
             ORDER BY br.borrowed_at DESC",
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(loans)
    }
}
