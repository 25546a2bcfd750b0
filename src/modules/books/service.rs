use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use bookstack_core::{AppError, PaginationMeta, PaginationParams};

use super::model::{
    Book, BookFilterParams, Category, CreateBookDto, CreateCategoryDto, PaginatedBooksResponse,
    UpdateBookDto,
};

const BOOK_COLUMNS: &str =
    "id, title, authors, description, category_id, total, cover, book_file, created_at, updated_at";

pub struct BookService;

impl BookService {
    #[instrument(skip(db, dto))]
    pub async fn create_book(db: &PgPool, dto: CreateBookDto) -> Result<Book, AppError> {
        if let Some(category_id) = dto.category_id {
            Self::ensure_category_exists(db, category_id).await?;
        }

        let book = sqlx::query_as::<_, Book>(&format!(
            "INSERT INTO books (title, authors, description, category_id, total, cover, book_file)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {BOOK_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.authors)
        .bind(&dto.description)
        .bind(dto.category_id)
        .bind(dto.total)
        .bind(&dto.cover)
        .bind(&dto.book_file)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(book)
    }

    #[instrument(skip(db))]
    pub async fn get_books(
        db: &PgPool,
        filters: BookFilterParams,
        pagination: PaginationParams,
    ) -> Result<PaginatedBooksResponse, AppError> {
        let limit = pagination.limit();
        let offset = pagination.offset();

        // ILIKE patterns for the optional text filters; None matches all
        let title_pattern = filters.title.map(|t| format!("%{}%", t));
        let authors_pattern = filters.authors.map(|a| format!("%{}%", a));

        let where_clause = "($1::text IS NULL OR title ILIKE $1)
               AND ($2::text IS NULL OR authors ILIKE $2)
               AND ($3::uuid IS NULL OR category_id = $3)";

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM books WHERE {where_clause}"
        ))
        .bind(&title_pattern)
        .bind(&authors_pattern)
        .bind(filters.category_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        let data = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE {where_clause}
             ORDER BY created_at DESC
             LIMIT $4 OFFSET $5"
        ))
        .bind(&title_pattern)
        .bind(&authors_pattern)
        .bind(filters.category_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        let meta = PaginationMeta {
            total,
            limit,
            offset: Some(offset),
            page: pagination.page(),
            has_more: offset + limit < total,
        };

        Ok(PaginatedBooksResponse { data, meta })
    }

    #[instrument(skip(db))]
    pub async fn get_book(db: &PgPool, id: Uuid) -> Result<Book, AppError> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Book with id {} not found", id)))?;

        Ok(book)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_book(db: &PgPool, id: Uuid, dto: UpdateBookDto) -> Result<Book, AppError> {
        if let Some(category_id) = dto.category_id {
            Self::ensure_category_exists(db, category_id).await?;
        }

        let book = sqlx::query_as::<_, Book>(&format!(
            "UPDATE books
             SET title = COALESCE($2, title),
                 authors = COALESCE($3, authors),
                 description = COALESCE($4, description),
                 category_id = COALESCE($5, category_id),
                 total = COALESCE($6, total),
                 cover = COALESCE($7, cover),
                 book_file = COALESCE($8, book_file),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {BOOK_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.title)
        .bind(&dto.authors)
        .bind(&dto.description)
        .bind(dto.category_id)
        .bind(dto.total)
        .bind(&dto.cover)
        .bind(&dto.book_file)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Book with id {} not found", id)))?;

        Ok(book)
    }

    #[instrument(skip(db))]
    pub async fn delete_book(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Book with id {} not found",
                id
            )));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_categories(db: &PgPool) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, created_at FROM categories ORDER BY name",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(categories)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_category(
        db: &PgPool,
        dto: CreateCategoryDto,
    ) -> Result<Category, AppError> {
        let existing: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM categories WHERE name = $1")
                .bind(&dto.name)
                .fetch_optional(db)
                .await
                .map_err(AppError::database)?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Category already exists"
            )));
        }

        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(&dto.name)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(category)
    }

    async fn ensure_category_exists(db: &PgPool, category_id: Uuid) -> Result<(), AppError> {
        let exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM categories WHERE id = $1")
            .bind(category_id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?;

        if exists.is_none() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Category with id {} does not exist",
                category_id
            )));
        }

        Ok(())
    }
}
