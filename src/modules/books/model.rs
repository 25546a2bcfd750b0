//! Book catalog data models and DTOs.
//!
//! # Core Types
//!
//! - [`Book`] - Book entity from the database
//! - [`Category`] - Book category
//!
//! # Request DTOs
//!
//! - [`CreateBookDto`] / [`UpdateBookDto`] - Admin book management
//! - [`CreateCategoryDto`] - Add a category
//! - [`BookFilterParams`] - Query parameters for filtering the catalog

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use bookstack_core::PaginationMeta;
use bookstack_core::serde::deserialize_optional_uuid;

/// A book in the library catalog.
///
/// `total` is the number of physical copies the library owns; availability
/// is derived from it and the count of active loans.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub authors: String,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub total: i64,
    pub cover: Option<String>,
    pub book_file: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A book category.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for adding a book to the library (admin only).
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBookDto {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub authors: String,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    /// Number of copies the library owns
    #[validate(range(min = 1))]
    pub total: i64,
    pub cover: Option<String>,
    pub book_file: Option<String>,
}

/// DTO for editing book information (admin only). All fields optional.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBookDto {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub authors: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    #[validate(range(min = 1))]
    pub total: Option<i64>,
    pub cover: Option<String>,
    pub book_file: Option<String>,
}

/// DTO for creating a book category (admin only).
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1))]
    pub name: String,
}

/// Query parameters for filtering the catalog.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookFilterParams {
    pub title: Option<String>,
    pub authors: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub category_id: Option<Uuid>,
}

/// Paginated response containing books.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedBooksResponse {
    pub data: Vec<Book>,
    pub meta: PaginationMeta,
}
