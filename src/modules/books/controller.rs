use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use bookstack_core::{AppError, PaginationParams};

use crate::middleware::role::RequireAdmin;
use crate::modules::books::model::{
    Book, BookFilterParams, Category, CreateBookDto, CreateCategoryDto, PaginatedBooksResponse,
    UpdateBookDto,
};
use crate::modules::books::service::BookService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/books",
    request_body = CreateBookDto,
    responses(
        (status = 201, description = "Book added to the library", body = Book),
        (status = 400, description = "Invalid input or unknown category"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrator privileges required")
    ),
    tag = "Books",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_book(
    State(state): State<AppState>,
    RequireAdmin(_auth_user): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateBookDto>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let book = BookService::create_book(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(book)))
}

#[utoipa::path(
    get,
    path = "/api/books",
    params(BookFilterParams, PaginationParams),
    responses(
        (status = 200, description = "Paginated book catalog", body = PaginatedBooksResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Books",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_books(
    State(state): State<AppState>,
    Query(filters): Query<BookFilterParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedBooksResponse>, AppError> {
    let books = BookService::get_books(&state.db, filters, pagination).await?;

    Ok(Json(books))
}

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Book not found")
    ),
    tag = "Books",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Book>, AppError> {
    let book = BookService::get_book(&state.db, id).await?;

    Ok(Json(book))
}

#[utoipa::path(
    put,
    path = "/api/books/{id}",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    request_body = UpdateBookDto,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrator privileges required"),
        (status = 404, description = "Book not found")
    ),
    tag = "Books",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_book(
    State(state): State<AppState>,
    RequireAdmin(_auth_user): RequireAdmin,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateBookDto>,
) -> Result<Json<Book>, AppError> {
    let book = BookService::update_book(&state.db, id, dto).await?;

    Ok(Json(book))
}

#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrator privileges required"),
        (status = 404, description = "Book not found")
    ),
    tag = "Books",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_book(
    State(state): State<AppState>,
    RequireAdmin(_auth_user): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    BookService::delete_book(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/books/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<Category>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Books",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = BookService::get_categories(&state.db).await?;

    Ok(Json(categories))
}

#[utoipa::path(
    post,
    path = "/api/books/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid input or duplicate category"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrator privileges required")
    ),
    tag = "Books",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_category(
    State(state): State<AppState>,
    RequireAdmin(_auth_user): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let category = BookService::create_category(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(category)))
}
