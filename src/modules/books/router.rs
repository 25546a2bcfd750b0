use crate::modules::books::controller::{
    create_book, create_category, delete_book, get_book_by_id, get_books, get_categories,
    update_book,
};
use crate::modules::borrow::router::init_borrow_router;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_books_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_books).post(create_book))
        .route("/categories", get(get_categories).post(create_category))
        .route(
            "/{id}",
            get(get_book_by_id).put(update_book).delete(delete_book),
        )
        .merge(init_borrow_router(state))
}
