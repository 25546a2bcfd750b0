use crate::middleware::borrow_limit::enforce_borrow_limit;
use crate::modules::borrow::controller::{borrow_book, return_book};
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{post, put},
};

/// Borrow/return routes, nested under `/api/books`.
///
/// Only the borrow route goes through the eligibility middleware; returning
/// a book is always allowed.
pub fn init_borrow_router(state: AppState) -> Router<AppState> {
    let guarded = Router::new()
        .route("/{id}/borrow", post(borrow_book))
        .route_layer(middleware::from_fn_with_state(state, enforce_borrow_limit));

    Router::new()
        .merge(guarded)
        .route("/{id}/return", put(return_book))
}
