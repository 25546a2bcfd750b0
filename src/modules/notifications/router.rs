use crate::modules::notifications::controller::get_notifications;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_notifications_router() -> Router<AppState> {
    Router::new().route("/", get(get_notifications))
}
