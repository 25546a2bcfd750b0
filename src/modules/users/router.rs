use crate::modules::users::controller::{
    change_password, get_loan_history, get_profile, update_membership, update_profile,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/profile/change-password", post(change_password))
        .route("/profile/loans", get(get_loan_history))
        .route("/{id}/membership", patch(update_membership))
}
