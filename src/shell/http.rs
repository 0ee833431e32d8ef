use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::users::use_cases::check_user_registration::inbound::http as check_http;
use crate::modules::users::use_cases::register_user::inbound::http as register_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register-user", post(register_http::handle))
        .route("/check-user-registration", get(check_http::handle))
        .with_state(state)
}
