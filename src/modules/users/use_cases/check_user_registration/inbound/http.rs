use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CheckUserRegistrationParams {
    pub username: String,
}

#[derive(Serialize)]
pub struct CheckUserRegistrationResponse {
    pub registered: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<CheckUserRegistrationParams>,
) -> impl IntoResponse {
    match state.queries.is_registered(&params.username).await {
        Ok(registered) => Json(CheckUserRegistrationResponse { registered }).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
