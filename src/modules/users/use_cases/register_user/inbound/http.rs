use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::modules::users::use_cases::register_user::decision::DecideError;
use crate::modules::users::use_cases::register_user::handler::ApplicationError;
use crate::shared::infrastructure::user_store::StoreError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterUserBody {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct RegisterUserResponse {
    pub username: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterUserBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterUser {
        username: body.username.clone(),
        password: body.password,
        email: body.email,
    };

    match state.register_handler.handle(command).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(RegisterUserResponse {
                username: body.username,
            }),
        )
            .into_response(),
        Err(ApplicationError::Domain(DecideError::UsernameTaken))
        | Err(ApplicationError::Store(StoreError::Duplicate { .. })) => {
            StatusCode::CONFLICT.into_response()
        }
        Err(ApplicationError::Domain(reason)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": reason.to_string() })),
        )
            .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
