use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use crate::api::models::ErrorResponse;
use crate::config::settings::AppConfig;
use crate::services::participants::{Catalogue, ParticipantService};

pub mod catalogue;
pub mod players;

pub struct AppState {
    pub config: AppConfig,
    pub catalogue: Catalogue,
    pub service: ParticipantService,
}

#[derive(Deserialize)]
pub struct PlayerParams {
    pub category: Option<String>,
    pub draw: Option<String>,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}
