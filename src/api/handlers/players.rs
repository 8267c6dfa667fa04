use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, PlayerParams, error_response};
use crate::api::models::PlayersGridView;
use crate::config::Category;
use crate::services::grid::PlayersGrid;

pub async fn get_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerParams>,
) -> impl IntoResponse {
    let enabled = &state.config.event.enabled_categories;

    let category = match params.category.as_deref() {
        Some(key) => match key.parse::<Category>() {
            Ok(category) => category,
            Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
        },
        None => match enabled.first() {
            Some(category) => *category,
            None => return error_response(StatusCode::NOT_FOUND, "No categories enabled"),
        },
    };

    let mut grid = PlayersGrid::new(enabled.clone(), state.catalogue.sub_events.clone());
    let ticket = match grid.select_category(category) {
        Ok(Some(ticket)) => ticket,
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "No sub-events available"),
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    grid.load(&state.service, &ticket).await;

    if let Some(error) = grid.error() {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, error);
    }

    if let Some(draw) = params.draw.as_deref() {
        if let Err(e) = grid.select_draw(draw) {
            return error_response(StatusCode::NOT_FOUND, e.to_string());
        }
    }

    Json(PlayersGridView::new(&grid, &state.catalogue.profile_pics)).into_response()
}
