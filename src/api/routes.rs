use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    catalogue::{get_categories, get_sub_events},
    players::get_players,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/categories", get(get_categories))
        .route("/api/sub-events", get(get_sub_events))
        .route("/api/players", get(get_players))
        .with_state(state)
}
