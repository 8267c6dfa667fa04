use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{CategoryItem, SubEventItem};

pub async fn get_categories(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let categories: Vec<CategoryItem> = state
        .config
        .event
        .enabled_categories
        .iter()
        .copied()
        .map(CategoryItem::from)
        .collect();
    Json(categories)
}

pub async fn get_sub_events(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let sub_events: Vec<SubEventItem> = state
        .catalogue
        .sub_events
        .iter()
        .map(SubEventItem::from)
        .collect();
    Json(sub_events)
}
