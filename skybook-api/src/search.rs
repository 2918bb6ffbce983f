use axum::{extract::State, Json};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::view::SessionView;

#[derive(Debug, Deserialize)]
pub struct UpdateFieldRequest {
    pub name: String,
    pub value: String,
}

/// GET /v1/session
/// Current render model of the booking session.
pub async fn session(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.read().await;
    Json(SessionView::of(&session))
}

/// PATCH /v1/criteria
/// Merge a single form field into the search criteria.
pub async fn update_criteria(
    State(state): State<AppState>,
    Json(req): Json<UpdateFieldRequest>,
) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.write().await;
    session.update_field(&req.name, &req.value)?;
    Ok(Json(SessionView::of(&session)))
}

/// POST /v1/search
/// Validate the criteria, then run the token + offers exchange.
pub async fn submit_search(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.write().await;
    session.submit_search(state.travel_api.as_ref()).await?;
    Ok(Json(SessionView::of(&session)))
}
