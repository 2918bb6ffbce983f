use axum::{
    extract::{Path, State},
    Json,
};

use skybook_core::traveler::{PaymentRecord, Traveler};

use crate::error::AppError;
use crate::state::AppState;
use crate::view::SessionView;

/// POST /v1/offers/{index}/select
/// Put the offer at that position under review and open the modal.
pub async fn select_offer(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.write().await;
    session.select_offer(index)?;
    Ok(Json(SessionView::of(&session)))
}

/// POST /v1/booking/confirm
/// Book the offer under review with the placeholder traveler and payment
/// records.
pub async fn confirm_booking(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.write().await;
    session
        .confirm_booking(
            state.travel_api.as_ref(),
            vec![Traveler::placeholder()],
            vec![PaymentRecord::placeholder()],
        )
        .await?;
    Ok(Json(SessionView::of(&session)))
}

/// POST /v1/booking/cancel
/// Close the selection modal without booking.
pub async fn cancel_review(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.write().await;
    session.cancel_review();
    Json(SessionView::of(&session))
}

/// POST /v1/confirmation/close
/// Hide the confirmation display. Idempotent.
pub async fn close_confirmation(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.write().await;
    session.close_confirmation();
    Json(SessionView::of(&session))
}
