use axum::{
    http::Method,
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod bookings;
pub mod error;
pub mod page;
pub mod search;
pub mod state;
pub mod view;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(page::index))
        .route("/v1/session", get(search::session))
        .route("/v1/criteria", patch(search::update_criteria))
        .route("/v1/search", post(search::submit_search))
        .route("/v1/offers/{index}/select", post(bookings::select_offer))
        .route("/v1/booking/confirm", post(bookings::confirm_booking))
        .route("/v1/booking/cancel", post(bookings::cancel_review))
        .route(
            "/v1/confirmation/close",
            post(bookings::close_confirmation),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
