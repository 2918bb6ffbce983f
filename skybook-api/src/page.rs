use axum::response::Html;

/// GET /
/// The booking form page. Static HTML driving the /v1 endpoints.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}
