//! Router-level tests driving the full form flow against a canned supplier.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use skybook_api::{app, AppState};
use skybook_core::models::FlightOffer;
use skybook_core::supplier::MockTravelApi;

fn sample_offer(id: &str, total: &str) -> FlightOffer {
    serde_json::from_value(json!({
        "id": id,
        "numberOfBookableSeats": 4,
        "itineraries": [{
            "segments": [{
                "departure": { "iataCode": "SYD", "at": "2024-12-01T08:00:00" },
                "arrival": { "iataCode": "MEL", "at": "2024-12-01T09:35:00" },
                "carrierCode": "QF"
            }]
        }],
        "price": { "total": total, "currency": "AUD" }
    }))
    .unwrap()
}

fn app_with(mock: Arc<MockTravelApi>) -> Router {
    app(AppState::new(mock))
}

async fn call(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn fill_route(router: &Router) {
    for (name, value) in [
        ("origin", "SYD"),
        ("destination", "MEL"),
        ("departureDate", "2024-12-01"),
        ("adults", "1"),
    ] {
        let (status, _) = call(
            router,
            "PATCH",
            "/v1/criteria",
            Some(json!({ "name": name, "value": value })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn search_select_confirm_close_flow() {
    let mock = Arc::new(MockTravelApi {
        offers: vec![sample_offer("OFF-1", "189.40"), sample_offer("OFF-2", "210.00")],
        ..Default::default()
    });
    let router = app_with(mock.clone());

    fill_route(&router).await;

    let (status, view) = call(&router, "POST", "/v1/search", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["state"], "results");
    assert_eq!(view["offers"].as_array().unwrap().len(), 2);
    assert_eq!(view["offers"][0]["id"], "OFF-1");
    assert_eq!(view["offers"][0]["priceTotal"], "189.40");
    assert_eq!(view["offers"][0]["priceCurrency"], "AUD");

    let (status, view) = call(&router, "POST", "/v1/offers/0/select", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["state"], "reviewing");
    assert_eq!(view["showSelectionModal"], true);
    assert_eq!(view["selected"]["id"], "OFF-1");
    assert_eq!(view["selected"]["departure"], "2024-12-01T08:00:00");

    let (status, view) = call(&router, "POST", "/v1/booking/confirm", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["state"], "booked");
    assert_eq!(view["showSelectionModal"], false);
    assert_eq!(view["showConfirmation"], true);
    assert_eq!(view["order"]["id"], "ORD-1");
    assert_eq!(view["order"]["flightId"], "OFF-1");

    let submitted = mock.last_order.lock().unwrap().clone().unwrap();
    assert_eq!(submitted.data.flight_offers.len(), 1);
    assert_eq!(submitted.data.flight_offers[0].id, "OFF-1");

    let (status, view) = call(&router, "POST", "/v1/confirmation/close", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["showConfirmation"], false);

    // Closing again changes nothing.
    let (status, view) = call(&router, "POST", "/v1/confirmation/close", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["state"], "booked");
    assert_eq!(view["showConfirmation"], false);
}

#[tokio::test]
async fn lowercase_origin_is_rejected_before_any_network_call() {
    let mock = Arc::new(MockTravelApi::default());
    let router = app_with(mock.clone());

    let (status, _) = call(
        &router,
        "PATCH",
        "/v1/criteria",
        Some(json!({ "name": "origin", "value": "syd" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(
        &router,
        "PATCH",
        "/v1/criteria",
        Some(json!({ "name": "destination", "value": "MEL" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&router, "POST", "/v1/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("IATA"));
    assert_eq!(mock.token_calls.load(Ordering::SeqCst), 0);
    assert_eq!(mock.offers_calls.load(Ordering::SeqCst), 0);

    let (_, view) = call(&router, "GET", "/v1/session", None).await;
    assert_eq!(view["state"], "idle");
    assert!(view["error"].as_str().unwrap().contains("IATA"));
}

#[tokio::test]
async fn empty_search_results_render_as_results_without_error() {
    let mock = Arc::new(MockTravelApi::default());
    let router = app_with(mock);

    fill_route(&router).await;
    let (status, view) = call(&router, "POST", "/v1/search", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["state"], "results");
    assert_eq!(view["offers"].as_array().unwrap().len(), 0);
    assert_eq!(view["error"], Value::Null);
}

#[tokio::test]
async fn failed_token_exchange_surfaces_the_generic_error() {
    let mock = Arc::new(MockTravelApi {
        fail_token: true,
        ..Default::default()
    });
    let router = app_with(mock);

    fill_route(&router).await;
    let (status, view) = call(&router, "POST", "/v1/search", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["state"], "search_failed");
    assert_eq!(
        view["error"],
        "Error fetching flight offers. Please try again."
    );
    assert_eq!(view["offers"].as_array().unwrap().len(), 0);
    assert_eq!(view["order"], Value::Null);
}

#[tokio::test]
async fn selecting_an_out_of_range_offer_is_a_bad_request() {
    let mock = Arc::new(MockTravelApi::default());
    let router = app_with(mock);

    fill_route(&router).await;
    let (status, _) = call(&router, "POST", "/v1/search", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&router, "POST", "/v1/offers/3/select", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("out of range"));
}

#[tokio::test]
async fn unknown_criteria_field_is_a_bad_request() {
    let router = app_with(Arc::new(MockTravelApi::default()));

    let (status, body) = call(
        &router,
        "PATCH",
        "/v1/criteria",
        Some(json!({ "name": "cabinClass", "value": "ECONOMY" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("unknown"));
}

#[tokio::test]
async fn cancelling_the_review_returns_to_the_results() {
    let mock = Arc::new(MockTravelApi {
        offers: vec![sample_offer("OFF-1", "189.40")],
        ..Default::default()
    });
    let router = app_with(mock);

    fill_route(&router).await;
    call(&router, "POST", "/v1/search", None).await;
    call(&router, "POST", "/v1/offers/0/select", None).await;

    let (status, view) = call(&router, "POST", "/v1/booking/cancel", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["state"], "results");
    assert_eq!(view["showSelectionModal"], false);
    assert_eq!(view["selected"], Value::Null);
}

#[tokio::test]
async fn the_form_page_is_served_at_the_root() {
    let router = app_with(Arc::new(MockTravelApi::default()));

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Flight Booking"));
    assert!(html.contains("No flight offers found."));
}
