use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Map;

use crate::criteria::SearchCriteria;
use crate::models::{FlightOffer, FlightOrder, FlightOrderRequest, FlightOrderResponse};

pub type SupplierError = Box<dyn std::error::Error + Send + Sync>;

/// The three upstream exchanges the booking flow depends on. Implementors
/// hold no session state; every call is a single request/response.
#[async_trait]
pub trait TravelApi: Send + Sync {
    /// Exchange client credentials for a bearer token.
    async fn fetch_access_token(&self) -> Result<String, SupplierError>;

    /// Search flight offers for the given criteria.
    async fn fetch_flight_offers(
        &self,
        access_token: &str,
        criteria: &SearchCriteria,
    ) -> Result<Vec<FlightOffer>, SupplierError>;

    /// Submit the order document for a selected offer.
    async fn create_flight_order(
        &self,
        access_token: &str,
        order: &FlightOrderRequest,
    ) -> Result<FlightOrderResponse, SupplierError>;
}

/// Canned supplier for session and router tests. Counts calls and records
/// the last order document so tests can assert what was submitted.
#[derive(Default)]
pub struct MockTravelApi {
    pub offers: Vec<FlightOffer>,
    pub fail_token: bool,
    pub fail_offers: bool,
    pub fail_order: bool,
    pub token_calls: AtomicUsize,
    pub offers_calls: AtomicUsize,
    pub order_calls: AtomicUsize,
    pub last_order: Mutex<Option<FlightOrderRequest>>,
}

#[async_trait]
impl TravelApi for MockTravelApi {
    async fn fetch_access_token(&self) -> Result<String, SupplierError> {
        self.token_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_token {
            return Err("token endpoint unavailable".into());
        }
        Ok("test-token".to_string())
    }

    async fn fetch_flight_offers(
        &self,
        _access_token: &str,
        _criteria: &SearchCriteria,
    ) -> Result<Vec<FlightOffer>, SupplierError> {
        self.offers_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_offers {
            return Err("offers endpoint unavailable".into());
        }
        Ok(self.offers.clone())
    }

    async fn create_flight_order(
        &self,
        _access_token: &str,
        order: &FlightOrderRequest,
    ) -> Result<FlightOrderResponse, SupplierError> {
        self.order_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_order.lock().unwrap() = Some(order.clone());
        if self.fail_order {
            return Err("order endpoint unavailable".into());
        }
        Ok(FlightOrderResponse {
            data: FlightOrder {
                id: "ORD-1".to_string(),
                flight_offers: order.data.flight_offers.clone(),
                extra: Map::new(),
            },
            extra: Map::new(),
        })
    }
}
