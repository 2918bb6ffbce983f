//! Booking flow controller.
//!
//! Owns everything the form renders: the criteria being edited, the offers
//! of the last search, the offer under review, the created order, and the
//! current flow state. One enum tracks the flow, so a half-open modal or a
//! loading flag without a request in flight cannot be represented.

use tracing::{debug, error};

use crate::criteria::SearchCriteria;
use crate::models::{FlightOffer, FlightOrder, FlightOrderRequest, FlightOrderResponse};
use crate::supplier::{SupplierError, TravelApi};
use crate::traveler::{PaymentRecord, Traveler};
use crate::{CoreError, CoreResult};

const IATA_HINT: &str =
    "Please enter valid IATA codes for origin and destination (3 uppercase letters).";
const SEARCH_FAILED_MESSAGE: &str = "Error fetching flight offers. Please try again.";
const BOOKING_FAILED_MESSAGE: &str = "Error creating flight order. Please try again.";

/// Where the booking attempt currently stands.
///
/// `Searching` and `Booking` are the in-flight states; submissions arriving
/// while one is active are rejected instead of raced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Searching,
    Results,
    SearchFailed,
    Reviewing,
    Booking,
    Booked { confirmation_visible: bool },
    BookingFailed,
}

impl FlowState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, FlowState::Searching | FlowState::Booking)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowState::Idle => "idle",
            FlowState::Searching => "searching",
            FlowState::Results => "results",
            FlowState::SearchFailed => "search_failed",
            FlowState::Reviewing => "reviewing",
            FlowState::Booking => "booking",
            FlowState::Booked { .. } => "booked",
            FlowState::BookingFailed => "booking_failed",
        }
    }
}

pub struct BookingSession {
    criteria: SearchCriteria,
    offers: Vec<FlightOffer>,
    selected: Option<usize>,
    order: Option<FlightOrder>,
    error: Option<String>,
    state: FlowState,
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingSession {
    pub fn new() -> Self {
        Self {
            criteria: SearchCriteria::default(),
            offers: Vec::new(),
            selected: None,
            order: None,
            error: None,
            state: FlowState::Idle,
        }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn offers(&self) -> &[FlightOffer] {
        &self.offers
    }

    pub fn selected_offer(&self) -> Option<&FlightOffer> {
        self.selected.and_then(|index| self.offers.get(index))
    }

    pub fn order(&self) -> Option<&FlightOrder> {
        self.order.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Merge a single form field into the criteria. Editing stays allowed
    /// while a request is in flight.
    pub fn update_field(&mut self, name: &str, value: &str) -> CoreResult<()> {
        self.criteria.update_field(name, value)
    }

    /// Validate the route, then run the token + offers exchange.
    ///
    /// A remote failure is recorded on the session (generic message,
    /// `SearchFailed`) and is not an error to the caller; only the local
    /// precondition and the in-flight guard are.
    pub async fn submit_search(&mut self, api: &dyn TravelApi) -> CoreResult<()> {
        if self.state.is_in_flight() {
            return Err(CoreError::InFlightError(
                "a search or booking request is already in flight".to_string(),
            ));
        }

        // A new search resets the previous attempt wholesale.
        self.error = None;
        self.offers.clear();
        self.selected = None;
        self.order = None;

        if self.criteria.validate_route().is_err() {
            self.error = Some(IATA_HINT.to_string());
            self.state = FlowState::Idle;
            return Err(CoreError::ValidationError(IATA_HINT.to_string()));
        }

        self.state = FlowState::Searching;
        match search(api, &self.criteria).await {
            Ok(offers) => {
                debug!(count = offers.len(), "flight offer search succeeded");
                self.offers = offers;
                self.state = FlowState::Results;
            }
            Err(err) => {
                error!("flight offer search failed: {err}");
                self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
                self.state = FlowState::SearchFailed;
            }
        }
        Ok(())
    }

    /// Put the offer at `index` under review and open the selection modal.
    pub fn select_offer(&mut self, index: usize) -> CoreResult<()> {
        if self.state.is_in_flight() {
            return Err(CoreError::InFlightError(
                "a search or booking request is already in flight".to_string(),
            ));
        }
        if index >= self.offers.len() {
            return Err(CoreError::ValidationError(format!(
                "offer index {index} is out of range"
            )));
        }
        self.selected = Some(index);
        self.state = FlowState::Reviewing;
        Ok(())
    }

    /// Close the selection modal without booking. No-op outside review.
    pub fn cancel_review(&mut self) {
        if self.state == FlowState::Reviewing {
            self.selected = None;
            self.state = FlowState::Results;
        }
    }

    /// Book the offer under review: fresh token, then the order document
    /// embedding exactly that offer plus the given traveler and payment
    /// records.
    ///
    /// Failure closes the selection modal and records the generic message;
    /// the fetched offers stay untouched so the user can retry.
    pub async fn confirm_booking(
        &mut self,
        api: &dyn TravelApi,
        travelers: Vec<Traveler>,
        payments: Vec<PaymentRecord>,
    ) -> CoreResult<()> {
        if self.state.is_in_flight() {
            return Err(CoreError::InFlightError(
                "a booking request is already in flight".to_string(),
            ));
        }
        if self.state != FlowState::Reviewing {
            return Err(CoreError::ValidationError(
                "no offer is under review".to_string(),
            ));
        }
        let offer = self
            .selected
            .and_then(|index| self.offers.get(index))
            .cloned()
            .ok_or_else(|| CoreError::ValidationError("no offer selected".to_string()))?;

        self.state = FlowState::Booking;
        let request = FlightOrderRequest::for_offer(offer, travelers, payments);
        match book(api, &request).await {
            Ok(response) => {
                debug!(order_id = %response.data.id, "flight order created");
                self.order = Some(response.data);
                self.selected = None;
                self.error = None;
                self.state = FlowState::Booked {
                    confirmation_visible: true,
                };
            }
            Err(err) => {
                error!("flight order creation failed: {err}");
                self.error = Some(BOOKING_FAILED_MESSAGE.to_string());
                self.selected = None;
                self.state = FlowState::BookingFailed;
            }
        }
        Ok(())
    }

    /// Hide the confirmation display; nothing else changes. Idempotent.
    pub fn close_confirmation(&mut self) {
        if let FlowState::Booked {
            confirmation_visible,
        } = &mut self.state
        {
            *confirmation_visible = false;
        }
    }

    #[cfg(test)]
    fn force_state(&mut self, state: FlowState) {
        self.state = state;
    }
}

async fn search(
    api: &dyn TravelApi,
    criteria: &SearchCriteria,
) -> Result<Vec<FlightOffer>, SupplierError> {
    let access_token = api.fetch_access_token().await?;
    api.fetch_flight_offers(&access_token, criteria).await
}

async fn book(
    api: &dyn TravelApi,
    request: &FlightOrderRequest,
) -> Result<FlightOrderResponse, SupplierError> {
    let access_token = api.fetch_access_token().await?;
    api.create_flight_order(&access_token, request).await
}
