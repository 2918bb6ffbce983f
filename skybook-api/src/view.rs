use serde::Serialize;

use skybook_core::criteria::SearchCriteria;
use skybook_core::models::{FlightOffer, FlightOrder};
use skybook_core::session::{BookingSession, FlowState};

// ============================================================================
// Render model
// ============================================================================

/// Snapshot the form page renders from. Every handler returns one so the
/// page never has to stitch state together from multiple calls.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub state: &'static str,
    pub loading: bool,
    pub error: Option<String>,
    pub criteria: SearchCriteria,
    pub offers: Vec<OfferRow>,
    pub selected: Option<OfferRow>,
    pub order: Option<OrderView>,
    pub show_selection_modal: bool,
    pub show_confirmation: bool,
}

/// One row of the offers table: first departure, last arrival, price.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRow {
    pub id: String,
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub price_total: String,
    pub price_currency: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: String,
    pub flight_id: Option<String>,
    pub price_total: Option<String>,
    pub price_currency: Option<String>,
}

impl OfferRow {
    fn of(offer: &FlightOffer) -> Self {
        Self {
            id: offer.id.clone(),
            departure: offer.departure_at().map(str::to_string),
            arrival: offer.arrival_at().map(str::to_string),
            price_total: offer.price.total.clone(),
            price_currency: offer.price.currency.clone(),
        }
    }
}

impl OrderView {
    fn of(order: &FlightOrder) -> Self {
        let booked = order.flight_offers.first();
        Self {
            id: order.id.clone(),
            flight_id: booked.map(|offer| offer.id.clone()),
            price_total: booked.map(|offer| offer.price.total.clone()),
            price_currency: booked.map(|offer| offer.price.currency.clone()),
        }
    }
}

impl SessionView {
    pub fn of(session: &BookingSession) -> Self {
        let state = session.state();
        Self {
            state: state.as_str(),
            loading: state.is_in_flight(),
            error: session.error().map(str::to_string),
            criteria: session.criteria().clone(),
            offers: session.offers().iter().map(OfferRow::of).collect(),
            selected: session.selected_offer().map(OfferRow::of),
            order: session.order().map(OrderView::of),
            show_selection_modal: matches!(state, FlowState::Reviewing | FlowState::Booking),
            show_confirmation: matches!(
                state,
                FlowState::Booked {
                    confirmation_visible: true
                }
            ),
        }
    }
}
