use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::traveler::{PaymentRecord, Traveler};

// Wire models for the upstream flight-offers and flight-orders documents.
// Only the fields the form renders are typed; everything else rides in the
// flattened maps so an offer re-serializes exactly as it was received and
// can be embedded into an order payload untouched.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOffer {
    pub id: String,
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
    pub price: OfferPrice,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FlightOffer {
    /// Departure timestamp of the first segment of the first itinerary.
    pub fn departure_at(&self) -> Option<&str> {
        self.itineraries
            .first()?
            .segments
            .first()
            .map(|segment| segment.departure.at.as_str())
    }

    /// Arrival timestamp of the last segment of the first itinerary.
    pub fn arrival_at(&self) -> Option<&str> {
        self.itineraries
            .first()?
            .segments
            .last()
            .map(|segment| segment.arrival.at.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    #[serde(default)]
    pub segments: Vec<FlightSegment>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSegment {
    pub departure: SegmentPoint,
    pub arrival: SegmentPoint,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentPoint {
    pub at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferPrice {
    pub total: String,
    pub currency: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Order document posted to the flight-orders endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOrderRequest {
    pub data: FlightOrderData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOrderData {
    #[serde(rename = "type")]
    pub order_type: String,
    pub flight_offers: Vec<FlightOffer>,
    pub travelers: Vec<Traveler>,
    pub payments: Vec<PaymentRecord>,
}

impl FlightOrderRequest {
    /// Order document for a single selected offer.
    pub fn for_offer(
        offer: FlightOffer,
        travelers: Vec<Traveler>,
        payments: Vec<PaymentRecord>,
    ) -> Self {
        Self {
            data: FlightOrderData {
                order_type: "flight-orders".to_string(),
                flight_offers: vec![offer],
                travelers,
                payments,
            },
        }
    }
}

/// Full response body of a successful order creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOrderResponse {
    pub data: FlightOrder,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The created order: its identifier plus the echoed offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOrder {
    pub id: String,
    #[serde(default)]
    pub flight_offers: Vec<FlightOffer>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offer_json() -> Value {
        json!({
            "id": "OFF-1",
            "source": "GDS",
            "oneWay": false,
            "numberOfBookableSeats": 4,
            "itineraries": [{
                "duration": "PT1H35M",
                "segments": [
                    {
                        "departure": { "iataCode": "SYD", "at": "2024-12-01T08:00:00" },
                        "arrival": { "iataCode": "MEL", "at": "2024-12-01T09:35:00" },
                        "carrierCode": "QF",
                        "number": "437"
                    }
                ]
            }],
            "price": { "total": "189.40", "currency": "AUD", "grandTotal": "189.40" },
            "validatingAirlineCodes": ["QF"]
        })
    }

    #[test]
    fn offer_exposes_first_departure_and_last_arrival() {
        let offer: FlightOffer = serde_json::from_value(offer_json()).unwrap();
        assert_eq!(offer.departure_at(), Some("2024-12-01T08:00:00"));
        assert_eq!(offer.arrival_at(), Some("2024-12-01T09:35:00"));
        assert_eq!(offer.price.total, "189.40");
        assert_eq!(offer.price.currency, "AUD");
    }

    #[test]
    fn offer_without_itineraries_renders_no_times() {
        let offer: FlightOffer = serde_json::from_value(json!({
            "id": "OFF-2",
            "price": { "total": "10.00", "currency": "AUD" }
        }))
        .unwrap();
        assert_eq!(offer.departure_at(), None);
        assert_eq!(offer.arrival_at(), None);
    }

    #[test]
    fn order_payload_embeds_the_offer_untouched() {
        let original = offer_json();
        let offer: FlightOffer = serde_json::from_value(original.clone()).unwrap();
        let request = FlightOrderRequest::for_offer(
            offer,
            vec![Traveler::placeholder()],
            vec![PaymentRecord::placeholder()],
        );

        let payload = serde_json::to_value(&request).unwrap();
        assert_eq!(payload["data"]["type"], "flight-orders");
        // Unknown upstream fields must survive the round trip.
        assert_eq!(payload["data"]["flightOffers"][0], original);
        assert_eq!(
            payload["data"]["travelers"][0]["name"]["firstName"],
            "John"
        );
        assert_eq!(payload["data"]["payments"][0]["method"], "creditCard");
    }

    #[test]
    fn order_response_carries_id_and_echoed_offer() {
        let response: FlightOrderResponse = serde_json::from_value(json!({
            "data": {
                "id": "eJzTd9f3s4gMijQGAAtXAmE%3D",
                "type": "flight-order",
                "flightOffers": [offer_json()],
                "associatedRecords": [{ "reference": "QVHLBS" }]
            }
        }))
        .unwrap();
        assert_eq!(response.data.id, "eJzTd9f3s4gMijQGAAtXAmE%3D");
        assert_eq!(response.data.flight_offers.len(), 1);
        assert_eq!(response.data.flight_offers[0].id, "OFF-1");
        assert!(response.data.extra.contains_key("associatedRecords"));
    }
}
