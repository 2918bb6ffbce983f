//! reqwest-backed client for the three upstream exchanges: credential
//! grant, flight-offer search, and flight-order creation.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use skybook_core::criteria::SearchCriteria;
use skybook_core::models::{FlightOffer, FlightOrderRequest, FlightOrderResponse};
use skybook_core::supplier::{SupplierError, TravelApi};

use crate::app_config::AmadeusConfig;
use crate::error::ClientError;

const ORDER_CONTENT_TYPE: &str = "application/vnd.amadeus+json";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct FlightOffersResponse {
    #[serde(default)]
    data: Vec<FlightOffer>,
}

/// Stateless wrapper around the upstream endpoints. Holds only the
/// endpoint configuration and a shared connection pool; no token is cached
/// between calls.
#[derive(Debug, Clone)]
pub struct AmadeusClient {
    http: reqwest::Client,
    config: AmadeusConfig,
}

impl AmadeusClient {
    pub fn new(config: AmadeusConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Exchange client credentials for a bearer token.
    pub async fn fetch_access_token(&self) -> Result<String, ClientError> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&self.config.auth_url)
            .form(&params)
            .send()
            .await
            .map_err(|err| ClientError::Authentication(format!("token request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Authentication(format!(
                "token endpoint returned {status}"
            )));
        }

        let token: TokenResponse = response.json().await.map_err(|err| {
            ClientError::Authentication(format!("token response unreadable: {err}"))
        })?;

        debug!("access token issued");
        Ok(token.access_token)
    }

    /// Search flight offers. The response's `data` array is passed through
    /// untransformed.
    pub async fn fetch_flight_offers(
        &self,
        access_token: &str,
        criteria: &SearchCriteria,
    ) -> Result<Vec<FlightOffer>, ClientError> {
        let response = self
            .http
            .get(&self.config.flight_offers_url)
            .bearer_auth(access_token)
            .query(&offer_query(criteria, &self.config.currency_code))
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let body: FlightOffersResponse = response.json().await?;
        debug!(count = body.data.len(), "flight offers fetched");
        Ok(body.data)
    }

    /// Submit the order document for a selected offer.
    pub async fn create_flight_order(
        &self,
        access_token: &str,
        order: &FlightOrderRequest,
    ) -> Result<FlightOrderResponse, ClientError> {
        let response = self
            .http
            .post(&self.config.create_order_url)
            .bearer_auth(access_token)
            .header(reqwest::header::CONTENT_TYPE, ORDER_CONTENT_TYPE)
            .json(order)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let body: FlightOrderResponse = response.json().await?;
        debug!(order_id = %body.data.id, "flight order created");
        Ok(body)
    }
}

#[async_trait]
impl TravelApi for AmadeusClient {
    async fn fetch_access_token(&self) -> Result<String, SupplierError> {
        Ok(AmadeusClient::fetch_access_token(self).await?)
    }

    async fn fetch_flight_offers(
        &self,
        access_token: &str,
        criteria: &SearchCriteria,
    ) -> Result<Vec<FlightOffer>, SupplierError> {
        Ok(AmadeusClient::fetch_flight_offers(self, access_token, criteria).await?)
    }

    async fn create_flight_order(
        &self,
        access_token: &str,
        order: &FlightOrderRequest,
    ) -> Result<FlightOrderResponse, SupplierError> {
        Ok(AmadeusClient::create_flight_order(self, access_token, order).await?)
    }
}

/// Convert non-2xx responses into `UnexpectedStatus`, keeping the upstream
/// body verbatim.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::UnexpectedStatus {
        status: status.as_u16(),
        body,
    })
}

fn offer_query(criteria: &SearchCriteria, currency_code: &str) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("originLocationCode", criteria.origin.clone()),
        ("destinationLocationCode", criteria.destination.clone()),
    ];
    if let Some(date) = criteria.departure_date {
        query.push(("departureDate", date.to_string()));
    }
    if let Some(date) = criteria.return_date {
        query.push(("returnDate", date.to_string()));
    }
    query.push(("adults", criteria.adults.to_string()));
    query.push(("currencyCode", currency_code.to_string()));
    query
}
