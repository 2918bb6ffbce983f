use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Search form contents as the user typed them.
///
/// Codes are stored verbatim; the IATA check only runs on submit. Dates are
/// optional because the form starts empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    #[serde(default = "default_adults")]
    pub adults: u32,
}

fn default_adults() -> u32 {
    1
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            departure_date: None,
            return_date: None,
            adults: 1,
        }
    }
}

impl SearchCriteria {
    /// Merge a single form field. Field names follow the form's wire names.
    pub fn update_field(&mut self, name: &str, value: &str) -> CoreResult<()> {
        match name {
            "origin" => self.origin = value.to_string(),
            "destination" => self.destination = value.to_string(),
            "departureDate" => self.departure_date = parse_date(name, value)?,
            "returnDate" => self.return_date = parse_date(name, value)?,
            "adults" => {
                self.adults = value.parse().map_err(|_| {
                    CoreError::ValidationError(format!(
                        "adults must be a positive integer, got {value:?}"
                    ))
                })?;
            }
            other => {
                return Err(CoreError::ValidationError(format!(
                    "unknown search field {other:?}"
                )))
            }
        }
        Ok(())
    }

    /// Origin and destination must both be IATA location codes.
    pub fn validate_route(&self) -> CoreResult<()> {
        if !is_iata_code(&self.origin) || !is_iata_code(&self.destination) {
            return Err(CoreError::ValidationError(
                "origin and destination must be 3-letter uppercase IATA codes".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_date(name: &str, value: &str) -> CoreResult<Option<NaiveDate>> {
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| {
        CoreError::ValidationError(format!("{name} must be a YYYY-MM-DD date, got {value:?}"))
    })
}

/// Exactly three ASCII uppercase letters.
pub fn is_iata_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}
