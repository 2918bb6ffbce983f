use serde::{Deserialize, Serialize};

// Traveler and payment records the order endpoint expects alongside the
// offer. The placeholder block carries the fixed values the form submits
// until real traveler capture exists.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Traveler {
    pub id: String,
    pub date_of_birth: String,
    pub name: TravelerName,
    pub contact: TravelerContact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerName {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerContact {
    pub email_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub method: String,
    pub card_number: String,
    pub expiry_date: String,
    pub card_holder: String,
}

impl Traveler {
    pub fn placeholder() -> Self {
        Self {
            id: "1".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            name: TravelerName {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
            },
            contact: TravelerContact {
                email_address: "john.doe@example.com".to_string(),
            },
        }
    }
}

impl PaymentRecord {
    pub fn placeholder() -> Self {
        Self {
            method: "creditCard".to_string(),
            card_number: "4111111111111111".to_string(),
            expiry_date: "12/24".to_string(),
            card_holder: "John Doe".to_string(),
        }
    }
}
