use chrono::{DateTime, Utc};
use lookupable::Record;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference-data entity used across the lookup tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Record for Country {}

/// Entity with non-string fields, for matching on serialized values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub id: Uuid,
    pub currency: String,
    pub rate: f64,
    pub as_of: DateTime<Utc>,
}

impl Record for CurrencyRate {}

pub fn country(code: &str, name: &str) -> Country {
    Country {
        code: code.to_string(),
        name: name.to_string(),
    }
}

/// The fixture set from the reference scenario: US, FR, DE in query order.
pub fn countries() -> Vec<Country> {
    vec![
        country("US", "United States"),
        country("FR", "France"),
        country("DE", "Germany"),
    ]
}

pub fn currency_rate(currency: &str, rate: f64) -> CurrencyRate {
    CurrencyRate {
        id: Uuid::new_v4(),
        currency: currency.to_string(),
        rate,
        as_of: Utc::now(),
    }
}
