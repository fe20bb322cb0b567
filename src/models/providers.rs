//! Wire shapes of the two upstream providers.

use indexmap::IndexMap;
use serde::Deserialize;

/// Nominatim sends coordinates as strings; other geocoders send numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Coordinate::Number(v) => Some(*v),
            Coordinate::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One entry of a Nominatim `format=json` search result.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: Coordinate,
    pub lon: Coordinate,
    pub display_name: String,
}

/// NASA POWER daily point response. Only the part the service reads is modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct PowerResponse {
    pub properties: PowerProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerProperties {
    /// Variable name → (`YYYYMMDD` → daily value), in document order.
    pub parameter: IndexMap<String, Option<IndexMap<String, f64>>>,
}
