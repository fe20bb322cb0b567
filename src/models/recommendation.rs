use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ─── Pipeline values ─────────────────────────────────────────────────────────

/// First geocoder hit for a free-text query.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// Daily irradiance in kWh/m²/day keyed by `YYYYMMDD`, in the order the provider sent it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IrradianceSeries {
    pub days: IndexMap<String, f64>,
}

impl IrradianceSeries {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.days.values().copied()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for IrradianceSeries {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self { days: iter.into_iter().map(|(k, v)| (k.into(), v)).collect() }
    }
}

/// ORC working fluid, picked from the mean irradiance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FluidLabel {
    Isobutane,
    R134a,
    R245fa,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Daily mean power density, W/m²
    pub series: Vec<f64>,
    /// Mean of `series`, W/m²
    pub average: f64,
    pub fluid: FluidLabel,
    pub location: String,
}

// ─── HTTP envelope ───────────────────────────────────────────────────────────

#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DataQuery {
    /// Free-text place name, e.g. "Bengaluru"
    pub location: Option<String>,
}

impl DataQuery {
    /// Builds the query from raw key/value pairs. A repeated `location` keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let location = pairs.into_iter()
            .find(|(key, _)| key == "location")
            .map(|(_, value)| value);
        Self { location }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolarData {
    /// Daily values in W/m²
    pub solar_data: Vec<f64>,
    /// Average in W/m²
    pub average: f64,
    pub fluid: FluidLabel,
    /// Display name returned by the geocoder
    pub location: String,
}

impl From<Recommendation> for SolarData {
    fn from(r: Recommendation) -> Self {
        Self {
            solar_data: r.series,
            average: r.average,
            fluid: r.fluid,
            location: r.location,
        }
    }
}

/// Always sent with HTTP 200; `success` tells the caller which of `data` / `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SolarData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: SolarData) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()) }
    }
}
