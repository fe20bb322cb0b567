use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::GeocoderConfig;
use crate::errors::PipelineError;
use crate::models::providers::NominatimPlace;
use crate::models::recommendation::GeocodedLocation;

/// Resolves a place name to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<GeocodedLocation, PipelineError>;
}

/// Nominatim search client
pub struct NominatimClient {
    client: Client,
    endpoint: String,
}

impl NominatimClient {
    /// Returns a new client
    ///
    /// # Arguments
    ///
    /// * 'config' - endpoint and user agent
    /// * 'timeout' - total budget for one lookup
    pub fn new(config: &GeocoderConfig, timeout: Duration) -> Result<Self, PipelineError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, endpoint: config.endpoint.clone() })
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn geocode(&self, query: &str) -> Result<GeocodedLocation, PipelineError> {
        let resp = self.client.get(&self.endpoint)
            .query(&[("format", "json"), ("q", query)])
            .send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PipelineError::Upstream(format!("geocoder responded with {}", status)));
        }

        let body = resp.text().await?;
        parse_places(&body)
    }
}

/// Picks the first place of a Nominatim result list. There is no ranking: the head wins.
pub fn parse_places(body: &str) -> Result<GeocodedLocation, PipelineError> {
    let places: Option<Vec<NominatimPlace>> = serde_json::from_str(body)
        .map_err(|e| PipelineError::Upstream(format!("malformed geocoder response: {}", e)))?;

    let first = places
        .and_then(|p| p.into_iter().next())
        .ok_or(PipelineError::LocationNotFound)?;

    let latitude = first.lat.to_f64()
        .ok_or_else(|| PipelineError::Upstream("geocoder returned a non-numeric latitude".to_string()))?;
    let longitude = first.lon.to_f64()
        .ok_or_else(|| PipelineError::Upstream("geocoder returned a non-numeric longitude".to_string()))?;

    Ok(GeocodedLocation { latitude, longitude, display_name: first.display_name })
}
