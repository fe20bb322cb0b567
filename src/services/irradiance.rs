use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::error::Category;

use crate::config::IrradianceConfig;
use crate::errors::PipelineError;
use crate::models::providers::PowerResponse;
use crate::models::recommendation::IrradianceSeries;

const DATE_FORMAT: &str = "%Y%m%d";

/// Supplies the daily irradiance series (kWh/m²/day) for a point.
#[async_trait]
pub trait IrradianceSource: Send + Sync {
    async fn daily_irradiance(&self, latitude: f64, longitude: f64) -> Result<IrradianceSeries, PipelineError>;
}

/// NASA POWER daily point client
pub struct NasaPowerClient {
    client: Client,
    endpoint: String,
    parameter: String,
    community: String,
    start: String,
    end: String,
}

impl NasaPowerClient {
    /// Returns a new client
    ///
    /// # Arguments
    ///
    /// * 'config' - endpoint, variable and the fixed date window to query
    /// * 'timeout' - total budget for one request
    pub fn new(config: &IrradianceConfig, timeout: Duration) -> Result<Self, PipelineError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            parameter: config.parameter.clone(),
            community: config.community.clone(),
            start: config.start.format(DATE_FORMAT).to_string(),
            end: config.end.format(DATE_FORMAT).to_string(),
        })
    }
}

#[async_trait]
impl IrradianceSource for NasaPowerClient {
    async fn daily_irradiance(&self, latitude: f64, longitude: f64) -> Result<IrradianceSeries, PipelineError> {
        let longitude = longitude.to_string();
        let latitude = latitude.to_string();
        let resp = self.client.get(&self.endpoint)
            .query(&[
                ("parameters", self.parameter.as_str()),
                ("community", self.community.as_str()),
                ("longitude", longitude.as_str()),
                ("latitude", latitude.as_str()),
                ("start", self.start.as_str()),
                ("end", self.end.as_str()),
                ("format", "JSON"),
            ])
            .send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PipelineError::Upstream(format!("irradiance provider responded with {}", status)));
        }

        let body = resp.text().await?;
        parse_daily_series(&body, &self.parameter)
    }
}

/// Extracts `properties.parameter.<parameter>` from a POWER response.
///
/// A body that is not JSON at all is an upstream fault; JSON of the wrong shape is a data format fault.
pub fn parse_daily_series(body: &str, parameter: &str) -> Result<IrradianceSeries, PipelineError> {
    let path = format!("properties.parameter.{}", parameter);

    let mut response: PowerResponse = serde_json::from_str(body).map_err(|e| match e.classify() {
        Category::Data => PipelineError::DataFormat(format!("{} ({})", path, e)),
        _ => PipelineError::Upstream(format!("malformed irradiance response: {}", e)),
    })?;

    let days = response.properties.parameter
        .swap_remove(parameter)
        .flatten()
        .ok_or_else(|| PipelineError::DataFormat(format!("missing {}", path)))?;

    Ok(IrradianceSeries { days })
}
