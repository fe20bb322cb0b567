use std::sync::Arc;

use crate::config::Config;
use crate::errors::PipelineError;
use crate::services::geocoder::{Geocoder, NominatimClient};
use crate::services::irradiance::{IrradianceSource, NasaPowerClient};

/// Per-process handles shared by every request. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub geocoder: Arc<dyn Geocoder>,
    pub irradiance: Arc<dyn IrradianceSource>,
}

impl AppState {
    pub fn new(geocoder: Arc<dyn Geocoder>, irradiance: Arc<dyn IrradianceSource>) -> Self {
        Self { geocoder, irradiance }
    }

    /// Builds the live provider clients, both bound by the configured request timeout.
    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        let timeout = config.request_timeout();
        let geocoder = NominatimClient::new(&config.geocoder, timeout)?;
        let irradiance = NasaPowerClient::new(&config.irradiance, timeout)?;
        Ok(Self::new(Arc::new(geocoder), Arc::new(irradiance)))
    }
}
