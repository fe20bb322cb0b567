use tracing::{debug, info};

use crate::errors::PipelineError;
use crate::models::recommendation::{FluidLabel, Recommendation};
use crate::services::analysis;
use crate::services::geocoder::Geocoder;
use crate::services::irradiance::IrradianceSource;

/// Runs the whole recommendation for one free-text location.
///
/// Stages run strictly in sequence: geocode, fetch irradiance, convert, average, classify.
/// The first failing stage ends the request; nothing is retried.
pub async fn recommend(
    location: &str,
    geocoder: &dyn Geocoder,
    irradiance: &dyn IrradianceSource,
) -> Result<Recommendation, PipelineError> {
    let query = location.trim();
    if query.is_empty() {
        return Err(PipelineError::Validation);
    }

    let place = geocoder.geocode(query).await?;
    debug!(
        "Geocoded '{}' -> {} ({:.4}, {:.4})",
        query, place.display_name, place.latitude, place.longitude
    );

    let daily = irradiance.daily_irradiance(place.latitude, place.longitude).await?;
    if daily.is_empty() {
        return Err(PipelineError::EmptySeries);
    }
    debug!("Received {} daily irradiance values", daily.len());

    let series = analysis::to_power_series(&daily);

    #[cfg(feature = "verbose_log")]
    for (date, watts) in daily.days.keys().zip(&series) {
        debug!("{} {:.2} W/m²", date, watts);
    }

    let average = analysis::mean(&series)?;
    let fluid = FluidLabel::classify(average);
    info!("{} | avg {:.2} W/m² over {} days -> {:?}", place.display_name, average, series.len(), fluid);

    Ok(Recommendation {
        series,
        average,
        fluid,
        location: place.display_name,
    })
}
