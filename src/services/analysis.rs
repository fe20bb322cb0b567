/// ============================================================
///  Irradiance → power density → fluid band
///
///   1. Unit conversion – kWh/m²/day to mean W/m² over the day
///                        (1000 Wh per kWh spread over 24 h; a flat
///                        average, not an integral of the daily curve)
///   2. Arithmetic mean over the converted series
///   3. Fluid band        – two fixed thresholds on the mean
/// ============================================================

use crate::errors::PipelineError;
use crate::models::recommendation::{FluidLabel, IrradianceSeries};

const WH_PER_KWH: f64 = 1000.0;
const HOURS_PER_DAY: f64 = 24.0;

/// Mean above this selects R245fa (W/m²)
pub const R245FA_THRESHOLD: f64 = 600.0;
/// Mean above this selects R134a (W/m²)
pub const R134A_THRESHOLD: f64 = 400.0;

pub fn kwh_per_day_to_watts(kwh_m2_day: f64) -> f64 {
    kwh_m2_day * (WH_PER_KWH / HOURS_PER_DAY)
}

/// Converts every day of the series, keeping the provider's order.
pub fn to_power_series(series: &IrradianceSeries) -> Vec<f64> {
    series.values().map(kwh_per_day_to_watts).collect()
}

pub fn mean(values: &[f64]) -> Result<f64, PipelineError> {
    if values.is_empty() {
        return Err(PipelineError::EmptySeries);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

impl FluidLabel {
    /// Band edges belong to the lower band.
    pub fn classify(average_w_m2: f64) -> Self {
        if average_w_m2 > R245FA_THRESHOLD {
            FluidLabel::R245fa
        } else if average_w_m2 > R134A_THRESHOLD {
            FluidLabel::R134a
        } else {
            FluidLabel::Isobutane
        }
    }
}
