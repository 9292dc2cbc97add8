//! Forecast engine
//!
//! Wires the computation stages into a single pure `forecast` call:
//! series validation, sea-level correction, trend extraction and
//! classification, season selection, table lookup, wind nudge, text.

use crate::elevation::sea_level_pressure;
use crate::models::{PressureSeries, WindDirection};
use crate::season::{Hemisphere, SeasonVariant};
use crate::trend::TrendCategory;
use crate::{table, text, Result};
use tracing::debug;

/// Compute a Zambretti forecast, assuming a Northern-hemisphere station
///
/// * `pressure_hpa` - current station pressure
/// * `elevation_m` - station elevation above sea level
/// * `temperature_c` - current ambient temperature
/// * `pressure_data` - recent pressure history, at least six readings
///   within the last three hours of its newest reading
/// * `wind_direction` - optional surface wind; nudges the forecast one
///   step at most
pub fn forecast(
    pressure_hpa: f64,
    elevation_m: f64,
    temperature_c: f64,
    pressure_data: &PressureSeries,
    wind_direction: Option<WindDirection>,
) -> Result<String> {
    forecast_in_hemisphere(
        pressure_hpa,
        elevation_m,
        temperature_c,
        pressure_data,
        wind_direction,
        Hemisphere::default(),
    )
}

/// Compute a Zambretti forecast for a station in an explicit hemisphere
pub fn forecast_in_hemisphere(
    pressure_hpa: f64,
    elevation_m: f64,
    temperature_c: f64,
    pressure_data: &PressureSeries,
    wind_direction: Option<WindDirection>,
    hemisphere: Hemisphere,
) -> Result<String> {
    pressure_data.validate()?;

    let corrected = sea_level_pressure(pressure_hpa, elevation_m, temperature_c)?;
    debug!(
        station_hpa = pressure_hpa,
        sea_level_hpa = corrected,
        "normalized station pressure"
    );

    let rate = pressure_data.trend_hpa_per_hour()?;
    let trend = TrendCategory::classify(rate);
    debug!(rate_hpa_per_hour = rate, %trend, "classified pressure trend");

    let variant = SeasonVariant::select(temperature_c, hemisphere);
    let code = table::lookup(trend, corrected, variant);

    let code = match wind_direction {
        Some(direction) => {
            table::band(trend).clamp(i32::from(code) + i32::from(direction.code_offset(hemisphere)))
        }
        None => code,
    };
    debug!(code, "resolved forecast code");

    Ok(text::describe(code)?.to_string())
}
