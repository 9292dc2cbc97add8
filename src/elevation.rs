//! Station to sea-level pressure correction
//!
//! The Zambretti tables are calibrated against sea-level pressure. Station
//! pressure is corrected with the temperature-compensated barometric
//! formula used by the original forecaster.

use crate::error::ZambrettiError;
use crate::Result;

/// Standard atmospheric lapse rate, in K per metre
const LAPSE_RATE_K_PER_M: f64 = 0.0065;

/// Exponent of the barometric correction
const BAROMETRIC_EXPONENT: f64 = -5.257;

/// Celsius to Kelvin offset
const KELVIN_OFFSET: f64 = 273.15;

/// Convert station pressure to its sea-level equivalent
///
/// `p * (1 - Lh / (T + Lh + 273.15))^-5.257` with `L` the lapse rate,
/// `h` the elevation in metres and `T` the ambient temperature in °C.
/// An elevation of zero returns the pressure unchanged. Negative
/// elevations are rejected rather than extrapolated below sea level.
pub fn sea_level_pressure(pressure_hpa: f64, elevation_m: f64, temperature_c: f64) -> Result<f64> {
    if !pressure_hpa.is_finite() || pressure_hpa <= 0.0 {
        return Err(ZambrettiError::out_of_range(format!(
            "pressure must be a positive finite value in hPa, got {pressure_hpa}"
        )));
    }
    if !elevation_m.is_finite() || elevation_m < 0.0 {
        return Err(ZambrettiError::out_of_range(format!(
            "elevation must be zero or positive metres, got {elevation_m}"
        )));
    }
    if !temperature_c.is_finite() || temperature_c <= -KELVIN_OFFSET {
        return Err(ZambrettiError::out_of_range(format!(
            "temperature must be a finite value above absolute zero, got {temperature_c} °C"
        )));
    }

    let column = LAPSE_RATE_K_PER_M * elevation_m;
    let factor = (1.0 - column / (temperature_c + column + KELVIN_OFFSET)).powf(BAROMETRIC_EXPONENT);
    Ok(pressure_hpa * factor)
}
