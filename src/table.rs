//! The Zambretti lookup table
//!
//! The published forecaster maps sea-level pressure to a forecast code with
//! one linear bracket scale per trend: codes 1-9 for falling pressure,
//! 10-19 for steady, 20-32 for rising. The scales and the seasonal one-step
//! corrections are a compatibility contract; changing any constant here
//! changes forecasts.

use crate::season::SeasonVariant;
use crate::trend::TrendCategory;
use tracing::trace;

/// Lowest valid forecast code
pub(crate) const MIN_CODE: u8 = 1;

/// Highest valid forecast code
pub(crate) const MAX_CODE: u8 = 32;

/// One bracket scale of the published table
///
/// `code = floor(intercept - slope * sea_level_pressure)`, clamped into
/// `min_code..=max_code`. The clamping is what turns out-of-table pressures
/// into edge forecasts instead of errors.
#[derive(Debug)]
pub(crate) struct Band {
    intercept: f64,
    slope: f64,
    min_code: u8,
    max_code: u8,
}

static FALLING: Band = Band {
    intercept: 127.0,
    slope: 0.12,
    min_code: MIN_CODE,
    max_code: 9,
};

static STEADY: Band = Band {
    intercept: 144.0,
    slope: 0.13,
    min_code: 10,
    max_code: 19,
};

static RISING: Band = Band {
    intercept: 185.0,
    slope: 0.16,
    min_code: 20,
    max_code: MAX_CODE,
};

impl Band {
    fn code_for(&self, sea_level_pressure_hpa: f64) -> u8 {
        let raw = (self.intercept - self.slope * sea_level_pressure_hpa).floor();
        self.clamp(raw as i32)
    }

    /// Clamp a candidate code back into this band
    pub(crate) fn clamp(&self, code: i32) -> u8 {
        let clamped = code.clamp(i32::from(self.min_code), i32::from(self.max_code));
        if clamped != code {
            trace!(code, clamped, "forecast code clamped into table band");
        }
        clamped as u8
    }
}

/// Bracket scale for a trend category
pub(crate) fn band(trend: TrendCategory) -> &'static Band {
    match trend {
        TrendCategory::Falling => &FALLING,
        TrendCategory::Steady => &STEADY,
        TrendCategory::Rising => &RISING,
    }
}

/// Seasonal one-step correction from the published forecaster
///
/// Falling pressure in summer reads one step more unsettled, rising
/// pressure in winter one step more settled. Steady is never corrected.
fn seasonal_shift(trend: TrendCategory, variant: SeasonVariant) -> i8 {
    match trend {
        TrendCategory::Falling if variant.is_summer() => 1,
        TrendCategory::Rising if !variant.is_summer() => -1,
        _ => 0,
    }
}

/// Look up the forecast code for a trend, sea-level pressure and season
///
/// Always yields a code within the trend's band; pressures beyond the
/// table edges clamp to the nearest bracket.
pub(crate) fn lookup(
    trend: TrendCategory,
    sea_level_pressure_hpa: f64,
    variant: SeasonVariant,
) -> u8 {
    let band = band(trend);
    let code = band.code_for(sea_level_pressure_hpa);
    band.clamp(i32::from(code) + i32::from(seasonal_shift(trend, variant)))
}
