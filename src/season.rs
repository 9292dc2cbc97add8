//! Season and hemisphere selection
//!
//! The Zambretti tables were published with seasonal corrections. The
//! library does not guess the season from a calendar or latitude; the
//! ambient temperature supplied by the caller stands in for it, with a
//! fixed 10 °C threshold separating summer from winter conditions.

use serde::{Deserialize, Serialize};

/// Temperature at or above this is treated as summer conditions, in °C
pub const SUMMER_THRESHOLD_C: f64 = 10.0;

/// Hemisphere of the observing station
///
/// Controls which half of the compass counts as polar for the wind
/// correction. Defaults to [`Hemisphere::Northern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Hemisphere {
    #[default]
    Northern,
    Southern,
}

/// Seasonal table variant, derived from temperature and hemisphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonVariant {
    SummerNorthern,
    WinterNorthern,
    SummerSouthern,
    WinterSouthern,
}

impl SeasonVariant {
    /// Pick the table variant for an ambient temperature and hemisphere
    ///
    /// Exactly `SUMMER_THRESHOLD_C` counts as summer.
    #[must_use]
    pub fn select(temperature_c: f64, hemisphere: Hemisphere) -> Self {
        let summer = temperature_c >= SUMMER_THRESHOLD_C;
        match (summer, hemisphere) {
            (true, Hemisphere::Northern) => SeasonVariant::SummerNorthern,
            (false, Hemisphere::Northern) => SeasonVariant::WinterNorthern,
            (true, Hemisphere::Southern) => SeasonVariant::SummerSouthern,
            (false, Hemisphere::Southern) => SeasonVariant::WinterSouthern,
        }
    }

    /// True for the summer variants
    #[must_use]
    pub fn is_summer(self) -> bool {
        matches!(
            self,
            SeasonVariant::SummerNorthern | SeasonVariant::SummerSouthern
        )
    }

    /// Hemisphere this variant belongs to
    #[must_use]
    pub fn hemisphere(self) -> Hemisphere {
        match self {
            SeasonVariant::SummerNorthern | SeasonVariant::WinterNorthern => Hemisphere::Northern,
            SeasonVariant::SummerSouthern | SeasonVariant::WinterSouthern => Hemisphere::Southern,
        }
    }
}
