//! Wind direction model
//!
//! A closed 16-point compass rose. Wind direction only nudges a finished
//! Zambretti code by one step at most, it never drives the forecast.

use crate::season::Hemisphere;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 16-point compass direction the wind is blowing from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WindDirection {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl WindDirection {
    /// Convert a bearing in degrees (0/360 is north) to the nearest point
    #[must_use]
    pub fn from_degrees(degrees: u16) -> Self {
        match degrees % 360 {
            0..=11 | 349..=359 => WindDirection::N,
            12..=33 => WindDirection::Nne,
            34..=56 => WindDirection::Ne,
            57..=78 => WindDirection::Ene,
            79..=101 => WindDirection::E,
            102..=123 => WindDirection::Ese,
            124..=146 => WindDirection::Se,
            147..=168 => WindDirection::Sse,
            169..=191 => WindDirection::S,
            192..=213 => WindDirection::Ssw,
            214..=236 => WindDirection::Sw,
            237..=258 => WindDirection::Wsw,
            259..=281 => WindDirection::W,
            282..=303 => WindDirection::Wnw,
            304..=326 => WindDirection::Nw,
            _ => WindDirection::Nnw,
        }
    }

    /// True for the five points centred on north (NW through NE)
    #[must_use]
    pub fn is_northerly(self) -> bool {
        matches!(
            self,
            WindDirection::Nw
                | WindDirection::Nnw
                | WindDirection::N
                | WindDirection::Nne
                | WindDirection::Ne
        )
    }

    /// True for the five points centred on south (SE through SW)
    #[must_use]
    pub fn is_southerly(self) -> bool {
        matches!(
            self,
            WindDirection::Se
                | WindDirection::Sse
                | WindDirection::S
                | WindDirection::Ssw
                | WindDirection::Sw
        )
    }

    /// Signed one-step forecast code offset for this wind
    ///
    /// Polar winds lean the forecast one step toward settled (-1),
    /// equatorial winds one step toward unsettled (+1), easterly and
    /// westerly winds are neutral. Which half is polar depends on the
    /// hemisphere.
    #[must_use]
    pub fn code_offset(self, hemisphere: Hemisphere) -> i8 {
        let toward_unsettled = match hemisphere {
            Hemisphere::Northern => self.is_southerly(),
            Hemisphere::Southern => self.is_northerly(),
        };
        let toward_settled = match hemisphere {
            Hemisphere::Northern => self.is_northerly(),
            Hemisphere::Southern => self.is_southerly(),
        };

        if toward_unsettled {
            1
        } else if toward_settled {
            -1
        } else {
            0
        }
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WindDirection::N => "N",
            WindDirection::Nne => "NNE",
            WindDirection::Ne => "NE",
            WindDirection::Ene => "ENE",
            WindDirection::E => "E",
            WindDirection::Ese => "ESE",
            WindDirection::Se => "SE",
            WindDirection::Sse => "SSE",
            WindDirection::S => "S",
            WindDirection::Ssw => "SSW",
            WindDirection::Sw => "SW",
            WindDirection::Wsw => "WSW",
            WindDirection::W => "W",
            WindDirection::Wnw => "WNW",
            WindDirection::Nw => "NW",
            WindDirection::Nnw => "NNW",
        };
        write!(f, "{name}")
    }
}

/// All 16 points, clockwise from north
pub const COMPASS_ROSE: [WindDirection; 16] = [
    WindDirection::N,
    WindDirection::Nne,
    WindDirection::Ne,
    WindDirection::Ene,
    WindDirection::E,
    WindDirection::Ese,
    WindDirection::Se,
    WindDirection::Sse,
    WindDirection::S,
    WindDirection::Ssw,
    WindDirection::Sw,
    WindDirection::Wsw,
    WindDirection::W,
    WindDirection::Wnw,
    WindDirection::Nw,
    WindDirection::Nnw,
];
