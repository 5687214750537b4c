//! Popular VHF/UHF amateur bands.

use std::fmt;
use std::str::FromStr;

use crate::errors::DesignError;
use crate::math::Scalar;

/// Amateur band with an inclusive frequency range in MHz.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// 6 m, 50-54 MHz.
    SixMeters,
    /// 2 m, 144-148 MHz.
    TwoMeters,
    /// 70 cm, 420-450 MHz.
    SeventyCentimeters,
    /// 23 cm, 1240-1300 MHz.
    TwentyThreeCentimeters,
    /// 13 cm, 2300-2450 MHz.
    ThirteenCentimeters,
}

impl Band {
    /// All bands, lowest first.
    pub const ALL: [Self; 5] = [
        Self::SixMeters,
        Self::TwoMeters,
        Self::SeventyCentimeters,
        Self::TwentyThreeCentimeters,
        Self::ThirteenCentimeters,
    ];

    /// Conventional band name (e.g. `2m`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SixMeters => "6m",
            Self::TwoMeters => "2m",
            Self::SeventyCentimeters => "70cm",
            Self::TwentyThreeCentimeters => "23cm",
            Self::ThirteenCentimeters => "13cm",
        }
    }

    /// Inclusive `(low, high)` edges in MHz.
    #[must_use]
    pub const fn range_mhz(self) -> (Scalar, Scalar) {
        match self {
            Self::SixMeters => (50.0, 54.0),
            Self::TwoMeters => (144.0, 148.0),
            Self::SeventyCentimeters => (420.0, 450.0),
            Self::TwentyThreeCentimeters => (1240.0, 1300.0),
            Self::ThirteenCentimeters => (2300.0, 2450.0),
        }
    }

    /// Arithmetic centre of the band in MHz.
    #[must_use]
    pub fn center_mhz(self) -> Scalar {
        let (low, high) = self.range_mhz();
        (low + high) / 2.0
    }

    /// True when `mhz` lies within the band edges.
    #[must_use]
    pub fn contains(self, mhz: Scalar) -> bool {
        let (low, high) = self.range_mhz();
        (low..=high).contains(&mhz)
    }

    /// Band containing `mhz`, if any.
    #[must_use]
    pub fn containing(mhz: Scalar) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.contains(mhz))
    }
}

impl FromStr for Band {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|band| band.name() == needle)
            .ok_or_else(|| {
                DesignError::invalid(
                    "band",
                    format!("unknown band `{}` (expected 6m, 2m, 70cm, 23cm or 13cm)", s.trim()),
                )
            })
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (low, high) = self.range_mhz();
        write!(f, "{} ({low}-{high} MHz)", self.name())
    }
}
