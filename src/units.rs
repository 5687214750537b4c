//! Length display helpers.
//!
//! Calculations stay in meters throughout; these helpers only turn a finished meter value into
//! a display string.

use std::fmt;
use std::str::FromStr;

use crate::constants::INCHES_PER_METER;
use crate::errors::DesignError;
use crate::math::Scalar;

/// Display unit system for lengths.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnits {
    /// Millimeters, centimeters or meters depending on magnitude.
    #[default]
    Metric,
    /// Inches, or feet and inches from one foot upward.
    Imperial,
}

impl FromStr for LengthUnits {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "si" => Ok(Self::Metric),
            "imperial" | "us" => Ok(Self::Imperial),
            other => Err(DesignError::invalid(
                "units",
                format!("unknown unit system `{other}` (expected metric or imperial)"),
            )),
        }
    }
}

impl fmt::Display for LengthUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        })
    }
}

/// Formats a length given in meters.
///
/// Metric: below 1 cm as `x.x mm`, below 1 m as `x.x cm`, else `x.xxx m`.
/// Imperial: below one foot as `x.xx"`, else `F' x.xx"`.
#[must_use]
pub fn format_length(meters: Scalar, units: LengthUnits) -> String {
    match units {
        LengthUnits::Metric => {
            if meters < 0.01 {
                format!("{:.1} mm", meters * 1000.0)
            } else if meters < 1.0 {
                format!("{:.1} cm", meters * 100.0)
            } else {
                format!("{meters:.3} m")
            }
        }
        LengthUnits::Imperial => {
            let inches = meters * INCHES_PER_METER;
            if inches < 12.0 {
                format!("{inches:.2}\"")
            } else {
                let feet = (inches / 12.0).floor();
                let remainder = inches % 12.0;
                format!("{feet:.0}' {remainder:.2}\"")
            }
        }
    }
}
