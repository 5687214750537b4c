//! Element wire and boom material lookup tables.
//!
//! Both tables are closed: a gauge or material outside them is rejected with
//! [`DesignError::InvalidInput`] instead of falling back to a default.

use std::fmt;
use std::str::FromStr;

use crate::constants::MM_PER_METER;
use crate::errors::DesignError;
use crate::math::Scalar;

/// American Wire Gauge sizes supported for element wire.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireGauge {
    /// 12 AWG, 2.053 mm.
    Awg12,
    /// 14 AWG, 1.628 mm.
    Awg14,
    /// 16 AWG, 1.291 mm.
    Awg16,
    /// 18 AWG, 1.024 mm.
    Awg18,
    /// 20 AWG, 0.812 mm.
    Awg20,
}

impl WireGauge {
    /// Every supported gauge, thickest first.
    pub const ALL: [Self; 5] = [
        Self::Awg12,
        Self::Awg14,
        Self::Awg16,
        Self::Awg18,
        Self::Awg20,
    ];

    /// Gauge number (e.g. `14`).
    #[must_use]
    pub const fn awg(self) -> u32 {
        match self {
            Self::Awg12 => 12,
            Self::Awg14 => 14,
            Self::Awg16 => 16,
            Self::Awg18 => 18,
            Self::Awg20 => 20,
        }
    }

    /// Conductor diameter in millimeters.
    #[must_use]
    pub const fn diameter_mm(self) -> Scalar {
        match self {
            Self::Awg12 => 2.053,
            Self::Awg14 => 1.628,
            Self::Awg16 => 1.291,
            Self::Awg18 => 1.024,
            Self::Awg20 => 0.812,
        }
    }

    /// Conductor diameter in meters.
    #[must_use]
    pub fn diameter_m(self) -> Scalar {
        self.diameter_mm() / MM_PER_METER
    }
}

impl TryFrom<u32> for WireGauge {
    type Error = DesignError;

    fn try_from(awg: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|gauge| gauge.awg() == awg)
            .ok_or_else(|| {
                DesignError::invalid(
                    "wire_gauge",
                    format!("unsupported gauge {awg} AWG (expected 12, 14, 16, 18 or 20)"),
                )
            })
    }
}

impl FromStr for WireGauge {
    type Err = DesignError;

    /// Accepts `14`, `14awg`, `14 AWG` or `awg14`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_suffix("awg")
            .or_else(|| lower.strip_prefix("awg"))
            .unwrap_or(&lower)
            .trim();
        let awg: u32 = digits.parse().map_err(|_| {
            DesignError::invalid("wire_gauge", format!("`{}` is not a wire gauge", s.trim()))
        })?;
        Self::try_from(awg)
    }
}

impl fmt::Display for WireGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} AWG", self.awg())
    }
}

/// Boom materials with their element-length correction factors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoomMaterial {
    /// Non-conductive wooden boom; the reference case.
    Wood,
    /// Aluminium tube.
    Aluminum,
    /// Fiberglass tube.
    Fiberglass,
    /// PVC pipe.
    Pvc,
}

impl BoomMaterial {
    /// Every supported material.
    pub const ALL: [Self; 4] = [Self::Wood, Self::Aluminum, Self::Fiberglass, Self::Pvc];

    /// Dimensionless element-length correction factor.
    #[must_use]
    pub const fn correction_factor(self) -> Scalar {
        match self {
            Self::Wood => 1.0,
            Self::Aluminum => 0.95,
            Self::Fiberglass => 0.98,
            Self::Pvc => 0.97,
        }
    }

    /// Lower-case identifier used for parsing and serialization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Aluminum => "aluminum",
            Self::Fiberglass => "fiberglass",
            Self::Pvc => "pvc",
        }
    }
}

impl FromStr for BoomMaterial {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "wood" => Ok(Self::Wood),
            "aluminum" | "aluminium" => Ok(Self::Aluminum),
            "fiberglass" | "fibreglass" => Ok(Self::Fiberglass),
            "pvc" => Ok(Self::Pvc),
            _ => Err(DesignError::invalid(
                "boom_material",
                format!(
                    "unsupported material `{}` (expected wood, aluminum, fiberglass or pvc)",
                    s.trim()
                ),
            )),
        }
    }
}

impl fmt::Display for BoomMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
