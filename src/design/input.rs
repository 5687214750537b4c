use std::fmt;
use std::str::FromStr;

use crate::errors::DesignError;
use crate::materials::{BoomMaterial, WireGauge};
use crate::math::{positive_finite, Scalar};

/// Design target selecting one of the fixed parameter presets.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptimizationMode {
    /// Maximum forward gain.
    Gain,
    /// Wider usable bandwidth at some cost in gain.
    Bandwidth,
    /// Maximum rejection off the back of the array.
    FrontToBack,
}

impl OptimizationMode {
    /// Every mode.
    pub const ALL: [Self; 3] = [Self::Gain, Self::Bandwidth, Self::FrontToBack];

    /// Identifier used for parsing and serialization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gain => "gain",
            Self::Bandwidth => "bandwidth",
            Self::FrontToBack => "front_to_back",
        }
    }
}

impl FromStr for OptimizationMode {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "gain" => Ok(Self::Gain),
            "bandwidth" => Ok(Self::Bandwidth),
            "front_to_back" | "fronttoback" | "f2b" | "fb" => Ok(Self::FrontToBack),
            _ => Err(DesignError::invalid(
                "optimization_mode",
                format!(
                    "unknown mode `{}` (expected gain, bandwidth or front_to_back)",
                    s.trim()
                ),
            )),
        }
    }
}

impl fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gain => "Maximum Gain",
            Self::Bandwidth => "Wide Bandwidth",
            Self::FrontToBack => "Front-to-Back",
        })
    }
}

/// Parameters of one Yagi design.
///
/// `director_count` is signed so that a negative count coming from a parsed form field can be
/// represented and rejected by [`DesignInput::validate`] rather than wrapping.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignInput {
    /// Design frequency in MHz.
    pub frequency_mhz: Scalar,
    /// Number of directors in front of the driven element.
    pub director_count: i32,
    /// Element wire gauge.
    pub wire_gauge: WireGauge,
    /// Boom material.
    pub boom_material: BoomMaterial,
    /// Preset family.
    pub optimization_mode: OptimizationMode,
}

impl DesignInput {
    /// Creates an input; nothing is checked until [`DesignInput::validate`].
    #[must_use]
    pub const fn new(
        frequency_mhz: Scalar,
        director_count: i32,
        wire_gauge: WireGauge,
        boom_material: BoomMaterial,
        optimization_mode: OptimizationMode,
    ) -> Self {
        Self {
            frequency_mhz,
            director_count,
            wire_gauge,
            boom_material,
            optimization_mode,
        }
    }

    /// Checks the numeric fields and returns the director count as an index-sized value.
    pub fn validate(&self) -> Result<usize, DesignError> {
        validate_frequency(self.frequency_mhz)?;
        validate_director_count(self.director_count)
    }
}

pub(crate) fn validate_frequency(frequency_mhz: Scalar) -> Result<Scalar, DesignError> {
    positive_finite(frequency_mhz).ok_or_else(|| {
        DesignError::invalid(
            "frequency_mhz",
            format!("frequency must be a positive finite number, got {frequency_mhz}"),
        )
    })
}

pub(crate) fn validate_director_count(director_count: i32) -> Result<usize, DesignError> {
    usize::try_from(director_count).map_err(|_| {
        DesignError::invalid(
            "director_count",
            format!("director count must be a non-negative integer, got {director_count}"),
        )
    })
}
