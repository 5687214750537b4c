//! Design parameters for the `yagi` binary.
//!
//! Values come from command-line flags, then an optional TOML design file, then the defaults
//! below. Everything is kept as raw user input here and only parsed into library types by
//! [`Settings::resolve`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use yagi_designer::bands::Band;
use yagi_designer::design::{DesignInput, NonIsolatedInput, OptimizationMode};
use yagi_designer::materials::{BoomMaterial, WireGauge};
use yagi_designer::units::LengthUnits;

const DEFAULT_FREQUENCY_MHZ: f64 = 144.5;
const DEFAULT_DIRECTORS: i32 = 3;
const DEFAULT_GAUGE: u32 = 14;
const DEFAULT_BOOM: &str = "wood";
const DEFAULT_OPTIMIZE: &str = "gain";

/// Raw design parameters as they appear in a design file or on the command line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Design frequency in MHz.
    pub frequency: Option<f64>,
    /// Band name; its centre is used when no frequency is given.
    pub band: Option<String>,
    /// Director count.
    pub directors: Option<i32>,
    /// Wire gauge in AWG.
    pub gauge: Option<u32>,
    /// Boom material.
    pub boom: Option<String>,
    /// Optimization target.
    pub optimize: Option<String>,
    /// Display units.
    pub units: Option<String>,
    /// Boom diameter in mm for elements bonded to a metal boom.
    pub non_isolated: Option<f64>,
}

/// Fully parsed parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved {
    /// Elements insulated from the boom.
    Insulated(DesignInput),
    /// Elements bonded to a metal boom of the given diameter.
    NonIsolated(NonIsolatedInput),
}

impl Settings {
    /// Reads a TOML design file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read design file {}", path.display()))?;
        let settings: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse design file {}", path.display()))?;
        log::debug!("loaded design file {}: {settings:?}", path.display());
        Ok(settings)
    }

    /// Fills every field missing here from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        // An explicit frequency outranks a band from the fallback and vice versa.
        let (frequency, band) = if self.frequency.is_some() || self.band.is_some() {
            (self.frequency, self.band)
        } else {
            (fallback.frequency, fallback.band)
        };
        Self {
            frequency,
            band,
            directors: self.directors.or(fallback.directors),
            gauge: self.gauge.or(fallback.gauge),
            boom: self.boom.or(fallback.boom),
            optimize: self.optimize.or(fallback.optimize),
            units: self.units.or(fallback.units),
            non_isolated: self.non_isolated.or(fallback.non_isolated),
        }
    }

    fn frequency_mhz(&self) -> Result<f64> {
        if let Some(f) = self.frequency {
            return Ok(f);
        }
        match &self.band {
            Some(name) => {
                let band: Band = name.parse()?;
                log::info!("using {band} centre frequency {} MHz", band.center_mhz());
                Ok(band.center_mhz())
            }
            None => Ok(DEFAULT_FREQUENCY_MHZ),
        }
    }

    /// Display units, metric unless set.
    pub fn length_units(&self) -> Result<LengthUnits> {
        let units = self.units.as_deref().map(str::parse::<LengthUnits>).transpose()?;
        Ok(units.unwrap_or_default())
    }

    /// Parses every field into library types, applying defaults.
    pub fn resolve(&self) -> Result<Resolved> {
        let frequency_mhz = self.frequency_mhz()?;
        let director_count = self.directors.unwrap_or(DEFAULT_DIRECTORS);
        let wire_gauge = WireGauge::try_from(self.gauge.unwrap_or(DEFAULT_GAUGE))?;
        let optimization_mode: OptimizationMode =
            self.optimize.as_deref().unwrap_or(DEFAULT_OPTIMIZE).parse()?;

        if let Some(band) = Band::containing(frequency_mhz) {
            log::debug!("{frequency_mhz} MHz lies in the {} band", band.name());
        } else {
            log::info!("{frequency_mhz} MHz is outside the listed amateur bands");
        }

        if let Some(boom_diameter_mm) = self.non_isolated {
            if self.boom.is_some() {
                log::warn!("boom material is ignored for a non-isolated boom");
            }
            return Ok(Resolved::NonIsolated(NonIsolatedInput {
                frequency_mhz,
                director_count,
                wire_gauge,
                boom_diameter_mm,
                optimization_mode,
            }));
        }

        let boom_material: BoomMaterial = self.boom.as_deref().unwrap_or(DEFAULT_BOOM).parse()?;
        Ok(Resolved::Insulated(DesignInput::new(
            frequency_mhz,
            director_count,
            wire_gauge,
            boom_material,
            optimization_mode,
        )))
    }
}
