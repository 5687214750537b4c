//! Plain-text design sheet export.

use std::io::{self, Write};

use crate::design::{
    AntennaDesign, DesignInput, NonIsolatedDesign, NonIsolatedInput, OptimizationMode,
};
use crate::materials::{BoomMaterial, WireGauge};
use crate::matching::FeedMatch;
use crate::math::Scalar;
use crate::units::{format_length, LengthUnits};

/// How the elements are mounted on the boom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoomMount {
    /// Elements insulated from a boom of the given material.
    Insulated(BoomMaterial),
    /// Elements bonded to a metal boom.
    NonIsolated {
        /// Boom outside diameter (mm).
        diameter_mm: Scalar,
        /// Correction added to the parasitic elements (mm).
        correction_mm: Scalar,
    },
}

/// Everything needed to print one design.
#[derive(Debug, Clone)]
pub struct DesignSheet<'a> {
    /// Design frequency (MHz).
    pub frequency_mhz: Scalar,
    /// Element wire gauge.
    pub wire_gauge: WireGauge,
    /// Boom mounting.
    pub boom: BoomMount,
    /// Preset family.
    pub mode: OptimizationMode,
    /// Computed design.
    pub design: &'a AntennaDesign,
    /// Display units for lengths.
    pub units: LengthUnits,
    /// Optional feed-point match figures.
    pub feed_match: Option<FeedMatch>,
}

impl<'a> DesignSheet<'a> {
    /// Sheet for a design from [`crate::design::compute`].
    #[must_use]
    pub const fn insulated(
        input: &DesignInput,
        design: &'a AntennaDesign,
        units: LengthUnits,
    ) -> Self {
        Self {
            frequency_mhz: input.frequency_mhz,
            wire_gauge: input.wire_gauge,
            boom: BoomMount::Insulated(input.boom_material),
            mode: input.optimization_mode,
            design,
            units,
            feed_match: None,
        }
    }

    /// Sheet for a design from [`crate::design::compute_non_isolated`].
    #[must_use]
    pub const fn non_isolated(
        input: &NonIsolatedInput,
        result: &'a NonIsolatedDesign,
        units: LengthUnits,
    ) -> Self {
        Self {
            frequency_mhz: input.frequency_mhz,
            wire_gauge: input.wire_gauge,
            boom: BoomMount::NonIsolated {
                diameter_mm: input.boom_diameter_mm,
                correction_mm: result.boom_correction_mm,
            },
            mode: input.optimization_mode,
            design: &result.design,
            units,
            feed_match: None,
        }
    }

    /// Adds feed-point match figures to the performance section.
    #[must_use]
    pub fn with_feed_match(mut self, feed_match: FeedMatch) -> Self {
        self.feed_match = Some(feed_match);
        self
    }

    /// File name such as `yagi_144.5MHz_3dir.txt`.
    #[must_use]
    pub fn suggested_file_name(&self) -> String {
        format!(
            "yagi_{}MHz_{}dir.txt",
            self.frequency_mhz,
            self.design.director_count()
        )
    }

    fn len(&self, meters: Scalar) -> String {
        format_length(meters, self.units)
    }

    /// Writes the sheet.
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let d = self.design;
        writeln!(writer, "Yagi Antenna Design - {} MHz", self.frequency_mhz)?;
        writeln!(writer, "{}", "=".repeat(50))?;
        writeln!(writer)?;

        writeln!(writer, "Design Parameters:")?;
        writeln!(writer, "- Frequency: {} MHz", self.frequency_mhz)?;
        writeln!(writer, "- Wavelength: {}", self.len(d.wavelength_m))?;
        writeln!(writer, "- Directors: {}", d.director_count())?;
        writeln!(
            writer,
            "- Wire Gauge: {} ({:.2} mm)",
            self.wire_gauge,
            self.wire_gauge.diameter_mm()
        )?;
        match self.boom {
            BoomMount::Insulated(material) => writeln!(writer, "- Boom Material: {material}")?,
            BoomMount::NonIsolated { diameter_mm, .. } => writeln!(
                writer,
                "- Boom: non-isolated aluminum, {diameter_mm} mm diameter"
            )?,
        }
        writeln!(writer, "- Optimization: {}", self.mode)?;
        writeln!(writer)?;

        writeln!(writer, "Performance:")?;
        writeln!(writer, "- Gain: {:.1} dBi", d.gain_dbi)?;
        writeln!(writer, "- F/B Ratio: {:.1} dB", d.front_to_back_db)?;
        writeln!(writer, "- Beamwidth: {:.0}°", d.beamwidth_deg)?;
        writeln!(writer, "- Impedance: {:.0}Ω", d.input_impedance_ohms)?;
        if let Some(m) = &self.feed_match {
            writeln!(
                writer,
                "- SWR ({:.0}Ω line): {:.2}:1, return loss {:.1} dB",
                m.reference_ohms, m.swr, m.return_loss_db
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "Element Dimensions:")?;
        writeln!(writer, "- Reflector: {}", self.len(d.reflector_length_m))?;
        writeln!(writer, "- Driven Element: {}", self.len(d.driven_length_m))?;
        for (i, length) in d.director_lengths_m.iter().enumerate() {
            writeln!(writer, "- Director {}: {}", i + 1, self.len(*length))?;
        }
        writeln!(writer)?;

        writeln!(writer, "Element Spacing:")?;
        writeln!(writer, "- Reflector to Driven: {}", self.len(d.reflector_spacing_m))?;
        for (i, spacing) in d.director_spacings_m.iter().enumerate() {
            writeln!(writer, "- Driven to Director {}: {}", i + 1, self.len(*spacing))?;
        }
        writeln!(writer)?;
        writeln!(writer, "Total Boom Length: {}", self.len(d.total_boom_length_m))?;
        writeln!(writer)?;

        writeln!(writer, "Construction Notes:")?;
        writeln!(writer, "- Split driven element at center for feed connection")?;
        writeln!(writer, "- Use a 1:1 balun for best SWR performance")?;
        writeln!(writer, "- Ensure all elements are parallel and perpendicular to boom")?;
        writeln!(writer, "- Fine-tune by adjusting element lengths ±2-3%")?;
        writeln!(writer, "- End effect correction applied: {}", self.len(d.end_effect_m))?;
        match self.boom {
            BoomMount::Insulated(BoomMaterial::Wood) => {}
            BoomMount::Insulated(material) => writeln!(
                writer,
                "- Boom material correction factor: {}",
                material.correction_factor()
            )?,
            BoomMount::NonIsolated { correction_mm, .. } => {
                writeln!(
                    writer,
                    "- Boom correction applied: {correction_mm:.2} mm (added to reflector and directors)"
                )?;
                writeln!(writer, "- Driven element mounted insulated above the boom")?;
            }
        }
        Ok(())
    }

    /// Renders the sheet into a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
