//! Variant of the calculator for elements mounted through a conductive aluminium boom.
//!
//! Instead of a boom-material factor this variant adds the DL6WU boom correction to the
//! parasitic elements. The correction is derived for insulated mounts and doubled because
//! the elements are electrically bonded to the boom. The driven element is assumed to sit
//! insulated above the boom and gets no correction.

use crate::constants::{
    end_effect, DL6WU_CONSTANT, DL6WU_LINEAR, DL6WU_MAX_BOOM_RATIO, MM_PER_METER,
    NON_ISOLATED_BOOM_MULTIPLIER,
};
use crate::errors::DesignError;
use crate::materials::WireGauge;
use crate::math::{positive_finite, Scalar};

use super::calculator::{director_offsets, finish, finite_wavelength, AntennaDesign, Elements};
use super::input::{validate_director_count, validate_frequency, OptimizationMode};

/// Parameters of a design on a non-isolated metal boom.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonIsolatedInput {
    /// Design frequency in MHz.
    pub frequency_mhz: Scalar,
    /// Number of directors.
    pub director_count: i32,
    /// Element wire gauge.
    pub wire_gauge: WireGauge,
    /// Outside diameter of the boom tube in millimeters.
    pub boom_diameter_mm: Scalar,
    /// Preset family.
    pub optimization_mode: OptimizationMode,
}

impl NonIsolatedInput {
    /// Conventional 25 mm boom.
    pub const DEFAULT_BOOM_DIAMETER_MM: Scalar = 25.0;
}

/// Result of [`compute_non_isolated`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct NonIsolatedDesign {
    /// Element dimensions and performance. `boom_factor` is always 1.
    pub design: AntennaDesign,
    /// Boom correction added to the reflector and each director, in millimeters.
    pub boom_correction_mm: Scalar,
}

/// DL6WU boom correction in millimeters for elements insulated from a round boom.
///
/// `r = d_boom / λ` with both in millimeters; `bc = (12.5975 − 114.5·r)·r²·λ`.
#[must_use]
pub fn insulated_boom_correction_mm(wavelength_m: Scalar, boom_diameter_mm: Scalar) -> Scalar {
    let wavelength_mm = wavelength_m * MM_PER_METER;
    let ratio = boom_diameter_mm / wavelength_mm;
    (DL6WU_CONSTANT - DL6WU_LINEAR * ratio) * ratio.powi(2) * wavelength_mm
}

/// Boom correction in millimeters for elements bonded to the boom.
#[must_use]
pub fn non_isolated_boom_correction_mm(wavelength_m: Scalar, boom_diameter_mm: Scalar) -> Scalar {
    NON_ISOLATED_BOOM_MULTIPLIER * insulated_boom_correction_mm(wavelength_m, boom_diameter_mm)
}

/// Computes a design whose parasitic elements pass through a conductive boom.
pub fn compute_non_isolated(input: &NonIsolatedInput) -> Result<NonIsolatedDesign, DesignError> {
    validate_frequency(input.frequency_mhz)?;
    let directors = validate_director_count(input.director_count)?;
    let boom_diameter_mm = positive_finite(input.boom_diameter_mm).ok_or_else(|| {
        DesignError::invalid(
            "boom_diameter_mm",
            format!(
                "boom diameter must be a positive finite number, got {}",
                input.boom_diameter_mm
            ),
        )
    })?;
    let wavelength = finite_wavelength(input.frequency_mhz)?;
    let ratio = boom_diameter_mm / (wavelength * MM_PER_METER);
    if ratio > DL6WU_MAX_BOOM_RATIO {
        return Err(DesignError::invalid(
            "boom_diameter_mm",
            format!(
                "boom diameter {boom_diameter_mm} mm is {ratio:.3} λ, above the {DL6WU_MAX_BOOM_RATIO} λ \
                 the boom correction is fitted for"
            ),
        ));
    }
    if ratio > 0.8 * DL6WU_MAX_BOOM_RATIO {
        log::warn!(
            "boom diameter {boom_diameter_mm} mm is {ratio:.3} λ, near the edge of the fitted range"
        );
    }

    let wire_diameter = input.wire_gauge.diameter_m();
    let end_effect = end_effect(wavelength, wire_diameter);
    let boom_correction_mm = non_isolated_boom_correction_mm(wavelength, boom_diameter_mm);
    let boom_correction = boom_correction_mm / MM_PER_METER;
    let preset = input.optimization_mode.preset();

    log::trace!(
        "yagi (non-isolated): {} MHz, boom {boom_diameter_mm} mm, correction {boom_correction_mm} mm",
        input.frequency_mhz
    );

    let elements = Elements {
        wavelength,
        reflector_length: preset.reflector * wavelength - end_effect + boom_correction,
        driven_length: preset.driven * wavelength - end_effect,
        director_lengths: (0..directors)
            .map(|i| preset.director_multiplier(i) * wavelength - end_effect + boom_correction)
            .collect(),
        reflector_spacing: preset.reflector_spacing * wavelength,
        director_spacings: director_offsets(preset, directors, wavelength),
    };

    Ok(NonIsolatedDesign {
        design: finish(preset, elements, wire_diameter, end_effect, 1.0)?,
        boom_correction_mm,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn input(boom_diameter_mm: Scalar, director_count: i32) -> NonIsolatedInput {
        NonIsolatedInput {
            frequency_mhz: 144.5,
            director_count,
            wire_gauge: WireGauge::Awg14,
            boom_diameter_mm,
            optimization_mode: OptimizationMode::Gain,
        }
    }

    #[test]
    fn dl6wu_correction_for_two_meter_boom() {
        let wavelength = crate::constants::wavelength_from_mhz(144.5);
        assert_relative_eq!(
            insulated_boom_correction_mm(wavelength, 25.0),
            3.379_355_441_608_875,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            non_isolated_boom_correction_mm(wavelength, 25.0),
            6.758_710_883_217_75,
            max_relative = 1e-12
        );
    }

    #[test]
    fn correction_lengthens_parasitics_but_not_driven() {
        let result = compute_non_isolated(&input(25.0, 3)).unwrap();
        let design = &result.design;

        assert_relative_eq!(design.reflector_length_m, 1.004_083_886_215_936_2, max_relative = 1e-12);
        assert_relative_eq!(design.driven_length_m, 0.962_055_474_391_542, max_relative = 1e-12);
        assert_relative_eq!(design.director_lengths_m[0], 0.906_573_536_555_036_6, max_relative = 1e-12);
        assert_relative_eq!(design.boom_factor, 1.0);
        assert_relative_eq!(result.boom_correction_mm, 6.758_710_883_217_75, max_relative = 1e-12);
    }

    #[test]
    fn boom_length_and_performance_match_insulated_calculator() {
        use crate::design::{compute, DesignInput};
        use crate::materials::BoomMaterial;

        let bonded = compute_non_isolated(&input(25.0, 5)).unwrap().design;
        let insulated = compute(&DesignInput::new(
            144.5,
            5,
            WireGauge::Awg14,
            BoomMaterial::Aluminum,
            OptimizationMode::Gain,
        ))
        .unwrap();

        assert_eq!(bonded.director_spacings_m, insulated.director_spacings_m);
        assert_eq!(bonded.total_boom_length_m, insulated.total_boom_length_m);
        assert_eq!(bonded.gain_dbi, insulated.gain_dbi);
        assert_eq!(bonded.input_impedance_ohms, insulated.input_impedance_ohms);
    }

    #[test]
    fn rejects_bad_boom_diameter() {
        for d in [0.0, -25.0, Scalar::NAN] {
            let err = compute_non_isolated(&input(d, 3)).unwrap_err();
            assert_eq!(err.field(), "boom_diameter_mm");
        }
    }

    #[test]
    fn rejects_boom_outside_fitted_range() {
        // 50 mm is 0.4 λ at 2400 MHz, where the polynomial is strongly negative.
        let wide = NonIsolatedInput {
            frequency_mhz: 2400.0,
            boom_diameter_mm: 50.0,
            ..input(25.0, 3)
        };
        let err = compute_non_isolated(&wide).unwrap_err();
        assert_eq!(err.field(), "boom_diameter_mm");

        let wavelength = crate::constants::wavelength_from_mhz(144.5);
        let edge_mm = DL6WU_MAX_BOOM_RATIO * wavelength * MM_PER_METER;
        assert!(compute_non_isolated(&input(edge_mm * 1.01, 3)).is_err());
        let result = compute_non_isolated(&input(edge_mm * 0.99, 3)).unwrap();
        assert!(result.boom_correction_mm > 0.0);
    }

    #[test]
    fn parasitics_stay_positive_across_fitted_range() {
        for f in [50.1, 144.5, 432.0, 1296.0, 2400.0] {
            let wavelength_mm = crate::constants::wavelength_from_mhz(f) * MM_PER_METER;
            for step in 1..=10 {
                let boom = wavelength_mm * DL6WU_MAX_BOOM_RATIO * Scalar::from(step) / 10.0;
                let d = compute_non_isolated(&NonIsolatedInput {
                    frequency_mhz: f,
                    boom_diameter_mm: boom,
                    ..input(25.0, 10)
                })
                .unwrap()
                .design;
                assert!(d.reflector_length_m > d.driven_length_m, "{f} MHz, boom {boom} mm");
                assert!(d.director_lengths_m.iter().all(|l| *l > 0.0));
            }
        }
    }

    #[test]
    fn rejects_bad_numeric_fields_first() {
        let mut bad = input(25.0, -2);
        assert_eq!(compute_non_isolated(&bad).unwrap_err().field(), "director_count");
        bad.director_count = 2;
        bad.frequency_mhz = 0.0;
        assert_eq!(compute_non_isolated(&bad).unwrap_err().field(), "frequency_mhz");
    }
}
