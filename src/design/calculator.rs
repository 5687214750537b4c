//! Closed-form dimension calculator.

use crate::constants::{
    end_effect, wavelength_from_mhz, IMPEDANCE_BASE_OHMS, IMPEDANCE_PER_DIRECTOR_OHMS,
    IMPEDANCE_PER_SPACING_WAVELENGTH_OHMS, MAX_FRONT_TO_BACK_DB, MAX_GAIN_DBI, MIN_BEAMWIDTH_DEG,
};
use crate::errors::DesignError;
use crate::math::Scalar;

use super::input::DesignInput;
use super::presets::ModePreset;

/// Element dimensions and performance estimates for one design. All lengths are in meters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AntennaDesign {
    /// Free-space wavelength at the design frequency.
    pub wavelength_m: Scalar,
    /// Reflector length.
    pub reflector_length_m: Scalar,
    /// Driven element length.
    pub driven_length_m: Scalar,
    /// Director lengths, nearest the driven element first.
    pub director_lengths_m: Vec<Scalar>,
    /// Reflector-to-driven spacing.
    pub reflector_spacing_m: Scalar,
    /// Driven-to-director spacings, cumulative from the driven element.
    pub director_spacings_m: Vec<Scalar>,
    /// Reflector spacing plus the farthest director's spacing.
    pub total_boom_length_m: Scalar,
    /// Gain estimate in dBi.
    pub gain_dbi: Scalar,
    /// Front-to-back estimate in dB.
    pub front_to_back_db: Scalar,
    /// Half-power beamwidth estimate in degrees.
    pub beamwidth_deg: Scalar,
    /// Feed-point resistance estimate in ohms.
    pub input_impedance_ohms: Scalar,
    /// Element wire diameter.
    pub wire_diameter_m: Scalar,
    /// End-effect correction subtracted from the raw element lengths.
    pub end_effect_m: Scalar,
    /// Boom material factor that was applied.
    pub boom_factor: Scalar,
}

impl AntennaDesign {
    /// Number of directors.
    #[must_use]
    pub fn director_count(&self) -> usize {
        self.director_lengths_m.len()
    }

    /// Total number of elements including reflector and driven element.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.director_count() + 2
    }
}

/// Computes element dimensions and performance estimates for `input`.
///
/// Reflector and driven lengths scale the whole end-corrected length by the boom factor;
/// director lengths scale only the end-effect term.
pub fn compute(input: &DesignInput) -> Result<AntennaDesign, DesignError> {
    let directors = input.validate()?;
    let wavelength = finite_wavelength(input.frequency_mhz)?;
    let wire_diameter = input.wire_gauge.diameter_m();
    let boom_factor = input.boom_material.correction_factor();
    let end_effect = end_effect(wavelength, wire_diameter);
    let preset = input.optimization_mode.preset();

    log::trace!(
        "yagi: {} MHz, λ = {wavelength} m, end effect = {end_effect} m, mode = {:?}",
        input.frequency_mhz,
        input.optimization_mode
    );

    let reflector_length = (preset.reflector * wavelength - end_effect) * boom_factor;
    let driven_length = (preset.driven * wavelength - end_effect) * boom_factor;
    let reflector_spacing = preset.reflector_spacing * wavelength;

    let director_lengths: Vec<Scalar> = (0..directors)
        .map(|i| preset.director_multiplier(i) * wavelength - end_effect * boom_factor)
        .collect();
    let director_spacings = director_offsets(preset, directors, wavelength);

    let design = finish(
        preset,
        Elements {
            wavelength,
            reflector_length,
            driven_length,
            director_lengths,
            reflector_spacing,
            director_spacings,
        },
        wire_diameter,
        end_effect,
        boom_factor,
    )?;
    log::debug!(
        "yagi: {} elements, boom {:.4} m, gain {:.2} dBi",
        design.element_count(),
        design.total_boom_length_m,
        design.gain_dbi
    );
    Ok(design)
}

pub(crate) fn finite_wavelength(frequency_mhz: Scalar) -> Result<Scalar, DesignError> {
    let wavelength = wavelength_from_mhz(frequency_mhz);
    if wavelength.is_finite() && wavelength > 0.0 {
        Ok(wavelength)
    } else {
        Err(DesignError::invalid(
            "frequency_mhz",
            format!("frequency {frequency_mhz} MHz does not give a finite wavelength"),
        ))
    }
}

pub(crate) fn director_offsets(
    preset: &ModePreset,
    directors: usize,
    wavelength: Scalar,
) -> Vec<Scalar> {
    (0..directors)
        .map(|i| preset.director_offset(i, wavelength))
        .collect()
}

/// Element dimensions before the shared boom, impedance and performance pass.
pub(crate) struct Elements {
    pub wavelength: Scalar,
    pub reflector_length: Scalar,
    pub driven_length: Scalar,
    pub director_lengths: Vec<Scalar>,
    pub reflector_spacing: Scalar,
    pub director_spacings: Vec<Scalar>,
}

pub(crate) fn finish(
    preset: &ModePreset,
    elements: Elements,
    wire_diameter: Scalar,
    end_effect: Scalar,
    boom_factor: Scalar,
) -> Result<AntennaDesign, DesignError> {
    let directors = elements.director_lengths.len();
    let farthest = elements.director_spacings.last().copied().unwrap_or(0.0);
    let total_boom = elements.reflector_spacing + farthest;
    // The boom is the longest dimension, so every other length is finite when it is.
    if !total_boom.is_finite() {
        return Err(DesignError::invalid(
            "frequency_mhz",
            format!("wavelength {} m gives an unrepresentable boom length", elements.wavelength),
        ));
    }
    let input_impedance = IMPEDANCE_BASE_OHMS
        + directors as Scalar * IMPEDANCE_PER_DIRECTOR_OHMS
        + elements.reflector_spacing / elements.wavelength * IMPEDANCE_PER_SPACING_WAVELENGTH_OHMS;

    Ok(AntennaDesign {
        wavelength_m: elements.wavelength,
        reflector_length_m: elements.reflector_length,
        driven_length_m: elements.driven_length,
        director_lengths_m: elements.director_lengths,
        reflector_spacing_m: elements.reflector_spacing,
        director_spacings_m: elements.director_spacings,
        total_boom_length_m: total_boom,
        gain_dbi: preset.gain_dbi(directors).min(MAX_GAIN_DBI),
        front_to_back_db: preset.front_to_back_db(directors).min(MAX_FRONT_TO_BACK_DB),
        beamwidth_deg: preset.beamwidth_deg(directors).max(MIN_BEAMWIDTH_DEG),
        input_impedance_ohms: input_impedance,
        wire_diameter_m: wire_diameter,
        end_effect_m: end_effect,
        boom_factor,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::design::input::OptimizationMode;
    use crate::materials::{BoomMaterial, WireGauge};

    fn input(
        frequency_mhz: Scalar,
        directors: i32,
        boom: BoomMaterial,
        mode: OptimizationMode,
    ) -> DesignInput {
        DesignInput::new(frequency_mhz, directors, WireGauge::Awg14, boom, mode)
    }

    #[test]
    fn two_meter_gain_design_matches_golden_values() {
        let design = compute(&input(144.5, 3, BoomMaterial::Wood, OptimizationMode::Gain)).unwrap();

        assert_relative_eq!(design.wavelength_m, 2.074_688_290_657_439_5, max_relative = 1e-12);
        assert_relative_eq!(design.end_effect_m, 0.002_674_580_764_167_334_6, max_relative = 1e-9);
        assert_relative_eq!(design.reflector_length_m, 0.997_325_175_332_718_5, max_relative = 1e-12);
        assert_relative_eq!(design.driven_length_m, 0.962_055_474_391_542, max_relative = 1e-12);

        let lengths = [0.899_814_825_671_818_8, 0.893_590_760_799_846_5, 0.887_366_695_927_874_2];
        let spacings = [0.311_203_243_598_615_9, 0.518_672_072_664_359_9, 0.726_140_901_730_103_8];
        assert_eq!(design.director_lengths_m.len(), 3);
        assert_eq!(design.director_spacings_m.len(), 3);
        for (got, want) in design.director_lengths_m.iter().zip(lengths) {
            assert_relative_eq!(*got, want, max_relative = 1e-12);
        }
        for (got, want) in design.director_spacings_m.iter().zip(spacings) {
            assert_relative_eq!(*got, want, max_relative = 1e-12);
        }

        assert_relative_eq!(design.reflector_spacing_m, 0.311_203_243_598_615_9, max_relative = 1e-12);
        assert_relative_eq!(design.total_boom_length_m, 1.037_344_145_328_719_8, max_relative = 1e-12);
        assert_relative_eq!(design.gain_dbi, 13.0, epsilon = 1e-12);
        assert_relative_eq!(design.front_to_back_db, 22.5, epsilon = 1e-12);
        assert_relative_eq!(design.beamwidth_deg, 53.0, epsilon = 1e-12);
        assert_relative_eq!(design.input_impedance_ohms, 47.5, epsilon = 1e-9);
        assert_relative_eq!(design.wire_diameter_m, 1.628e-3);
    }

    #[test]
    fn boom_factor_scales_directors_only_through_end_effect() {
        let design =
            compute(&input(144.5, 3, BoomMaterial::Aluminum, OptimizationMode::Gain)).unwrap();

        assert_relative_eq!(design.reflector_length_m, 0.947_458_916_566_082_5, max_relative = 1e-12);
        assert_relative_eq!(design.driven_length_m, 0.913_952_700_671_964_9, max_relative = 1e-12);
        assert_relative_eq!(design.director_lengths_m[0], 0.899_948_554_710_027_2, max_relative = 1e-12);
        assert_relative_eq!(design.boom_factor, 0.95);
    }

    #[test]
    fn no_directors_gives_reflector_only_boom() {
        let design =
            compute(&input(432.0, 0, BoomMaterial::Pvc, OptimizationMode::Bandwidth)).unwrap();

        assert!(design.director_lengths_m.is_empty());
        assert!(design.director_spacings_m.is_empty());
        assert_eq!(design.total_boom_length_m, design.reflector_spacing_m);
        assert_relative_eq!(
            design.reflector_spacing_m,
            0.125 * design.wavelength_m,
            max_relative = 1e-15
        );
        assert_relative_eq!(design.total_boom_length_m, 0.086_745_502_893_518_53, max_relative = 1e-12);
    }

    #[test]
    fn invalid_inputs_never_produce_numbers() {
        for (f, d, field) in [
            (0.0, 3, "frequency_mhz"),
            (-5.0, 3, "frequency_mhz"),
            (Scalar::NAN, 3, "frequency_mhz"),
            (Scalar::INFINITY, 3, "frequency_mhz"),
            (144.5, -1, "director_count"),
            (1.0e-320, 3, "frequency_mhz"),
        ] {
            let err = compute(&input(f, d, BoomMaterial::Wood, OptimizationMode::Gain)).unwrap_err();
            assert_eq!(err.field(), field, "frequency {f}, directors {d}");
        }
    }

    #[test]
    fn overflowing_boom_length_is_rejected() {
        // λ ≈ 1.5e308 m is finite, but 2.05 λ of director offsets is not.
        let err =
            compute(&input(2.0e-306, 20, BoomMaterial::Wood, OptimizationMode::Gain)).unwrap_err();
        assert_eq!(err.field(), "frequency_mhz");

        let bare = compute(&input(2.0e-306, 0, BoomMaterial::Wood, OptimizationMode::Gain)).unwrap();
        assert!(bare.total_boom_length_m.is_finite());
        assert!(bare.reflector_length_m.is_finite());
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let i = input(50.125, 7, BoomMaterial::Fiberglass, OptimizationMode::FrontToBack);
        let a = compute(&i).unwrap();
        let b = compute(&i).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.reflector_length_m.to_bits(), b.reflector_length_m.to_bits());
        assert!(a
            .director_lengths_m
            .iter()
            .zip(&b.director_lengths_m)
            .all(|(x, y)| x.to_bits() == y.to_bits()));
    }

    #[test]
    fn invariants_hold_across_the_input_space() {
        for mode in OptimizationMode::ALL {
            for boom in BoomMaterial::ALL {
                for gauge in WireGauge::ALL {
                    for f in [1.8, 28.5, 50.1, 144.5, 432.0, 1296.0, 2400.0, 10_368.0] {
                        for d in 0..=20 {
                            let design =
                                compute(&DesignInput::new(f, d, gauge, boom, mode)).unwrap();
                            let n = d as usize;
                            assert_eq!(design.director_lengths_m.len(), n);
                            assert_eq!(design.director_spacings_m.len(), n);
                            assert!(design.gain_dbi <= MAX_GAIN_DBI);
                            assert!(design.front_to_back_db <= MAX_FRONT_TO_BACK_DB);
                            assert!(design.beamwidth_deg >= MIN_BEAMWIDTH_DEG);
                            assert!(design.reflector_length_m > 0.0);
                            assert!(design.driven_length_m > 0.0);
                            assert!(design.reflector_spacing_m > 0.0);
                            assert!(design.total_boom_length_m > 0.0);
                            assert!(design.director_lengths_m.iter().all(|l| *l > 0.0));
                            assert!(design.director_spacings_m.iter().all(|s| *s > 0.0));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn gain_rises_with_directors_up_to_the_curve_peak() {
        let gains: Vec<Scalar> = (0..=9)
            .map(|d| {
                compute(&input(144.5, d, BoomMaterial::Wood, OptimizationMode::Gain))
                    .unwrap()
                    .gain_dbi
            })
            .collect();
        assert!(gains.windows(2).all(|w| w[1] > w[0]), "{gains:?}");
    }

    #[test]
    fn front_to_back_is_clamped() {
        let design =
            compute(&input(144.5, 10, BoomMaterial::Wood, OptimizationMode::FrontToBack)).unwrap();
        assert_relative_eq!(design.front_to_back_db, MAX_FRONT_TO_BACK_DB);
    }

    #[test]
    fn modes_produce_distinct_reflectors() {
        let lengths: Vec<Scalar> = OptimizationMode::ALL
            .into_iter()
            .map(|mode| {
                compute(&input(144.5, 3, BoomMaterial::Wood, mode))
                    .unwrap()
                    .reflector_length_m
            })
            .collect();
        assert_ne!(lengths[0], lengths[1]);
        assert_ne!(lengths[0], lengths[2]);
        assert_ne!(lengths[1], lengths[2]);
    }
}
