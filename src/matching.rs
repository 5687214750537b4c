//! Feed-point match against a reference system impedance.
//!
//! The calculator only estimates a resistive feed-point impedance, so the figures here describe
//! the mismatch a builder can expect before any matching network or balun tuning.

use crate::constants::REFERENCE_IMPEDANCE_OHMS;
use crate::design::AntennaDesign;
use crate::errors::DesignError;
use crate::math::{positive_finite, power_ratio_db, CScalar, Scalar};

/// Match figures of a load against a reference impedance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedMatch {
    /// Reference (line) impedance in ohms.
    pub reference_ohms: Scalar,
    /// Complex reflection coefficient Γ = (Z − Z₀)/(Z + Z₀).
    pub reflection: CScalar,
    /// Voltage standing-wave ratio.
    pub swr: Scalar,
    /// Return loss in dB (positive).
    pub return_loss_db: Scalar,
    /// Mismatch loss in dB (positive).
    pub mismatch_loss_db: Scalar,
}

impl FeedMatch {
    /// Match of `load` against a real reference impedance `reference_ohms`.
    pub fn new(load: CScalar, reference_ohms: Scalar) -> Result<Self, DesignError> {
        let z0 = positive_finite(reference_ohms).ok_or_else(|| {
            DesignError::invalid(
                "reference_ohms",
                format!(
                    "reference impedance must be a positive finite number, got {reference_ohms}"
                ),
            )
        })?;
        let z0c = CScalar::new(z0, 0.0);
        let reflection = (load - z0c) / (load + z0c);
        let magnitude = reflection.norm();

        let (swr, return_loss_db) = if magnitude >= 1.0 {
            (Scalar::INFINITY, 0.0)
        } else if magnitude == 0.0 {
            (1.0, Scalar::INFINITY)
        } else {
            ((1.0 + magnitude) / (1.0 - magnitude), -20.0 * magnitude.log10())
        };
        let delivered = 1.0 - magnitude.powi(2);
        let mismatch_loss_db = if delivered > 0.0 {
            -power_ratio_db(delivered)
        } else {
            Scalar::INFINITY
        };

        Ok(Self {
            reference_ohms: z0,
            reflection,
            swr,
            return_loss_db,
            mismatch_loss_db,
        })
    }

    /// Match of the design's estimated feed-point resistance against `reference_ohms`.
    pub fn for_design(design: &AntennaDesign, reference_ohms: Scalar) -> Result<Self, DesignError> {
        Self::new(CScalar::new(design.input_impedance_ohms, 0.0), reference_ohms)
    }

    /// Match against the usual 50 Ω coaxial line.
    pub fn against_50_ohms(design: &AntennaDesign) -> Result<Self, DesignError> {
        Self::for_design(design, REFERENCE_IMPEDANCE_OHMS)
    }

    /// Fraction of incident power delivered to the load.
    #[must_use]
    pub fn delivered_fraction(&self) -> Scalar {
        1.0 - self.reflection.norm_sqr()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn matched_load_has_unity_swr() {
        let m = FeedMatch::new(CScalar::new(50.0, 0.0), 50.0).unwrap();
        assert_relative_eq!(m.swr, 1.0);
        assert!(m.return_loss_db.is_infinite());
        assert_relative_eq!(m.mismatch_loss_db, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn resistive_mismatch_matches_hand_calculation() {
        // 25 Ω on 50 Ω: Γ = -1/3, SWR 2, RL 9.54 dB, ML 0.51 dB.
        let m = FeedMatch::new(CScalar::new(25.0, 0.0), 50.0).unwrap();
        assert_relative_eq!(m.reflection.re, -1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(m.swr, 2.0, epsilon = 1e-12);
        assert_relative_eq!(m.return_loss_db, 9.542_425_094_393_248, epsilon = 1e-9);
        assert_relative_eq!(m.mismatch_loss_db, 0.511_525_224_473_812_8, epsilon = 1e-9);
        assert_relative_eq!(m.delivered_fraction(), 8.0 / 9.0, epsilon = 1e-12);
    }

    #[test]
    fn reactive_load_uses_complex_reflection() {
        let m = FeedMatch::new(CScalar::new(50.0, 50.0), 50.0).unwrap();
        // Γ = j50 / (100 + j50) = 0.2 + 0.4j
        assert_relative_eq!(m.reflection.re, 0.2, epsilon = 1e-12);
        assert_relative_eq!(m.reflection.im, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn rejects_non_positive_reference() {
        let err = FeedMatch::new(CScalar::new(50.0, 0.0), 0.0).unwrap_err();
        assert_eq!(err.field(), "reference_ohms");
    }

    #[test]
    fn two_meter_design_against_coax() {
        use crate::design::{compute, DesignInput, OptimizationMode};
        use crate::materials::{BoomMaterial, WireGauge};

        let design = compute(&DesignInput::new(
            144.5,
            3,
            WireGauge::Awg14,
            BoomMaterial::Wood,
            OptimizationMode::Gain,
        ))
        .unwrap();
        let m = FeedMatch::against_50_ohms(&design).unwrap();
        // 47.5 Ω on 50 Ω
        assert_relative_eq!(m.swr, 50.0 / 47.5, epsilon = 1e-12);
        assert!(m.mismatch_loss_db < 0.01);
    }
}
