use crate::math::Scalar;

use super::input::OptimizationMode;

/// Fixed constants for one optimization mode.
///
/// Element multipliers are fractions of a free-space wavelength. Performance curves are
/// polynomials in the director count `d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModePreset {
    /// Reflector length multiplier.
    pub reflector: Scalar,
    /// Driven element length multiplier.
    pub driven: Scalar,
    /// Reflector-to-driven spacing multiplier.
    pub reflector_spacing: Scalar,
    /// Director length multiplier before per-director reduction.
    pub director_base: Scalar,
    /// Reduction applied to the first director.
    pub director_reduction: Scalar,
    /// Additional reduction per director index.
    pub director_reduction_step: Scalar,
    /// Driven-to-first-director spacing multiplier.
    pub director_spacing: Scalar,
    /// Additional cumulative spacing per director index.
    pub director_spacing_step: Scalar,
    /// Gain with no directors (dBi).
    pub gain_base: Scalar,
    /// Linear gain term per director (dB).
    pub gain_linear: Scalar,
    /// Quadratic diminishing-returns term (dB).
    pub gain_quadratic: Scalar,
    /// Front-to-back with no directors (dB).
    pub front_to_back_base: Scalar,
    /// Front-to-back gained per director (dB).
    pub front_to_back_linear: Scalar,
    /// Beamwidth with no directors (degrees).
    pub beamwidth_base: Scalar,
    /// Beamwidth narrowing per director (degrees).
    pub beamwidth_slope: Scalar,
    /// Narrowest beamwidth this preset predicts (degrees).
    pub beamwidth_floor: Scalar,
}

/// Maximum-gain preset.
pub const GAIN: ModePreset = ModePreset {
    reflector: 0.482,
    driven: 0.465,
    reflector_spacing: 0.15,
    director_base: 0.440,
    director_reduction: 0.005,
    director_reduction_step: 0.003,
    director_spacing: 0.15,
    director_spacing_step: 0.10,
    gain_base: 8.5,
    gain_linear: 1.8,
    gain_quadratic: 0.1,
    front_to_back_base: 15.0,
    front_to_back_linear: 2.5,
    beamwidth_base: 65.0,
    beamwidth_slope: 4.0,
    beamwidth_floor: 25.0,
};

/// Wide-bandwidth preset.
pub const BANDWIDTH: ModePreset = ModePreset {
    reflector: 0.475,
    driven: 0.470,
    reflector_spacing: 0.125,
    director_base: 0.445,
    director_reduction: 0.003,
    director_reduction_step: 0.002,
    director_spacing: 0.125,
    director_spacing_step: 0.08,
    gain_base: 7.8,
    gain_linear: 1.6,
    gain_quadratic: 0.08,
    front_to_back_base: 12.0,
    front_to_back_linear: 2.2,
    beamwidth_base: 70.0,
    beamwidth_slope: 3.5,
    beamwidth_floor: 30.0,
};

/// Front-to-back preset.
pub const FRONT_TO_BACK: ModePreset = ModePreset {
    reflector: 0.490,
    driven: 0.463,
    reflector_spacing: 0.18,
    director_base: 0.435,
    director_reduction: 0.007,
    director_reduction_step: 0.004,
    director_spacing: 0.16,
    director_spacing_step: 0.12,
    gain_base: 7.2,
    gain_linear: 1.4,
    gain_quadratic: 0.06,
    front_to_back_base: 18.0,
    front_to_back_linear: 3.2,
    beamwidth_base: 72.0,
    beamwidth_slope: 4.2,
    beamwidth_floor: 28.0,
};

impl OptimizationMode {
    /// Constants for this mode.
    #[must_use]
    pub const fn preset(self) -> &'static ModePreset {
        match self {
            Self::Gain => &GAIN,
            Self::Bandwidth => &BANDWIDTH,
            Self::FrontToBack => &FRONT_TO_BACK,
        }
    }
}

impl ModePreset {
    /// Length multiplier of director `index` (0 nearest the driven element).
    #[must_use]
    pub fn director_multiplier(&self, index: usize) -> Scalar {
        let i = index as Scalar;
        self.director_base - (self.director_reduction + i * self.director_reduction_step)
    }

    /// Cumulative driven-to-director spacing of director `index` in meters.
    #[must_use]
    pub fn director_offset(&self, index: usize, wavelength: Scalar) -> Scalar {
        let i = index as Scalar;
        self.director_spacing * wavelength + i * self.director_spacing_step * wavelength
    }

    /// Unclamped gain estimate (dBi) for `directors` directors.
    #[must_use]
    pub fn gain_dbi(&self, directors: usize) -> Scalar {
        let d = directors as Scalar;
        self.gain_base + d * self.gain_linear - d * self.gain_quadratic * d
    }

    /// Unclamped front-to-back estimate (dB).
    #[must_use]
    pub fn front_to_back_db(&self, directors: usize) -> Scalar {
        let d = directors as Scalar;
        self.front_to_back_base + d * self.front_to_back_linear
    }

    /// Beamwidth estimate (degrees), floored at the preset minimum.
    #[must_use]
    pub fn beamwidth_deg(&self, directors: usize) -> Scalar {
        let d = directors as Scalar;
        self.beamwidth_floor.max(self.beamwidth_base - d * self.beamwidth_slope)
    }
}
