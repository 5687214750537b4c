//! Physical constants and empirical model coefficients.
//!
//! ## Accuracy
//!
//! The speed of light is exact by SI definition (2019 revision). Every other value in this
//! module is an empirical coefficient of the closed-form Yagi model: it describes typical
//! amateur-radio builds and carries no measurement uncertainty of its own.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - G. Hoch (DL6WU), "More Gain with Yagi Antennas", VHF Communications 4/1977 (boom correction).

use crate::math::Scalar;

/// Speed of light in vacuum _c_ in meters per second (m/s).
/// Exact value by SI definition (2019): 299,792,458 m/s.
pub const SPEED_OF_LIGHT: Scalar = 299_792_458.0;
/// Hertz per megahertz.
pub const HZ_PER_MHZ: Scalar = 1.0e6;
/// Millimeters per meter.
pub const MM_PER_METER: Scalar = 1000.0;
/// Inches per meter, as used for imperial display (rounded to six significant figures).
pub const INCHES_PER_METER: Scalar = 39.3701;

/// Coefficient of the end-effect correction `k · log10(λ / d_mm)` in meters.
pub const END_EFFECT_COEFFICIENT: Scalar = 0.0254;

/// Upper realism bound for the gain estimate (dBi).
pub const MAX_GAIN_DBI: Scalar = 20.0;
/// Upper realism bound for the front-to-back estimate (dB).
pub const MAX_FRONT_TO_BACK_DB: Scalar = 35.0;
/// Lower realism bound for the half-power beamwidth estimate (degrees).
pub const MIN_BEAMWIDTH_DEG: Scalar = 15.0;

/// Input impedance of the bare reflector/driven pair in ohms.
pub const IMPEDANCE_BASE_OHMS: Scalar = 28.0;
/// Input impedance added per director in ohms.
pub const IMPEDANCE_PER_DIRECTOR_OHMS: Scalar = 4.0;
/// Input impedance added per wavelength of reflector spacing in ohms.
pub const IMPEDANCE_PER_SPACING_WAVELENGTH_OHMS: Scalar = 50.0;

/// Reference system impedance for feed-point match figures (Ω).
pub const REFERENCE_IMPEDANCE_OHMS: Scalar = 50.0;

/// Constant term of the DL6WU insulated boom correction polynomial.
pub const DL6WU_CONSTANT: Scalar = 12.5975;
/// Linear term of the DL6WU insulated boom correction polynomial.
pub const DL6WU_LINEAR: Scalar = 114.5;
/// Largest boom-diameter-to-wavelength ratio the DL6WU polynomial is fitted for.
pub const DL6WU_MAX_BOOM_RATIO: Scalar = 0.055;
/// Multiplier applied to the insulated correction when elements pass through a conductive boom.
pub const NON_ISOLATED_BOOM_MULTIPLIER: Scalar = 2.0;

/// Converts a frequency in megahertz to hertz.
#[inline]
#[must_use]
pub fn mhz_to_hz(mhz: Scalar) -> Scalar {
    mhz * HZ_PER_MHZ
}

/// Returns the free-space wavelength in meters for a given frequency in hertz.
#[inline]
#[must_use]
pub fn wavelength_from_frequency(hz: Scalar) -> Scalar {
    SPEED_OF_LIGHT / hz
}

/// Returns the free-space wavelength in meters for a given frequency in megahertz.
#[inline]
#[must_use]
pub fn wavelength_from_mhz(mhz: Scalar) -> Scalar {
    wavelength_from_frequency(mhz_to_hz(mhz))
}

/// End-effect shortening in meters for a wire of `wire_diameter_m` at wavelength `wavelength_m`.
///
/// The logarithm takes the wavelength in meters over the diameter in millimeters, so the
/// correction turns negative (lengthening) once the wavelength drops below the wire diameter's
/// millimeter figure.
#[inline]
#[must_use]
pub fn end_effect(wavelength_m: Scalar, wire_diameter_m: Scalar) -> Scalar {
    END_EFFECT_COEFFICIENT * (wavelength_m / (wire_diameter_m * MM_PER_METER)).log10()
}
