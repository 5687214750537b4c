//! Convenience re-exports for building Yagi designs.

pub use crate::bands::Band;
pub use crate::constants::*;
pub use crate::design::{
    compute, compute_non_isolated, insulated_boom_correction_mm, non_isolated_boom_correction_mm,
    AntennaDesign, DesignInput, ModePreset, NonIsolatedDesign, NonIsolatedInput, OptimizationMode,
};
pub use crate::errors::DesignError;
pub use crate::geometry::{element_gaps, layout, Element, ElementKind};
pub use crate::matching::FeedMatch;
pub use crate::materials::{BoomMaterial, WireGauge};
pub use crate::math::{CScalar, Scalar, R3};
pub use crate::report::{BoomMount, DesignSheet};
pub use crate::units::{format_length, LengthUnits};
