//! Design inputs, per-mode presets and the dimension calculators.
//!
//! [`compute`] is a pure function: identical inputs give bit-identical results and nothing is
//! cached between calls, so it can be called from any number of threads at once.

mod calculator;
mod input;
mod non_isolated;
mod presets;

pub use calculator::{compute, AntennaDesign};
pub use input::{DesignInput, OptimizationMode};
pub use non_isolated::{
    compute_non_isolated, insulated_boom_correction_mm, non_isolated_boom_correction_mm,
    NonIsolatedDesign, NonIsolatedInput,
};
pub use presets::{ModePreset, BANDWIDTH, FRONT_TO_BACK, GAIN};
