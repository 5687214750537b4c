#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and the empirical coefficients of the Yagi model.
pub mod constants;
/// Shared numeric type aliases.
pub mod math;
/// Length formatting for metric and imperial display.
pub mod units;
/// Wire gauge and boom material lookup tables.
pub mod materials;
/// Amateur radio band plan helpers.
pub mod bands;
/// Design inputs, mode presets and the dimension calculators.
pub mod design;
/// Element layout along the boom.
pub mod geometry;
/// Feed-point match figures derived from the estimated input impedance.
pub mod matching;
/// Plain-text design sheets.
pub mod report;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
