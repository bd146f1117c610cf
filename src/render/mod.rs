//! Label rasterization.

/// `vello_cpu` drawing helpers.
pub(crate) mod canvas;
/// Measure, size, draw.
pub mod label;
/// Visual styles and their sizing formulas.
pub mod style;
