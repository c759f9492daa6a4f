//! Generation parameters and the bounds of the controls that produce them.

use std::ops::RangeInclusive;

use crate::error::{GenerationError, Result};

/// Initial corner count of the control surface.
pub const DEFAULT_CORNERS: u32 = 4;
/// Initial iteration count of the control surface.
pub const DEFAULT_ITERATIONS: u32 = 20;
/// Initial reduction of the control surface, in percent.
pub const DEFAULT_REDUCE_PERCENT: u32 = 75;

pub const CORNER_RANGE: RangeInclusive<u32> = 3..=12;
pub const ITERATION_RANGE: RangeInclusive<u32> = 1..=100;
pub const REDUCE_PERCENT_RANGE: RangeInclusive<u32> = 1..=99;

/// Inputs of one generation pass.
///
/// A fresh value is built for every parameter change; nothing mutates it
/// afterwards. The fields are public so callers can build one directly, which
/// is why [`crate::generator::generate`] validates again before using it.
///
/// ### Fields
/// - `corner_count` - Vertices per polygon, in [`CORNER_RANGE`].
/// - `iteration_count` - Number of nested polygons, in [`ITERATION_RANGE`].
/// - `reduction_factor` - Position along each edge where the next polygon's
///   vertex sits, strictly between `0` and `1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationParameters {
    pub corner_count: u32,
    pub iteration_count: u32,
    pub reduction_factor: f64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            corner_count: DEFAULT_CORNERS,
            iteration_count: DEFAULT_ITERATIONS,
            reduction_factor: f64::from(DEFAULT_REDUCE_PERCENT) / 100.0,
        }
    }
}

impl GenerationParameters {
    /// Builds a validated parameter set.
    ///
    /// ### Returns
    /// - `Ok(params)` when every value is inside its bounds.
    /// - `Err(GenerationError::InvalidParameter)` naming the first offending value.
    pub fn new(corner_count: u32, iteration_count: u32, reduction_factor: f64) -> Result<Self> {
        let params = Self {
            corner_count,
            iteration_count,
            reduction_factor,
        };
        params.validate()?;
        Ok(params)
    }

    /// Builds a parameter set from the slider triple, where the reduction is
    /// given in whole percent.
    pub fn from_controls(corners: u32, iterations: u32, reduce_percent: u32) -> Result<Self> {
        if !REDUCE_PERCENT_RANGE.contains(&reduce_percent) {
            return Err(GenerationError::invalid(
                "reduce_percent",
                reduce_percent,
                "[1, 99]",
            ));
        }
        Self::new(corners, iterations, f64::from(reduce_percent) / 100.0)
    }

    /// Checks every field against its bounds without clamping.
    pub fn validate(&self) -> Result<()> {
        if !CORNER_RANGE.contains(&self.corner_count) {
            return Err(GenerationError::invalid(
                "corner_count",
                self.corner_count,
                "[3, 12]",
            ));
        }
        if !ITERATION_RANGE.contains(&self.iteration_count) {
            return Err(GenerationError::invalid(
                "iteration_count",
                self.iteration_count,
                "[1, 100]",
            ));
        }
        // Written so that NaN fails as well.
        if !(self.reduction_factor > 0.0 && self.reduction_factor < 1.0) {
            return Err(GenerationError::invalid(
                "reduction_factor",
                self.reduction_factor,
                "(0, 1)",
            ));
        }
        Ok(())
    }
}
