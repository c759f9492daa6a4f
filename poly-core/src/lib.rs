//! Core geometry for nested, rotated polygon sequences.
//!
//! Main components:
//! - [`generator`] — the polygon sequence generator (radius / rotation recurrence).
//! - [`polygon`] — regular polygon construction.
//! - [`color`] — per-iteration fill color derivation.
//! - [`config`] — generation parameters, defaults and control bounds.
//! - [`surface`] — render surface contract and the paint pass.
//! - [`error`] — parameter validation errors.
//! - [`types`] — shared point, polygon and color types.

pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod polygon;
pub mod surface;
pub mod types;

pub use config::GenerationParameters;
pub use error::{GenerationError, Result};
pub use generator::generate;
