//! Render surface contract.
//!
//! A surface knows where it is and how big it is, and can fill a closed
//! polygon. [`paint`] derives the generator's center and initial radius from
//! that and pushes every polygon of the sequence onto the surface, outermost
//! first, so inner polygons are drawn over outer ones.

use crate::{
    config::GenerationParameters,
    error::Result,
    generator::generate,
    types::{Point, Polygon, Rgb},
};

/// Something the polygon sequence can be drawn onto.
pub trait RenderSurface {
    /// Top-left corner of the drawable area, in surface coordinates.
    fn origin(&self) -> Point;

    /// Width and height of the drawable area.
    fn size(&self) -> Point;

    /// Fills the closed polygon (last vertex connects to the first).
    fn fill_polygon(&mut self, polygon: &Polygon, fill: Rgb);
}

/// Center and initial radius for a surface: the middle of the area and half
/// its width.
pub fn fit(origin: Point, size: Point) -> (Point, f64) {
    (origin + size * 0.5, size.x / 2.0)
}

/// Regenerates the sequence for `surface` and fills every polygon in order.
///
/// Nothing is drawn when generation fails.
///
/// ### Returns
/// The number of polygons drawn.
pub fn paint<S: RenderSurface + ?Sized>(
    params: &GenerationParameters,
    surface: &mut S,
) -> Result<usize> {
    let (center, radius) = fit(surface.origin(), surface.size());
    let output = generate(params, center, radius)?;

    for result in &output {
        surface.fill_polygon(&result.polygon, result.fill);
    }
    Ok(output.len())
}
