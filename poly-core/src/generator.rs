//! Nested polygon sequence generation.
//!
//! Each polygon is inscribed in the previous one: its vertices sit at the
//! point dividing each outer edge in the ratio `f : (1 - f)`. That gives
//! the two recurrences used below:
//!
//! - radius: `r' = sqrt(r²·f² + r²·(1 - f)²)`
//! - rotation: `rotation_i = i · alpha`, with `alpha = atan((1 - f) / f)`
//!   in degrees.

use crate::{
    color::iteration_color,
    config::GenerationParameters,
    error::{GenerationError, Result},
    polygon::regular_polygon,
    types::{GenerationOutput, IterationResult, Point},
};

/// Rotation in degrees between two consecutive polygons.
pub fn turn_angle_deg(reduction_factor: f64) -> f64 {
    ((1.0 - reduction_factor) / reduction_factor)
        .atan()
        .to_degrees()
}

/// Circumradius of the polygon inscribed in one of radius `radius`.
pub fn next_radius(radius: f64, reduction_factor: f64) -> f64 {
    let f = reduction_factor;
    (radius * radius * f * f + radius * radius * (1.0 - f) * (1.0 - f)).sqrt()
}

/// Generates the full polygon sequence.
///
/// ### Parameters
/// - `params` - Corner count, iteration count and reduction factor.
/// - `center` - Shared center of all polygons, usually the surface center.
/// - `initial_radius` - Circumradius of the outermost polygon, usually half
///   the surface width.
///
/// ### Returns
/// - `Ok(output)` with exactly `params.iteration_count` entries, outermost
///   first, each polygon having `params.corner_count` vertices.
/// - `Err(GenerationError::InvalidParameter)` if `params` is out of bounds,
///   `center` is not finite, or `initial_radius` is negative or not finite.
pub fn generate(
    params: &GenerationParameters,
    center: Point,
    initial_radius: f64,
) -> Result<GenerationOutput> {
    if let Err(err) = validate_inputs(params, center, initial_radius) {
        log::debug!("rejecting generation request: {err}");
        return Err(err);
    }

    let f = params.reduction_factor;
    let alpha = turn_angle_deg(f);

    let mut radius = initial_radius;
    let mut rotation = 0.0;
    let mut output = Vec::with_capacity(params.iteration_count as usize);

    for i in 0..params.iteration_count {
        let polygon = regular_polygon(params.corner_count, radius, center, rotation);
        let fill = iteration_color(i, params.iteration_count);
        log::trace!("iteration {i}: radius={radius:.4} rotation={rotation:.4} fill={fill:?}");

        output.push(IterationResult { polygon, fill });

        radius = next_radius(radius, f);
        // Recomputed from the index rather than accumulated.
        rotation = f64::from(i + 1) * alpha;
    }

    log::debug!(
        "generated {} polygons ({} corners, f={f}, alpha={alpha:.4}°), radius {initial_radius:.3} -> {radius:.3}",
        output.len(),
        params.corner_count,
    );

    Ok(output)
}

fn validate_inputs(
    params: &GenerationParameters,
    center: Point,
    initial_radius: f64,
) -> Result<()> {
    params.validate()?;
    if !center.is_finite() {
        let bad = if center.x.is_finite() { center.y } else { center.x };
        return Err(GenerationError::invalid("center", bad, "finite coordinates"));
    }
    if !(initial_radius.is_finite() && initial_radius >= 0.0) {
        return Err(GenerationError::invalid(
            "initial_radius",
            initial_radius,
            "[0, +inf)",
        ));
    }
    Ok(())
}
