use crate::types::{Point, Polygon};

/// Fixed orientation bias, in degrees, added to every vertex angle.
///
/// Only affects how the first polygon sits on screen; changing it changes
/// the rendered picture.
pub const ORIENTATION_OFFSET_DEG: f64 = 45.0;

/// Angle in degrees of vertex `k` of a regular `corners`-gon rotated by
/// `rotation_deg`.
pub fn vertex_angle_deg(corners: u32, k: u32, rotation_deg: f64) -> f64 {
    let step = 360.0 / f64::from(corners);
    step * f64::from(k) + rotation_deg + ORIENTATION_OFFSET_DEG
}

/// Builds a regular polygon around `center`.
///
/// Vertex `k` sits at angle `(360 / corners) * k + rotation_deg + 45` degrees
/// on the circle of radius `radius`. Angles grow in the positive
/// mathematical direction of the surface coordinates, so on a y-down surface
/// the vertices run clockwise.
///
/// ### Parameters
/// - `corners` - Number of vertices.
/// - `radius` - Circumradius.
/// - `center` - Center of the circumcircle.
/// - `rotation_deg` - Rotation of the whole polygon, in degrees.
pub fn regular_polygon(corners: u32, radius: f64, center: Point, rotation_deg: f64) -> Polygon {
    let vertices = (0..corners)
        .map(|k| {
            let t = vertex_angle_deg(corners, k, rotation_deg).to_radians();
            Point::new(center.x + radius * t.cos(), center.y + radius * t.sin())
        })
        .collect();

    Polygon { vertices }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn square_without_rotation_sits_on_diagonals() {
        let poly = regular_polygon(4, 1.0, Point::ZERO, 0.0);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let expected = [
            Point::new(h, h),
            Point::new(-h, h),
            Point::new(-h, -h),
            Point::new(h, -h),
        ];

        assert_eq!(poly.len(), 4);
        for (got, want) in poly.vertices.iter().zip(expected) {
            assert!((*got - want).length() < EPS, "got {got:?}, want {want:?}");
        }
    }

    #[test]
    fn vertices_lie_on_circumcircle() {
        let center = Point::new(30.0, -12.5);
        let poly = regular_polygon(7, 42.0, center, 17.0);

        for v in &poly.vertices {
            assert!(((*v - center).length() - 42.0).abs() < EPS);
        }
    }

    #[test]
    fn rotation_shifts_every_vertex_angle() {
        assert_eq!(vertex_angle_deg(3, 0, 0.0), 45.0);
        assert_eq!(vertex_angle_deg(3, 1, 0.0), 165.0);
        assert_eq!(vertex_angle_deg(3, 1, 10.0), 175.0);
    }

    #[test]
    fn zero_radius_collapses_to_center() {
        let center = Point::new(5.0, 5.0);
        let poly = regular_polygon(5, 0.0, center, 0.0);
        assert!(poly.vertices.iter().all(|v| *v == center));
    }
}
