//! Small planar geometry helpers shared by demos and hit testing.

use glam::Vec2;

/// Interior angle at `vertex` of the triangle `vertex, p1, p2`, in degrees.
///
/// Uses the law of cosines with the cosine clamped to [-1, 1] so collinear
/// or coincident inputs stay finite. Degenerate triangles return 0.
pub fn angle_at_deg(vertex: Vec2, p1: Vec2, p2: Vec2) -> f32 {
    let a = p1.distance(p2);
    let b = vertex.distance(p2);
    let c = vertex.distance(p1);
    if b * c == 0.0 {
        return 0.0;
    }
    let cos_angle = (b * b + c * c - a * a) / (2.0 * b * c);
    cos_angle.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Even-odd point-in-polygon test.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let mut inside = false;
    let mut j = polygon.len().wrapping_sub(1);
    for i in 0..polygon.len() {
        let pi = polygon[i];
        let pj = polygon[j];
        let crosses = (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_right_angle() {
        let angle = angle_at_deg(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        );
        assert_relative_eq!(angle, 90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_degenerate_angle_is_zero() {
        let p = Vec2::new(2.0, 3.0);
        assert_eq!(angle_at_deg(p, p, Vec2::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_point_in_square() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        assert!(point_in_polygon(Vec2::new(1.0, 1.0), &square));
        assert!(!point_in_polygon(Vec2::new(3.0, 1.0), &square));
        assert!(!point_in_polygon(Vec2::new(-0.1, 1.0), &square));
    }

    #[test]
    fn test_point_in_triangle() {
        let triangle = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(2.0, 3.0),
        ];
        assert!(point_in_polygon(Vec2::new(2.0, 1.0), &triangle));
        assert!(!point_in_polygon(Vec2::new(0.1, 2.9), &triangle));
    }
}
