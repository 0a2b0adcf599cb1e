//! Aerodynamic surface triangles.
//!
//! The cloth surface is triangulated two triangles per grid cell. Each
//! triangle computes a flat-plate drag force from the relative motion of its
//! face against the ambient air and splits the result evenly across its
//! three vertices. The same triangulation later drives smooth shading, but
//! the drag calculation always uses the freshly recomputed face normal, not
//! the smoothed per-point one.

use crate::point::MassPoint;
use glam::Vec3;

/// A surface triangle over three points in the cloth's point arena.
///
/// The winding order of `a`, `b`, `c` determines the sign of the face normal
/// and matches the render index order emitted by the owning cloth.
#[derive(Clone, Copy, Debug)]
pub struct AeroTriangle {
    /// Index of the first vertex.
    pub a: usize,
    /// Index of the second vertex.
    pub b: usize,
    /// Index of the third vertex.
    pub c: usize,
    /// Cached unit face normal, refreshed every step.
    pub normal: Vec3,
}

impl AeroTriangle {
    /// Create a triangle over the points at `a`, `b`, `c`.
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self {
            a,
            b,
            c,
            normal: Vec3::ZERO,
        }
    }

    /// Recompute the cached unit face normal from current vertex positions.
    ///
    /// Collinear vertices leave a zero normal, which downstream shading
    /// tolerates (a degenerate face simply contributes nothing).
    pub fn update_normal(&mut self, points: &[MassPoint]) {
        let ab = points[self.b].position - points[self.a].position;
        let ac = points[self.c].position - points[self.a].position;
        self.normal = ab.cross(ac).normalize_or_zero();
    }

    /// Apply flat-plate drag from the relative air flow to all three vertices.
    ///
    /// The relative flow is the average vertex velocity minus `air_velocity`;
    /// no relative motion means no drag. The force scales with the projected
    /// area (`dot(v, n)` times the face area) and the relative speed, and its
    /// sign follows the flow direction against the face.
    ///
    /// Degenerate (collinear) triangles produce no force for the sub-step.
    pub fn apply_aero_force(
        &mut self,
        points: &mut [MassPoint],
        air_velocity: Vec3,
        density: f32,
        drag: f32,
    ) {
        let v = (points[self.a].velocity + points[self.b].velocity + points[self.c].velocity)
            / 3.0
            - air_velocity;
        let v_len = v.length();
        if v_len == 0.0 {
            return;
        }

        let ab = points[self.b].position - points[self.a].position;
        let ac = points[self.c].position - points[self.a].position;
        let cross = ab.cross(ac);
        // Cross-product magnitude is twice the triangle area.
        let doubled_area = cross.length();
        if doubled_area == 0.0 {
            self.normal = Vec3::ZERO;
            return;
        }
        self.normal = cross / doubled_area;

        let f_aero =
            -0.25 * density * doubled_area * v.dot(self.normal) * v_len * drag * self.normal;

        let f_each = f_aero / 3.0;
        points[self.a].apply_force(f_each);
        points[self.b].apply_force(f_each);
        points[self.c].apply_force(f_each);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unit right triangle in the xy-plane, wound so the normal faces +z.
    fn tri_points() -> Vec<MassPoint> {
        vec![
            MassPoint::new(Vec3::ZERO, 1.0),
            MassPoint::new(Vec3::new(1.0, 0.0, 0.0), 1.0),
            MassPoint::new(Vec3::new(0.0, 1.0, 0.0), 1.0),
        ]
    }

    #[test]
    fn test_update_normal_follows_winding() {
        let points = tri_points();
        let mut tri = AeroTriangle::new(0, 1, 2);
        tri.update_normal(&points);
        assert_eq!(tri.normal, Vec3::Z);

        // Reversed winding flips the normal.
        let mut flipped = AeroTriangle::new(0, 2, 1);
        flipped.update_normal(&points);
        assert_eq!(flipped.normal, -Vec3::Z);
    }

    #[test]
    fn test_collinear_triangle_has_zero_normal() {
        let points = vec![
            MassPoint::new(Vec3::ZERO, 1.0),
            MassPoint::new(Vec3::new(1.0, 0.0, 0.0), 1.0),
            MassPoint::new(Vec3::new(2.0, 0.0, 0.0), 1.0),
        ];
        let mut tri = AeroTriangle::new(0, 1, 2);
        tri.update_normal(&points);
        assert_eq!(tri.normal, Vec3::ZERO);

        let mut points = points;
        tri.apply_aero_force(&mut points, Vec3::new(0.0, 0.0, 5.0), 1.225, 1.0);
        for p in &points {
            assert_eq!(p.force, Vec3::ZERO);
        }
    }

    #[test]
    fn test_no_relative_flow_means_no_force() {
        let mut points = tri_points();
        // Vertices moving exactly with the air.
        let air = Vec3::new(0.0, 0.0, 2.0);
        for p in &mut points {
            p.velocity = air;
        }
        let mut tri = AeroTriangle::new(0, 1, 2);

        tri.apply_aero_force(&mut points, air, 1.225, 1.0);

        for p in &points {
            assert_eq!(p.force, Vec3::ZERO);
        }
    }

    #[test]
    fn test_flow_along_normal_pushes_along_normal() {
        let mut points = tri_points();
        // Still cloth, air blowing along +z: relative flow is -z, so the
        // resulting force must point along +z (with the wind).
        let mut tri = AeroTriangle::new(0, 1, 2);

        tri.apply_aero_force(&mut points, Vec3::new(0.0, 0.0, 3.0), 1.225, 1.0);

        for p in &points {
            assert!(p.force.z > 0.0);
            assert_eq!(p.force.x, 0.0);
            assert_eq!(p.force.y, 0.0);
        }
    }

    #[test]
    fn test_force_sign_opposes_flow_projection() {
        // Flow with the normal: dot(v, n) > 0, force must point against n.
        let mut points = tri_points();
        for p in &mut points {
            p.velocity = Vec3::new(0.0, 0.0, 2.0);
        }
        let mut tri = AeroTriangle::new(0, 1, 2);
        tri.apply_aero_force(&mut points, Vec3::ZERO, 1.225, 1.0);
        for p in &points {
            assert!(p.force.z < 0.0);
        }
    }

    #[test]
    fn test_force_split_evenly_across_vertices() {
        let mut points = tri_points();
        let mut tri = AeroTriangle::new(0, 1, 2);

        tri.apply_aero_force(&mut points, Vec3::new(0.5, 0.0, 1.5), 1.225, 1.0);

        assert_eq!(points[0].force, points[1].force);
        assert_eq!(points[1].force, points[2].force);
    }
}
