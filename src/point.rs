//! Mass points - the particles that make up a cloth mesh.
//!
//! Each point carries its own dynamics state (position, velocity, a force
//! accumulator) plus a shading normal maintained by the owning [`Cloth`].
//! Points are stored in a row-major arena inside the cloth body; springs and
//! triangles address them by index rather than by reference.
//!
//! [`Cloth`]: crate::Cloth

use glam::Vec3;

/// A single simulated point mass.
///
/// Forces from springs, aerodynamics, and gravity accumulate into `force`
/// over a sub-step; [`integrate`](MassPoint::integrate) then consumes the
/// accumulator exactly once. Pinned points act as fixed anchors: they still
/// collect forces but never move.
#[derive(Clone, Copy, Debug)]
pub struct MassPoint {
    /// World-space position.
    pub position: Vec3,
    /// Current velocity.
    pub velocity: Vec3,
    /// Force accumulator, cleared by integration.
    pub force: Vec3,
    /// Smoothed shading normal (not dynamics state).
    pub normal: Vec3,
    /// Point mass, always positive.
    pub mass: f32,
    /// Pinned points are excluded from integration.
    pub pinned: bool,
}

impl MassPoint {
    /// Create a point at rest at `position`.
    pub fn new(position: Vec3, mass: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            force: Vec3::ZERO,
            normal: Vec3::ZERO,
            mass,
            pinned: false,
        }
    }

    /// Add a force contribution into the accumulator.
    ///
    /// Contributions are summed, never overwritten, so any number of springs,
    /// triangles, and gravity can apply in any order within a sub-step.
    #[inline]
    pub fn apply_force(&mut self, force: Vec3) {
        self.force += force;
    }

    /// Advance one forward-Euler step and clear the force accumulator.
    ///
    /// Pinned points are left untouched. Forward Euler is only conditionally
    /// stable for stiff springs, which is why [`Cloth::tick`] runs several
    /// sub-steps at a small fixed `dt` rather than one large step.
    ///
    /// [`Cloth::tick`]: crate::Cloth::tick
    pub fn integrate(&mut self, dt: f32) {
        if self.pinned {
            return;
        }
        self.velocity += dt * (self.force / self.mass);
        self.position += dt * self.velocity;
        self.force = Vec3::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_point_at_rest() {
        let p = MassPoint::new(Vec3::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(p.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p.velocity, Vec3::ZERO);
        assert_eq!(p.force, Vec3::ZERO);
        assert!(!p.pinned);
    }

    #[test]
    fn test_forces_accumulate() {
        let mut p = MassPoint::new(Vec3::ZERO, 1.0);
        p.apply_force(Vec3::new(1.0, 0.0, 0.0));
        p.apply_force(Vec3::new(0.0, -2.0, 0.0));
        p.apply_force(Vec3::new(1.0, 0.0, 3.0));
        assert_eq!(p.force, Vec3::new(2.0, -2.0, 3.0));
    }

    #[test]
    fn test_integrate_forward_euler() {
        let mut p = MassPoint::new(Vec3::ZERO, 2.0);
        p.apply_force(Vec3::new(0.0, -4.0, 0.0));
        p.integrate(0.5);

        // v = dt * f / m = 0.5 * (0, -4, 0) / 2 = (0, -1, 0)
        // p = dt * v = 0.5 * (0, -1, 0) = (0, -0.5, 0)
        assert_eq!(p.velocity, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(p.position, Vec3::new(0.0, -0.5, 0.0));
        assert_eq!(p.force, Vec3::ZERO);
    }

    #[test]
    fn test_pinned_point_never_moves() {
        let mut p = MassPoint::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        p.pinned = true;
        p.velocity = Vec3::ZERO;
        p.apply_force(Vec3::new(100.0, -100.0, 100.0));

        for _ in 0..10 {
            p.integrate(1.0 / 60.0);
        }

        assert_eq!(p.position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(p.velocity, Vec3::ZERO);
    }
}
