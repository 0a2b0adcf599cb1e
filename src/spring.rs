//! Spring-dampers linking pairs of mass points.
//!
//! The cloth mesh is held together by a network of these links: structural
//! links between orthogonal grid neighbors and shear links across the cell
//! diagonals. Each link is stateless beyond its topology and constants; the
//! force is recomputed from current positions and velocities every sub-step.

use crate::point::MassPoint;

/// A spring-damper connecting two points in the cloth's point arena.
///
/// Endpoints are arena indices, so links stay valid for the lifetime of the
/// owning cloth without holding references into it.
#[derive(Clone, Copy, Debug)]
pub struct SpringDamper {
    /// Index of the first endpoint.
    pub p1: usize,
    /// Index of the second endpoint.
    pub p2: usize,
    /// Natural length at which the spring term vanishes.
    pub rest_length: f32,
    /// Spring constant (Ks).
    pub stiffness: f32,
    /// Damping constant (Kd).
    pub damping: f32,
}

impl SpringDamper {
    /// Create a link between the points at `p1` and `p2`.
    pub fn new(p1: usize, p2: usize, rest_length: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            p1,
            p2,
            rest_length,
            stiffness,
            damping,
        }
    }

    /// Evaluate the spring-damper force and accumulate it into both endpoints.
    ///
    /// The spring term pulls the pair back toward `rest_length`; the damping
    /// term opposes relative velocity projected onto the spring axis. The two
    /// endpoints always receive exact opposite forces, so a link contributes
    /// no net momentum.
    ///
    /// Coincident endpoints have no defined axis; the evaluation is skipped
    /// for that sub-step.
    pub fn apply(&self, points: &mut [MassPoint]) {
        let e = points[self.p2].position - points[self.p1].position;
        let len = e.length();
        if len == 0.0 {
            return;
        }
        let dir = e / len;

        let f_spring = -self.stiffness * (self.rest_length - len);
        let f_damp = -self.damping
            * (points[self.p1].velocity.dot(dir) - points[self.p2].velocity.dot(dir));
        let f1 = (f_spring + f_damp) * dir;

        points[self.p1].apply_force(f1);
        points[self.p2].apply_force(-f1);
    }
}
