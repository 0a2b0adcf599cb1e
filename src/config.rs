//! Simulation tuning constants and initial layout.
//!
//! Every hand-tuned constant lives here as a named field with a documented
//! default. The defaults are chosen so the explicit integrator stays stable
//! at the default stiffness and timestep; stiffness, timestep, and substeps
//! are the knobs to move together if you change one of them.

use glam::Vec3;

/// Initial placement of the grid before any forces act on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Grid spans the xy-plane: a hanging curtain or flag.
    Vertical,
    /// Grid spans the xz-plane: a flat sheet, e.g. a parachute canopy.
    Horizontal,
}

/// Tuning constants for a [`Cloth`](crate::Cloth).
///
/// Construct with [`ClothConfig::default`] and override individual fields,
/// or go through the [`ClothBuilder`](crate::ClothBuilder) `with_*` methods.
///
/// # Stability
///
/// The integrator is forward Euler, so `stiffness`, `timestep`, and
/// `substeps` are coupled: stiffer springs need a smaller effective step.
/// The defaults run two sub-steps of 1/1200 s per tick, which holds up at
/// the default stiffness for grids well past 50x50.
#[derive(Clone, Copy, Debug)]
pub struct ClothConfig {
    /// Spring constant Ks for every link. Default: `40.0`.
    pub stiffness: f32,
    /// Damping constant Kd for every link. Default: `0.05`.
    pub damping: f32,
    /// Gravitational acceleration. Default: `(0, -9.8, 0)`.
    pub gravity: Vec3,
    /// Sub-steps per [`tick`](crate::Cloth::tick). Default: `2`.
    pub substeps: u32,
    /// Fixed integrator timestep in seconds. Default: `1.0 / 1200.0`.
    pub timestep: f32,
    /// Ambient air density for the drag model. Default: `1.225` (sea level).
    pub air_density: f32,
    /// Aerodynamic drag coefficient. Default: `1.0`.
    pub drag: f32,
    /// Ground bounce attenuation in `(0, 1)`. Default: `0.5`.
    pub elasticity: f32,
    /// Horizontal velocity loss on ground contact in `(0, 1)`. Default: `0.1`.
    pub friction: f32,
    /// Bias added by [`set_ground_height`](crate::Cloth::set_ground_height)
    /// to keep the cloth from z-fighting the ground plane. Default: `0.001`.
    pub ground_epsilon: f32,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            stiffness: 40.0,
            damping: 0.05,
            gravity: Vec3::new(0.0, -9.8, 0.0),
            substeps: 2,
            timestep: 1.0 / 1200.0,
            air_density: 1.225,
            drag: 1.0,
            elasticity: 0.5,
            friction: 0.1,
            ground_epsilon: 0.001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = ClothConfig::default();
        assert_eq!(config.stiffness, 40.0);
        assert_eq!(config.damping, 0.05);
        assert_eq!(config.gravity, Vec3::new(0.0, -9.8, 0.0));
        assert_eq!(config.substeps, 2);
        assert_eq!(config.timestep, 1.0 / 1200.0);
        assert_eq!(config.air_density, 1.225);
        assert_eq!(config.drag, 1.0);
        assert_eq!(config.elasticity, 0.5);
        assert_eq!(config.friction, 0.1);
        assert_eq!(config.ground_epsilon, 0.001);
    }
}
