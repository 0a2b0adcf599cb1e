//! # Drape - Real-Time Cloth Simulation
//!
//! A spring-damper cloth simulator with a simple, declarative API.
//!
//! Drape owns the physics (mass points, spring networks, aerodynamic drag,
//! integration, ground collision) and hands you render-ready buffers, so the
//! renderer on top only ever uploads positions, normals, and indices.
//!
//! ## Quick Start
//!
//! ```
//! use drape::prelude::*;
//!
//! // A 20x20 curtain pinned along its top edge, in a light breeze.
//! let mut cloth = Cloth::curtain(20, 20).unwrap();
//!
//! // Frame loop: advance the simulation, then upload the refreshed buffers.
//! for _ in 0..3 {
//!     cloth.tick();
//!     let _positions = cloth.position_bytes();
//!     let _normals = cloth.normal_bytes();
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Grid & topology
//!
//! A [`Cloth`] is a `rows x cols` grid of [`MassPoint`]s. Construction wires
//! the grid once: structural [`SpringDamper`] links between orthogonal
//! neighbors, shear links across both cell diagonals, and two
//! [`AeroTriangle`]s per cell for drag and shading. Topology never changes
//! after `build()`; only point state evolves.
//!
//! ### The tick
//!
//! [`Cloth::tick`] advances one visible frame as several small fixed
//! sub-steps (oversampling keeps forward Euler stable against stiff
//! springs). Each sub-step accumulates spring, aerodynamic, and gravity
//! forces into every point, integrates, and resolves ground contact. Use
//! [`StepClock`] to decide how many ticks a variable-rate frame owes.
//!
//! ### Pinning
//!
//! Pinned points are excluded from integration and act as anchors:
//!
//! ```
//! use drape::prelude::*;
//!
//! let mut cloth = Cloth::builder(10, 10).build().unwrap();
//! cloth.set_fixed_row(0);                      // row 0 = top row
//! cloth.set_fixed_point(9, 0);                 // bottom-left corner
//! cloth.translate_fixed(Vec3::new(0.1, 0.0, 0.0)); // drag the anchors
//! ```
//!
//! ### Wind
//!
//! Aerodynamic force follows a flat-plate drag model per surface triangle:
//! relative air flow projected onto the face normal, scaled by face area
//! and relative speed. Steer it at runtime with
//! [`set_wind`](Cloth::set_wind).
//!
//! ### Tuning
//!
//! Every constant (stiffness, damping, gravity, timestep, sub-step count,
//! ground response) lives in [`ClothConfig`] with documented defaults; the
//! [`ClothBuilder`] exposes `with_*` overrides for each.
//!
//! ## Presets
//!
//! Common scene setups available as one-liners:
//!
//! ```
//! # use drape::Cloth;
//! let curtain = Cloth::curtain(50, 50).unwrap();   // pinned top row
//! let flag = Cloth::flag(50, 60).unwrap();         // pinned left edge, stiff wind
//! let parachute = Cloth::parachute(40, 40).unwrap(); // pinned corners, updraft
//! ```

mod aero;
mod cloth;
pub mod clock;
pub mod config;
pub mod error;
mod point;
mod spring;

pub use aero::AeroTriangle;
pub use bytemuck;
pub use cloth::{Cloth, ClothBuilder};
pub use clock::StepClock;
pub use config::{ClothConfig, Layout};
pub use error::ConfigError;
pub use glam::Vec3;
pub use point::MassPoint;
pub use spring::SpringDamper;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```
/// use drape::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clock::StepClock;
    pub use crate::config::{ClothConfig, Layout};
    pub use crate::error::ConfigError;
    pub use crate::Vec3;
    pub use crate::{AeroTriangle, Cloth, ClothBuilder, MassPoint, SpringDamper};
}
