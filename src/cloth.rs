//! Cloth bodies - grid construction, the simulation step, and the render
//! boundary.
//!
//! A [`Cloth`] owns a row-major arena of [`MassPoint`]s, the spring-damper
//! network that holds the grid together, and the surface triangulation used
//! for both aerodynamics and shading. [`Cloth::tick`] advances the whole
//! system by one frame's worth of fixed sub-steps; the refreshed position
//! and normal buffers are then ready for GPU upload by whatever renderer
//! sits on top.
//!
//! # Coordinate conventions
//!
//! Points are stored bottom-up: internal row 0 is the lowest row of the
//! grid. The pinning API counts rows from the top instead ("pin row 0" pins
//! the top edge of a curtain). Columns are counted left to right in both
//! views.

use crate::aero::AeroTriangle;
use crate::config::{ClothConfig, Layout};
use crate::error::ConfigError;
use crate::point::MassPoint;
use crate::spring::SpringDamper;
use glam::Vec3;

/// Builder for [`Cloth`].
///
/// Start from [`Cloth::builder`], chain configuration, then call
/// [`build`](ClothBuilder::build):
///
/// ```
/// use drape::{Cloth, Layout, Vec3};
///
/// let cloth = Cloth::builder(20, 20)
///     .with_spacing(0.06)
///     .with_total_mass(1.0)
///     .with_layout(Layout::Vertical)
///     .with_wind(Vec3::new(1.0, 0.0, 0.5))
///     .build()
///     .unwrap();
/// assert_eq!(cloth.point_count(), 400);
/// ```
pub struct ClothBuilder {
    rows: usize,
    cols: usize,
    spacing: f32,
    total_mass: f32,
    layout: Layout,
    wind: Vec3,
    ground_height: f32,
    config: ClothConfig,
}

impl ClothBuilder {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            spacing: 0.06,
            total_mass: 1.0,
            layout: Layout::Vertical,
            wind: Vec3::ZERO,
            ground_height: -2.5,
            config: ClothConfig::default(),
        }
    }

    /// Set the distance between neighboring grid points.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the total cloth mass, distributed evenly over all points.
    pub fn with_total_mass(mut self, total_mass: f32) -> Self {
        self.total_mass = total_mass;
        self
    }

    /// Set the initial grid placement.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the initial wind velocity.
    pub fn with_wind(mut self, wind: Vec3) -> Self {
        self.wind = wind;
        self
    }

    /// Set the ground plane height (no epsilon bias is applied here).
    pub fn with_ground_height(mut self, height: f32) -> Self {
        self.ground_height = height;
        self
    }

    /// Replace the whole tuning config at once.
    pub fn with_config(mut self, config: ClothConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the spring constant for every link.
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.config.stiffness = stiffness;
        self
    }

    /// Set the damping constant for every link.
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.config.damping = damping;
        self
    }

    /// Set the gravitational acceleration.
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.config.gravity = gravity;
        self
    }

    /// Set the number of sub-steps per [`Cloth::tick`].
    pub fn with_substeps(mut self, substeps: u32) -> Self {
        self.config.substeps = substeps;
        self
    }

    /// Set the fixed integrator timestep in seconds.
    pub fn with_timestep(mut self, timestep: f32) -> Self {
        self.config.timestep = timestep;
        self
    }

    /// Validate the parameters and construct the cloth.
    ///
    /// Topology (links, triangles, render indices) is built here once and
    /// never changes afterward; only point state evolves per tick.
    pub fn build(self) -> Result<Cloth, ConfigError> {
        if self.rows < 2 || self.cols < 2 {
            return Err(ConfigError::GridTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(self.spacing > 0.0) {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        if !(self.total_mass > 0.0) {
            return Err(ConfigError::InvalidMass(self.total_mass));
        }
        Ok(Cloth::from_builder(self))
    }
}

/// A simulated rectangular cloth.
///
/// See the [module docs](self) for the coordinate conventions and the
/// [crate docs](crate) for a walkthrough of the simulation step.
pub struct Cloth {
    rows: usize,
    cols: usize,
    spacing: f32,
    wind: Vec3,
    ground_height: f32,
    config: ClothConfig,

    points: Vec<MassPoint>,
    springs: Vec<SpringDamper>,
    triangles: Vec<AeroTriangle>,
    fixed_ids: Vec<usize>,

    // Render staging, refreshed once per tick.
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Cloth {
    /// Start building a cloth with `rows x cols` points.
    pub fn builder(rows: usize, cols: usize) -> ClothBuilder {
        ClothBuilder::new(rows, cols)
    }

    // =========================================================================
    // PRESETS
    // =========================================================================

    /// Curtain preset: a vertical sheet pinned along its top row, with a
    /// light breeze.
    pub fn curtain(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let mut cloth = Cloth::builder(rows, cols)
            .with_layout(Layout::Vertical)
            .with_wind(Vec3::new(1.2, 0.0, 1.0))
            .build()?;
        cloth.set_fixed_row(0);
        Ok(cloth)
    }

    /// Flag preset: a vertical sheet held at the top, middle, and bottom of
    /// its left edge (as if hoisted on a pole), in a stiff wind.
    ///
    /// Drag the pole with [`translate_fixed`](Cloth::translate_fixed).
    pub fn flag(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let mut cloth = Cloth::builder(rows, cols)
            .with_layout(Layout::Vertical)
            .with_wind(Vec3::new(4.5, 0.0, 1.2))
            .build()?;
        cloth.set_fixed_point(0, 0);
        cloth.set_fixed_point((rows - 1) / 2, 0);
        cloth.set_fixed_point(rows - 1, 0);
        Ok(cloth)
    }

    /// Parachute preset: a horizontal sheet pinned at its four corners,
    /// with an updraft.
    pub fn parachute(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let mut cloth = Cloth::builder(rows, cols)
            .with_layout(Layout::Horizontal)
            .with_wind(Vec3::new(0.0, 5.0, -0.2))
            .build()?;
        cloth.set_fixed_point(0, 0);
        cloth.set_fixed_point(0, cols - 1);
        cloth.set_fixed_point(rows - 1, cols - 1);
        cloth.set_fixed_point(rows - 1, 0);
        Ok(cloth)
    }

    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    fn from_builder(builder: ClothBuilder) -> Self {
        let ClothBuilder {
            rows,
            cols,
            spacing,
            total_mass,
            layout,
            wind,
            ground_height,
            config,
        } = builder;

        let count = rows * cols;
        let mut cloth = Self {
            rows,
            cols,
            spacing,
            wind,
            ground_height,
            config,
            points: Vec::with_capacity(count),
            springs: Vec::new(),
            triangles: Vec::new(),
            fixed_ids: Vec::new(),
            positions: vec![Vec3::ZERO; count],
            normals: vec![Vec3::ZERO; count],
            indices: Vec::new(),
        };

        cloth.init_points(layout, total_mass / count as f32);
        cloth.init_springs();
        cloth.init_triangles();

        for (i, point) in cloth.points.iter().enumerate() {
            cloth.positions[i] = point.position;
        }
        cloth.update_normals();

        cloth
    }

    /// Lay the grid out centered on the origin, bottom row first.
    fn init_points(&mut self, layout: Layout, mass: f32) {
        let half_rows = self.rows as f32 / 2.0;
        let half_cols = self.cols as f32 / 2.0;

        for h in 0..self.rows {
            for w in 0..self.cols {
                let u = self.spacing * (w as f32 - half_cols);
                let v = self.spacing * (h as f32 - half_rows);
                let position = match layout {
                    Layout::Vertical => Vec3::new(u, v, 0.0),
                    Layout::Horizontal => Vec3::new(u, 0.0, -v),
                };
                self.points.push(MassPoint::new(position, mass));
            }
        }
    }

    /// Build the structural and shear link network.
    ///
    /// Every point links to its +row and +col neighbor at rest length
    /// `spacing`; each cell additionally gets both diagonals at
    /// `spacing * sqrt(2)`. Edge rows/cols skip the missing neighbors, no
    /// wraparound.
    fn init_springs(&mut self) {
        let len = self.spacing;
        let diag_len = len * std::f32::consts::SQRT_2;
        let ks = self.config.stiffness;
        let kd = self.config.damping;

        for h in 0..self.rows {
            let row_offset = h * self.cols;
            for w in 0..self.cols {
                let curr = row_offset + w;
                let right = curr + 1;
                let up = curr + self.cols;
                let up_right = up + 1;

                if h < self.rows - 1 {
                    self.springs.push(SpringDamper::new(curr, up, len, ks, kd));
                    if w < self.cols - 1 {
                        self.springs.push(SpringDamper::new(curr, right, len, ks, kd));
                        self.springs
                            .push(SpringDamper::new(up, right, diag_len, ks, kd));
                        self.springs
                            .push(SpringDamper::new(curr, up_right, diag_len, ks, kd));
                    }
                } else if w < self.cols - 1 {
                    self.springs.push(SpringDamper::new(curr, right, len, ks, kd));
                }
            }
        }
    }

    /// Cut each grid cell into two triangles along the up-right diagonal.
    ///
    /// Winding is consistent across the sheet so face normals agree, and the
    /// render index order matches the triangle vertex order exactly.
    fn init_triangles(&mut self) {
        for h in 0..self.rows - 1 {
            let row_offset = h * self.cols;
            for w in 0..self.cols - 1 {
                let curr = row_offset + w;
                let right = curr + 1;
                let up = curr + self.cols;
                let up_right = up + 1;

                self.triangles.push(AeroTriangle::new(curr, up_right, up));
                self.triangles.push(AeroTriangle::new(curr, right, up_right));
                self.indices
                    .extend_from_slice(&[curr as u32, up_right as u32, up as u32]);
                self.indices
                    .extend_from_slice(&[curr as u32, right as u32, up_right as u32]);
            }
        }
    }

    // =========================================================================
    // SIMULATION
    // =========================================================================

    /// Advance the simulation by one externally visible frame.
    ///
    /// Runs `config.substeps` identical sub-steps at the fixed timestep. The
    /// order within a sub-step is fixed:
    ///
    /// 1. every spring-damper accumulates into its two endpoints,
    /// 2. every triangle recomputes its normal and accumulates drag,
    /// 3. every point accumulates gravity, integrates, then resolves ground
    ///    contact.
    ///
    /// Afterward the position and shading-normal buffers are refreshed for
    /// the render boundary.
    pub fn tick(&mut self) {
        let dt = self.config.timestep;
        let gravity = self.config.gravity;
        let ground = self.ground_height;
        let elasticity = self.config.elasticity;
        let friction = self.config.friction;

        for _ in 0..self.config.substeps {
            for spring in &self.springs {
                spring.apply(&mut self.points);
            }
            for tri in &mut self.triangles {
                tri.apply_aero_force(
                    &mut self.points,
                    self.wind,
                    self.config.air_density,
                    self.config.drag,
                );
            }
            for point in &mut self.points {
                point.apply_force(point.mass * gravity);
                point.integrate(dt);
                resolve_ground(point, ground, elasticity, friction);
            }
        }

        for (staged, point) in self.positions.iter_mut().zip(self.points.iter()) {
            *staged = point.position;
        }
        self.update_normals();
    }

    /// Recompute smooth per-point shading normals from current positions.
    ///
    /// Each point's normal is the unit-normalized sum of the face normals of
    /// every incident triangle. Points whose incident faces are all
    /// degenerate keep a zero normal. Calling this twice without moving any
    /// point yields identical results.
    ///
    /// [`tick`](Cloth::tick) calls this automatically; call it directly only
    /// after repositioning points out-of-band (e.g. a large
    /// [`translate_fixed`](Cloth::translate_fixed) while paused).
    pub fn update_normals(&mut self) {
        for point in &mut self.points {
            point.normal = Vec3::ZERO;
        }

        for tri in &mut self.triangles {
            tri.update_normal(&self.points);
        }
        for tri in &self.triangles {
            self.points[tri.a].normal += tri.normal;
            self.points[tri.b].normal += tri.normal;
            self.points[tri.c].normal += tri.normal;
        }

        for (staged, point) in self.normals.iter_mut().zip(self.points.iter_mut()) {
            point.normal = point.normal.normalize_or_zero();
            *staged = point.normal;
        }
    }

    // =========================================================================
    // PINNING
    // =========================================================================

    /// Pin every point in a row. Row 0 is the topmost row; out-of-range rows
    /// are ignored.
    pub fn set_fixed_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let r = (self.rows - 1) - row;
        for id in r * self.cols..(r + 1) * self.cols {
            self.points[id].pinned = true;
            self.fixed_ids.push(id);
        }
    }

    /// Pin every point in a column. Out-of-range columns are ignored.
    pub fn set_fixed_col(&mut self, col: usize) {
        if col >= self.cols {
            return;
        }
        let mut id = col;
        while id < self.points.len() {
            self.points[id].pinned = true;
            self.fixed_ids.push(id);
            id += self.cols;
        }
    }

    /// Pin a single point and return its current position (e.g. to attach a
    /// visual marker). Row 0 is the topmost row; out-of-range indices pin
    /// nothing and return [`Vec3::ZERO`].
    pub fn set_fixed_point(&mut self, row: usize, col: usize) -> Vec3 {
        if row >= self.rows || col >= self.cols {
            return Vec3::ZERO;
        }
        let r = (self.rows - 1) - row;
        let id = r * self.cols + col;
        self.points[id].pinned = true;
        self.fixed_ids.push(id);
        self.points[id].position
    }

    /// Move every pinned point by a uniform offset.
    ///
    /// This is how an external actor drags the anchored part of the cloth
    /// around (someone carrying a flag pole); the free points catch up
    /// through the spring network over subsequent ticks.
    pub fn translate_fixed(&mut self, offset: Vec3) {
        for &id in &self.fixed_ids {
            self.points[id].position += offset;
            self.positions[id] = self.points[id].position;
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Set the ambient wind velocity.
    pub fn set_wind(&mut self, wind: Vec3) {
        self.wind = wind;
    }

    /// Current ambient wind velocity.
    #[inline]
    pub fn wind(&self) -> Vec3 {
        self.wind
    }

    /// Set the ground plane height.
    ///
    /// A small epsilon (`config.ground_epsilon`) is added so the resting
    /// cloth sits just above the visual ground plane instead of z-fighting
    /// it.
    pub fn set_ground_height(&mut self, height: f32) {
        self.ground_height = height + self.config.ground_epsilon;
    }

    /// Current ground plane height (including the epsilon bias if set via
    /// [`set_ground_height`](Cloth::set_ground_height)).
    #[inline]
    pub fn ground_height(&self) -> f32 {
        self.ground_height
    }

    /// Number of point rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of point columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of points (`rows * cols`).
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Distance between neighboring grid points.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// The tuning constants this cloth was built with.
    #[inline]
    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    /// Read-only view of the point arena, row-major bottom-up.
    #[inline]
    pub fn points(&self) -> &[MassPoint] {
        &self.points
    }

    /// Per-point world positions, row-major, refreshed once per tick.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Per-point unit shading normals, same indexing as
    /// [`positions`](Cloth::positions).
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Surface triangulation indices, two triangles per cell, fixed at
    /// construction.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Position buffer as raw bytes, ready for GPU upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normal buffer as raw bytes, ready for GPU upload.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Index buffer as raw bytes, ready for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Reflect a point that fell through the ground plane.
///
/// Instantaneous per-point correction: mirror the position about the plane,
/// bounce the vertical velocity with attenuation, bleed horizontal velocity
/// through friction. No contact persistence is modeled; a resting point
/// oscillates with decaying amplitude instead.
fn resolve_ground(point: &mut MassPoint, ground_height: f32, elasticity: f32, friction: f32) {
    if point.position.y < ground_height {
        point.position.y = 2.0 * ground_height - point.position.y;
        point.velocity.y = -elasticity * point.velocity.y;
        point.velocity.x *= 1.0 - friction;
        point.velocity.z *= 1.0 - friction;
    }
}
