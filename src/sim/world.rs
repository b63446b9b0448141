//! World state and configuration
//!
//! The world owns the population, the box and the collision parameters.
//! Everything a step reads or writes lives here; there is no ambient state.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::scene::generate_spheres;
use super::sphere::Sphere;
use super::step::{self, StepStats};
use crate::consts::*;
use crate::error::ConfigError;

/// Axis-aligned cube, same bounds on x, y and z
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub low: f32,
    pub high: f32,
}

impl Default for Boundary {
    fn default() -> Self {
        Self {
            low: BOX_LOW,
            high: BOX_HIGH,
        }
    }
}

impl Boundary {
    pub fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.high - self.low
    }

    #[inline]
    pub fn center(&self) -> f32 {
        (self.low + self.high) / 2.0
    }

    /// Lowest legal center coordinate for a sphere of `radius`
    #[inline]
    pub fn min_center(&self, radius: f32) -> f32 {
        self.low + radius
    }

    /// Highest legal center coordinate for a sphere of `radius`
    #[inline]
    pub fn max_center(&self, radius: f32) -> f32 {
        self.high - radius
    }

    /// Whether a sphere centered at `pos` lies fully inside (touching allowed)
    pub fn contains(&self, pos: Vec3, radius: f32) -> bool {
        let lo = self.min_center(radius);
        let hi = self.max_center(radius);
        (0..3).all(|axis| pos[axis] >= lo && pos[axis] <= hi)
    }

    /// Clamp a center into the legal range on every axis
    pub fn clamp(&self, pos: Vec3, radius: f32) -> Vec3 {
        let lo = self.min_center(radius);
        let hi = self.max_center(radius);
        pos.clamp(Vec3::splat(lo), Vec3::splat(hi))
    }
}

/// Physical parameters shared by every sphere in a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub boundary: Boundary,
    /// Shared sphere radius
    pub radius: f32,
    /// Restitution for walls and sphere pairs
    pub elasticity: f32,
    /// Gravity magnitude used when generating spheres
    pub gravity: f32,
    /// Push overlapping pairs apart after velocity resolution
    #[serde(default = "default_depenetration")]
    pub depenetration: bool,
}

fn default_depenetration() -> bool {
    true
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            boundary: Boundary::default(),
            radius: RADIUS,
            elasticity: ELASTICITY,
            gravity: GRAVITY,
            depenetration: true,
        }
    }
}

impl WorldConfig {
    pub fn with_boundary(mut self, low: f32, high: f32) -> Self {
        self.boundary = Boundary::new(low, high);
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = elasticity;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_depenetration(mut self, enabled: bool) -> Self {
        self.depenetration = enabled;
        self
    }

    /// Check the parameters the step relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        let Boundary { low, high } = self.boundary;
        if !(low.is_finite() && high.is_finite()) || high - low <= 2.0 * self.radius {
            return Err(ConfigError::BoxTooSmall {
                low,
                high,
                radius: self.radius,
            });
        }
        if !(0.0..=1.0).contains(&self.elasticity) {
            return Err(ConfigError::InvalidElasticity(self.elasticity));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        Ok(())
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Number of generators handed out so far
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next population; each call yields a fresh sequence
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.stream));
        self.stream += 1;
        rng
    }
}

/// The simulation: population plus everything needed to step it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub config: WorldConfig,
    /// Population; index is identity within a step
    pub spheres: Vec<Sphere>,
    pub rng_state: RngState,
    /// Simulated seconds since the population was generated
    pub time: f32,
    /// Steps since the population was generated
    pub steps: u64,
}

impl World {
    /// Empty world with a validated configuration
    pub fn new(config: WorldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            spheres: Vec::new(),
            rng_state: RngState::new(seed),
            time: 0.0,
            steps: 0,
        })
    }

    /// World with a hand-built population
    pub fn with_spheres(config: WorldConfig, spheres: Vec<Sphere>) -> Result<Self, ConfigError> {
        for (index, sphere) in spheres.iter().enumerate() {
            if !(sphere.mass > 0.0 && sphere.mass.is_finite()) {
                return Err(ConfigError::InvalidMass {
                    index,
                    mass: sphere.mass,
                });
            }
        }
        let mut world = Self::new(config, 0)?;
        world.spheres = spheres;
        Ok(world)
    }

    /// Replace the whole population with `count` random spheres
    pub fn generate(&mut self, count: usize) {
        let mut rng = self.rng_state.next_rng();
        self.spheres = generate_spheres(&mut rng, count, &self.config);
        self.time = 0.0;
        self.steps = 0;
        log::info!(
            "Generated {} spheres (gravity {}, seed {}, stream {})",
            count,
            self.config.gravity,
            self.rng_state.seed,
            self.rng_state.stream - 1
        );
    }

    /// Change gravity, then regenerate the population
    pub fn reset(&mut self, count: usize, gravity: f32) -> Result<(), ConfigError> {
        if !gravity.is_finite() {
            return Err(ConfigError::InvalidGravity(gravity));
        }
        self.config.gravity = gravity;
        self.generate(count);
        Ok(())
    }

    /// Advance the world by `dt` seconds
    pub fn step(&mut self, dt: f32) -> StepStats {
        step::step(self, dt)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Whether every sphere sits inside the box
    pub fn is_contained(&self) -> bool {
        self.spheres
            .iter()
            .all(|s| self.config.boundary.contains(s.position, self.config.radius))
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.spheres.iter().map(Sphere::kinetic_energy).sum()
    }

    pub fn momentum(&self) -> Vec3 {
        self.spheres.iter().map(Sphere::momentum).sum()
    }
}
