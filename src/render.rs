//! Render snapshot
//!
//! The renderer only ever sees copies of position, radius and color. Layout
//! matches a per-instance vertex buffer (two vec4s).

use bytemuck::{Pod, Zeroable};

use crate::sim::World;

/// One sphere as uploaded to the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

impl SphereInstance {
    pub const fn new(position: [f32; 3], radius: f32, color: [f32; 3]) -> Self {
        Self {
            position,
            radius,
            color,
            _pad: 0.0,
        }
    }

    /// Floats per instance
    pub const STRIDE: usize = std::mem::size_of::<SphereInstance>() / std::mem::size_of::<f32>();
}

impl World {
    /// Snapshot of the population for drawing
    pub fn instances(&self) -> Vec<SphereInstance> {
        self.spheres
            .iter()
            .map(|s| {
                SphereInstance::new(s.position.to_array(), self.config.radius, s.color.to_array())
            })
            .collect()
    }
}

/// Flatten instances for a float buffer upload
pub fn instances_as_floats(instances: &[SphereInstance]) -> &[f32] {
    bytemuck::cast_slice(instances)
}
