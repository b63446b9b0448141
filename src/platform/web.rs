//! wasm-bindgen surface for the browser front end
//!
//! ```js
//! const demo = new SphereDemo();
//! function frame(ms) {
//!   demo.frame(ms);
//!   const data = demo.instances(); // 8 floats per sphere
//!   ...
//!   requestAnimationFrame(frame);
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::clock::FrameClock;
use crate::render::{SphereInstance, instances_as_floats};
use crate::settings::Settings;
use crate::sim::{World, WorldConfig};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Sphere Box loaded");
}

/// Simulation plus frame clock, owned by the page
#[wasm_bindgen]
pub struct SphereDemo {
    world: World,
    clock: FrameClock,
    settings: Settings,
}

#[wasm_bindgen]
impl SphereDemo {
    /// Start from the saved settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SphereDemo, JsValue> {
        let settings = Settings::load();
        let config = WorldConfig::default().with_gravity(settings.gravity);
        let mut world =
            World::new(config, super::time_seed()).map_err(|e| JsValue::from_str(&e.to_string()))?;
        world.generate(settings.sphere_count as usize);

        Ok(Self {
            world,
            clock: FrameClock::default(),
            settings,
        })
    }

    /// Regenerate from the raw form values and remember them
    pub fn reset(&mut self, count: &str, gravity: &str) -> Result<(), JsValue> {
        let settings = Settings::from_form(count, gravity);
        self.world
            .reset(settings.sphere_count as usize, settings.gravity)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.clock.reset();
        settings.save();
        self.settings = settings;
        Ok(())
    }

    /// Advance by the time since the previous frame
    pub fn frame(&mut self, now_ms: f64) {
        let dt = self.clock.tick_ms(now_ms);
        self.world.step(dt);
    }

    pub fn len(&self) -> usize {
        self.world.len()
    }

    pub fn is_empty(&self) -> bool {
        self.world.is_empty()
    }

    pub fn radius(&self) -> f32 {
        self.world.config.radius
    }

    #[wasm_bindgen(getter)]
    pub fn sphere_count(&self) -> u32 {
        self.settings.sphere_count
    }

    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> f32 {
        self.settings.gravity
    }

    /// Position, radius and color per sphere, `SphereInstance::STRIDE` floats each
    pub fn instances(&self) -> Vec<f32> {
        let instances: Vec<SphereInstance> = self.world.instances();
        instances_as_floats(&instances).to_vec()
    }
}
