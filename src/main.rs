//! Sphere Box entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively this
//! runs the simulation headless for a few seconds and reports what happened.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sphere_box::consts::MAX_FRAME_DT;
    use sphere_box::{FrameClock, Settings, World, WorldConfig};

    env_logger::init();
    log::info!("Sphere Box (native) starting...");

    let settings = Settings::load();
    let config = WorldConfig::default().with_gravity(settings.gravity);
    let seed = sphere_box::platform::time_seed();

    let mut world = match World::new(config, seed) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Invalid world configuration: {}", e);
            std::process::exit(1);
        }
    };
    world.generate(settings.sphere_count as usize);

    // Simulated 60 Hz frames
    let mut clock = FrameClock::new(MAX_FRAME_DT);
    let mut wall_hits = 0;
    let mut pair_impulses = 0;
    for frame in 0..600 {
        let dt = clock.tick(frame as f64 / 60.0);
        let stats = world.step(dt);
        wall_hits += stats.wall_hits;
        pair_impulses += stats.pair_impulses;
    }

    println!(
        "{} spheres, {:.2}s simulated: {} wall hits, {} pair impulses",
        world.len(),
        world.time,
        wall_hits,
        pair_impulses
    );
    println!(
        "kinetic energy {:.4}, all contained: {}",
        world.kinetic_energy(),
        world.is_contained()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
