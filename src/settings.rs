//! User parameters
//!
//! What the reset form controls: how many spheres and how strong gravity is.
//! Persisted in LocalStorage so a reload keeps the last choice.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SPHERE_COUNT, FALLBACK_SPHERE_COUNT, GRAVITY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Number of spheres generated on reset
    pub sphere_count: u32,
    /// Gravity magnitude (negative pulls upward)
    pub gravity: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sphere_count: DEFAULT_SPHERE_COUNT,
            gravity: GRAVITY,
        }
    }
}

impl Settings {
    pub fn new(sphere_count: u32, gravity: f32) -> Self {
        Self {
            sphere_count,
            gravity,
        }
    }

    /// Build settings from the raw text of the form fields
    ///
    /// An empty, zero or unparsable count falls back to
    /// `FALLBACK_SPHERE_COUNT`; an empty or unparsable gravity means none.
    pub fn from_form(count: &str, gravity: &str) -> Self {
        let sphere_count = count
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite() && *n >= 1.0)
            .map(|n| n as u32)
            .unwrap_or(FALLBACK_SPHERE_COUNT);

        let gravity = gravity
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|g| g.is_finite())
            .unwrap_or(0.0);

        Self {
            sphere_count,
            gravity,
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "sphere_box_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
