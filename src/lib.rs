//! Bubbles Engine - flyweight shape animation in WASM
//!
//! A configurable number of circles or squares drift from a shared origin
//! and bounce off the canvas edges. Every shape reads one shared style;
//! each configuration change rebuilds the whole collection.
//!
//! Architecture:
//! - core/        - logging macros, RNG, vectors
//! - domain/      - configuration snapshots, colors, shape kinds, shared style
//! - systems/     - shape variants and render targets
//! - simulation/  - scene orchestration and the wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Bubbles engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{ConfigError, Configuration, ShapeKind, SharedStyle};
pub use simulation::{Scene, SceneCore};
pub use systems::render::{DrawCommand, DrawList, RenderTarget};
pub use systems::shapes::{Shape, ShapeBehavior};
