//! Scene - the flyweight shape animation
//!
//! `SceneCore` owns everything that the original page kept in globals: the
//! shared style, the shape collection, the current configuration and the
//! RNG. Configuration handlers and the frame callback both go through
//! `&mut SceneCore`, so a rebuild can never interleave with a frame.
//!
//! - collection/ - the Shape Collection Manager (full rebuilds only)
//! - step/       - the per-frame animation driver
//! - init/       - construction and runtime settings
//! - perf/       - optional per-frame metrics

use crate::core::Rng;
use crate::domain::{ConfigError, Configuration, ShapeKind, SharedStyle};
use crate::systems::render::{DrawList, RenderTarget};
use crate::systems::shapes::{Shape, ShapeSnapshot};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "collection/collection.rs"]
mod collection;
#[path = "step/frame.rs"]
mod step;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use collection::ShapeCollection;
pub use facade::{shape_kinds, Scene};
pub use init::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

pub struct SceneCore {
    style: SharedStyle,
    collection: ShapeCollection,
    config: Configuration,

    canvas_width: f32,
    canvas_height: f32,

    rng: Rng,
    frame: u64,
    draw_list: DrawList,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SceneCore {
    /// Scene with the default configuration, seeded from the host
    pub fn new(width: f32, height: f32) -> Self {
        init::create_scene_core(width, height, Configuration::default(), Rng::from_host())
    }

    /// Deterministic scene: same seed, same velocities
    pub fn with_seed(width: f32, height: f32, seed: u32) -> Self {
        init::create_scene_core(width, height, Configuration::default(), Rng::new(seed))
    }

    pub fn with_config(width: f32, height: f32, config: Configuration, seed: u32) -> Self {
        init::create_scene_core(width, height, config, Rng::new(seed))
    }

    /// Replace the configuration snapshot and rebuild every shape.
    pub fn apply_configuration(&mut self, config: Configuration) {
        let start = PerfTimer::start_if(self.perf_enabled);

        self.collection.rebuild(
            &config,
            &mut self.style,
            self.canvas_width,
            self.canvas_height,
            &mut self.rng,
        );
        self.config = config;

        if let Some(t0) = start {
            self.perf_stats.rebuild_ms = t0.elapsed_ms();
            self.perf_stats.rebuilds += 1;
            self.perf_stats.shape_count = self.collection.len() as u32;
        }
    }

    /// Parse a JSON configuration record and rebuild.
    ///
    /// A rejected record leaves style and shapes as they were.
    pub fn configure_json(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = Configuration::from_json(json).inspect_err(|e| {
            console_warn!("configuration rejected: {}", e);
        })?;
        self.apply_configuration(config);
        Ok(())
    }

    /// Rebuild from individual control values.
    pub fn configure(
        &mut self,
        shape_count: i64,
        size: f32,
        fill_color: &str,
        stroke_weight: f32,
        shape_kind: &str,
    ) -> Result<(), ConfigError> {
        let config = Configuration::from_controls(
            shape_count,
            size,
            fill_color,
            stroke_weight,
            shape_kind,
        )
        .inspect_err(|e| {
            console_warn!("configuration rejected: {}", e);
        })?;
        self.apply_configuration(config);
        Ok(())
    }

    /// Run one frame into the scene's own draw list and return it.
    pub fn frame(&mut self) -> &DrawList {
        let mut list = std::mem::take(&mut self.draw_list);
        list.clear();
        step::frame(self, &mut list);
        self.draw_list = list;
        &self.draw_list
    }

    /// Run one frame into an external render target.
    pub fn frame_into<T: RenderTarget + ?Sized>(&mut self, target: &mut T) {
        step::frame(self, target);
    }

    /// Commands recorded by the last `frame()`
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn shapes(&self) -> &[Shape] {
        self.collection.as_slice()
    }

    pub fn shape_count(&self) -> usize {
        self.collection.len()
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.collection.kind()
    }

    pub fn style(&self) -> &SharedStyle {
        &self.style
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas_height
    }

    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        settings::set_canvas_size(self, width, height);
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn snapshots(&self) -> Vec<ShapeSnapshot> {
        self.collection.iter().map(Shape::snapshot).collect()
    }

    pub fn shapes_json(&self) -> String {
        serde_json::to_string(&self.snapshots()).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for SceneCore {
    /// Default canvas and configuration
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
