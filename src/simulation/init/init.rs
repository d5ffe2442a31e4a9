use crate::core::Rng;
use crate::domain::{Configuration, SharedStyle};
use crate::systems::render::DrawList;

use super::collection::ShapeCollection;
use super::perf_stats::PerfStats;
use super::SceneCore;

/// Default canvas, matching the host page's `<canvas>`
pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

/// Build a scene and run the first rebuild with `config`, so the first frame
/// already has shapes to draw.
pub(super) fn create_scene_core(
    width: f32,
    height: f32,
    config: Configuration,
    rng: Rng,
) -> SceneCore {
    let mut scene = SceneCore {
        style: SharedStyle::new(width, height),
        collection: ShapeCollection::new(config.shape_kind),
        config: config.clone(),
        canvas_width: width,
        canvas_height: height,
        rng,
        frame: 0,
        // Sized by the first frame and reused afterwards.
        draw_list: DrawList::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    scene.apply_configuration(config);
    scene
}
