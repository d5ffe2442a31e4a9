use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
    scene.perf_stats.reset();
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}

/// Resize the reflection bounds. Shapes keep their state; a new default
/// origin only takes effect on the next configuration.
pub(super) fn set_canvas_size(scene: &mut SceneCore, width: f32, height: f32) {
    scene.canvas_width = width;
    scene.canvas_height = height;
    console_log!("canvas resized to {}x{}", width, height);
}
