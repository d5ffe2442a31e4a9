use crate::domain::style::BACKGROUND;
use crate::systems::render::RenderTarget;
use crate::systems::shapes::{Bounds, ShapeBehavior};

use super::{PerfTimer, SceneCore};

/// One host frame: clear, then update and draw each shape in order.
pub(super) fn frame<T: RenderTarget + ?Sized>(scene: &mut SceneCore, target: &mut T) {
    let start = PerfTimer::start_if(scene.perf_enabled);

    let bounds = Bounds::new(scene.canvas_width, scene.canvas_height);
    let mut reflections = 0u32;

    target.background(BACKGROUND);
    for shape in scene.collection.iter_mut() {
        reflections += shape.update(bounds).count();
        shape.display(&scene.style, &mut *target);
    }

    scene.frame += 1;

    if let Some(t0) = start {
        let stats = &mut scene.perf_stats;
        stats.frame_ms = t0.elapsed_ms();
        stats.shapes_updated = scene.collection.len() as u32;
        stats.reflections = reflections;
        stats.shape_count = scene.collection.len() as u32;
        stats.frame = scene.frame;
    }
}
