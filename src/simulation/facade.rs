use wasm_bindgen::prelude::*;

use crate::domain::ShapeKind;
use crate::systems::render::COMMAND_STRIDE;

use super::perf_stats::PerfStats;
use super::SceneCore;

#[wasm_bindgen]
pub struct Scene {
    core: SceneCore,
}

#[wasm_bindgen]
impl Scene {
    /// Create a scene for a canvas of the given size, with the default
    /// configuration already applied
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: SceneCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: f32, height: f32, seed: u32) -> Self {
        Self {
            core: SceneCore::with_seed(width, height, seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.canvas_width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.canvas_height() }

    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> usize { self.core.shape_count() }

    #[wasm_bindgen(getter)]
    pub fn shape_kind(&self) -> String { self.core.shape_kind().name().to_string() }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.core.frame_count() }

    /// Rebuild from the form controls. Fails on an unknown shape kind or an
    /// unparsable color; the previous shapes keep animating in that case.
    pub fn configure(
        &mut self,
        shape_count: i32,
        size: f32,
        fill_color: String,
        stroke_weight: f32,
        shape_kind: String,
    ) -> Result<(), JsValue> {
        self.core
            .configure(shape_count as i64, size, &fill_color, stroke_weight, &shape_kind)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Rebuild from a JSON configuration record
    pub fn configure_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .configure_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.core.set_canvas_size(width, height);
    }

    /// Advance and record one frame. Returns the number of draw commands.
    pub fn frame(&mut self) -> usize {
        self.core.frame().len()
    }

    /// Pointer to the encoded commands of the last frame (for JS rendering)
    pub fn commands_ptr(&self) -> *const f32 {
        self.core.draw_list().encoded_ptr()
    }

    /// Encoded length in f32 words
    pub fn commands_len(&self) -> usize {
        self.core.draw_list().encoded().len()
    }

    pub fn command_stride(&self) -> usize {
        COMMAND_STRIDE
    }

    pub fn draw_list_json(&self) -> String {
        self.core.draw_list().to_json()
    }

    pub fn shapes_json(&self) -> String {
        self.core.shapes_json()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl Scene {
    /// Advance one frame and paint it straight into `ctx`
    pub fn render_to_canvas(&mut self, ctx: &web_sys::CanvasRenderingContext2d) {
        let (w, h) = (self.core.canvas_width() as f64, self.core.canvas_height() as f64);
        let mut canvas = crate::systems::render::Canvas2d::new(ctx, w, h);
        self.core.frame_into(&mut canvas);
    }
}

/// Names accepted as `shape_kind`, in selector order
#[wasm_bindgen]
pub fn shape_kinds() -> js_sys::Array {
    ShapeKind::ALL
        .iter()
        .map(|kind| JsValue::from_str(kind.name()))
        .collect()
}
