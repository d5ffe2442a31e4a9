use wasm_bindgen::prelude::*;

/// Last-frame metrics (zeros while perf metrics are disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) frame_ms: f64,
    pub(super) shapes_updated: u32,
    pub(super) reflections: u32,
    pub(super) shape_count: u32,
    pub(super) rebuild_ms: f64,
    pub(super) rebuilds: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn shapes_updated(&self) -> u32 { self.shapes_updated }
    #[wasm_bindgen(getter)]
    pub fn reflections(&self) -> u32 { self.reflections }
    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> u32 { self.shape_count }
    /// Duration of the most recent rebuild
    #[wasm_bindgen(getter)]
    pub fn rebuild_ms(&self) -> f64 { self.rebuild_ms }
    /// Rebuilds since metrics were enabled
    #[wasm_bindgen(getter)]
    pub fn rebuilds(&self) -> u32 { self.rebuilds }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
