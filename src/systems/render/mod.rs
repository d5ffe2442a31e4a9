//! Render targets
//!
//! Shapes draw through `RenderTarget`, a p5-style immediate-mode surface:
//! stroke/fill state is set first and applies to the primitives that follow.
//! `DrawList` records the calls for the host; `Canvas2d` (wasm only) paints
//! straight into a `CanvasRenderingContext2d`.

mod draw_list;
#[cfg(target_arch = "wasm32")]
mod canvas2d;

pub use draw_list::{DrawCommand, DrawList, COMMAND_STRIDE};
#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2d;

use crate::domain::Color;

pub trait RenderTarget {
    /// Clear the whole surface
    fn background(&mut self, color: Color);
    fn stroke(&mut self, color: Color);
    fn stroke_weight(&mut self, weight: f32);
    fn fill(&mut self, color: Color);
    /// Circle centered on (x, y)
    fn ellipse(&mut self, x: f32, y: f32, diameter: f32);
    /// Square with its top-left corner at (x, y)
    fn square(&mut self, x: f32, y: f32, side: f32);
}
