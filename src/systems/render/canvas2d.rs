use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::domain::Color;

use super::RenderTarget;

/// Paints directly into a 2D canvas context.
///
/// Tracks whether stroke weight is zero, since canvas has no "no stroke"
/// line width and p5 treats a zero weight as no outline.
pub struct Canvas2d<'a> {
    ctx: &'a CanvasRenderingContext2d,
    width: f64,
    height: f64,
    stroke_enabled: bool,
}

impl<'a> Canvas2d<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self {
            ctx,
            width,
            height,
            stroke_enabled: true,
        }
    }

    fn paint_current_path(&self) {
        self.ctx.fill();
        if self.stroke_enabled {
            self.ctx.stroke();
        }
    }
}

impl RenderTarget for Canvas2d<'_> {
    fn background(&mut self, color: Color) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        self.ctx.restore();
    }

    fn stroke(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.stroke_enabled = weight > 0.0;
        if self.stroke_enabled {
            self.ctx.set_line_width(weight as f64);
        }
    }

    fn fill(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn ellipse(&mut self, x: f32, y: f32, diameter: f32) {
        let radius = (diameter as f64 / 2.0).abs();
        self.ctx.begin_path();
        if self.ctx.arc(x as f64, y as f64, radius, 0.0, TAU).is_err() {
            console_warn!("canvas arc rejected radius {}", radius);
            return;
        }
        self.paint_current_path();
    }

    fn square(&mut self, x: f32, y: f32, side: f32) {
        self.ctx.begin_path();
        self.ctx.rect(x as f64, y as f64, side as f64, side as f64);
        self.paint_current_path();
    }
}
