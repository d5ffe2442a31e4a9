//! Shared style state (flyweight)
//!
//! One `SharedStyle` is owned by the scene and lent to every shape at
//! display time. Shapes themselves only carry position and velocity.

use crate::core::Vec2;

use super::color::Color;
use super::config::{Configuration, DEFAULT_FILL, DEFAULT_SIZE, DEFAULT_STROKE_WEIGHT};

/// Outline color of every shape
pub const STROKE_COLOR: Color = Color::WHITE;
/// Cleared to at the start of every frame
pub const BACKGROUND: Color = Color::BLACK;

#[derive(Clone, Debug, PartialEq)]
pub struct SharedStyle {
    pub size: f32,
    pub fill_color: Color,
    pub stroke_weight: f32,
    pub origin: Vec2,
}

impl SharedStyle {
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            size: DEFAULT_SIZE,
            fill_color: DEFAULT_FILL,
            stroke_weight: DEFAULT_STROKE_WEIGHT,
            origin: canvas_center(canvas_width, canvas_height),
        }
    }

    /// Overwrite every shared attribute from `config`.
    ///
    /// Values are taken as-is; a negative size reaches the render target
    /// unchanged.
    pub fn apply(&mut self, config: &Configuration, canvas_width: f32, canvas_height: f32) {
        self.size = config.size;
        self.fill_color = config.fill_color;
        self.stroke_weight = config.stroke_weight;
        self.origin = config
            .origin
            .unwrap_or_else(|| canvas_center(canvas_width, canvas_height));
    }

    /// Diameter of a bubble / side of a square
    #[inline]
    pub fn extent(&self) -> f32 {
        self.size * 2.0
    }
}

fn canvas_center(width: f32, height: f32) -> Vec2 {
    Vec2::new(width / 2.0, height / 2.0)
}
