use crate::core::Rng;
use crate::domain::style::{SharedStyle, STROKE_COLOR};
use crate::systems::render::RenderTarget;

use super::motion::{Bounds, Motion, Reflection};
use super::ShapeBehavior;

/// Axis-aligned square anchored at its top-left corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    pub motion: Motion,
}

impl Square {
    pub fn new(style: &SharedStyle, rng: &mut Rng) -> Self {
        Self {
            motion: Motion::spawn(style.origin, rng),
        }
    }
}

impl ShapeBehavior for Square {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn update(&mut self, bounds: Bounds) -> Reflection {
        self.motion.step(bounds)
    }

    fn display<T: RenderTarget + ?Sized>(&self, style: &SharedStyle, target: &mut T) {
        target.stroke(STROKE_COLOR);
        target.stroke_weight(style.stroke_weight);
        target.fill(style.fill_color);
        target.square(self.motion.position.x, self.motion.position.y, style.extent());
    }
}
