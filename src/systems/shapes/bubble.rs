use crate::core::Rng;
use crate::domain::style::{SharedStyle, STROKE_COLOR};
use crate::systems::render::RenderTarget;

use super::motion::{Bounds, Motion, Reflection};
use super::ShapeBehavior;

/// Circle drawn centered on its position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub motion: Motion,
}

impl Bubble {
    pub fn new(style: &SharedStyle, rng: &mut Rng) -> Self {
        Self {
            motion: Motion::spawn(style.origin, rng),
        }
    }
}

impl ShapeBehavior for Bubble {
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
        target.ellipse(self.motion.position.x, self.motion.position.y, style.extent());
    }
}
