//! Shapes - moving instances that share one style
//!
//! Every variant moves the same way (see `Motion`) and differs only in how
//! it draws itself. Variants are stored as a tagged enum; the
//! `ShapeBehavior` trait is the per-variant contract.
//!
//! Construction goes through `factory_for`, a static `ShapeKind` ->
//! constructor mapping. The match is exhaustive, so a new kind does not
//! compile until it has a constructor.

mod bubble;
mod motion;
mod square;

pub use bubble::Bubble;
pub use motion::{Bounds, Motion, Reflection, MAX_SPEED};
pub use square::Square;

use serde::Serialize;

use crate::core::Rng;
use crate::domain::kinds::ShapeKind;
use crate::domain::style::SharedStyle;
use crate::systems::render::RenderTarget;

/// Behavior each shape variant implements
pub trait ShapeBehavior {
    fn motion(&self) -> &Motion;

    /// Advance one frame inside `bounds`
    fn update(&mut self, bounds: Bounds) -> Reflection;

    /// Draw with the current shared style. Changes the target's stroke and
    /// fill state.
    fn display<T: RenderTarget + ?Sized>(&self, style: &SharedStyle, target: &mut T);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Bubble(Bubble),
    Square(Square),
}

pub type ShapeFactory = fn(&SharedStyle, &mut Rng) -> Shape;

fn spawn_bubble(style: &SharedStyle, rng: &mut Rng) -> Shape {
    Shape::Bubble(Bubble::new(style, rng))
}

fn spawn_square(style: &SharedStyle, rng: &mut Rng) -> Shape {
    Shape::Square(Square::new(style, rng))
}

/// Kind -> constructor
pub fn factory_for(kind: ShapeKind) -> ShapeFactory {
    match kind {
        ShapeKind::Bubble => spawn_bubble,
        ShapeKind::Square => spawn_square,
    }
}

impl Shape {
    /// Create a shape of `kind` at the style's origin with a random velocity
    pub fn spawn(kind: ShapeKind, style: &SharedStyle, rng: &mut Rng) -> Shape {
        factory_for(kind)(style, rng)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Bubble(_) => ShapeKind::Bubble,
            Shape::Square(_) => ShapeKind::Square,
        }
    }

    pub fn snapshot(&self) -> ShapeSnapshot {
        let motion = self.motion();
        ShapeSnapshot {
            kind: self.kind(),
            position: motion.position,
            velocity: motion.velocity,
        }
    }
}

impl ShapeBehavior for Shape {
    #[inline]
    fn motion(&self) -> &Motion {
        match self {
            Shape::Bubble(s) => s.motion(),
            Shape::Square(s) => s.motion(),
        }
    }

    #[inline]
    fn update(&mut self, bounds: Bounds) -> Reflection {
        match self {
            Shape::Bubble(s) => s.update(bounds),
            Shape::Square(s) => s.update(bounds),
        }
    }

    #[inline]
    fn display<T: RenderTarget + ?Sized>(&self, style: &SharedStyle, target: &mut T) {
        match self {
            Shape::Bubble(s) => s.display(style, target),
            Shape::Square(s) => s.display(style, target),
        }
    }
}

/// Serializable view of one shape, for debugging hosts
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeSnapshot {
    pub kind: ShapeKind,
    pub position: crate::core::Vec2,
    pub velocity: crate::core::Vec2,
}
