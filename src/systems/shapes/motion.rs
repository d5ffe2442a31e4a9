use crate::core::{Rng, Vec2};

/// Velocity components are drawn from [-MAX_SPEED, MAX_SPEED)
pub const MAX_SPEED: f32 = 2.0;

/// Canvas extent used for reflection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axes whose velocity flipped during an update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    pub fn count(self) -> u32 {
        self.x as u32 + self.y as u32
    }
}

/// Per-instance state: everything a shape owns
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Motion {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Start at `origin` with a random velocity
    pub fn spawn(origin: Vec2, rng: &mut Rng) -> Self {
        let velocity = Vec2::new(
            rng.range(-MAX_SPEED, MAX_SPEED),
            rng.range(-MAX_SPEED, MAX_SPEED),
        );
        Self::new(origin, velocity)
    }

    /// Move one step, then reflect on any axis that is outside the canvas.
    ///
    /// Reflection checks the position after the move and does not clamp, so
    /// a shape may sit up to one step past the edge before heading back.
    pub fn step(&mut self, bounds: Bounds) -> Reflection {
        self.position += self.velocity;

        let mut reflection = Reflection::default();
        if self.position.x < 0.0 || self.position.x > bounds.width {
            self.velocity.x = -self.velocity.x;
            reflection.x = true;
        }
        if self.position.y < 0.0 || self.position.y > bounds.height {
            self.velocity.y = -self.velocity.y;
            reflection.y = true;
        }
        reflection
    }
}
