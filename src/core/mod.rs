//! Core utilities shared by every layer: console logging, the xorshift RNG
//! and the 2D vector type used for positions and velocities.

// Macros first so the rest of the crate can use them.
#[macro_use]
pub mod log;
pub mod random;
pub mod vec2;

pub use random::Rng;
pub use vec2::Vec2;
