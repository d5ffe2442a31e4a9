//! Domain model: configuration snapshots, shape kinds, colors and the
//! shared style they produce.

pub mod color;
pub mod config;
pub mod error;
pub mod kinds;
pub mod style;

pub use color::Color;
pub use config::{Configuration, RawConfiguration};
pub use error::ConfigError;
pub use kinds::ShapeKind;
pub use style::SharedStyle;
