//! Systems: shape behavior and the render targets shapes draw into

pub mod render;
pub mod shapes;
