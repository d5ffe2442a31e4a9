use crate::core::Rng;
use crate::domain::{Configuration, ShapeKind, SharedStyle};
use crate::systems::shapes::{factory_for, Shape};

/// The active shapes of a scene, homogeneous in kind.
///
/// Only ever replaced as a whole: `rebuild` builds the new list completely
/// before swapping it in, so a reader never sees a half-built collection.
#[derive(Clone, Debug)]
pub struct ShapeCollection {
    shapes: Vec<Shape>,
    kind: ShapeKind,
}

impl ShapeCollection {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            shapes: Vec::new(),
            kind,
        }
    }

    /// Apply `config` to the shared style, then replace every shape with
    /// `config.shape_count` fresh ones of `config.shape_kind`.
    pub fn rebuild(
        &mut self,
        config: &Configuration,
        style: &mut SharedStyle,
        canvas_width: f32,
        canvas_height: f32,
        rng: &mut Rng,
    ) {
        style.apply(config, canvas_width, canvas_height);

        let style = &*style;
        let spawn = factory_for(config.shape_kind);
        let shapes: Vec<Shape> = (0..config.shape_count)
            .map(|_| spawn(style, rng))
            .collect();

        self.shapes = shapes;
        self.kind = config.shape_kind;
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Shape> {
        self.shapes.iter_mut()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }
}
