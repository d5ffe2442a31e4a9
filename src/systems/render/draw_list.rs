use serde::Serialize;

use crate::domain::Color;

use super::RenderTarget;

/// f32 words per encoded command: opcode followed by four parameters
pub const COMMAND_STRIDE: usize = 5;

const OP_BACKGROUND: f32 = 0.0;
const OP_STROKE: f32 = 1.0;
const OP_STROKE_WEIGHT: f32 = 2.0;
const OP_FILL: f32 = 3.0;
const OP_ELLIPSE: f32 = 4.0;
const OP_SQUARE: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    Background { color: Color },
    Stroke { color: Color },
    StrokeWeight { weight: f32 },
    Fill { color: Color },
    Ellipse { x: f32, y: f32, diameter: f32 },
    Square { x: f32, y: f32, side: f32 },
}

impl DrawCommand {
    /// Flat layout read by the JS host:
    ///
    /// | op | p0 | p1 | p2 | p3 |
    /// |----|----|----|----|----|
    /// | 0 background | r | g | b | a |
    /// | 1 stroke | r | g | b | a |
    /// | 2 stroke weight | w | 0 | 0 | 0 |
    /// | 3 fill | r | g | b | a |
    /// | 4 ellipse | x | y | diameter | 0 |
    /// | 5 square | x | y | side | 0 |
    pub fn encode(&self) -> [f32; COMMAND_STRIDE] {
        let rgba = |op: f32, c: &Color| [op, c.r as f32, c.g as f32, c.b as f32, c.a as f32];
        match self {
            DrawCommand::Background { color } => rgba(OP_BACKGROUND, color),
            DrawCommand::Stroke { color } => rgba(OP_STROKE, color),
            DrawCommand::StrokeWeight { weight } => [OP_STROKE_WEIGHT, *weight, 0.0, 0.0, 0.0],
            DrawCommand::Fill { color } => rgba(OP_FILL, color),
            DrawCommand::Ellipse { x, y, diameter } => [OP_ELLIPSE, *x, *y, *diameter, 0.0],
            DrawCommand::Square { x, y, side } => [OP_SQUARE, *x, *y, *side, 0.0],
        }
    }
}

/// Recorded frame: the commands plus their flat encoding
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    encoded: Vec<f32>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame, keeping the allocations
    pub fn clear(&mut self) {
        self.commands.clear();
        self.encoded.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Pointer to the encoded buffer (for JS to view wasm memory)
    pub fn encoded_ptr(&self) -> *const f32 {
        self.encoded.as_ptr()
    }

    pub fn encoded(&self) -> &[f32] {
        &self.encoded
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.commands).unwrap_or_else(|_| "[]".to_string())
    }

    fn push(&mut self, command: DrawCommand) {
        self.encoded.extend_from_slice(&command.encode());
        self.commands.push(command);
    }
}

impl RenderTarget for DrawList {
    fn background(&mut self, color: Color) {
        self.push(DrawCommand::Background { color });
    }

    fn stroke(&mut self, color: Color) {
        self.push(DrawCommand::Stroke { color });
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.push(DrawCommand::StrokeWeight { weight });
    }

    fn fill(&mut self, color: Color) {
        self.push(DrawCommand::Fill { color });
    }

    fn ellipse(&mut self, x: f32, y: f32, diameter: f32) {
        self.push(DrawCommand::Ellipse { x, y, diameter });
    }

    fn square(&mut self, x: f32, y: f32, side: f32) {
        self.push(DrawCommand::Square { x, y, side });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_follows_command_order() {
        let mut list = DrawList::new();
        list.background(Color::BLACK);
        list.stroke_weight(2.5);
        list.square(1.0, 2.0, 3.0);

        assert_eq!(list.len(), 3);
        assert_eq!(list.encoded().len(), 3 * COMMAND_STRIDE);
        assert_eq!(&list.encoded()[..5], &[0.0, 0.0, 0.0, 0.0, 255.0]);
        assert_eq!(&list.encoded()[5..10], &[2.0, 2.5, 0.0, 0.0, 0.0]);
        assert_eq!(&list.encoded()[10..], &[5.0, 1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn clear_empties_both_views() {
        let mut list = DrawList::new();
        list.fill(Color::WHITE);
        list.clear();
        assert!(list.is_empty());
        assert!(list.encoded().is_empty());
    }

    #[test]
    fn json_is_tagged_by_op() {
        let mut list = DrawList::new();
        list.ellipse(1.0, 2.0, 20.0);
        let value: serde_json::Value = serde_json::from_str(&list.to_json()).unwrap();
        assert_eq!(value[0]["op"], "ellipse");
        assert_eq!(value[0]["diameter"], 20.0);
    }
}
