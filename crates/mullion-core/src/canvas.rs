//! Draw command recording. The core never rasterizes; a host replays the
//! recorded list with whatever renderer it owns.

use crate::{Color, Point, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: f32,
        color: Color,
        stroke: Option<(f32, Color)>,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },
    Text {
        text: String,
        pos: Point,
        color: Color,
        size: f32,
        align: TextAlign,
    },
    Sprite {
        rect: Rect,
        source: String,
        frame: u32,
    },
    /// Clip subsequent commands to `rect` until the matching `PopClip`.
    PushClip {
        rect: Rect,
    },
    PopClip,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Default)]
pub struct Canvas {
    pub commands: Vec<DrawCommand>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn draw_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius: radius.max(0.0),
            color,
            stroke: None,
        });
    }

    pub fn draw_circle_stroked(
        &mut self,
        center: Point,
        radius: f32,
        color: Color,
        stroke: (f32, Color),
    ) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius: radius.max(0.0),
            color,
            stroke: Some(stroke),
        });
    }

    pub fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width: width.max(0.0),
        });
    }

    pub fn draw_text(
        &mut self,
        text: impl Into<String>,
        pos: Point,
        color: Color,
        size: f32,
        align: TextAlign,
    ) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            pos,
            color,
            size,
            align,
        });
    }

    pub fn draw_sprite(&mut self, rect: Rect, source: impl Into<String>, frame: u32) {
        self.commands.push(DrawCommand::Sprite {
            rect,
            source: source.into(),
            frame,
        });
    }

    pub fn push_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::PushClip { rect });
    }

    pub fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }
}
