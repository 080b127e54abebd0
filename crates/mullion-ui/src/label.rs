//! Text label leaf. Metrics are approximate (glyph-width-ish); real shaping
//! belongs to the host renderer replaying the command list.

use mullion_core::{Canvas, Color, Context, Element, Limits, Size, TextAlign};

// rough average advance per glyph, relative to the font size
const GLYPH_WIDTH: f32 = 0.6;
const LINE_HEIGHT: f32 = 1.4;

pub struct Label {
    text: String,
    size: Option<f32>,
    color: Option<Color>,
}

pub fn label(text: impl Into<String>) -> Label {
    Label::new(text)
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: None,
            color: None,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn resolved_size(&self, ctx: &Context) -> f32 {
        self.size.unwrap_or(ctx.theme.label_size)
    }
}

impl Element for Label {
    fn limits(&self, ctx: &Context) -> Limits {
        let size = self.resolved_size(ctx);
        let w = self.text.chars().count() as f32 * size * GLYPH_WIDTH;
        Limits::fixed(Size::new(w, size * LINE_HEIGHT))
    }

    fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        let size = self.resolved_size(ctx);
        let color = self.color.unwrap_or(ctx.theme.label);
        canvas.draw_text(
            self.text.clone(),
            ctx.bounds.center(),
            color,
            size,
            TextAlign::Center,
        );
    }
}
