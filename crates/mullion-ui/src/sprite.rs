//! Sprite-strip leaf: one frame of an image strip, selected by value.
//! Image decoding stays with the host; the command names the source and the
//! frame index.

use mullion_core::{Canvas, Context, Element, Limits, Receiver, Size};

pub struct Sprite {
    source: String,
    frame_size: Size,
    frames: u32,
    value: f64,
}

impl Sprite {
    pub fn new(source: impl Into<String>, frame_size: Size, frames: u32) -> Self {
        Self {
            source: source.into(),
            frame_size,
            frames: frames.max(1),
            value: 0.0,
        }
    }

    /// Frame shown for the current value, linearly spread over the strip.
    pub fn frame(&self) -> u32 {
        (self.value * f64::from(self.frames - 1)).round() as u32
    }
}

impl Element for Sprite {
    fn limits(&self, _ctx: &Context) -> Limits {
        Limits::fixed(self.frame_size)
    }

    fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        canvas.draw_sprite(ctx.bounds, self.source.clone(), self.frame());
    }
}

impl Receiver for Sprite {
    fn value(&self) -> f64 {
        self.value
    }
    fn set_value(&mut self, v: f64) {
        self.value = v.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use mullion_core::Receiver;

    use super::*;

    #[test]
    fn value_selects_the_nearest_frame() {
        let mut s = Sprite::new("knob_100.png", Size::new(64.0, 64.0), 100);
        assert_eq!(s.frame(), 0);
        s.set_value(1.0);
        assert_eq!(s.frame(), 99);
        s.set_value(0.5);
        assert_eq!(s.frame(), 50);
        s.set_value(2.0);
        assert_eq!(s.value(), 1.0);
    }

    #[test]
    fn single_frame_strip_never_divides_by_zero() {
        let mut s = Sprite::new("static.png", Size::new(8.0, 8.0), 1);
        s.set_value(1.0);
        assert_eq!(s.frame(), 0);
    }
}
