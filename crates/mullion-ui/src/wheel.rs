//! Thumbwheel strip: shows one cell of a longer strip of content through a
//! clipping viewport, sliding the strip as the value changes.
//!
//! The strip itself is any element (typically a tile of labels). It does
//! not need to understand values; the wheel translates its value into a
//! viewport alignment of `1 - value` on either axis, so value 1 shows the
//! first (top or left) cell and value 0 the last.

use mullion_core::{Axis, Canvas, Context, Element, Limits, Point, Receiver};

use crate::port::{Port, hport, vport};

pub struct WheelStrip<S> {
    port: Port<S>,
    cells: u32,
    value: f64,
}

impl<S: Element> WheelStrip<S> {
    /// Vertical strip of `cells` equally tall cells.
    pub fn vertical(subject: S, cells: u32) -> Self {
        let mut strip = Self {
            port: vport(subject),
            cells: cells.max(1),
            value: 0.0,
        };
        strip.sync();
        strip
    }

    /// Horizontal strip of `cells` equally wide cells.
    pub fn horizontal(subject: S, cells: u32) -> Self {
        let mut strip = Self {
            port: hport(subject),
            cells: cells.max(1),
            value: 0.0,
        };
        strip.sync();
        strip
    }

    pub fn cells(&self) -> u32 {
        self.cells
    }

    pub fn subject(&self) -> &S {
        self.port.subject()
    }

    fn sync(&mut self) {
        self.port.set_align((1.0 - self.value) as f32);
    }
}

impl<S: Element> Element for WheelStrip<S> {
    /// One cell of the subject, not the whole strip.
    fn limits(&self, ctx: &Context) -> Limits {
        let axis = self.port.axis();
        let sub = self.port.subject().limits(ctx);
        let cell = axis.major(sub.min) / self.cells as f32;
        Limits::new(
            axis.size(cell, axis.cross(sub.min)),
            axis.size(cell, axis.cross(sub.max)),
        )
    }

    fn layout(&mut self, ctx: &Context) {
        self.port.layout(ctx)
    }

    fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        self.port.draw(ctx, canvas)
    }

    fn hit_test(&self, ctx: &Context, p: Point) -> bool {
        ctx.bounds.contains(p)
    }
}

impl<S: Element> Receiver for WheelStrip<S> {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, v: f64) {
        self.value = v.clamp(0.0, 1.0);
        self.sync();
    }
}
