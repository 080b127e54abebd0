//! Viewport proxy: shows a slice of a larger subject.

use mullion_core::{
    Axis, Canvas, Context, Element, FULL_EXTENT, Hit, Limits, Point, Receiver, Rect, ScrollDelta,
};

/// Shows a slice of its subject through the assigned bounds. The subject
/// keeps its natural major-axis extent (its reported minimum); `align` in
/// `[0, 1]` selects the visible slice, 0 the leading end, 1 the trailing
/// end.
pub struct Port<S> {
    subject: S,
    axis: Axis,
    align: f32,
}

pub fn vport<S: Element>(subject: S) -> Port<S> {
    Port::new(Axis::Vertical, subject)
}

pub fn hport<S: Element>(subject: S) -> Port<S> {
    Port::new(Axis::Horizontal, subject)
}

impl<S: Element> Port<S> {
    pub fn new(axis: Axis, subject: S) -> Self {
        Self {
            subject,
            axis,
            align: 0.0,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn align(&self) -> f32 {
        self.align
    }

    pub fn set_align(&mut self, align: f32) {
        self.align = align.clamp(0.0, 1.0);
    }

    pub fn subject(&self) -> &S {
        &self.subject
    }

    fn subject_bounds(&self, ctx: &Context) -> Rect {
        let lim = self.subject.limits(ctx);
        let (lead, trail) = self.axis.span(ctx.bounds);
        let cross = self.axis.cross_span(ctx.bounds);
        let content = self.axis.major(lim.min);
        let overshoot = (content - (trail - lead)).max(0.0);
        let start = lead - overshoot * self.align;
        self.axis.rect((start, start + content), cross)
    }
}

impl<S: Element> Element for Port<S> {
    fn limits(&self, ctx: &Context) -> Limits {
        let l = self.subject.limits(ctx);
        Limits::new(
            self.axis.size(0.0, self.axis.cross(l.min)),
            self.axis.size(FULL_EXTENT, self.axis.cross(l.max)),
        )
    }

    fn layout(&mut self, ctx: &Context) {
        let bounds = self.subject_bounds(ctx);
        self.subject.layout(&ctx.with_bounds(bounds));
    }

    fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        let bounds = self.subject_bounds(ctx);
        canvas.push_clip(ctx.bounds);
        self.subject.draw(&ctx.with_bounds(bounds), canvas);
        canvas.pop_clip();
    }

    fn hit_element(&self, ctx: &Context, p: Point) -> Option<Hit> {
        if !ctx.bounds.contains(p) {
            return None;
        }
        let bounds = self.subject_bounds(ctx);
        self.subject.hit_element(&ctx.with_bounds(bounds), p)
    }

    fn scroll(&mut self, ctx: &Context, p: Point, delta: ScrollDelta) -> bool {
        if !ctx.bounds.contains(p) {
            return false;
        }
        let bounds = self.subject_bounds(ctx);
        self.subject.scroll(&ctx.with_bounds(bounds), p, delta)
    }
}

impl<S: Element + Receiver> Receiver for Port<S> {
    fn value(&self) -> f64 {
        self.subject.value()
    }
    fn set_value(&mut self, v: f64) {
        self.subject.set_value(v);
    }
}
