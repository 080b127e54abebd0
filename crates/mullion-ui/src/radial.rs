//! Radial decorations: tick marks and value labels arranged around a
//! dial's sweep.
//!
//! Both are proxies. They reserve a ring of space, keep the subject in the
//! middle, and stay transparent to hits, scrolling, and values, so a dial
//! keeps working unchanged underneath any stack of them.

use mullion_core::{
    Canvas, Context, Element, FULL_EXTENT, Hit, Limits, Point, Receiver, Rect, ScrollDelta, Size,
};

use crate::dial::sweep_point;

/// Evenly spaced tick marks across the sweep, drawn in the reserved ring.
pub struct RadialMarks<S> {
    subject: S,
    ring: f32,
    ticks: u32,
}

pub fn radial_marks<S: Element>(ring: f32, ticks: u32, subject: S) -> RadialMarks<S> {
    RadialMarks {
        subject,
        ring: ring.max(0.0),
        ticks: ticks.max(2),
    }
}

/// Text labels at evenly spaced values across the sweep.
pub struct RadialLabels<S> {
    subject: S,
    ring: f32,
    size: f32,
    labels: Vec<String>,
}

pub fn radial_labels<S: Element>(
    ring: f32,
    size: f32,
    labels: Vec<String>,
    subject: S,
) -> RadialLabels<S> {
    RadialLabels {
        subject,
        ring: ring.max(0.0),
        size,
        labels,
    }
}

fn ring_limits(inner: Limits, ring: f32) -> Limits {
    let pad = ring * 2.0;
    Limits::new(
        Size::new(inner.min.width + pad, inner.min.height + pad),
        Size::new(
            (inner.max.width + pad).min(FULL_EXTENT),
            (inner.max.height + pad).min(FULL_EXTENT),
        ),
    )
}

fn subject_radius(bounds: Rect) -> f32 {
    (bounds.width().min(bounds.height()) / 2.0).max(0.0)
}

impl<S: Element> RadialMarks<S> {
    pub fn subject(&self) -> &S {
        &self.subject
    }

    fn inner_bounds(&self, b: Rect) -> Rect {
        b.inset(self.ring, self.ring)
    }
}

impl<S: Element> Element for RadialMarks<S> {
    fn limits(&self, ctx: &Context) -> Limits {
        ring_limits(self.subject.limits(ctx), self.ring)
    }

    fn layout(&mut self, ctx: &Context) {
        let bounds = self.inner_bounds(ctx.bounds);
        self.subject.layout(&ctx.with_bounds(bounds));
    }

    fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        let bounds = self.inner_bounds(ctx.bounds);
        self.subject.draw(&ctx.with_bounds(bounds), canvas);

        let center = bounds.center();
        let inner = subject_radius(bounds) + self.ring * 0.25;
        let outer = subject_radius(bounds) + self.ring * 0.75;
        let last = (self.ticks - 1) as f64;
        for i in 0..self.ticks {
            let val = f64::from(i) / last;
            canvas.draw_line(
                sweep_point(center, inner, val),
                sweep_point(center, outer, val),
                ctx.theme.tick,
                1.0,
            );
        }
    }

    fn hit_element(&self, ctx: &Context, p: Point) -> Option<Hit> {
        let bounds = self.inner_bounds(ctx.bounds);
        self.subject.hit_element(&ctx.with_bounds(bounds), p)
    }

    fn scroll(&mut self, ctx: &Context, p: Point, delta: ScrollDelta) -> bool {
        let bounds = self.inner_bounds(ctx.bounds);
        self.subject.scroll(&ctx.with_bounds(bounds), p, delta)
    }
}

impl<S: Element + Receiver> Receiver for RadialMarks<S> {
    fn value(&self) -> f64 {
        self.subject.value()
    }
    fn set_value(&mut self, v: f64) {
        self.subject.set_value(v);
    }
}

impl<S: Element> RadialLabels<S> {
    pub fn subject(&self) -> &S {
        &self.subject
    }

    fn inner_bounds(&self, b: Rect) -> Rect {
        b.inset(self.ring, self.ring)
    }
}

impl<S: Element> Element for RadialLabels<S> {
    fn limits(&self, ctx: &Context) -> Limits {
        ring_limits(self.subject.limits(ctx), self.ring)
    }

    fn layout(&mut self, ctx: &Context) {
        let bounds = self.inner_bounds(ctx.bounds);
        self.subject.layout(&ctx.with_bounds(bounds));
    }

    fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        let bounds = self.inner_bounds(ctx.bounds);
        self.subject.draw(&ctx.with_bounds(bounds), canvas);

        if self.labels.is_empty() {
            return;
        }
        let center = bounds.center();
        let radius = subject_radius(bounds) + self.ring * 0.5;
        let last = (self.labels.len() - 1).max(1) as f64;
        for (i, text) in self.labels.iter().enumerate() {
            let val = i as f64 / last;
            canvas.draw_text(
                text.clone(),
                sweep_point(center, radius, val),
                ctx.theme.label,
                self.size,
                mullion_core::TextAlign::Center,
            );
        }
    }

    fn hit_element(&self, ctx: &Context, p: Point) -> Option<Hit> {
        let bounds = self.inner_bounds(ctx.bounds);
        self.subject.hit_element(&ctx.with_bounds(bounds), p)
    }

    fn scroll(&mut self, ctx: &Context, p: Point, delta: ScrollDelta) -> bool {
        let bounds = self.inner_bounds(ctx.bounds);
        self.subject.scroll(&ctx.with_bounds(bounds), p, delta)
    }
}

impl<S: Element + Receiver> Receiver for RadialLabels<S> {
    fn value(&self) -> f64 {
        self.subject.value()
    }
    fn set_value(&mut self, v: f64) {
        self.subject.set_value(v);
    }
}
