//! Alignment and margin proxies. Pure geometry transforms: each wraps one
//! subject and recomputes its sub-bounds per pass, no state.

use mullion_core::{
    Canvas, Context, Element, FULL_EXTENT, Hit, Limits, Point, Receiver, Rect, ScrollDelta, Size,
};

/// Positions its subject inside slack space by per-axis factors in `[0, 1]`
/// (0 = leading edge, 1 = trailing edge). `None` on an axis means fill.
pub struct Align<S> {
    subject: S,
    x_factor: Option<f32>,
    y_factor: Option<f32>,
}

pub fn halign<S: Element>(factor: f32, subject: S) -> Align<S> {
    Align {
        subject,
        x_factor: Some(factor),
        y_factor: None,
    }
}

pub fn valign<S: Element>(factor: f32, subject: S) -> Align<S> {
    Align {
        subject,
        x_factor: None,
        y_factor: Some(factor),
    }
}

pub fn align<S: Element>(x_factor: f32, y_factor: f32, subject: S) -> Align<S> {
    Align {
        subject,
        x_factor: Some(x_factor),
        y_factor: Some(y_factor),
    }
}

pub fn align_center<S: Element>(subject: S) -> Align<S> {
    align(0.5, 0.5, subject)
}

impl<S: Element> Align<S> {
    fn subject_bounds(&self, ctx: &Context) -> Rect {
        let lim = self.subject.limits(ctx);
        let b = ctx.bounds;
        let (left, right) = match self.x_factor {
            Some(f) => {
                let w = lim.max.width.min(b.width()).max(lim.min.width);
                let left = b.left + (b.width() - w) * f;
                (left, left + w)
            }
            None => (b.left, b.right),
        };
        let (top, bottom) = match self.y_factor {
            Some(f) => {
                let h = lim.max.height.min(b.height()).max(lim.min.height);
                let top = b.top + (b.height() - h) * f;
                (top, top + h)
            }
            None => (b.top, b.bottom),
        };
        Rect::new(left, top, right, bottom)
    }
}

impl<S: Element> Element for Align<S> {
    fn limits(&self, ctx: &Context) -> Limits {
        // an aligned axis can absorb any amount of slack
        let mut lim = self.subject.limits(ctx);
        if self.x_factor.is_some() {
            lim.max.width = FULL_EXTENT;
        }
        if self.y_factor.is_some() {
            lim.max.height = FULL_EXTENT;
        }
        lim
    }

    fn layout(&mut self, ctx: &Context) {
        let bounds = self.subject_bounds(ctx);
        self.subject.layout(&ctx.with_bounds(bounds));
    }

    fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        let bounds = self.subject_bounds(ctx);
        self.subject.draw(&ctx.with_bounds(bounds), canvas);
    }

    fn hit_element(&self, ctx: &Context, p: Point) -> Option<Hit> {
        let bounds = self.subject_bounds(ctx);
        self.subject.hit_element(&ctx.with_bounds(bounds), p)
    }

    fn scroll(&mut self, ctx: &Context, p: Point, delta: ScrollDelta) -> bool {
        let bounds = self.subject_bounds(ctx);
        self.subject.scroll(&ctx.with_bounds(bounds), p, delta)
    }
}

impl<S: Element + Receiver> Receiver for Align<S> {
    fn value(&self) -> f64 {
        self.subject.value()
    }
    fn set_value(&mut self, v: f64) {
        self.subject.set_value(v);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn all(v: f32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    pub fn hv(h: f32, v: f32) -> Self {
        Self {
            left: h,
            top: v,
            right: h,
            bottom: v,
        }
    }

    fn width(&self) -> f32 {
        self.left + self.right
    }

    fn height(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Reserves empty space around its subject.
pub struct Margin<S> {
    subject: S,
    insets: Insets,
}

pub fn margin<S: Element>(insets: Insets, subject: S) -> Margin<S> {
    Margin { subject, insets }
}

impl<S: Element> Margin<S> {
    fn subject_bounds(&self, b: Rect) -> Rect {
        Rect::new(
            b.left + self.insets.left,
            b.top + self.insets.top,
            b.right - self.insets.right,
            b.bottom - self.insets.bottom,
        )
    }
}

impl<S: Element> Element for Margin<S> {
    fn limits(&self, ctx: &Context) -> Limits {
        let l = self.subject.limits(ctx);
        let w = self.insets.width();
        let h = self.insets.height();
        Limits::new(
            Size::new(l.min.width + w, l.min.height + h),
            Size::new(
                (l.max.width + w).min(FULL_EXTENT),
                (l.max.height + h).min(FULL_EXTENT),
            ),
        )
    }

    fn layout(&mut self, ctx: &Context) {
        let bounds = self.subject_bounds(ctx.bounds);
        self.subject.layout(&ctx.with_bounds(bounds));
    }

    fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        let bounds = self.subject_bounds(ctx.bounds);
        self.subject.draw(&ctx.with_bounds(bounds), canvas);
    }

    fn hit_element(&self, ctx: &Context, p: Point) -> Option<Hit> {
        let bounds = self.subject_bounds(ctx.bounds);
        self.subject.hit_element(&ctx.with_bounds(bounds), p)
    }

    fn scroll(&mut self, ctx: &Context, p: Point, delta: ScrollDelta) -> bool {
        let bounds = self.subject_bounds(ctx.bounds);
        self.subject.scroll(&ctx.with_bounds(bounds), p, delta)
    }
}

impl<S: Element + Receiver> Receiver for Margin<S> {
    fn value(&self) -> f64 {
        self.subject.value()
    }
    fn set_value(&mut self, v: f64) {
        self.subject.set_value(v);
    }
}
