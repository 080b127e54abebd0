//! The view dispatcher: owns the element tree, runs the layout and draw
//! passes, and routes pointer and wheel events into it.

use std::cell::Cell;

use log::debug;

use crate::{
    Canvas, Context, Element, Hit, Modifiers, Point, Rect, ScrollDelta, Size, Theme, TrackerInfo,
};

/// An in-flight drag: the control that claimed the pointer plus the
/// tracking record advanced on every move.
struct Gesture {
    hit: Hit,
    info: TrackerInfo,
}

/// Owns a tree of elements and drives it.
///
/// The host feeds `resize`, pointer and wheel events, and calls `draw` once
/// per frame; the view lays out lazily when marked dirty. Everything is
/// single-threaded and synchronous: each call runs to completion on the
/// caller's stack.
pub struct View {
    content: Box<dyn Element>,
    theme: Theme,
    bounds: Rect,
    content_bounds: Rect,
    dirty: Cell<bool>,
    gesture: Option<Gesture>,
}

impl View {
    pub fn new(content: Box<dyn Element>) -> Self {
        Self::with_theme(content, Theme::default())
    }

    pub fn with_theme(content: Box<dyn Element>, theme: Theme) -> Self {
        Self {
            content,
            theme,
            bounds: Rect::default(),
            content_bounds: Rect::default(),
            dirty: Cell::new(true),
            gesture: None,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Bounds the content was assigned during the last layout.
    pub fn content_bounds(&self) -> Rect {
        self.content_bounds
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub fn is_tracking(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn resize(&mut self, size: Size) {
        self.bounds = Rect::from_origin_size(Point::default(), size);
        self.dirty.set(true);
    }

    /// Run the two layout passes: `limits` bottom-up, then `layout` top-down
    /// with the view size clamped into the content's reported range.
    pub fn layout(&mut self) {
        let measure = Context::new(self.bounds, &self.theme, &self.dirty);
        let limits = self.content.limits(&measure);
        let size = limits.clamp(self.bounds.size());
        self.content_bounds =
            Rect::from_origin_size(Point::new(self.bounds.left, self.bounds.top), size);
        let ctx = Context::new(self.content_bounds, &self.theme, &self.dirty);
        self.content.layout(&ctx);
        debug!(
            "layout pass: {}x{} assigned to content",
            size.width, size.height
        );
    }

    /// Record one frame. Lays out first when dirty.
    pub fn draw(&mut self, canvas: &mut Canvas) {
        if self.dirty.get() {
            self.layout();
        }
        let ctx = Context::new(self.content_bounds, &self.theme, &self.dirty);
        self.content.draw(&ctx, canvas);
        self.dirty.set(false);
    }

    /// Returns true when a control claimed the press and a gesture began.
    pub fn pointer_down(&mut self, p: Point, modifiers: Modifiers) -> bool {
        debug_assert!(
            self.gesture.is_none(),
            "pointer_down while a gesture is in flight"
        );
        let ctx = Context::new(self.content_bounds, &self.theme, &self.dirty);
        let Some(hit) = self.content.hit_element(&ctx, p) else {
            return false;
        };
        let info = TrackerInfo::new(p, modifiers);
        let tctx = ctx.with_bounds(hit.bounds);
        hit.element.borrow_mut().begin_tracking(&tctx, &info);
        debug!("begin tracking at ({:.1}, {:.1})", p.x, p.y);
        self.gesture = Some(Gesture { hit, info });
        true
    }

    pub fn pointer_move(&mut self, p: Point, modifiers: Modifiers) {
        let Some(g) = self.gesture.as_mut() else {
            return;
        };
        g.info.advance(p, modifiers);
        let ctx = Context::new(g.hit.bounds, &self.theme, &self.dirty);
        g.hit.element.borrow_mut().keep_tracking(&ctx, &g.info);
    }

    /// Returns true when the gesture as a whole changed a value.
    pub fn pointer_up(&mut self, p: Point, modifiers: Modifiers) -> bool {
        let Some(mut g) = self.gesture.take() else {
            return false;
        };
        g.info.advance(p, modifiers);
        let ctx = Context::new(g.hit.bounds, &self.theme, &self.dirty);
        let moved = g.hit.element.borrow_mut().end_tracking(&ctx, &g.info);
        debug!("end tracking, value changed: {moved}");
        moved
    }

    /// Abort an in-flight gesture, e.g. on focus loss. Synthesizes a normal
    /// `end_tracking` at the last known position.
    pub fn cancel_tracking(&mut self) {
        let Some(g) = self.gesture.take() else {
            return;
        };
        let ctx = Context::new(g.hit.bounds, &self.theme, &self.dirty);
        g.hit.element.borrow_mut().end_tracking(&ctx, &g.info);
        debug!("tracking cancelled");
    }

    /// Route wheel input to the innermost element under the pointer that
    /// accepts it. Returns true when consumed.
    pub fn scroll(&mut self, p: Point, delta: ScrollDelta) -> bool {
        let ctx = Context::new(self.content_bounds, &self.theme, &self.dirty);
        self.content.scroll(&ctx, p, delta)
    }
}
