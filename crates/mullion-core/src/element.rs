//! # The element contract
//!
//! Every node in the visual tree implements [`Element`]. The contract is
//! deliberately small:
//!
//! - `limits` reports the extent range the element is willing to occupy,
//! - `layout` accepts the bounds a parent assigned,
//! - `draw` records commands for those bounds,
//! - `hit_test`/`hit_element` route pointers,
//! - the tracking methods implement the drag lifecycle for controls.
//!
//! Everything defaults to an inert leaf, so simple elements override only
//! what they use. Layout runs bottom-up (`limits`) then top-down (`layout`);
//! both passes thread an explicit [`Context`] that is created fresh per
//! child and never stored.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{Canvas, Limits, Point, Rect, ScrollDelta, Theme, TrackerInfo};

/// Per-call parameter object for layout, draw, and hit passes.
///
/// Carries the bounds assigned to the element being visited plus the shared
/// view services. Stack-scoped by construction.
pub struct Context<'a> {
    pub bounds: Rect,
    pub theme: &'a Theme,
    dirty: &'a Cell<bool>,
}

impl<'a> Context<'a> {
    pub fn new(bounds: Rect, theme: &'a Theme, dirty: &'a Cell<bool>) -> Self {
        Self {
            bounds,
            theme,
            dirty,
        }
    }

    /// Same view services, different bounds. Used when descending into a
    /// child or a proxied subject.
    pub fn with_bounds(&self, bounds: Rect) -> Context<'a> {
        Context {
            bounds,
            theme: self.theme,
            dirty: self.dirty,
        }
    }

    /// Ask the owning view to run layout and redraw before the next frame.
    pub fn request_redraw(&self) {
        self.dirty.set(true);
    }
}

/// Shared handle to a control embedded in the tree.
///
/// Application code keeps one of these to wire callbacks or set values while
/// the same element sits inside the tree. Single-threaded by design.
pub type Shared<E> = Rc<RefCell<E>>;

pub fn shared<E>(element: E) -> Shared<E> {
    Rc::new(RefCell::new(element))
}

/// A claimed pointer position: the control that took it and the bounds it
/// was assigned during the last layout. The dispatcher holds this for the
/// duration of a drag.
#[derive(Clone)]
pub struct Hit {
    pub element: Rc<RefCell<dyn Element>>,
    pub bounds: Rect,
}

pub trait Element: 'static {
    fn limits(&self, _ctx: &Context) -> Limits {
        Limits::NONE
    }

    fn layout(&mut self, _ctx: &Context) {}

    fn draw(&self, _ctx: &Context, _canvas: &mut Canvas) {}

    /// Whether the pointer lands on this element's box.
    fn hit_test(&self, ctx: &Context, p: Point) -> bool {
        ctx.bounds.contains(p)
    }

    /// Route a pointer position to the control that should take the
    /// gesture. Containers descend through children; controls claim via
    /// their [`Shared`] wrapper (see [`wants_control`](Element::wants_control)).
    fn hit_element(&self, _ctx: &Context, _p: Point) -> Option<Hit> {
        None
    }

    /// Controls return true so their shared handle claims hits for them.
    /// A control reachable for tracking must sit behind a [`Shared`] handle;
    /// the handle is what turns a claimed hit into a [`Hit`].
    fn wants_control(&self) -> bool {
        false
    }

    /// Wheel input at `p`. Returns true when consumed.
    fn scroll(&mut self, _ctx: &Context, _p: Point, _delta: ScrollDelta) -> bool {
        false
    }

    /// Drag lifecycle. The dispatcher guarantees begin/keep/end ordering;
    /// calling these out of sequence is a contract violation.
    fn begin_tracking(&mut self, _ctx: &Context, _info: &TrackerInfo) {}

    fn keep_tracking(&mut self, _ctx: &Context, _info: &TrackerInfo) {}

    /// Returns true when the gesture as a whole changed the control's value.
    fn end_tracking(&mut self, _ctx: &Context, _info: &TrackerInfo) -> bool {
        false
    }
}

/// Get/set access to a control's normalized value.
pub trait Receiver {
    fn value(&self) -> f64;

    /// Clamp (and quantize, where applicable) then store. Does not fire
    /// `on_change`; only the tracking and scroll paths notify.
    fn set_value(&mut self, v: f64);
}

/// Inert leaf. Unbounded limits, draws nothing; useful as a spacer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Empty;

impl Element for Empty {}

impl<E: Element + ?Sized> Element for Box<E> {
    fn limits(&self, ctx: &Context) -> Limits {
        (**self).limits(ctx)
    }
    fn layout(&mut self, ctx: &Context) {
        (**self).layout(ctx)
    }
    fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        (**self).draw(ctx, canvas)
    }
    fn hit_test(&self, ctx: &Context, p: Point) -> bool {
        (**self).hit_test(ctx, p)
    }
    fn hit_element(&self, ctx: &Context, p: Point) -> Option<Hit> {
        (**self).hit_element(ctx, p)
    }
    fn wants_control(&self) -> bool {
        (**self).wants_control()
    }
    fn scroll(&mut self, ctx: &Context, p: Point, delta: ScrollDelta) -> bool {
        (**self).scroll(ctx, p, delta)
    }
    fn begin_tracking(&mut self, ctx: &Context, info: &TrackerInfo) {
        (**self).begin_tracking(ctx, info)
    }
    fn keep_tracking(&mut self, ctx: &Context, info: &TrackerInfo) {
        (**self).keep_tracking(ctx, info)
    }
    fn end_tracking(&mut self, ctx: &Context, info: &TrackerInfo) -> bool {
        (**self).end_tracking(ctx, info)
    }
}

/// A shared handle participates in the tree as the element it wraps. When
/// the inner element is a control and the pointer lands on it, the handle
/// clones itself into the [`Hit`] so the dispatcher can track through it.
impl<E: Element> Element for Shared<E> {
    fn limits(&self, ctx: &Context) -> Limits {
        self.borrow().limits(ctx)
    }
    fn layout(&mut self, ctx: &Context) {
        self.borrow_mut().layout(ctx)
    }
    fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        self.borrow().draw(ctx, canvas)
    }
    fn hit_test(&self, ctx: &Context, p: Point) -> bool {
        self.borrow().hit_test(ctx, p)
    }
    fn hit_element(&self, ctx: &Context, p: Point) -> Option<Hit> {
        let inner = self.borrow();
        if inner.wants_control() {
            if inner.hit_test(ctx, p) {
                return Some(Hit {
                    element: self.clone(),
                    bounds: ctx.bounds,
                });
            }
            return None;
        }
        inner.hit_element(ctx, p)
    }
    fn wants_control(&self) -> bool {
        self.borrow().wants_control()
    }
    fn scroll(&mut self, ctx: &Context, p: Point, delta: ScrollDelta) -> bool {
        self.borrow_mut().scroll(ctx, p, delta)
    }
    fn begin_tracking(&mut self, ctx: &Context, info: &TrackerInfo) {
        self.borrow_mut().begin_tracking(ctx, info)
    }
    fn keep_tracking(&mut self, ctx: &Context, info: &TrackerInfo) {
        self.borrow_mut().keep_tracking(ctx, info)
    }
    fn end_tracking(&mut self, ctx: &Context, info: &TrackerInfo) -> bool {
        self.borrow_mut().end_tracking(ctx, info)
    }
}

impl<E: Element + Receiver> Receiver for Shared<E> {
    fn value(&self) -> f64 {
        self.borrow().value()
    }
    fn set_value(&mut self, v: f64) {
        self.borrow_mut().set_value(v);
    }
}
