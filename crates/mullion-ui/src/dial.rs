//! Dials and thumbwheels: normalized-value controls driven by drag
//! tracking, wheel input, or programmatic sets.
//!
//! A dial wraps a drawable subject (knob, sprite, wheel strip) and owns the
//! value in `[0, 1]`; the subject receives every stored value through
//! [`Receiver`], so rendering always follows tracking. Two drag mappings
//! exist: radial (pointer angle around the subject center) and linear
//! (vertical delta scaled by the theme's drag range). A quantization step
//! turns either into a detented thumbwheel.

use std::f64::consts::TAU;
use std::rc::Rc;

use mullion_core::{
    Canvas, Context, Element, Limits, Modifiers, Point, Receiver, ScrollDelta, TrackerInfo,
};

/// Fraction of the full circle a radial dial sweeps.
pub(crate) const TRAVEL: f64 = 0.75;
/// Angular sweep between value 0 and value 1.
pub(crate) const RANGE: f64 = TAU * TRAVEL;
/// Angle of value 0. Angles are measured from the 6 o'clock position,
/// growing clockwise on screen, so the dead gap is centered at the bottom.
pub(crate) const START_ANGLE: f64 = TAU * (1.0 - TRAVEL) / 2.0;

/// Point on the sweep circle for a value, `radius` away from `center`.
/// Uses the same angle convention as tracking.
pub(crate) fn sweep_point(center: Point, radius: f32, val: f64) -> Point {
    let theta = START_ANGLE + val * RANGE;
    let (sin, cos) = theta.sin_cos();
    Point::new(
        center.x - radius * sin as f32,
        center.y + radius * cos as f32,
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialMode {
    /// Value follows the pointer's angle around the subject center.
    Radial,
    /// Value follows the vertical drag delta.
    Linear,
}

pub struct Dial<S> {
    subject: S,
    mode: DialMode,
    value: f64,
    start_value: f64,
    step: Option<f64>,
    on_change: Option<Rc<dyn Fn(f64)>>,
}

impl<S: Element + Receiver> Dial<S> {
    /// Radial dial around `subject`.
    pub fn new(subject: S) -> Self {
        Self {
            subject,
            mode: DialMode::Radial,
            value: 0.0,
            start_value: 0.0,
            step: None,
            on_change: None,
        }
    }

    /// Linear (drag up and down) dial around `subject`.
    pub fn linear(subject: S) -> Self {
        Self {
            mode: DialMode::Linear,
            ..Self::new(subject)
        }
    }

    /// Linear dial snapping to multiples of `step`; each multiple is a
    /// detent. A step at or below zero behaves like a continuous dial.
    pub fn thumbwheel(subject: S, step: f64) -> Self {
        Self::linear(subject).with_step(step)
    }

    pub fn with_mode(mut self, mode: DialMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = (step > 0.0).then_some(step);
        self
    }

    pub fn with_value(mut self, v: f64) -> Self {
        self.set_value(v);
        self
    }

    /// Called on every tracking or scroll change with the new value. Runs
    /// synchronously while the control is borrowed, so it must not call
    /// back into this control; route updates through the value instead.
    pub fn on_change(mut self, f: impl Fn(f64) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn set_on_change(&mut self, f: impl Fn(f64) + 'static) {
        self.on_change = Some(Rc::new(f));
    }

    pub fn mode(&self) -> DialMode {
        self.mode
    }

    pub fn subject(&self) -> &S {
        &self.subject
    }

    fn quantize(&self, v: f64) -> f64 {
        match self.step {
            Some(s) => ((v / s).round() * s).clamp(0.0, 1.0),
            None => v.clamp(0.0, 1.0),
        }
    }

    fn assign(&mut self, v: f64) {
        self.value = v;
        self.subject.set_value(v);
    }

    fn notify(&self, ctx: &Context) {
        if let Some(f) = &self.on_change {
            f(self.value);
        }
        ctx.request_redraw();
    }

    fn radial_value(&self, ctx: &Context, info: &TrackerInfo) -> f64 {
        let center = ctx.bounds.center();
        let dx = f64::from(info.current.x - center.x);
        let dy = f64::from(info.current.y - center.y);
        let mut angle = -dx.atan2(dy);
        if angle < 0.0 {
            angle += TAU;
        }
        let val = (angle - START_ANGLE) / RANGE;
        // beyond the sweep ends the value clamps; a sample that lands far
        // across the dead gap is ignored so the value cannot teleport
        if (val - self.value).abs() < 0.6 {
            val.clamp(0.0, 1.0)
        } else {
            self.value
        }
    }

    fn linear_value(&self, ctx: &Context, info: &TrackerInfo) -> f64 {
        let mut range = f64::from(ctx.theme.dial_linear_range);
        if info.modifiers.contains(Modifiers::SHIFT) {
            range *= f64::from(ctx.theme.fine_adjust);
        }
        let delta = f64::from(info.start.y - info.current.y);
        self.start_value + delta / range
    }

    fn compute_value(&self, ctx: &Context, info: &TrackerInfo) -> f64 {
        let raw = match self.mode {
            DialMode::Radial => self.radial_value(ctx, info),
            DialMode::Linear => self.linear_value(ctx, info),
        };
        self.quantize(raw)
    }
}

impl<S: Element + Receiver> Element for Dial<S> {
    fn limits(&self, ctx: &Context) -> Limits {
        self.subject.limits(ctx)
    }

    fn layout(&mut self, ctx: &Context) {
        self.subject.layout(ctx)
    }

    fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        self.subject.draw(ctx, canvas)
    }

    fn wants_control(&self) -> bool {
        true
    }

    fn scroll(&mut self, ctx: &Context, p: Point, delta: ScrollDelta) -> bool {
        if !ctx.bounds.contains(p) {
            return false;
        }
        let dir = if delta.y != 0.0 { delta.y } else { delta.x };
        if dir == 0.0 {
            return false;
        }
        // quantized dials nudge a whole detent per wheel unit
        let unit = self.step.unwrap_or(ctx.theme.scroll_step);
        let new = self.quantize(self.value + unit * f64::from(dir));
        if new != self.value {
            self.assign(new);
            self.notify(ctx);
        }
        true
    }

    fn begin_tracking(&mut self, _ctx: &Context, _info: &TrackerInfo) {
        self.start_value = self.value;
    }

    fn keep_tracking(&mut self, ctx: &Context, info: &TrackerInfo) {
        let new = self.compute_value(ctx, info);
        if new != self.value {
            self.assign(new);
            self.notify(ctx);
        }
    }

    fn end_tracking(&mut self, ctx: &Context, info: &TrackerInfo) -> bool {
        let new = self.compute_value(ctx, info);
        if new != self.value {
            self.assign(new);
        }
        if self.value != self.start_value {
            // commit notification for the gesture as a whole
            self.notify(ctx);
            return true;
        }
        false
    }
}

impl<S: Element + Receiver> Receiver for Dial<S> {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, v: f64) {
        let q = self.quantize(v);
        self.assign(q);
    }
}
