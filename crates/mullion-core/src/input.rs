//! Pointer input model: modifier keys, scroll deltas, and the per-gesture
//! tracking record the dispatcher threads through drag callbacks.

use bitflags::bitflags;

use crate::Point;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL  = 1 << 1;
        const ALT   = 1 << 2;
        const SUPER = 1 << 3;
    }
}

/// Wheel movement in host scroll units (lines or normalized notches).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollDelta {
    pub x: f32,
    pub y: f32,
}

impl ScrollDelta {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One drag gesture's worth of pointer state.
///
/// Created by the dispatcher at `begin_tracking`, advanced on every move,
/// dropped after `end_tracking`. Controls receive it by reference and must
/// not store it.
#[derive(Clone, Copy, Debug)]
pub struct TrackerInfo {
    /// Pointer position when the gesture began.
    pub start: Point,
    /// Position at the previous event.
    pub previous: Point,
    /// Position at the current event.
    pub current: Point,
    pub modifiers: Modifiers,
}

impl TrackerInfo {
    pub fn new(start: Point, modifiers: Modifiers) -> Self {
        Self {
            start,
            previous: start,
            current: start,
            modifiers,
        }
    }

    pub fn advance(&mut self, to: Point, modifiers: Modifiers) {
        self.previous = self.current;
        self.current = to;
        self.modifiers = modifiers;
    }

    /// Movement since the gesture began.
    pub fn delta(&self) -> Point {
        Point::new(
            self.current.x - self.start.x,
            self.current.y - self.start.y,
        )
    }

    /// Movement since the previous event.
    pub fn step(&self) -> Point {
        Point::new(
            self.current.x - self.previous.x,
            self.current.y - self.previous.y,
        )
    }
}
