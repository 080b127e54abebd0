//! # Mullion core
//!
//! The element-tree core of the mullion toolkit:
//!
//! - geometry and [`Limits`] negotiation,
//! - the [`Element`] contract every node implements,
//! - draw-command recording ([`Canvas`]),
//! - the [`View`] dispatcher driving layout, rendering, and pointer
//!   tracking.
//!
//! The stock element library (tiles, dials, thumbwheels, decorations) lives
//! in `mullion-ui`; this crate is the part a host embeds.

pub mod canvas;
pub mod color;
pub mod element;
pub mod geometry;
pub mod input;
pub mod theme;
pub mod view;

pub mod tests;

pub use canvas::{Canvas, DrawCommand, TextAlign};
pub use color::{Color, ColorParseError};
pub use element::{Context, Element, Empty, Hit, Receiver, Shared, shared};
pub use geometry::{Axis, FULL_EXTENT, Limits, Point, Rect, Size};
pub use input::{Modifiers, ScrollDelta, TrackerInfo};
pub use theme::Theme;
pub use view::View;
