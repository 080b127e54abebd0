//! Pre-resolved visual parameters consumed by element drawing.
//!
//! The theme is deliberately flat: colors and scalar constants only, no
//! styling logic. Hosts resolve whatever styling system they carry into one
//! of these before handing it to the [`View`](crate::View).

use crate::Color;

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    /// Panel background behind composed controls.
    pub background: Color,
    /// Knob face fill.
    pub knob_face: Color,
    /// Knob rim stroke.
    pub knob_rim: Color,
    /// Value indicator line on knobs.
    pub indicator: Color,
    /// Radial tick marks.
    pub tick: Color,
    /// Caption and radial label text.
    pub label: Color,
    /// Thumbwheel strip text.
    pub strip_text: Color,

    /// Stroke width for knob rims.
    pub ring_stroke: f32,
    /// Default label size in px.
    pub label_size: f32,
    /// Pixels of drag that sweep a linear-mode dial end to end.
    pub dial_linear_range: f32,
    /// Divisor applied to linear drag deltas while shift is held.
    pub fine_adjust: f32,
    /// Value nudge per mouse-wheel unit on unquantized dials.
    pub scroll_step: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color(0x1E, 0x1E, 0x1E, 255),
            knob_face: Color(0x2A, 0x2A, 0x2E, 255),
            knob_rim: Color(0x55, 0x55, 0x55, 255),
            indicator: Color(0x34, 0xAF, 0x82, 255),
            tick: Color(0x8A, 0x8A, 0x8A, 255),
            label: Color(0xDD, 0xDD, 0xDD, 255),
            strip_text: Color(0xDD, 0xDD, 0xDD, 255),

            ring_stroke: 2.0,
            label_size: 14.0,
            dial_linear_range: 200.0,
            fine_adjust: 5.0,
            scroll_step: 0.05,
        }
    }
}
