//! Ready-made control assemblies. Each factory returns the composed tree
//! plus the [`Shared`] dial handle, so callers can mount the tree in a view
//! and keep wiring the control from outside.

use mullion_core::{Element, Shared, Size, shared};

use crate::align::{Insets, align_center, margin};
use crate::dial::Dial;
use crate::knob::Knob;
use crate::label::label;
use crate::radial::{RadialLabels, RadialMarks, radial_labels, radial_marks};
use crate::sprite::Sprite;
use crate::tile::{Tile, htile, vtile};
use crate::wheel::WheelStrip;

/// Subject of [`knob_dial`]: a knob face inside its tick and caption rings.
pub type DecoratedKnob = RadialLabels<RadialMarks<Knob>>;

/// Radial knob dial with tick marks and percentage labels around it. The
/// rings sit inside the dial, so the whole decorated box tracks the
/// pointer, not just the knob face.
pub fn knob_dial(diameter: f32) -> (Box<dyn Element>, Shared<Dial<DecoratedKnob>>) {
    let ring = (diameter * 0.25).max(12.0);
    let marks = radial_marks(ring, 11, Knob::new(diameter));
    let captions = (0..=4).map(|i| (i * 25).to_string()).collect();
    let handle = shared(Dial::new(radial_labels(ring, 11.0, captions, marks)));
    (Box::new(align_center(handle.clone())), handle)
}

/// Film-strip dial: one frame per value position, dragged linearly.
pub fn sprite_dial(
    source: impl Into<String>,
    frame_size: Size,
    frames: u32,
) -> (Box<dyn Element>, Shared<Dial<Sprite>>) {
    let handle = shared(Dial::linear(Sprite::new(source, frame_size, frames)));
    (Box::new(align_center(handle.clone())), handle)
}

fn wheel_step(cells: u32) -> f64 {
    if cells > 1 {
        1.0 / f64::from(cells - 1)
    } else {
        0.0
    }
}

/// Vertical thumbwheel over `labels`, one detent per label. `labels[0]` is
/// the value-0 position.
pub fn vthumbwheel(labels: Vec<String>) -> (Box<dyn Element>, Shared<Dial<WheelStrip<Tile>>>) {
    let cells = labels.len().max(1) as u32;
    // the strip runs top-down while values grow bottom-up
    let items = labels
        .iter()
        .rev()
        .map(|text| Box::new(label(text.clone())) as Box<dyn Element>)
        .collect();
    let wheel = WheelStrip::vertical(vtile(items), cells);
    let handle = shared(Dial::thumbwheel(wheel, wheel_step(cells)));
    (Box::new(handle.clone()), handle)
}

/// Horizontal thumbwheel over `labels`, one detent per label. `labels[0]`
/// is the value-0 position.
pub fn hthumbwheel(labels: Vec<String>) -> (Box<dyn Element>, Shared<Dial<WheelStrip<Tile>>>) {
    let cells = labels.len().max(1) as u32;
    // the strip runs left to right while values grow right to left
    let items = labels
        .iter()
        .rev()
        .map(|text| Box::new(label(text.clone())) as Box<dyn Element>)
        .collect();
    let wheel = WheelStrip::horizontal(htile(items), cells);
    let handle = shared(Dial::thumbwheel(wheel, wheel_step(cells)));
    (Box::new(handle.clone()), handle)
}

/// Stacks a caption under any element. The caption keeps its natural
/// height, so the subject absorbs all the vertical slack.
pub fn captioned(subject: impl Element, caption: impl Into<String>) -> Box<dyn Element> {
    Box::new(vtile(vec![
        Box::new(align_center(subject)),
        Box::new(margin(Insets::hv(0.0, 4.0), label(caption).with_size(12.0))),
    ]))
}
