//! Containers, proxies, and value controls built on the `mullion-core`
//! element contract.
//!
//! Everything composes by wrapping: a tile owns boxed children, a proxy
//! owns one subject, and a control sits behind a [`Shared`] handle so the
//! application can keep talking to it after it is mounted. The [`gallery`]
//! module has ready-made assemblies of all of it.

pub mod align;
pub mod dial;
pub mod gallery;
pub mod knob;
pub mod label;
pub mod port;
pub mod radial;
pub mod sprite;
pub mod tile;
pub mod wheel;

pub use mullion_core::{Element, Receiver, Shared, shared};

pub use align::{Align, Insets, Margin, align, align_center, halign, margin, valign};
pub use dial::{Dial, DialMode};
pub use gallery::{DecoratedKnob, captioned, hthumbwheel, knob_dial, sprite_dial, vthumbwheel};
pub use knob::Knob;
pub use label::{Label, label};
pub use port::{Port, hport, vport};
pub use radial::{RadialLabels, RadialMarks, radial_labels, radial_marks};
pub use sprite::Sprite;
pub use tile::{Tile, htile, vtile};
pub use wheel::WheelStrip;

/// Boxes each expression into the `Vec<Box<dyn Element>>` a tile takes.
#[macro_export]
macro_rules! elements {
    () => {
        ::std::vec::Vec::new()
    };
    ($($child:expr),+ $(,)?) => {
        ::std::vec![$(::std::boxed::Box::new($child) as ::std::boxed::Box<dyn $crate::Element>),+]
    };
}
