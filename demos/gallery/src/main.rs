//! Control gallery driven without a window: builds the panel, then replays
//! the event sequence a host loop would deliver and prints what happens.

use anyhow::Result;
use log::info;
use mullion_core::{Canvas, Modifiers, Point, ScrollDelta, Size, View};
use mullion_ui::{Receiver, captioned, htile, knob_dial, shared, sprite_dial, vthumbwheel};

fn percent_labels() -> Vec<String> {
    (0..=4).map(|i| format!("{}%", i * 25)).collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let (knob_panel, knob) = knob_dial(64.0);
    let (strip_panel, strip) = sprite_dial("knob_strip.png", Size::new(48.0, 48.0), 64);
    let (wheel_panel, wheel) = vthumbwheel(percent_labels());

    knob.borrow_mut()
        .set_on_change(|v| info!("gain changed to {v:.3}"));
    strip.borrow_mut().set_value(0.5);

    let panel = shared(htile(vec![
        captioned(knob_panel, "gain"),
        captioned(strip_panel, "drive"),
        captioned(wheel_panel, "mix"),
    ]));

    let mut view = View::new(Box::new(panel.clone()));
    view.resize(Size::new(640.0, 240.0));

    let mut canvas = Canvas::new();
    view.draw(&mut canvas);
    println!("first frame: {} draw commands", canvas.commands.len());
    for cmd in canvas.commands.iter().take(6) {
        println!("  {cmd:?}");
    }

    // drag from the knob face toward the left edge of its cell
    let grab = panel.borrow().bounds_of(0).center();
    if view.pointer_down(grab, Modifiers::empty()) {
        view.pointer_move(Point::new(grab.x - 40.0, grab.y), Modifiers::empty());
        let committed = view.pointer_up(Point::new(grab.x - 40.0, grab.y), Modifiers::empty());
        println!(
            "dragged gain to {:.3} (committed: {committed})",
            knob.borrow().value()
        );
    }

    // two wheel notches on the mix thumbwheel, one detent each; the
    // strip cell sitting in the viewport tells us where to aim
    let over_wheel = wheel.borrow().subject().subject().bounds_of(4).center();
    for _ in 0..2 {
        view.scroll(over_wheel, ScrollDelta::new(0.0, 1.0));
    }
    println!("mix after two notches: {:.2}", wheel.borrow().value());

    canvas.clear();
    view.draw(&mut canvas);
    println!(
        "values: gain {:.3}, drive {:.3}, mix {:.2}",
        knob.borrow().value(),
        strip.borrow().value(),
        wheel.borrow().value()
    );
    Ok(())
}
