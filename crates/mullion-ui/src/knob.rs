//! Round knob face with a value indicator, the usual subject of a radial
//! dial.

use mullion_core::{Canvas, Context, Element, Limits, Receiver, Size};

use crate::dial::sweep_point;

pub struct Knob {
    diameter: f32,
    value: f64,
}

impl Knob {
    pub fn new(diameter: f32) -> Self {
        Self {
            diameter: diameter.max(0.0),
            value: 0.0,
        }
    }

    pub fn diameter(&self) -> f32 {
        self.diameter
    }
}

/// 64 px knob.
impl Default for Knob {
    fn default() -> Self {
        Self::new(64.0)
    }
}

impl Element for Knob {
    fn limits(&self, _ctx: &Context) -> Limits {
        Limits::fixed(Size::new(self.diameter, self.diameter))
    }

    fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        let center = ctx.bounds.center();
        let radius = (ctx.bounds.width().min(ctx.bounds.height()) / 2.0).max(0.0);
        let theme = ctx.theme;

        canvas.draw_circle_stroked(
            center,
            radius,
            theme.knob_face,
            (theme.ring_stroke, theme.knob_rim),
        );
        canvas.draw_line(
            sweep_point(center, radius * 0.6, self.value),
            sweep_point(center, radius * 0.9, self.value),
            theme.indicator,
            theme.ring_stroke,
        );
    }
}

impl Receiver for Knob {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, v: f64) {
        self.value = v.clamp(0.0, 1.0);
    }
}
