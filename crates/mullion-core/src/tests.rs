#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn rect_derived_values() {
        let r = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
        assert_eq!(r.size(), Size::new(100.0, 50.0));

        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(110.0, 70.0)));
        assert!(!r.contains(Point::new(9.9, 45.0)));
        assert!(!r.contains(Point::new(60.0, 70.1)));

        let shrunk = r.inset(5.0, 10.0);
        assert_eq!(shrunk, Rect::new(15.0, 30.0, 105.0, 60.0));
        let grown = r.inset(-5.0, 0.0);
        assert_eq!(grown.width(), 110.0);
    }

    #[test]
    fn axis_accessors_roundtrip() {
        let s = Size::new(30.0, 40.0);
        assert_eq!(Axis::Horizontal.major(s), 30.0);
        assert_eq!(Axis::Horizontal.cross(s), 40.0);
        assert_eq!(Axis::Vertical.major(s), 40.0);
        assert_eq!(Axis::Vertical.cross(s), 30.0);
        assert_eq!(Axis::Vertical.size(40.0, 30.0), s);

        let r = Axis::Vertical.rect((10.0, 50.0), (0.0, 20.0));
        assert_eq!(r, Rect::new(0.0, 10.0, 20.0, 50.0));
        assert_eq!(Axis::Vertical.span(r), (10.0, 50.0));
        assert_eq!(Axis::Vertical.cross_span(r), (0.0, 20.0));
        assert_eq!(Axis::Vertical.coord(Point::new(3.0, 7.0)), 7.0);
        assert_eq!(Axis::Horizontal.coord(Point::new(3.0, 7.0)), 3.0);
    }

    #[test]
    fn limits_clamp_orders_components() {
        let lim = Limits::new(Size::new(50.0, 20.0), Size::new(100.0, 80.0));
        assert_eq!(lim.clamp(Size::new(10.0, 100.0)), Size::new(50.0, 80.0));
        assert_eq!(lim.clamp(Size::new(75.0, 50.0)), Size::new(75.0, 50.0));

        let fixed = Limits::fixed(Size::new(60.0, 60.0));
        assert_eq!(fixed.clamp(Size::new(0.0, 500.0)), Size::new(60.0, 60.0));

        assert_eq!(Limits::NONE.max.width, FULL_EXTENT);
        assert_eq!(Limits::default().min, Size::default());
    }

    #[test]
    fn color_hex_forms() {
        assert_eq!(Color::from_hex("#34AF82"), Ok(Color(0x34, 0xAF, 0x82, 255)));
        assert_eq!(Color::from_hex("1E1E1E"), Ok(Color(0x1E, 0x1E, 0x1E, 255)));
        assert_eq!(Color::from_hex("#FFF"), Ok(Color::WHITE));
        assert_eq!(
            Color::from_hex("#11223344"),
            Ok(Color(0x11, 0x22, 0x33, 0x44))
        );
        assert_eq!(
            Color::from_hex("#12345"),
            Err(ColorParseError::BadLength(5))
        );
        assert!(matches!(
            Color::from_hex("#GGGGGG"),
            Err(ColorParseError::BadDigit(_))
        ));
        assert_eq!(Color::BLACK.with_alpha(0x80), Color(0, 0, 0, 0x80));
    }

    #[test]
    fn color_hex_rejects_non_ascii() {
        // three bytes long, but slicing digit by digit would split the Ω
        assert!(matches!(
            Color::from_hex("a\u{03a9}"),
            Err(ColorParseError::BadDigit(_))
        ));
        // six bytes long, first pair straddles the é
        assert!(matches!(
            Color::from_hex("#a\u{e9}aaa"),
            Err(ColorParseError::BadDigit(_))
        ));
    }

    #[test]
    fn tracker_info_advances() {
        let mut info = TrackerInfo::new(Point::new(10.0, 10.0), Modifiers::empty());
        assert_eq!(info.delta(), Point::new(0.0, 0.0));

        info.advance(Point::new(15.0, 12.0), Modifiers::SHIFT);
        info.advance(Point::new(25.0, 8.0), Modifiers::SHIFT);
        assert_eq!(info.start, Point::new(10.0, 10.0));
        assert_eq!(info.previous, Point::new(15.0, 12.0));
        assert_eq!(info.current, Point::new(25.0, 8.0));
        assert_eq!(info.delta(), Point::new(15.0, -2.0));
        assert_eq!(info.step(), Point::new(10.0, -4.0));
        assert!(info.modifiers.contains(Modifiers::SHIFT));
    }

    /// Test control that counts lifecycle calls.
    #[derive(Default)]
    struct Tally {
        begins: usize,
        keeps: usize,
        ends: usize,
        scrolls: usize,
        last: Option<Point>,
    }

    impl Element for Tally {
        fn limits(&self, _ctx: &Context) -> Limits {
            Limits::fixed(Size::new(100.0, 100.0))
        }
        fn wants_control(&self) -> bool {
            true
        }
        fn scroll(&mut self, ctx: &Context, p: Point, _delta: ScrollDelta) -> bool {
            if !ctx.bounds.contains(p) {
                return false;
            }
            self.scrolls += 1;
            true
        }
        fn begin_tracking(&mut self, _ctx: &Context, info: &TrackerInfo) {
            self.begins += 1;
            self.last = Some(info.start);
        }
        fn keep_tracking(&mut self, _ctx: &Context, info: &TrackerInfo) {
            self.keeps += 1;
            self.last = Some(info.current);
        }
        fn end_tracking(&mut self, _ctx: &Context, info: &TrackerInfo) -> bool {
            self.ends += 1;
            self.last = Some(info.current);
            true
        }
    }

    #[test]
    fn view_drives_the_drag_lifecycle() {
        let tally = shared(Tally::default());
        let mut view = View::new(Box::new(tally.clone()));
        view.resize(Size::new(200.0, 200.0));
        view.layout();
        // content is clamped into its own limits
        assert_eq!(view.content_bounds().size(), Size::new(100.0, 100.0));

        assert!(view.pointer_down(Point::new(10.0, 10.0), Modifiers::empty()));
        assert!(view.is_tracking());
        view.pointer_move(Point::new(20.0, 10.0), Modifiers::empty());
        view.pointer_move(Point::new(30.0, 10.0), Modifiers::empty());
        assert!(view.pointer_up(Point::new(30.0, 10.0), Modifiers::empty()));

        let tally = tally.borrow();
        assert_eq!((tally.begins, tally.keeps, tally.ends), (1, 2, 1));
        assert_eq!(tally.last, Some(Point::new(30.0, 10.0)));
        assert!(!view.is_tracking());
    }

    #[test]
    fn view_press_outside_claims_nothing() {
        let tally = shared(Tally::default());
        let mut view = View::new(Box::new(tally.clone()));
        view.resize(Size::new(200.0, 200.0));
        view.layout();

        assert!(!view.pointer_down(Point::new(150.0, 50.0), Modifiers::empty()));
        // stray move/up without a gesture are no-ops
        view.pointer_move(Point::new(10.0, 10.0), Modifiers::empty());
        assert!(!view.pointer_up(Point::new(10.0, 10.0), Modifiers::empty()));
        assert_eq!(tally.borrow().begins, 0);
    }

    #[test]
    fn cancel_synthesizes_a_normal_end() {
        let tally = shared(Tally::default());
        let mut view = View::new(Box::new(tally.clone()));
        view.resize(Size::new(100.0, 100.0));
        view.layout();

        view.pointer_down(Point::new(50.0, 50.0), Modifiers::empty());
        view.pointer_move(Point::new(60.0, 50.0), Modifiers::empty());
        view.cancel_tracking();

        let tally = tally.borrow();
        assert_eq!(tally.ends, 1);
        assert_eq!(tally.last, Some(Point::new(60.0, 50.0)));
        assert!(!view.is_tracking());
    }

    #[test]
    fn scroll_routes_by_position() {
        let tally = shared(Tally::default());
        let mut view = View::new(Box::new(tally.clone()));
        view.resize(Size::new(200.0, 200.0));
        view.layout();

        assert!(view.scroll(Point::new(50.0, 50.0), ScrollDelta::new(0.0, 1.0)));
        assert!(!view.scroll(Point::new(150.0, 150.0), ScrollDelta::new(0.0, 1.0)));
        assert_eq!(tally.borrow().scrolls, 1);
    }

    #[test]
    fn draw_clears_the_dirty_flag() {
        let mut view = View::new(Box::new(Empty));
        view.resize(Size::new(100.0, 100.0));
        assert!(view.is_dirty());

        let mut canvas = Canvas::new();
        view.draw(&mut canvas);
        assert!(!view.is_dirty());
        assert!(canvas.commands.is_empty());

        view.resize(Size::new(50.0, 50.0));
        assert!(view.is_dirty());
    }
}
