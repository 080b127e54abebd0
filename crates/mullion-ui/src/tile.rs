//! Vertical and horizontal tiles.
//!
//! A tile stacks children along one axis. Its `limits` sum the children's
//! major-axis ranges and intersect their cross-axis ranges; its `layout`
//! distributes the assigned extent in a single forward pass, giving each
//! child its preferred maximum minus a share of the shortfall proportional
//! to the child's own elastic range (`max - min`). The shares are linear in
//! the ranges and sum telescopically, so one sweep lands exactly on the
//! assigned edge with no convergence iteration.
//!
//! Layout leaves behind an offset cache of `len + 1` boundaries, which makes
//! `bounds_of`, hit routing, and drawing O(1) per child afterwards.

use log::warn;
use mullion_core::{
    Axis, Canvas, Context, Element, FULL_EXTENT, Hit, Limits, Point, Rect, ScrollDelta,
};
use smallvec::SmallVec;

pub struct Tile {
    axis: Axis,
    children: Vec<Box<dyn Element>>,
    /// Major-axis boundaries from the last layout, `children.len() + 1` of
    /// them. Cleared on structural changes.
    tiles: SmallVec<[f32; 8]>,
    /// Cross-axis edges from the last layout.
    cross: (f32, f32),
}

/// Stack children top to bottom.
pub fn vtile(children: Vec<Box<dyn Element>>) -> Tile {
    Tile::new(Axis::Vertical, children)
}

/// Stack children left to right.
pub fn htile(children: Vec<Box<dyn Element>>) -> Tile {
    Tile::new(Axis::Horizontal, children)
}

impl Tile {
    pub fn new(axis: Axis, children: Vec<Box<dyn Element>>) -> Self {
        Self {
            axis,
            children,
            tiles: SmallVec::new(),
            cross: (0.0, 0.0),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn push(&mut self, child: Box<dyn Element>) {
        self.children.push(child);
        self.tiles.clear();
    }

    /// Bounds assigned to child `index` during the last layout.
    ///
    /// Precondition: `layout` has run since the last structural change.
    pub fn bounds_of(&self, index: usize) -> Rect {
        debug_assert!(
            self.tiles.len() == self.children.len() + 1,
            "bounds_of before layout"
        );
        self.axis
            .rect((self.tiles[index], self.tiles[index + 1]), self.cross)
    }

    fn cache_valid(&self) -> bool {
        self.tiles.len() == self.children.len() + 1
    }
}

impl Element for Tile {
    fn limits(&self, ctx: &Context) -> Limits {
        let mut major_min = 0.0f32;
        let mut major_max = 0.0f32;
        let mut cross_min = 0.0f32;
        let mut cross_max = FULL_EXTENT;
        for child in &self.children {
            let l = child.limits(ctx);
            major_min += self.axis.major(l.min);
            major_max += self.axis.major(l.max);
            cross_min = cross_min.max(self.axis.cross(l.min));
            cross_max = cross_max.min(self.axis.cross(l.max));
        }
        major_max = major_max.min(FULL_EXTENT);
        cross_max = cross_max.max(cross_min);
        Limits::new(
            self.axis.size(major_min, cross_min),
            self.axis.size(major_max, cross_max),
        )
    }

    fn layout(&mut self, ctx: &Context) {
        let (lead, _) = self.axis.span(ctx.bounds);
        let cross = self.axis.cross_span(ctx.bounds);
        let assigned = self.axis.major(ctx.bounds.size());

        // The distribution needs the unclamped totals: the sentinel clamp in
        // `limits` is for parents, and using it here would break the
        // telescoping once two unbounded children sum past the sentinel.
        // Accumulate in f64; the shares multiply sentinel-sized ranges.
        let mut total_min = 0.0f64;
        let mut total_max = 0.0f64;
        for child in &self.children {
            let l = child.limits(ctx);
            total_min += f64::from(self.axis.major(l.min));
            total_max += f64::from(self.axis.major(l.max));
        }
        // positive extra means the children's preferred total overshoots the
        // assigned extent and must be compressed; negative means expansion
        let extra = total_max - f64::from(assigned);
        let m_size = total_max - total_min;

        self.cross = cross;
        self.tiles.clear();
        let mut curr = f64::from(lead);
        for child in &mut self.children {
            let l = child.limits(ctx);
            let cmin = f64::from(self.axis.major(l.min));
            let cmax = f64::from(self.axis.major(l.max));
            self.tiles.push(curr as f32);
            let prev = curr;
            curr += cmax;
            if extra != 0.0 && m_size > 0.0 {
                curr -= extra * (cmax - cmin) / m_size;
            }
            let bounds = self.axis.rect((prev as f32, curr as f32), cross);
            child.layout(&ctx.with_bounds(bounds));
        }
        self.tiles.push(curr as f32);
    }

    fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        for (i, child) in self.children.iter().enumerate() {
            child.draw(&ctx.with_bounds(self.bounds_of(i)), canvas);
        }
    }

    fn hit_element(&self, ctx: &Context, p: Point) -> Option<Hit> {
        if !self.cache_valid() {
            warn!("hit routed through a tile before layout");
            return None;
        }
        if !self.hit_test(ctx, p) {
            return None;
        }
        for (i, child) in self.children.iter().enumerate() {
            let bounds = self.bounds_of(i);
            if bounds.contains(p)
                && let Some(hit) = child.hit_element(&ctx.with_bounds(bounds), p)
            {
                return Some(hit);
            }
        }
        None
    }

    fn scroll(&mut self, ctx: &Context, p: Point, delta: ScrollDelta) -> bool {
        if !self.cache_valid() {
            warn!("scroll routed through a tile before layout");
            return false;
        }
        if !ctx.bounds.contains(p) {
            return false;
        }
        let axis = self.axis;
        let cross = self.cross;
        for (i, child) in self.children.iter_mut().enumerate() {
            let bounds = axis.rect((self.tiles[i], self.tiles[i + 1]), cross);
            if bounds.contains(p) && child.scroll(&ctx.with_bounds(bounds), p, delta) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use mullion_core::{Size, Theme, shared};

    use super::*;

    struct Stub {
        lim: Limits,
    }

    impl Element for Stub {
        fn limits(&self, _ctx: &Context) -> Limits {
            self.lim
        }
    }

    fn stub_v(min_h: f32, max_h: f32) -> Box<dyn Element> {
        Box::new(Stub {
            lim: Limits::new(Size::new(0.0, min_h), Size::new(FULL_EXTENT, max_h)),
        })
    }

    fn stub_sized(min: Size, max: Size) -> Box<dyn Element> {
        Box::new(Stub {
            lim: Limits::new(min, max),
        })
    }

    struct Grab;

    impl Element for Grab {
        fn limits(&self, _ctx: &Context) -> Limits {
            Limits::new(Size::new(0.0, 60.0), Size::new(FULL_EXTENT, 150.0))
        }
        fn wants_control(&self) -> bool {
            true
        }
        fn scroll(&mut self, ctx: &Context, p: Point, _delta: ScrollDelta) -> bool {
            ctx.bounds.contains(p)
        }
    }

    #[test]
    fn compression_splits_by_elastic_range() {
        let theme = Theme::default();
        let dirty = Cell::new(false);
        let mut tile = vtile(vec![stub_v(40.0, 100.0), stub_v(60.0, 150.0)]);

        // aggregate max 250, assigned 190: extra 60 splits 24:36
        let ctx = Context::new(Rect::new(0.0, 0.0, 300.0, 190.0), &theme, &dirty);
        tile.layout(&ctx);

        let b0 = tile.bounds_of(0);
        let b1 = tile.bounds_of(1);
        assert!((b0.height() - 76.0).abs() < 1e-3);
        assert!((b1.height() - 114.0).abs() < 1e-3);
        assert!((b0.height() + b1.height() - 190.0).abs() < 1e-3);
    }

    #[test]
    fn expansion_splits_by_elastic_range() {
        let theme = Theme::default();
        let dirty = Cell::new(false);
        let mut tile = vtile(vec![stub_v(40.0, 100.0), stub_v(60.0, 150.0)]);

        // assigned 280 exceeds aggregate max 250: extra -30 splits 12:18
        let ctx = Context::new(Rect::new(0.0, 0.0, 300.0, 280.0), &theme, &dirty);
        tile.layout(&ctx);

        assert!((tile.bounds_of(0).height() - 112.0).abs() < 1e-3);
        assert!((tile.bounds_of(1).height() - 168.0).abs() < 1e-3);
    }

    #[test]
    fn equal_ranges_share_equally() {
        let theme = Theme::default();
        let dirty = Cell::new(false);
        let lim = Limits::new(Size::new(0.0, 50.0), Size::new(FULL_EXTENT, 100.0));
        let mut tile = vtile(crate::elements![Stub { lim }, Stub { lim }]);

        let ctx = Context::new(Rect::new(0.0, 0.0, 100.0, 160.0), &theme, &dirty);
        tile.layout(&ctx);

        assert!((tile.bounds_of(0).height() - 80.0).abs() < 1e-3);
        assert!((tile.bounds_of(1).height() - 80.0).abs() < 1e-3);
    }

    #[test]
    fn offset_cache_spans_the_container_exactly() {
        let theme = Theme::default();
        let dirty = Cell::new(false);
        let mut tile = vtile(vec![
            stub_v(20.0, 80.0),
            stub_v(30.0, 90.0),
            stub_v(10.0, 40.0),
        ]);

        let assigned = Rect::new(5.0, 10.0, 205.0, 170.0);
        let ctx = Context::new(assigned, &theme, &dirty);
        tile.layout(&ctx);

        let first = tile.bounds_of(0);
        let last = tile.bounds_of(2);
        assert!((first.top - assigned.top).abs() < 1e-3);
        assert!((last.bottom - assigned.bottom).abs() < 1e-3);
        for i in 0..2 {
            let a = tile.bounds_of(i);
            let b = tile.bounds_of(i + 1);
            assert_eq!(a.bottom, b.top);
            assert_eq!(a.left, assigned.left);
            assert_eq!(a.right, assigned.right);
        }
    }

    #[test]
    fn single_child_takes_the_full_extent() {
        let theme = Theme::default();
        let dirty = Cell::new(false);
        let mut tile = htile(vec![stub_sized(
            Size::new(40.0, 0.0),
            Size::new(100.0, FULL_EXTENT),
        )]);

        let ctx = Context::new(Rect::new(0.0, 0.0, 70.0, 50.0), &theme, &dirty);
        tile.layout(&ctx);

        let b = tile.bounds_of(0);
        assert!((b.width() - 70.0).abs() < 1e-3);
        assert_eq!(b.top, 0.0);
        assert_eq!(b.bottom, 50.0);
    }

    #[test]
    fn unbounded_children_still_meet_the_assigned_edge() {
        let theme = Theme::default();
        let dirty = Cell::new(false);
        let mut tile = htile(vec![
            stub_sized(Size::new(128.0, 0.0), Size::new(FULL_EXTENT, FULL_EXTENT)),
            stub_sized(Size::new(48.0, 0.0), Size::new(FULL_EXTENT, FULL_EXTENT)),
            stub_sized(Size::new(33.6, 10.0), Size::new(33.6, 20.0)),
        ]);

        let ctx = Context::new(Rect::new(0.0, 0.0, 640.0, 240.0), &theme, &dirty);
        tile.layout(&ctx);

        let total: f32 = (0..3).map(|i| tile.bounds_of(i).width()).sum();
        assert!((total - 640.0).abs() < 1e-2);
        assert!((tile.bounds_of(2).right - 640.0).abs() < 1e-2);
        // the inelastic child keeps its width, the elastic ones share
        assert!((tile.bounds_of(2).width() - 33.6).abs() < 1e-2);
        assert!(tile.bounds_of(0).width() > 100.0);
        assert!(tile.bounds_of(1).width() > 100.0);
    }

    #[test]
    fn empty_tile_reports_the_degenerate_sentinel() {
        let theme = Theme::default();
        let dirty = Cell::new(false);
        let ctx = Context::new(Rect::default(), &theme, &dirty);

        let v = vtile(vec![]);
        let lim = v.limits(&ctx);
        assert_eq!(lim.min, Size::new(0.0, 0.0));
        assert_eq!(lim.max, Size::new(FULL_EXTENT, 0.0));

        let h = htile(vec![]);
        let lim = h.limits(&ctx);
        assert_eq!(lim.max, Size::new(0.0, FULL_EXTENT));
    }

    #[test]
    fn adding_a_child_never_shrinks_the_major_minimum() {
        let theme = Theme::default();
        let dirty = Cell::new(false);
        let ctx = Context::new(Rect::default(), &theme, &dirty);

        let mut tile = vtile(vec![stub_v(40.0, 100.0)]);
        let before = tile.limits(&ctx).min.height;
        tile.push(stub_v(0.0, 50.0));
        let after = tile.limits(&ctx).min.height;
        assert!(after >= before);

        tile.push(stub_v(25.0, 25.0));
        assert!(tile.limits(&ctx).min.height >= after);
    }

    #[test]
    fn cross_axis_intersects_child_ranges() {
        let theme = Theme::default();
        let dirty = Cell::new(false);
        let ctx = Context::new(Rect::default(), &theme, &dirty);

        let tile = vtile(vec![
            stub_sized(Size::new(50.0, 10.0), Size::new(200.0, 20.0)),
            stub_sized(Size::new(80.0, 10.0), Size::new(120.0, 20.0)),
        ]);
        let lim = tile.limits(&ctx);
        assert_eq!(lim.min.width, 80.0);
        assert_eq!(lim.max.width, 120.0);

        // incompatible widths degrade to the min
        let clash = vtile(vec![
            stub_sized(Size::new(100.0, 10.0), Size::new(150.0, 20.0)),
            stub_sized(Size::new(0.0, 10.0), Size::new(50.0, 20.0)),
        ]);
        let lim = clash.limits(&ctx);
        assert_eq!(lim.min.width, 100.0);
        assert_eq!(lim.max.width, 100.0);
    }

    #[test]
    fn hit_routing_uses_the_offset_cache() {
        let theme = Theme::default();
        let dirty = Cell::new(false);
        let grab = shared(Grab);
        let mut tile = vtile(vec![stub_v(40.0, 100.0), Box::new(grab.clone())]);

        let ctx = Context::new(Rect::new(0.0, 0.0, 300.0, 250.0), &theme, &dirty);
        tile.layout(&ctx);

        let b1 = tile.bounds_of(1);
        let inside = Point::new(150.0, b1.top + b1.height() / 2.0);
        let hit = tile.hit_element(&ctx, inside).unwrap();
        assert_eq!(hit.bounds, b1);
        let expected: Rc<std::cell::RefCell<dyn Element>> = grab;
        assert!(Rc::ptr_eq(&hit.element, &expected));

        // plain children claim nothing
        let b0 = tile.bounds_of(0);
        let miss = Point::new(150.0, b0.top + 1.0);
        assert!(tile.hit_element(&ctx, miss).is_none());
    }

    #[test]
    fn hit_before_layout_claims_nothing() {
        let theme = Theme::default();
        let dirty = Cell::new(false);
        let grab = shared(Grab);
        let tile = vtile(vec![Box::new(grab)]);

        let ctx = Context::new(Rect::new(0.0, 0.0, 100.0, 100.0), &theme, &dirty);
        assert!(tile.hit_element(&ctx, Point::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn scroll_routes_to_the_child_under_the_pointer() {
        let theme = Theme::default();
        let dirty = Cell::new(false);
        let grab = shared(Grab);
        let mut tile = vtile(vec![stub_v(40.0, 100.0), Box::new(grab)]);

        let ctx = Context::new(Rect::new(0.0, 0.0, 300.0, 250.0), &theme, &dirty);
        tile.layout(&ctx);

        let b1 = tile.bounds_of(1);
        let inside = Point::new(10.0, b1.top + 5.0);
        assert!(tile.scroll(&ctx, inside, ScrollDelta::new(0.0, 1.0)));

        let above = Point::new(10.0, tile.bounds_of(0).top + 5.0);
        assert!(!tile.scroll(&ctx, above, ScrollDelta::new(0.0, 1.0)));
    }
}
