//! Plain value types for the layout protocol: points, sizes, rects, and the
//! per-axis [`Limits`] elements negotiate with.

/// Sentinel for "unbounded" on an axis. Large enough that no real layout
/// reaches it, small enough that sums of a few of them stay finite in f32.
pub const FULL_EXTENT: f32 = 1.0e6;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Shrink by `dx` on the left/right and `dy` on the top/bottom.
    /// Negative values grow the rect.
    pub fn inset(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right - dx,
            bottom: self.bottom - dy,
        }
    }
}

/// Stacking direction of a tile or port. The major axis is the one children
/// are laid out along; the cross axis is perpendicular to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn major(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    pub fn cross(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    pub fn size(self, major: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(major, cross),
            Axis::Vertical => Size::new(cross, major),
        }
    }

    /// Major-axis coordinate of a point.
    pub fn coord(self, p: Point) -> f32 {
        match self {
            Axis::Horizontal => p.x,
            Axis::Vertical => p.y,
        }
    }

    /// Leading and trailing major-axis edges of a rect.
    pub fn span(self, r: Rect) -> (f32, f32) {
        match self {
            Axis::Horizontal => (r.left, r.right),
            Axis::Vertical => (r.top, r.bottom),
        }
    }

    /// Leading and trailing cross-axis edges of a rect.
    pub fn cross_span(self, r: Rect) -> (f32, f32) {
        match self {
            Axis::Horizontal => (r.top, r.bottom),
            Axis::Vertical => (r.left, r.right),
        }
    }

    pub fn rect(self, span: (f32, f32), cross: (f32, f32)) -> Rect {
        match self {
            Axis::Horizontal => Rect::new(span.0, cross.0, span.1, cross.1),
            Axis::Vertical => Rect::new(cross.0, span.0, cross.1, span.1),
        }
    }
}

/// The extent range an element is willing to occupy, per axis.
///
/// `min` and `max` are kept ordered component-wise; constructors and
/// container math clamp rather than reject degenerate inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    pub min: Size,
    pub max: Size,
}

impl Limits {
    /// No constraints at all: zero minimum, unbounded maximum.
    pub const NONE: Limits = Limits {
        min: Size {
            width: 0.0,
            height: 0.0,
        },
        max: Size {
            width: FULL_EXTENT,
            height: FULL_EXTENT,
        },
    };

    pub fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Exactly `size` on both axes, no slack.
    pub fn fixed(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Clamp a proposed size into this range, component-wise.
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min.width).min(self.max.width),
            size.height.max(self.min.height).min(self.max.height),
        )
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::NONE
    }
}
