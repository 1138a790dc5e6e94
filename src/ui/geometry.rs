//! Geometry primitives for layout and redraw bookkeeping
//!
//! All components are signed 32-bit integers. Layout arithmetic may produce
//! negative intermediate widths or heights when a caller asks for more insets
//! than there is room for; these types carry such values without complaint
//! and every operation saturates instead of overflowing.
//!
//! Rectangles are stored as a pair of corners with an *exclusive*
//! bottom-right corner, so `Rect::new((0, 0), (50, 50))` covers 50x50 pixels.

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use embedded_graphics::prelude::{Point as EgPoint, Size as EgSize};
use embedded_graphics::primitives::Rectangle;

// ============================================================================
// Point
// ============================================================================

/// A position on the screen, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Move the point by the same amount along both axes.
    pub fn offset(self, by: i32) -> Self {
        Self {
            x: self.x.saturating_add(by),
            y: self.y.saturating_add(by),
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point {
            x: self.x.saturating_neg(),
            y: self.y.saturating_neg(),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for EgPoint {
    fn from(p: Point) -> Self {
        EgPoint::new(p.x, p.y)
    }
}

impl From<EgPoint> for Point {
    fn from(p: EgPoint) -> Self {
        Point::new(p.x, p.y)
    }
}

// ============================================================================
// Size
// ============================================================================

/// Width and height of a laid out element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }

    /// The bottom-right corner of a rect of this size anchored at the origin.
    pub const fn to_point(self) -> Point {
        Point {
            x: self.width,
            y: self.height,
        }
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

// ============================================================================
// Rect
// ============================================================================

/// Axis-aligned rectangle with an exclusive bottom-right corner.
///
/// Inverted rects (bottom-right above or left of top-left) are representable;
/// they report a negative width or height and are treated as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    pub fn new(top_left: impl Into<Point>, bottom_right: impl Into<Point>) -> Self {
        Self {
            top_left: top_left.into(),
            bottom_right: bottom_right.into(),
        }
    }

    /// Rect of the given size with its top-left corner at `origin`.
    pub fn with_size(origin: Point, size: Size) -> Self {
        Self {
            top_left: origin,
            bottom_right: origin + size.to_point(),
        }
    }

    pub fn width(&self) -> i32 {
        self.bottom_right.x.saturating_sub(self.top_left.x)
    }

    pub fn height(&self) -> i32 {
        self.bottom_right.y.saturating_sub(self.top_left.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Geometric center, rounded towards the top-left.
    pub fn center(&self) -> Point {
        Point::new(
            self.top_left.x.saturating_add(self.width() / 2),
            self.top_left.y.saturating_add(self.height() / 2),
        )
    }

    /// True when the rect covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.top_left.x
            && point.y >= self.top_left.y
            && point.x < self.bottom_right.x
            && point.y < self.bottom_right.y
    }

    /// True when `other` lies entirely within this rect.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.top_left.x >= self.top_left.x
            && other.top_left.y >= self.top_left.y
            && other.bottom_right.x <= self.bottom_right.x
            && other.bottom_right.y <= self.bottom_right.y
    }

    /// Overlapping area of two rects; empty (possibly inverted) if disjoint.
    pub fn intersection(&self, other: &Rect) -> Rect {
        Rect {
            top_left: Point::new(
                self.top_left.x.max(other.top_left.x),
                self.top_left.y.max(other.top_left.y),
            ),
            bottom_right: Point::new(
                self.bottom_right.x.min(other.bottom_right.x),
                self.bottom_right.y.min(other.bottom_right.y),
            ),
        }
    }

    /// Smallest rect that covers both rects. Empty rects are ignored.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        Rect {
            top_left: Point::new(
                self.top_left.x.min(other.top_left.x),
                self.top_left.y.min(other.top_left.y),
            ),
            bottom_right: Point::new(
                self.bottom_right.x.max(other.bottom_right.x),
                self.bottom_right.y.max(other.bottom_right.y),
            ),
        }
    }

    pub fn translate(&self, by: Point) -> Rect {
        Rect {
            top_left: self.top_left + by,
            bottom_right: self.bottom_right + by,
        }
    }
}

impl From<Rect> for Rectangle {
    /// Negative extents collapse to a zero-sized rectangle.
    fn from(rect: Rect) -> Self {
        Rectangle::new(
            rect.top_left.into(),
            EgSize::new(rect.width().max(0) as u32, rect.height().max(0) as u32),
        )
    }
}

// ============================================================================
// Insets
// ============================================================================

/// Space reserved on each side of a rect (padding, margin, border thickness).
///
/// # Examples
///
/// ```
/// use epd_layout::ui::{Insets, Rect};
///
/// let insets = Insets::all(5);
/// let inner = insets.shrink(Rect::new((0, 0), (50, 50)));
/// assert_eq!(inner, Rect::new((5, 5), (45, 45)));
/// assert_eq!(insets.horizontal(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    /// Equal insets on all sides.
    pub const fn all(value: i32) -> Self {
        Self {
            top: value,
            left: value,
            right: value,
            bottom: value,
        }
    }

    /// `vertical` for top and bottom, `horizontal` for left and right.
    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self {
            top: vertical,
            left: horizontal,
            right: horizontal,
            bottom: vertical,
        }
    }

    /// Individual sides, in CSS order: top, right, bottom, left.
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Total horizontal inset (left + right).
    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical inset (top + bottom).
    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Remove the insets from the inside edges of `rect`.
    pub fn shrink(&self, rect: Rect) -> Rect {
        Rect {
            top_left: rect.top_left + Point::new(self.left, self.top),
            bottom_right: rect.bottom_right - Point::new(self.right, self.bottom),
        }
    }

    /// Grow `size` by the insets.
    pub fn expand(&self, size: Size) -> Size {
        Size::new(
            size.width.saturating_add(self.horizontal()),
            size.height.saturating_add(self.vertical()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions_are_exclusive() {
        let rect = Rect::new((10, 20), (60, 30));
        assert_eq!(rect.width(), 50);
        assert_eq!(rect.height(), 10);
        assert!(rect.contains(Point::new(10, 20)));
        assert!(!rect.contains(Point::new(60, 25)));
    }

    #[test]
    fn test_inverted_rect_is_empty() {
        let rect = Rect::new((40, 40), (10, 10));
        assert_eq!(rect.width(), -30);
        assert!(rect.is_empty());

        let converted: Rectangle = rect.into();
        assert_eq!(converted.size, EgSize::zero());
    }

    #[test]
    fn test_shrink_and_expand_are_inverse() {
        let insets = Insets::new(1, 2, 3, 4);
        let rect = Rect::with_size(Point::new(5, 5), Size::new(40, 30));

        let inner = insets.shrink(rect);
        assert_eq!(inner.size(), Size::new(34, 26));
        assert_eq!(insets.expand(inner.size()), rect.size());
    }

    #[test]
    fn test_union_ignores_empty_rects() {
        let a = Rect::new((0, 0), (10, 10));
        let empty = Rect::new((50, 50), (50, 50));
        assert_eq!(a.union(&empty), a);
        assert_eq!(empty.union(&a), a);

        let b = Rect::new((20, 5), (30, 40));
        assert_eq!(a.union(&b), Rect::new((0, 0), (30, 40)));
    }

    #[test]
    fn test_point_arithmetic_saturates() {
        let p = Point::new(i32::MAX, 0) + Point::new(1, 1);
        assert_eq!(p, Point::new(i32::MAX, 1));
        assert_eq!(Point::new(3, 4).offset(2), Point::new(5, 6));
    }
}
