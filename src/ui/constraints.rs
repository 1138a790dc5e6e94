//! Box constraints passed down the tree during layout

use super::geometry::{Insets, Size};

/// Minimum and maximum size a child may choose during layout.
///
/// `min <= max` is the caller's responsibility; nothing here checks it.
/// An axis whose max equals [`Constraints::UNBOUNDED`] has no upper limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraints {
    pub min: Size,
    pub max: Size,
}

impl Constraints {
    /// Sentinel for an axis without an upper limit.
    pub const UNBOUNDED: i32 = i32::MAX;

    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Forces exactly `size`.
    pub const fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Anything from zero up to `max`.
    pub const fn loose(max: Size) -> Self {
        Self {
            min: Size::zero(),
            max,
        }
    }

    /// No limits on either axis.
    pub const fn unbounded() -> Self {
        Self::loose(Size::new(Self::UNBOUNDED, Self::UNBOUNDED))
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max.width != Self::UNBOUNDED
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max.height != Self::UNBOUNDED
    }

    /// Constraints for a child that sits inside `insets`.
    ///
    /// Both min and max shrink by the insets. Results are not clamped at
    /// zero; an unbounded axis stays unbounded.
    pub fn inset(&self, insets: Insets) -> Constraints {
        let horizontal = insets.horizontal();
        let vertical = insets.vertical();

        let max_width = if self.has_bounded_width() {
            self.max.width.saturating_sub(horizontal)
        } else {
            self.max.width
        };
        let max_height = if self.has_bounded_height() {
            self.max.height.saturating_sub(vertical)
        } else {
            self.max.height
        };

        Constraints {
            min: Size::new(
                self.min.width.saturating_sub(horizontal),
                self.min.height.saturating_sub(vertical),
            ),
            max: Size::new(max_width, max_height),
        }
    }

    /// Size of a parent whose child of size `child` sits inside `insets`.
    pub fn expand(&self, child: Size, insets: Insets) -> Size {
        insets.expand(child)
    }

    /// Clamp `size` into `[min, max]` per axis, without panicking on
    /// malformed constraints.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            clamp(size.width, self.min.width, self.max.width),
            clamp(size.height, self.min.height, self.max.height),
        )
    }
}

/// Like `i32::clamp`, but tolerates `min > max` (max wins).
pub(crate) fn clamp(value: i32, min: i32, max: i32) -> i32 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_then_expand_round_trips() {
        let sizes = [Size::new(0, 0), Size::new(100, 40), Size::new(1404, 1872)];
        let insets = [
            Insets::all(0),
            Insets::all(3),
            Insets::new(1, 2, 3, 4),
            Insets::symmetric(10, 0),
        ];

        for size in sizes {
            for i in insets {
                let c = Constraints::loose(size);
                let child_max = c.inset(i).max;
                assert_eq!(c.expand(child_max, i), c.max, "size {:?} insets {:?}", size, i);
            }
        }
    }

    #[test]
    fn test_inset_keeps_unbounded_axes() {
        let c = Constraints::new(Size::new(10, 10), Size::new(Constraints::UNBOUNDED, 50));
        let inner = c.inset(Insets::all(4));

        assert!(!inner.has_bounded_width());
        assert!(inner.has_bounded_height());
        assert_eq!(inner.min, Size::new(2, 2));
        assert_eq!(inner.max.height, 42);
    }

    #[test]
    fn test_inset_may_go_negative() {
        let c = Constraints::loose(Size::new(6, 6));
        let inner = c.inset(Insets::all(5));
        assert_eq!(inner.max, Size::new(-4, -4));
        assert_eq!(inner.min, Size::new(-10, -10));
    }

    #[test]
    fn test_constrain_tolerates_inverted_range() {
        let c = Constraints::new(Size::new(50, 0), Size::new(30, 100));
        assert_eq!(c.constrain(Size::new(40, 200)), Size::new(30, 100));
    }
}
