//! Place a child at a fixed offset

use crate::error::Result;
use crate::ui::canvas::Canvas;
use crate::ui::constraints::Constraints;
use crate::ui::core::{RenderObject, RenderState, Widget};
use crate::ui::geometry::{Point, Rect, Size};
use crate::ui::region::UpdateRegion;

/// Draws its child `position` pixels from its own top-left corner.
///
/// The child may use whatever space is left below and right of the offset.
/// Own size follows [`Center`](super::Center): all available space, or the
/// child's size along an unbounded axis.
#[derive(Debug, Clone)]
pub struct Positioned<C> {
    pub child: C,
    pub position: Point,
}

impl<C> Positioned<C> {
    pub fn new(child: C, position: Point) -> Self {
        Self { child, position }
    }
}

pub struct PositionedRenderObject<C: Widget> {
    state: RenderState,
    child: C::RenderObject,
    position: Point,
    child_size: Size,
}

impl<C: Widget> PositionedRenderObject<C> {
    pub fn child_object(&self) -> &C::RenderObject {
        &self.child
    }
}

impl<C: Widget> Widget for Positioned<C> {
    type RenderObject = PositionedRenderObject<C>;

    fn create_render_object(&self) -> Self::RenderObject {
        PositionedRenderObject {
            state: RenderState::new(),
            child: self.child.create_render_object(),
            position: self.position,
            child_size: Size::zero(),
        }
    }

    fn update(&self, render_object: &mut Self::RenderObject) {
        if self.position != render_object.position {
            render_object.mark_needs_layout();
            // Repaint the child where it lands without wiping our whole rect.
            render_object.mark_self_needs_draw(false);
            render_object.child.mark_needs_draw(true);
        }
        render_object.position = self.position;
        self.child.update(&mut render_object.child);
    }
}

impl<C: Widget> RenderObject for PositionedRenderObject<C> {
    fn state(&self) -> &RenderState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }

    fn child(&self) -> Option<&dyn RenderObject> {
        Some(&self.child)
    }

    fn child_mut(&mut self) -> Option<&mut dyn RenderObject> {
        Some(&mut self.child)
    }

    fn do_layout(&mut self, constraints: Constraints) -> Size {
        let mut remaining = constraints.max;
        if constraints.has_bounded_width() {
            remaining.width = remaining.width.saturating_sub(self.position.x);
        }
        if constraints.has_bounded_height() {
            remaining.height = remaining.height.saturating_sub(self.position.y);
        }

        self.child_size = self.child.layout(Constraints::loose(remaining));

        let mut result = constraints.max;
        if !constraints.has_bounded_width() {
            result.width = self.child_size.width;
        }
        if !constraints.has_bounded_height() {
            result.height = self.child_size.height;
        }
        result
    }

    fn do_draw(&mut self, rect: Rect, canvas: &mut dyn Canvas) -> Result<UpdateRegion> {
        let child_rect = Rect::with_size(rect.top_left + self.position, self.child_size);
        self.child.draw(child_rect, canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::region::Waveform;
    use crate::ui::testing::{Probe, RecordingCanvas, pump};

    #[test]
    fn test_child_gets_remaining_space() {
        let widget = Positioned::new(Probe::new(Size::new(20, 20)), Point::new(10, 10));
        let mut ro = widget.create_render_object();

        let size = ro.layout(Constraints::loose(Size::new(100, 100)));
        assert_eq!(size, Size::new(100, 100));
        assert_eq!(
            ro.child_object().layouts[0],
            Constraints::loose(Size::new(90, 90))
        );
    }

    #[test]
    fn test_draw_offsets_child_from_parent_rect() {
        let widget = Positioned::new(Probe::new(Size::new(20, 20)), Point::new(10, 10));
        let mut ro = widget.create_render_object();
        let mut canvas = RecordingCanvas::new();

        ro.layout(Constraints::loose(Size::new(100, 100)));
        let region = ro
            .draw(Rect::new((5, 5), (105, 105)), &mut canvas)
            .unwrap();

        let child_rect = Rect::new((15, 15), (35, 35));
        assert_eq!(ro.child_object().draws[0], child_rect);
        assert_eq!(region, UpdateRegion::from_rect(child_rect, Waveform::Gc16Fast));
    }

    #[test]
    fn test_unbounded_collapses_to_child() {
        let widget = Positioned::new(Probe::new(Size::new(20, 30)), Point::new(4, 4));
        let mut ro = widget.create_render_object();

        let size = ro.layout(Constraints::unbounded());
        assert_eq!(size, Size::new(20, 30));
        assert_eq!(ro.child_object().layouts[0], Constraints::unbounded());
    }

    #[test]
    fn test_move_redraws_child_at_new_offset() {
        let constraints = Constraints::loose(Size::new(100, 100));
        let rect = Rect::new((0, 0), (100, 100));
        let probe = Probe::new(Size::new(20, 20));
        let mut ro = Positioned::new(probe, Point::new(10, 10)).create_render_object();
        let mut canvas = RecordingCanvas::new();
        ro.layout(constraints);
        ro.draw(rect, &mut canvas).unwrap();

        Positioned::new(probe, Point::new(30, 10)).update(&mut ro);
        assert!(ro.needs_layout());
        assert!(!ro.is_full_draw());

        ro.layout(constraints);
        let region = ro.draw(rect, &mut canvas).unwrap();

        let moved = Rect::new((30, 10), (50, 30));
        assert_eq!(region, UpdateRegion::from_rect(moved, Waveform::Gc16Fast));
        assert_eq!(
            ro.child_object().layouts[1],
            Constraints::loose(Size::new(70, 90))
        );
    }

    #[test]
    fn test_clean_redraw_is_empty() {
        let constraints = Constraints::loose(Size::new(100, 100));
        let widget = Positioned::new(Probe::new(Size::new(20, 20)), Point::new(10, 10));
        let mut ro = widget.create_render_object();
        let mut canvas = RecordingCanvas::new();
        let first = pump(&mut ro, constraints, &mut canvas);
        assert!(!first.is_empty());

        widget.update(&mut ro);
        assert!(pump(&mut ro, constraints, &mut canvas).is_empty());
        assert!(canvas.is_untouched());
        assert_eq!(ro.child_object().draws.len(), 1);
    }
}
