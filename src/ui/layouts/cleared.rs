//! Background fill behind a child

use crate::error::Result;
use crate::ui::canvas::{Canvas, Color, WHITE};
use crate::ui::constraints::Constraints;
use crate::ui::core::{RenderObject, RenderState, Widget};
use crate::ui::geometry::{Rect, Size};
use crate::ui::region::{UpdateRegion, Waveform};

/// Wipes its whole rect to `color` before a full redraw of its child.
///
/// Layout is a passthrough. A full draw fills the rect and reports it with
/// the full [`Waveform::Gc16`] refresh; a partial draw leaves the background
/// alone and reports only the child's region.
#[derive(Debug, Clone)]
pub struct Cleared<C> {
    pub child: C,
    pub color: Color,
}

impl<C> Cleared<C> {
    pub fn new(child: C) -> Self {
        Self {
            child,
            color: WHITE,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

pub struct ClearedRenderObject<C: Widget> {
    state: RenderState,
    child: C::RenderObject,
    color: Color,
}

impl<C: Widget> ClearedRenderObject<C> {
    pub fn child_object(&self) -> &C::RenderObject {
        &self.child
    }
}

impl<C: Widget> Widget for Cleared<C> {
    type RenderObject = ClearedRenderObject<C>;

    fn create_render_object(&self) -> Self::RenderObject {
        ClearedRenderObject {
            state: RenderState::new(),
            child: self.child.create_render_object(),
            color: self.color,
        }
    }

    fn update(&self, render_object: &mut Self::RenderObject) {
        if self.color != render_object.color {
            render_object.mark_needs_draw(true);
        }
        render_object.color = self.color;
        self.child.update(&mut render_object.child);
    }
}

impl<C: Widget> RenderObject for ClearedRenderObject<C> {
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
        self.child.layout(constraints)
    }

    fn do_draw(&mut self, rect: Rect, canvas: &mut dyn Canvas) -> Result<UpdateRegion> {
        let mut region = UpdateRegion::new();

        if self.is_full_draw() {
            canvas.fill(rect, self.color)?;
            region.push(rect, Waveform::Gc16);
        }

        region |= self.child.draw(rect, canvas)?;
        Ok(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::canvas::BLACK;
    use crate::ui::testing::{Probe, RecordingCanvas, pump};

    #[test]
    fn test_full_draw_fills_then_draws_child() {
        let widget = Cleared::new(Probe::new(Size::new(20, 10)));
        let mut ro = widget.create_render_object();
        let mut canvas = RecordingCanvas::new();

        let region = pump(&mut ro, Constraints::loose(Size::new(50, 50)), &mut canvas);
        let rect = Rect::new((0, 0), (20, 10));

        assert_eq!(canvas.fills, [(rect, WHITE)]);
        assert!(region.contains(rect, Waveform::Gc16));
        assert!(region.contains(rect, Waveform::Gc16Fast));
    }

    #[test]
    fn test_partial_draw_skips_fill() {
        let constraints = Constraints::loose(Size::new(50, 50));
        let mut ro = Cleared::new(Probe::new(Size::new(20, 10))).create_render_object();
        let mut canvas = RecordingCanvas::new();
        pump(&mut ro, constraints, &mut canvas);
        canvas.clear();

        Cleared::new(Probe::new(Size::new(20, 10)).with_content(3)).update(&mut ro);
        let region = pump(&mut ro, constraints, &mut canvas);

        assert!(canvas.fills.is_empty());
        assert_eq!(
            region,
            UpdateRegion::from_rect(Rect::new((0, 0), (20, 10)), Waveform::Gc16Fast)
        );
    }

    #[test]
    fn test_color_change_clears_and_redraws_child() {
        let constraints = Constraints::loose(Size::new(50, 50));
        let mut ro = Cleared::new(Probe::new(Size::new(20, 10))).create_render_object();
        let mut canvas = RecordingCanvas::new();
        pump(&mut ro, constraints, &mut canvas);
        canvas.clear();

        Cleared::new(Probe::new(Size::new(20, 10)))
            .with_color(BLACK)
            .update(&mut ro);
        let region = pump(&mut ro, constraints, &mut canvas);

        assert_eq!(canvas.fills.len(), 1);
        assert_eq!(canvas.fills[0].1, BLACK);
        assert_eq!(ro.child_object().draws.len(), 2);
        assert_eq!(region.len(), 2);
    }

    #[test]
    fn test_layout_is_passthrough() {
        let mut ro = Cleared::new(Probe::new(Size::new(20, 10))).create_render_object();
        let constraints = Constraints::new(Size::new(25, 0), Size::new(40, 40));

        assert_eq!(ro.layout(constraints), Size::new(25, 10));
        assert_eq!(ro.child_object().layouts[0], constraints);
    }

    #[test]
    fn test_clean_redraw_is_empty() {
        let constraints = Constraints::loose(Size::new(50, 50));
        let widget = Cleared::new(Probe::new(Size::new(20, 10)));
        let mut ro = widget.create_render_object();
        let mut canvas = RecordingCanvas::new();
        pump(&mut ro, constraints, &mut canvas);
        canvas.clear();

        widget.update(&mut ro);
        assert!(pump(&mut ro, constraints, &mut canvas).is_empty());
        assert!(canvas.is_untouched());
        assert_eq!(ro.child_object().draws.len(), 1);
    }
}
