//! Rectangular border around a child

use crate::error::Result;
use crate::ui::canvas::{BLACK, Canvas, Color};
use crate::ui::constraints::Constraints;
use crate::ui::core::{RenderObject, RenderState, Widget};
use crate::ui::geometry::{Insets, Point, Rect, Size};
use crate::ui::region::{UpdateRegion, Waveform};

/// Draws a solid border whose thickness on each side is given by `size`.
///
/// Sizing works like [`Padding`](super::Padding). A color change repaints
/// only the border bands with the fast [`Waveform::Du`] waveform and leaves
/// the child's pixels alone.
#[derive(Debug, Clone)]
pub struct Border<C> {
    pub child: C,
    pub size: Insets,
    pub color: Color,
}

impl<C> Border<C> {
    pub fn new(child: C, size: Insets) -> Self {
        Self {
            child,
            size,
            color: BLACK,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

pub struct BorderRenderObject<C: Widget> {
    state: RenderState,
    child: C::RenderObject,
    size: Insets,
    color: Color,
}

impl<C: Widget> BorderRenderObject<C> {
    pub fn child_object(&self) -> &C::RenderObject {
        &self.child
    }
}

impl<C: Widget> Widget for Border<C> {
    type RenderObject = BorderRenderObject<C>;

    fn create_render_object(&self) -> Self::RenderObject {
        BorderRenderObject {
            state: RenderState::new(),
            child: self.child.create_render_object(),
            size: self.size,
            color: self.color,
        }
    }

    fn update(&self, render_object: &mut Self::RenderObject) {
        if self.size != render_object.size {
            // New thickness moves the child and every band.
            render_object.mark_needs_layout();
            render_object.mark_needs_draw(true);
        }

        if self.color != render_object.color {
            // Only our bands change; partial so the child keeps its pixels.
            render_object.mark_self_needs_draw(false);
        }

        render_object.size = self.size;
        render_object.color = self.color;
        self.child.update(&mut render_object.child);
    }
}

impl<C: Widget> RenderObject for BorderRenderObject<C> {
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
        let child_size = self.child.layout(constraints.inset(self.size));
        constraints.expand(child_size, self.size)
    }

    fn do_draw(&mut self, rect: Rect, canvas: &mut dyn Canvas) -> Result<UpdateRegion> {
        let mut region = UpdateRegion::new();

        // Bands first: they never overlap the child's rect, and a failure
        // here must leave the child dirty. Descendant changes alone don't
        // repaint them.
        if self.self_needs_draw() {
            paint_bands(canvas, rect, self.size, self.color)?;
            region.push(rect, Waveform::Du);
        }

        region |= self.child.draw(self.size.shrink(rect), canvas)?;
        Ok(region)
    }
}

/// Paint the four edge bands of `rect`, each as thick as its inset.
fn paint_bands(canvas: &mut dyn Canvas, rect: Rect, size: Insets, color: Color) -> Result<()> {
    if rect.is_empty() {
        return Ok(());
    }

    let left = rect.top_left.x;
    let top = rect.top_left.y;
    let right = rect.bottom_right.x - 1;
    let bottom = rect.bottom_right.y - 1;

    let mut band = |a: Point, b: Point, step: Point, thickness: i32| -> Result<()> {
        let (mut a, mut b) = (a, b);
        for _ in 0..thickness {
            canvas.draw_line(a, b, color)?;
            a += step;
            b += step;
        }
        Ok(())
    };

    band(
        Point::new(left, top),
        Point::new(right, top),
        Point::new(0, 1),
        size.top,
    )?;
    band(
        Point::new(left, top),
        Point::new(left, bottom),
        Point::new(1, 0),
        size.left,
    )?;
    band(
        Point::new(right, top),
        Point::new(right, bottom),
        Point::new(-1, 0),
        size.right,
    )?;
    band(
        Point::new(left, bottom),
        Point::new(right, bottom),
        Point::new(0, -1),
        size.bottom,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::canvas::WHITE;
    use crate::ui::testing::{Probe, RecordingCanvas, pump};

    fn border(size: i32, color: Color) -> Border<Probe> {
        Border::new(Probe::new(Size::new(20, 20)), Insets::all(size)).with_color(color)
    }

    #[test]
    fn test_first_draw_paints_every_band() {
        let mut ro = border(2, BLACK).create_render_object();
        let mut canvas = RecordingCanvas::new();

        let region = pump(&mut ro, Constraints::loose(Size::new(100, 100)), &mut canvas);

        assert_eq!(ro.size(), Size::new(24, 24));
        assert_eq!(canvas.lines.len(), 8);
        assert_eq!(
            canvas.lines[0],
            (Point::new(0, 0), Point::new(23, 0), BLACK)
        );
        assert_eq!(
            canvas.lines[7],
            (Point::new(0, 22), Point::new(23, 22), BLACK)
        );
        assert!(region.contains(Rect::new((0, 0), (24, 24)), Waveform::Du));
        assert!(region.contains(Rect::new((2, 2), (22, 22)), Waveform::Gc16Fast));
    }

    #[test]
    fn test_color_change_redraws_only_the_border() {
        let constraints = Constraints::loose(Size::new(100, 100));
        let mut ro = border(2, BLACK).create_render_object();
        let mut canvas = RecordingCanvas::new();
        pump(&mut ro, constraints, &mut canvas);
        canvas.clear();

        border(2, WHITE).update(&mut ro);
        assert!(!ro.needs_layout());
        assert!(!ro.child_object().needs_draw());

        let region = pump(&mut ro, constraints, &mut canvas);
        assert_eq!(
            region,
            UpdateRegion::from_rect(Rect::new((0, 0), (24, 24)), Waveform::Du)
        );
        assert_eq!(ro.child_object().draws.len(), 1);
        assert!(canvas.lines.iter().all(|(_, _, c)| *c == WHITE));
    }

    #[test]
    fn test_size_change_relayouts_child() {
        let constraints = Constraints::loose(Size::new(100, 100));
        let mut ro = border(2, BLACK).create_render_object();
        let mut canvas = RecordingCanvas::new();
        pump(&mut ro, constraints, &mut canvas);

        border(4, BLACK).update(&mut ro);
        assert!(ro.needs_layout());

        let region = pump(&mut ro, constraints, &mut canvas);
        let child = ro.child_object();
        assert_eq!(child.layouts.len(), 2);
        assert_eq!(child.layouts[1], constraints.inset(Insets::all(4)));
        assert_eq!(ro.size(), Size::new(28, 28));
        assert!(region.contains(Rect::new((0, 0), (28, 28)), Waveform::Du));
        assert!(region.contains(Rect::new((4, 4), (24, 24)), Waveform::Gc16Fast));
    }

    #[test]
    fn test_child_change_does_not_repaint_bands() {
        let constraints = Constraints::loose(Size::new(100, 100));
        let mut ro = border(2, BLACK).create_render_object();
        let mut canvas = RecordingCanvas::new();
        pump(&mut ro, constraints, &mut canvas);
        canvas.clear();

        Border::new(Probe::new(Size::new(20, 20)).with_content(7), Insets::all(2)).update(&mut ro);
        let region = pump(&mut ro, constraints, &mut canvas);

        assert!(canvas.lines.is_empty());
        assert_eq!(
            region,
            UpdateRegion::from_rect(Rect::new((2, 2), (22, 22)), Waveform::Gc16Fast)
        );
    }

    #[test]
    fn test_clean_redraw_is_empty() {
        let constraints = Constraints::loose(Size::new(100, 100));
        let mut ro = border(3, BLACK).create_render_object();
        let mut canvas = RecordingCanvas::new();
        pump(&mut ro, constraints, &mut canvas);
        canvas.clear();

        assert!(pump(&mut ro, constraints, &mut canvas).is_empty());
        assert!(canvas.is_untouched());
    }

    #[test]
    fn test_failed_bands_keep_child_dirty() {
        let constraints = Constraints::loose(Size::new(100, 100));
        let mut ro = border(2, BLACK).create_render_object();
        let mut canvas = RecordingCanvas::new();
        pump(&mut ro, constraints, &mut canvas);

        Border::new(Probe::new(Size::new(20, 20)).with_content(1), Insets::all(2))
            .with_color(WHITE)
            .update(&mut ro);
        let rect = Rect::new((0, 0), (24, 24));
        assert!(ro.draw(rect, &mut RecordingCanvas::failing()).is_err());
        assert!(ro.child_object().needs_draw());

        let region = ro.draw(rect, &mut canvas).unwrap();
        assert!(region.contains(rect, Waveform::Du));
        assert!(region.contains(Rect::new((2, 2), (22, 22)), Waveform::Gc16Fast));
        assert_eq!(region.len(), 2);
    }
}
