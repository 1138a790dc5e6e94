//! Round border around a child

use crate::error::Result;
use crate::ui::canvas::{BLACK, Canvas, Color};
use crate::ui::constraints::Constraints;
use crate::ui::core::{RenderObject, RenderState, Widget};
use crate::ui::geometry::{Insets, Point, Rect, Size};
use crate::ui::region::{UpdateRegion, Waveform};

/// Like [`Border`](super::Border), but paints a ring instead of bands.
///
/// The ring is centered on the rect, fits inside it, and is `size.top`
/// pixels thick. Each circle is approximated with a line per degree.
#[derive(Debug, Clone)]
pub struct CircularBorder<C> {
    pub child: C,
    pub size: Insets,
    pub color: Color,
}

impl<C> CircularBorder<C> {
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

pub struct CircularBorderRenderObject<C: Widget> {
    state: RenderState,
    child: C::RenderObject,
    size: Insets,
    color: Color,
}

impl<C: Widget> CircularBorderRenderObject<C> {
    pub fn child_object(&self) -> &C::RenderObject {
        &self.child
    }
}

impl<C: Widget> Widget for CircularBorder<C> {
    type RenderObject = CircularBorderRenderObject<C>;

    fn create_render_object(&self) -> Self::RenderObject {
        CircularBorderRenderObject {
            state: RenderState::new(),
            child: self.child.create_render_object(),
            size: self.size,
            color: self.color,
        }
    }

    fn update(&self, render_object: &mut Self::RenderObject) {
        if self.size != render_object.size {
            render_object.mark_needs_layout();
            render_object.mark_needs_draw(true);
        }

        if self.color != render_object.color {
            render_object.mark_self_needs_draw(false);
        }

        render_object.size = self.size;
        render_object.color = self.color;
        self.child.update(&mut render_object.child);
    }
}

impl<C: Widget> RenderObject for CircularBorderRenderObject<C> {
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
        // The ring cuts across the child's corners, so it goes on top.
        let mut region = self.child.draw(self.size.shrink(rect), canvas)?;

        if self.self_needs_draw() {
            if let Err(err) = paint_ring(canvas, rect, self.size.top, self.color) {
                // The child's region is dropped with this frame; redraw it on retry.
                if !region.is_empty() {
                    self.child.mark_needs_draw(true);
                }
                return Err(err);
            }
            region.push(rect, Waveform::Du);
        }

        Ok(region)
    }
}

/// Paint `thickness` concentric circles inside `rect`, innermost first.
fn paint_ring(canvas: &mut dyn Canvas, rect: Rect, thickness: i32, color: Color) -> Result<()> {
    if rect.is_empty() {
        return Ok(());
    }

    let center = rect.center();
    // Keep the outermost circle on pixels that belong to the rect.
    let outer = (rect.width().min(rect.height()) - 1) / 2;
    let inner = (outer - thickness + 1).max(0);

    for radius in inner..=outer {
        let mut last = center + Point::new(radius, 0);
        for degrees in 1..=360 {
            let current = center
                + Point::new(scaled_cos(radius, degrees), scaled_sin(radius, degrees));
            canvas.draw_line(last, current, color)?;
            last = current;
        }
    }

    Ok(())
}

/// `r * sin(degrees)` via Bhaskara I's approximation, integer only.
///
/// Relative error stays below 0.2%, well under a pixel for any panel radius.
fn scaled_sin(r: i32, degrees: i32) -> i32 {
    let d = degrees.rem_euclid(360);
    let (x, sign) = if d < 180 { (d, 1) } else { (d - 180, -1) };

    let p = i64::from(x * (180 - x));
    let value = 4 * p * i64::from(r) / (40500 - p);
    sign * value as i32
}

fn scaled_cos(r: i32, degrees: i32) -> i32 {
    scaled_sin(r, degrees + 90)
}
