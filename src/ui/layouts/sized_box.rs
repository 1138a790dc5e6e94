//! Force a width and/or height on a child

use crate::error::Result;
use crate::ui::canvas::Canvas;
use crate::ui::constraints::{Constraints, clamp};
use crate::ui::core::{RenderObject, RenderState, Widget};
use crate::ui::geometry::{Rect, Size};
use crate::ui::region::UpdateRegion;

/// Constrains its child to an exact width and/or height.
///
/// A requested dimension is first clamped into the parent's range, then
/// given to the child as both min and max. An axis left as `None` passes the
/// parent's range through. The resulting size is whatever the child picks:
/// this narrows the child's choice but does not override it.
#[derive(Debug, Clone)]
pub struct SizedBox<C> {
    pub child: C,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl<C> SizedBox<C> {
    pub fn new(child: C, width: Option<i32>, height: Option<i32>) -> Self {
        Self {
            child,
            width,
            height,
        }
    }

    pub fn width(child: C, width: i32) -> Self {
        Self::new(child, Some(width), None)
    }

    pub fn height(child: C, height: i32) -> Self {
        Self::new(child, None, Some(height))
    }
}

pub struct SizedBoxRenderObject<C: Widget> {
    state: RenderState,
    child: C::RenderObject,
    width: Option<i32>,
    height: Option<i32>,
}

impl<C: Widget> SizedBoxRenderObject<C> {
    pub fn child_object(&self) -> &C::RenderObject {
        &self.child
    }
}

impl<C: Widget> Widget for SizedBox<C> {
    type RenderObject = SizedBoxRenderObject<C>;

    fn create_render_object(&self) -> Self::RenderObject {
        SizedBoxRenderObject {
            state: RenderState::new(),
            child: self.child.create_render_object(),
            width: self.width,
            height: self.height,
        }
    }

    fn update(&self, render_object: &mut Self::RenderObject) {
        if self.width != render_object.width || self.height != render_object.height {
            render_object.mark_needs_layout();
            render_object.mark_needs_draw(true);
        }
        render_object.width = self.width;
        render_object.height = self.height;
        self.child.update(&mut render_object.child);
    }
}

impl<C: Widget> RenderObject for SizedBoxRenderObject<C> {
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
        let Constraints { min, max } = constraints;
        let width = self.width.map(|w| clamp(w, min.width, max.width));
        let height = self.height.map(|h| clamp(h, min.height, max.height));

        let child_constraints = Constraints::new(
            Size::new(width.unwrap_or(min.width), height.unwrap_or(min.height)),
            Size::new(width.unwrap_or(max.width), height.unwrap_or(max.height)),
        );

        self.child.layout(child_constraints)
    }

    fn do_draw(&mut self, rect: Rect, canvas: &mut dyn Canvas) -> Result<UpdateRegion> {
        self.child.draw(rect, canvas)
    }
}
