//! Center a child inside all of the available space

use crate::error::Result;
use crate::ui::canvas::Canvas;
use crate::ui::constraints::Constraints;
use crate::ui::core::{RenderObject, RenderState, Widget};
use crate::ui::geometry::{Point, Rect, Size};
use crate::ui::region::UpdateRegion;

/// Takes all the space it is offered and centers its child in it.
///
/// On an unbounded axis there is no space to take, so the size along that
/// axis shrinks to the child's.
#[derive(Debug, Clone)]
pub struct Center<C> {
    pub child: C,
}

impl<C> Center<C> {
    pub fn new(child: C) -> Self {
        Self { child }
    }
}

pub struct CenterRenderObject<C: Widget> {
    state: RenderState,
    child: C::RenderObject,
    child_size: Size,
}

impl<C: Widget> CenterRenderObject<C> {
    pub fn child_object(&self) -> &C::RenderObject {
        &self.child
    }
}

impl<C: Widget> Widget for Center<C> {
    type RenderObject = CenterRenderObject<C>;

    fn create_render_object(&self) -> Self::RenderObject {
        CenterRenderObject {
            state: RenderState::new(),
            child: self.child.create_render_object(),
            child_size: Size::zero(),
        }
    }

    fn update(&self, render_object: &mut Self::RenderObject) {
        self.child.update(&mut render_object.child);
    }
}

impl<C: Widget> RenderObject for CenterRenderObject<C> {
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
        self.child_size = self.child.layout(Constraints::loose(constraints.max));

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
        let offset = Point::new(
            (rect.width() - self.child_size.width) / 2,
            (rect.height() - self.child_size.height) / 2,
        );

        let child_rect = Rect::with_size(rect.top_left + offset, self.child_size);
        self.child.draw(child_rect, canvas)
    }
}
