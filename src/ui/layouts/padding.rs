//! Empty space around a child

use crate::error::Result;
use crate::ui::canvas::Canvas;
use crate::ui::constraints::Constraints;
use crate::ui::core::{RenderObject, RenderState, Widget};
use crate::ui::geometry::{Insets, Rect, Size};
use crate::ui::region::UpdateRegion;

/// Insets its child by `insets`. Paints nothing itself.
#[derive(Debug, Clone)]
pub struct Padding<C> {
    pub child: C,
    pub insets: Insets,
}

impl<C> Padding<C> {
    pub fn new(child: C, insets: Insets) -> Self {
        Self { child, insets }
    }
}

pub struct PaddingRenderObject<C: Widget> {
    state: RenderState,
    child: C::RenderObject,
    insets: Insets,
}

impl<C: Widget> PaddingRenderObject<C> {
    pub fn child_object(&self) -> &C::RenderObject {
        &self.child
    }
}

impl<C: Widget> Widget for Padding<C> {
    type RenderObject = PaddingRenderObject<C>;

    fn create_render_object(&self) -> Self::RenderObject {
        PaddingRenderObject {
            state: RenderState::new(),
            child: self.child.create_render_object(),
            insets: self.insets,
        }
    }

    fn update(&self, render_object: &mut Self::RenderObject) {
        if self.insets != render_object.insets {
            render_object.mark_needs_layout();
            render_object.mark_needs_draw(true);
        }
        render_object.insets = self.insets;
        self.child.update(&mut render_object.child);
    }
}

impl<C: Widget> RenderObject for PaddingRenderObject<C> {
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
        let child_size = self.child.layout(constraints.inset(self.insets));
        constraints.expand(child_size, self.insets)
    }

    fn do_draw(&mut self, rect: Rect, canvas: &mut dyn Canvas) -> Result<UpdateRegion> {
        self.child.draw(self.insets.shrink(rect), canvas)
    }
}
