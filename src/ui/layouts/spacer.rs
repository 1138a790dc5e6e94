//! Empty leaf that only occupies space

use crate::error::Result;
use crate::ui::canvas::Canvas;
use crate::ui::constraints::Constraints;
use crate::ui::core::{RenderObject, RenderState, Widget};
use crate::ui::geometry::{Rect, Size};
use crate::ui::region::UpdateRegion;

/// A layout-only leaf that draws nothing.
///
/// Without a preferred size it takes the smallest size the constraints
/// allow; with one, the preferred size clamped into the constraints.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spacer {
    pub preferred: Option<Size>,
}

impl Spacer {
    pub fn new() -> Self {
        Self { preferred: None }
    }

    pub fn sized(size: Size) -> Self {
        Self {
            preferred: Some(size),
        }
    }
}

pub struct SpacerRenderObject {
    state: RenderState,
    preferred: Option<Size>,
}

impl Widget for Spacer {
    type RenderObject = SpacerRenderObject;

    fn create_render_object(&self) -> SpacerRenderObject {
        SpacerRenderObject {
            state: RenderState::new(),
            preferred: self.preferred,
        }
    }

    fn update(&self, render_object: &mut SpacerRenderObject) {
        if self.preferred != render_object.preferred {
            render_object.mark_needs_layout();
        }
        render_object.preferred = self.preferred;
    }
}

impl RenderObject for SpacerRenderObject {
    fn state(&self) -> &RenderState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }

    fn do_layout(&mut self, constraints: Constraints) -> Size {
        match self.preferred {
            Some(size) => constraints.constrain(size),
            None => constraints.min,
        }
    }

    fn do_draw(&mut self, _rect: Rect, _canvas: &mut dyn Canvas) -> Result<UpdateRegion> {
        Ok(UpdateRegion::new())
    }
}
