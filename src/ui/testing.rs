//! Test doubles shared by the layout and frame tests.

use alloc::vec::Vec;

use super::canvas::{Canvas, Color};
use super::constraints::Constraints;
use super::core::{RenderObject, RenderState, Widget};
use super::geometry::{Point, Rect, Size};
use super::region::{UpdateRegion, Waveform};
use crate::error::{Error, Result};

/// Leaf widget that wants `preferred` and shows some opaque `content`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    pub preferred: Size,
    pub content: u32,
}

impl Probe {
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            content: 0,
        }
    }

    pub fn with_content(mut self, content: u32) -> Self {
        self.content = content;
        self
    }
}

/// Records every constraint it is laid out with and every rect it paints.
pub struct ProbeRenderObject {
    state: RenderState,
    preferred: Size,
    content: u32,
    pub layouts: Vec<Constraints>,
    pub draws: Vec<Rect>,
}

impl Widget for Probe {
    type RenderObject = ProbeRenderObject;

    fn create_render_object(&self) -> ProbeRenderObject {
        ProbeRenderObject {
            state: RenderState::new(),
            preferred: self.preferred,
            content: self.content,
            layouts: Vec::new(),
            draws: Vec::new(),
        }
    }

    fn update(&self, render_object: &mut ProbeRenderObject) {
        if self.preferred != render_object.preferred {
            render_object.mark_needs_layout();
        }
        if self.content != render_object.content {
            render_object.mark_needs_draw(true);
        }
        render_object.preferred = self.preferred;
        render_object.content = self.content;
    }
}

impl RenderObject for ProbeRenderObject {
    fn state(&self) -> &RenderState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }

    fn do_layout(&mut self, constraints: Constraints) -> Size {
        self.layouts.push(constraints);
        constraints.constrain(self.preferred)
    }

    fn do_draw(&mut self, rect: Rect, _canvas: &mut dyn Canvas) -> Result<UpdateRegion> {
        self.draws.push(rect);
        Ok(UpdateRegion::from_rect(rect, Waveform::Gc16Fast))
    }
}

/// Canvas that remembers what it was asked to draw.
#[derive(Default)]
pub struct RecordingCanvas {
    pub lines: Vec<(Point, Point, Color)>,
    pub fills: Vec<(Rect, Color)>,
    pub fail: bool,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.fills.clear();
    }

    pub fn is_untouched(&self) -> bool {
        self.lines.is_empty() && self.fills.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<()> {
        if self.fail {
            return Err(Error::Canvas);
        }
        self.lines.push((from, to, color));
        Ok(())
    }

    fn fill(&mut self, rect: Rect, color: Color) -> Result<()> {
        if self.fail {
            return Err(Error::Canvas);
        }
        self.fills.push((rect, color));
        Ok(())
    }
}

/// Lay out `render_object` under `constraints` and draw it at the origin.
pub fn pump<R: RenderObject>(
    render_object: &mut R,
    constraints: Constraints,
    canvas: &mut RecordingCanvas,
) -> UpdateRegion {
    let size = render_object.layout(constraints);
    render_object
        .draw(Rect::with_size(Point::zero(), size), canvas)
        .unwrap()
}
