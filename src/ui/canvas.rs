//! Drawing surface seen by render objects
//!
//! Render objects only ever draw straight lines and solid fills. [`Canvas`]
//! is the object-safe slice of `embedded-graphics` they need, so the tree
//! can hold render objects behind `&mut dyn RenderObject` while still
//! drawing into any `DrawTarget`.

use core::fmt::Debug;

use embedded_graphics::Drawable as _;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::DrawTarget;
use embedded_graphics::primitives::{Line, Primitive, PrimitiveStyle};
use log::error;

use super::geometry::{Point, Rect};
use crate::error::{Error, Result};

/// Pixel format of the panel: 16 gray levels, matching the GC16 waveform.
pub type Color = Gray4;

/// Fully lit pixel.
pub const WHITE: Color = Gray4::new(15);

/// Fully dark pixel.
pub const BLACK: Color = Gray4::new(0);

/// Minimal drawing interface used by the layout primitives.
pub trait Canvas {
    /// Draw a one pixel wide line between two points, both inclusive.
    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<()>;

    /// Fill every pixel of `rect` with `color`.
    fn fill(&mut self, rect: Rect, color: Color) -> Result<()>;
}

impl<D> Canvas for D
where
    D: DrawTarget<Color = Gray4>,
    D::Error: Debug,
{
    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<()> {
        Line::new(from.into(), to.into())
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(self)
            .map_err(|e| {
                error!("Line {:?} -> {:?} failed: {:?}", from, to, e);
                Error::Canvas
            })
    }

    fn fill(&mut self, rect: Rect, color: Color) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }

        self.fill_solid(&rect.into(), color).map_err(|e| {
            error!("Fill of {:?} failed: {:?}", rect, e);
            Error::Canvas
        })
    }
}
