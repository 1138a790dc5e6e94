//! In-memory framebuffer and panel flushing.
//!
//! The render tree draws into this RAM buffer instead of the panel. After a
//! frame, each entry of the frame's [`UpdateRegion`] is sent to the
//! [`Panel`] as one refresh with the entry's waveform.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt::Debug;

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::{Dimensions, DrawTarget, OriginDimensions, Pixel};
use embedded_graphics::prelude::Size as EgSize;
use embedded_graphics::primitives::Rectangle;
use log::{debug, error};

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::ui::{Color, Point, Rect, Size, UpdateRegion, Waveform};

/// Hardware side of the display: refreshes one area at a time.
pub trait Panel {
    type Error: Debug;

    /// Push `pixels` (row-major, exactly `area.width() * area.height()`
    /// of them) into `area` and refresh it with `waveform`.
    fn update(
        &mut self,
        area: Rect,
        waveform: Waveform,
        pixels: &mut dyn Iterator<Item = Color>,
    ) -> core::result::Result<(), Self::Error>;
}

/// Heap-allocated grayscale framebuffer implementing `DrawTarget<Color = Gray4>`.
///
/// Also tracks the bounding box of pixels that actually changed value since
/// the last flush, so a frame's region can be checked against what was
/// really painted before it goes to the panel.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Gray4>,
    changed: Option<Rect>,
}

impl FrameBuffer {
    /// Allocate a framebuffer for the configured panel, filled with the
    /// background color.
    pub fn new(config: &EngineConfig) -> Self {
        let width = usize::from(config.width);
        let height = usize::from(config.height);
        Self {
            width,
            height,
            pixels: vec![config.background_color(); width * height],
            changed: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new((0, 0), (self.width as i32, self.height as i32))
    }

    /// Pixel at `point`, `None` outside the buffer.
    pub fn pixel(&self, point: Point) -> Option<Gray4> {
        if !self.bounds().contains(point) {
            return None;
        }
        Some(self.pixels[point.y as usize * self.width + point.x as usize])
    }

    /// Bounding box of pixels whose value changed since the last flush.
    pub fn changed_area(&self) -> Option<Rect> {
        self.changed
    }

    /// Write a single pixel, expanding the changed area only if the value
    /// differs.
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Gray4) {
        let idx = y * self.width + x;
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            let pixel = Rect::with_size(Point::new(x as i32, y as i32), Size::new(1, 1));
            self.changed = Some(match self.changed {
                Some(area) => area.union(&pixel),
                None => pixel,
            });
        }
    }

    /// Send every entry of `region` to `panel`, then reset the changed area.
    ///
    /// Entries are clipped to the buffer; entries that end up empty are
    /// skipped. Overlapping entries are each sent in full.
    pub fn flush<P: Panel>(&mut self, region: &UpdateRegion, panel: &mut P) -> Result<()> {
        let bounds = self.bounds();

        for entry in region {
            let area = entry.rect.intersection(&bounds);
            if area.is_empty() {
                continue;
            }

            debug!(
                "Flushing {}x{} at ({}, {}) with {:?}",
                area.width(),
                area.height(),
                area.top_left.x,
                area.top_left.y,
                entry.waveform
            );

            let stride = self.width;
            let x0 = area.top_left.x as usize;
            let x1 = area.bottom_right.x as usize;
            let pixels = &self.pixels;
            let mut rows = (area.top_left.y as usize..area.bottom_right.y as usize)
                .flat_map(move |y| pixels[y * stride + x0..y * stride + x1].iter().copied());

            panel
                .update(area, entry.waveform, &mut rows)
                .map_err(|e| {
                    error!("Panel update of {:?} failed: {:?}", area, e);
                    Error::Panel {
                        x: area.top_left.x,
                        y: area.top_left.y,
                        width: area.width(),
                        height: area.height(),
                    }
                })?;
        }

        self.changed = None;
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> EgSize {
        EgSize::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Gray4;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (x, y) = (coord.x, coord.y);
            if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let area_x = area.top_left.x;
        let area_y = area.top_left.y;

        let mut colors = colors.into_iter();
        for row in 0..area.size.height as i32 {
            for col in 0..area.size.width as i32 {
                let (x, y) = (area_x + col, area_y + row);
                if let Some(color) = colors.next()
                    && x >= 0
                    && y >= 0
                    && (x as usize) < self.width
                    && (y as usize) < self.height
                {
                    self.set_pixel(x as usize, y as usize, color);
                }
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> core::result::Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let x_start = area.top_left.x as usize;
        let y_start = area.top_left.y as usize;
        let x_end = x_start + area.size.width as usize;
        let y_end = y_start + area.size.height as usize;

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> core::result::Result<(), Self::Error> {
        for y in 0..self.height {
            for x in 0..self.width {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}
