//! Engine configuration
//!
//! Stored on the device as a `postcard` blob next to the other settings.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ui::{Color, Point, Rect, Size, Waveform};

/// Panel geometry and refresh policy for a [`RenderRoot`](crate::RenderRoot).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Panel width in pixels.
    pub width: u16,
    /// Panel height in pixels.
    pub height: u16,
    /// Gray level (0 = black, 15 = white) the screen is cleared to on the
    /// first frame.
    pub background: u8,
    /// Waveform used for the first, full-screen refresh.
    pub initial_waveform: Waveform,
    /// After this many partial frames the next flushed frame becomes one
    /// full-screen GC16 refresh to clear ghosting. 0 disables it.
    pub full_refresh_interval: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 1404,
            height: 1872,
            background: 15,
            initial_waveform: Waveform::Gc16,
            full_refresh_interval: 0,
        }
    }
}

impl EngineConfig {
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_full_refresh_interval(mut self, frames: u16) -> Self {
        self.full_refresh_interval = frames;
        self
    }

    pub fn screen_size(&self) -> Size {
        Size::new(i32::from(self.width), i32::from(self.height))
    }

    pub fn screen_rect(&self) -> Rect {
        Rect::with_size(Point::zero(), self.screen_size())
    }

    pub fn background_color(&self) -> Color {
        Color::new(self.background.min(15))
    }

    /// Decode a configuration blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(postcard::from_bytes(bytes)?)
    }

    /// Encode for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(postcard::to_allocvec(self)?)
    }
}
