//! Retained-mode layout engine for e-paper panels.
//!
//! Applications describe the screen as a tree of immutable [`ui::Widget`]s
//! every cycle. A [`RenderRoot`] reconciles each new tree against its
//! persistent render objects, lays out only what changed, and draws only
//! dirty subtrees. Every frame yields an [`ui::UpdateRegion`]: the
//! rectangles that changed, each tagged with the refresh waveform the panel
//! should use for it.
//!
//! ```
//! use epd_layout::ui::layouts::{Border, Cleared, Padding, Spacer};
//! use epd_layout::ui::{BLACK, Insets};
//! use epd_layout::{EngineConfig, FrameBuffer, RenderRoot};
//!
//! let config = EngineConfig::default().with_size(64, 64);
//! let screen = Padding::new(
//!     Border::new(Cleared::new(Spacer::new()), Insets::all(2)).with_color(BLACK),
//!     Insets::all(4),
//! );
//!
//! let mut root = RenderRoot::new(&screen, config);
//! let mut framebuffer = FrameBuffer::new(&config);
//! let region = root.frame(&mut framebuffer).unwrap();
//! assert_eq!(region.bounding_box(), Some(config.screen_rect()));
//! ```

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod render_root;
pub mod ui;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use framebuffer::{FrameBuffer, Panel};
pub use render_root::RenderRoot;
