//! Frame driver
//!
//! Owns the root render object and turns "the app produced a new widget
//! tree" into "these rectangles of the panel need these refreshes".

use log::{debug, info};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::framebuffer::{FrameBuffer, Panel};
use crate::ui::{Canvas, Constraints, Point, Rect, RenderObject, UpdateRegion, Waveform, Widget};

/// Root of a render-object tree sized to the whole screen.
pub struct RenderRoot<W: Widget> {
    render_object: W::RenderObject,
    config: EngineConfig,
    first_frame: bool,
    partial_frames: u16,
}

impl<W: Widget> RenderRoot<W> {
    pub fn new(widget: &W, config: EngineConfig) -> Self {
        info!(
            "Render root created for {}x{} screen",
            config.width, config.height
        );
        Self {
            render_object: widget.create_render_object(),
            config,
            first_frame: true,
            partial_frames: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn render_object(&self) -> &W::RenderObject {
        &self.render_object
    }

    /// Reconcile the next widget tree into the existing render objects.
    pub fn rebuild(&mut self, widget: &W) {
        widget.update(&mut self.render_object);
    }

    /// Whether the next [`frame`](Self::frame) would produce any output.
    pub fn needs_frame(&self) -> bool {
        self.first_frame || self.render_object.needs_layout() || self.render_object.needs_draw()
    }

    /// Lay out and draw the tree into `canvas`, returning what changed.
    ///
    /// The first successful frame also clears the screen to the configured
    /// background and reports the whole screen with the initial waveform.
    pub fn frame(&mut self, canvas: &mut dyn Canvas) -> Result<UpdateRegion> {
        let screen = self.config.screen_rect();
        let size = self.render_object.layout(Constraints::tight(screen.size()));

        let mut region = UpdateRegion::new();
        if self.first_frame {
            canvas.fill(screen, self.config.background_color())?;
            region.push(screen, self.config.initial_waveform);
        }

        region |= self
            .render_object
            .draw(Rect::with_size(Point::zero(), size), canvas)?;

        if self.first_frame {
            self.first_frame = false;
            self.partial_frames = 0;
        } else if !region.is_empty() {
            region = self.apply_refresh_interval(region, screen);
        }

        debug!(
            "Frame produced {} region entries (bounds {:?})",
            region.len(),
            region.bounding_box()
        );
        Ok(region)
    }

    /// Draw a frame into `framebuffer` and push its region to `panel`.
    pub fn render<P: Panel>(
        &mut self,
        framebuffer: &mut FrameBuffer,
        panel: &mut P,
    ) -> Result<UpdateRegion> {
        let region = self.frame(framebuffer)?;
        framebuffer.flush(&region, panel)?;
        Ok(region)
    }

    fn apply_refresh_interval(&mut self, region: UpdateRegion, screen: Rect) -> UpdateRegion {
        let interval = self.config.full_refresh_interval;
        if interval == 0 {
            return region;
        }

        if self.partial_frames >= interval {
            info!(
                "Promoting frame to full refresh after {} partial frames",
                self.partial_frames
            );
            self.partial_frames = 0;
            return UpdateRegion::from_rect(screen, Waveform::Gc16);
        }

        self.partial_frames += 1;
        region
    }
}
