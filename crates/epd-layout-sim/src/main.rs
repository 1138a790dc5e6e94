//! Host-side walkthrough of the layout engine.
//!
//! Builds a small status screen, drives it through a few update cycles
//! against the in-memory framebuffer and prints the update region each frame
//! produced. Run with `RUST_LOG=debug` to see the engine's own records.

use std::convert::Infallible;

use log::{info, warn};

use epd_layout::ui::layouts::{Center, Cleared, Container, container};
use epd_layout::ui::{
    BLACK, Canvas, Color, Constraints, Insets, Rect, RenderObject, RenderState, Size,
    UpdateRegion, Waveform, Widget,
};
use epd_layout::{EngineConfig, FrameBuffer, Panel, RenderRoot, Result};

// ---------------------------------------------------------------------------
// Gauge leaf
// ---------------------------------------------------------------------------

/// Highest gauge level.
const GAUGE_STEPS: i32 = 10;

/// Preferred gauge size in pixels.
const GAUGE_SIZE: Size = Size::new(200, 24);

/// Horizontal bar filled to `level` out of [`GAUGE_STEPS`].
#[derive(Debug, Clone, Copy)]
struct Gauge {
    level: i32,
}

struct GaugeRenderObject {
    state: RenderState,
    level: i32,
}

impl Widget for Gauge {
    type RenderObject = GaugeRenderObject;

    fn create_render_object(&self) -> GaugeRenderObject {
        GaugeRenderObject {
            state: RenderState::new(),
            level: self.level,
        }
    }

    fn update(&self, render_object: &mut GaugeRenderObject) {
        if self.level != render_object.level {
            render_object.mark_needs_draw(true);
        }
        render_object.level = self.level;
    }
}

impl RenderObject for GaugeRenderObject {
    fn state(&self) -> &RenderState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }

    fn do_layout(&mut self, constraints: Constraints) -> Size {
        constraints.constrain(GAUGE_SIZE)
    }

    fn do_draw(&mut self, rect: Rect, canvas: &mut dyn Canvas) -> Result<UpdateRegion> {
        let level = self.level.clamp(0, GAUGE_STEPS);
        let filled = rect.width() * level / GAUGE_STEPS;

        canvas.fill(rect, Color::new(12))?;
        canvas.fill(
            Rect::new(rect.top_left, (rect.top_left.x + filled, rect.bottom_right.y)),
            BLACK,
        )?;
        Ok(UpdateRegion::from_rect(rect, Waveform::Gc16Fast))
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

type StatusScreen = Container<Cleared<Center<Gauge>>>;

fn status_screen(level: i32, border: Color, margin: i32) -> StatusScreen {
    let mut screen = container(
        Cleared::new(Center::new(Gauge { level })),
        Insets::all(8),
        Insets::all(3),
        Insets::all(margin),
    );
    screen.child.color = border;
    screen
}

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

/// Stand-in for the panel driver: logs every refresh it receives.
#[derive(Default)]
struct LoggingPanel {
    refreshes: usize,
    pixels: usize,
}

impl Panel for LoggingPanel {
    type Error = Infallible;

    fn update(
        &mut self,
        area: Rect,
        waveform: Waveform,
        pixels: &mut dyn Iterator<Item = Color>,
    ) -> core::result::Result<(), Infallible> {
        let (count, dark) = pixels.fold((0usize, 0usize), |(count, dark), pixel| {
            (count + 1, dark + usize::from(pixel == BLACK))
        });
        info!(
            "Panel refresh {:?}: {}x{} at ({}, {}), {} dark of {} pixels",
            waveform,
            area.width(),
            area.height(),
            area.top_left.x,
            area.top_left.y,
            dark,
            count
        );
        self.refreshes += 1;
        self.pixels += count;
        Ok(())
    }
}

fn print_region(label: &str, region: &UpdateRegion) {
    println!("{label}: {} entries", region.len());
    for entry in region {
        println!(
            "    {:?} ({}, {}) - ({}, {})",
            entry.waveform,
            entry.rect.top_left.x,
            entry.rect.top_left.y,
            entry.rect.bottom_right.x,
            entry.rect.bottom_right.y
        );
    }
}

/// Run one frame, check it against the pixels that actually changed, and
/// flush it to the panel.
fn step(
    label: &str,
    root: &mut RenderRoot<StatusScreen>,
    framebuffer: &mut FrameBuffer,
    panel: &mut LoggingPanel,
) -> Result<()> {
    let region = root.frame(framebuffer)?;
    print_region(label, &region);

    if let Some(changed) = framebuffer.changed_area() {
        let reported = region.bounding_box();
        if reported.is_some_and(|bounds| bounds.contains_rect(&changed)) {
            info!("{label}: changed pixels within {changed:?}");
        } else {
            warn!("{label}: changed pixels {changed:?} fall outside {reported:?}");
        }
    }

    framebuffer.flush(&region, panel)
}

fn main() -> Result<()> {
    env_logger::init();

    // Round-trip the settings blob the way the device loads it.
    let stored = EngineConfig::default()
        .with_size(320, 240)
        .with_full_refresh_interval(3)
        .to_bytes()?;
    let config = EngineConfig::from_bytes(&stored)?;
    info!(
        "Display: {}x{} (full refresh every {} partial frames)",
        config.width, config.height, config.full_refresh_interval
    );

    let mut framebuffer = FrameBuffer::new(&config);
    let mut panel = LoggingPanel::default();
    let mut root = RenderRoot::new(&status_screen(3, BLACK, 16), config);

    step("initial", &mut root, &mut framebuffer, &mut panel)?;

    let cycles = [
        ("gauge level", status_screen(7, BLACK, 16)),
        ("no change", status_screen(7, BLACK, 16)),
        ("border color", status_screen(7, Color::new(8), 16)),
        ("margin", status_screen(7, Color::new(8), 24)),
        ("gauge level again", status_screen(9, Color::new(8), 24)),
    ];

    for (label, screen) in &cycles {
        root.rebuild(screen);
        if !root.needs_frame() {
            println!("{label}: nothing to do");
            continue;
        }
        step(label, &mut root, &mut framebuffer, &mut panel)?;
    }

    info!(
        "{} panel refreshes, {} pixels sent",
        panel.refreshes, panel.pixels
    );
    Ok(())
}
