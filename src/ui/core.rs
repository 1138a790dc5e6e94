//! Core widget and render-object traits
//!
//! A [`Widget`] is a throwaway, immutable description of one node that the
//! application rebuilds every cycle. Its paired [`RenderObject`] lives for as
//! long as the tree does and keeps the results of the previous cycle: last
//! size, last constraints, last rect and the dirty flags that decide whether
//! layout and draw have to run again.
//!
//! # Cycle
//!
//! 1. **update**: `widget.update(&mut render_object)` diffs the new
//!    configuration against the stored one and marks flags, then recurses
//!    into the child unconditionally.
//! 2. **layout**: `render_object.layout(constraints)` recomputes only when
//!    something in the subtree needs layout or the constraints changed.
//! 3. **draw**: `render_object.draw(rect, canvas)` repaints only dirty
//!    subtrees and returns the [`UpdateRegion`] to flush. Clean subtrees
//!    return the empty region.

use log::trace;

use super::canvas::Canvas;
use super::constraints::Constraints;
use super::geometry::{Rect, Size};
use super::region::UpdateRegion;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Dirty flags
// ---------------------------------------------------------------------------

/// How much of a render object has to be repainted.
///
/// The states form a lattice `Clean < Partial < Full`; marking only ever
/// moves up, so a partial request never downgrades a pending full draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum DrawState {
    #[default]
    Clean,
    /// Repaint on top of the existing pixels.
    Partial,
    /// Repaint from scratch; the background is gone.
    Full,
}

impl DrawState {
    /// Join with a new request.
    pub fn raise(self, full: bool) -> DrawState {
        let requested = if full {
            DrawState::Full
        } else {
            DrawState::Partial
        };
        self.max(requested)
    }
}

/// Layout and draw dirtiness of a single render object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyFlags {
    needs_layout: bool,
    draw: DrawState,
}

impl DirtyFlags {
    /// Freshly created objects need everything.
    pub const fn dirty() -> Self {
        Self {
            needs_layout: true,
            draw: DrawState::Full,
        }
    }

    pub const fn clean() -> Self {
        Self {
            needs_layout: false,
            draw: DrawState::Clean,
        }
    }

    pub fn mark_layout(&mut self) {
        self.needs_layout = true;
    }

    pub fn mark_draw(&mut self, full: bool) {
        self.draw = self.draw.raise(full);
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn needs_draw(&self) -> bool {
        self.draw != DrawState::Clean
    }

    pub fn is_full_draw(&self) -> bool {
        self.draw == DrawState::Full
    }

    pub fn draw_state(&self) -> DrawState {
        self.draw
    }

    /// Only a completed layout pass may call this.
    pub fn clear_layout(&mut self) {
        self.needs_layout = false;
    }

    /// Only a completed draw pass may call this.
    pub fn clear_draw(&mut self) {
        self.draw = DrawState::Clean;
    }
}

impl Default for DirtyFlags {
    fn default() -> Self {
        Self::dirty()
    }
}

// ---------------------------------------------------------------------------
// Per-object bookkeeping
// ---------------------------------------------------------------------------

/// State every render object carries between cycles.
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    flags: DirtyFlags,
    size: Size,
    constraints: Option<Constraints>,
    rect: Option<Rect>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self) -> DirtyFlags {
        self.flags
    }

    pub fn flags_mut(&mut self) -> &mut DirtyFlags {
        &mut self.flags
    }

    /// Size returned by the last completed layout.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Constraints of the last completed layout.
    pub fn constraints(&self) -> Option<Constraints> {
        self.constraints
    }

    /// Rect of the last completed draw.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    fn finish_layout(&mut self, constraints: Constraints, size: Size) {
        self.constraints = Some(constraints);
        self.size = size;
        self.flags.clear_layout();
    }

    fn finish_draw(&mut self, rect: Rect) {
        self.rect = Some(rect);
        self.flags.clear_draw();
    }
}

// ---------------------------------------------------------------------------
// RenderObject
// ---------------------------------------------------------------------------

/// Persistent, stateful node that lays out and paints one widget.
///
/// Implementors provide [`do_layout`](RenderObject::do_layout) and
/// [`do_draw`](RenderObject::do_draw); the provided [`layout`] and [`draw`]
/// wrap them with caching and flag handling. Single-child objects also
/// expose their child so subtree queries and full-draw marks can descend.
///
/// The trait is object-safe.
///
/// [`layout`]: RenderObject::layout
/// [`draw`]: RenderObject::draw
pub trait RenderObject {
    fn state(&self) -> &RenderState;

    fn state_mut(&mut self) -> &mut RenderState;

    /// The owned child, if this is a single-child object.
    fn child(&self) -> Option<&dyn RenderObject> {
        None
    }

    fn child_mut(&mut self) -> Option<&mut dyn RenderObject> {
        None
    }

    /// Compute this object's size, laying out the child as needed.
    fn do_layout(&mut self, constraints: Constraints) -> Size;

    /// Paint into `rect` and report what changed.
    fn do_draw(&mut self, rect: Rect, canvas: &mut dyn Canvas) -> Result<UpdateRegion>;

    /// Size from the last completed layout.
    fn size(&self) -> Size {
        self.state().size()
    }

    fn self_needs_layout(&self) -> bool {
        self.state().flags().needs_layout()
    }

    /// True if this object or any descendant needs layout.
    fn needs_layout(&self) -> bool {
        self.self_needs_layout() || self.child().is_some_and(|c| c.needs_layout())
    }

    fn self_needs_draw(&self) -> bool {
        self.state().flags().needs_draw()
    }

    /// True if this object or any descendant needs draw.
    fn needs_draw(&self) -> bool {
        self.self_needs_draw() || self.child().is_some_and(|c| c.needs_draw())
    }

    /// True if this object itself is due for a from-scratch repaint.
    fn is_full_draw(&self) -> bool {
        self.state().flags().is_full_draw()
    }

    fn mark_needs_layout(&mut self) {
        self.state_mut().flags_mut().mark_layout();
    }

    /// Mark only this object, leaving the child's pixels alone.
    fn mark_self_needs_draw(&mut self, full: bool) {
        self.state_mut().flags_mut().mark_draw(full);
    }

    /// Mark this object. A full draw wipes the child's pixels too, so full
    /// marks cascade down the subtree.
    fn mark_needs_draw(&mut self, full: bool) {
        self.mark_self_needs_draw(full);
        if full && let Some(child) = self.child_mut() {
            child.mark_needs_draw(true);
        }
    }

    /// Lay out under `constraints`, reusing the previous size when nothing
    /// in the subtree changed and the constraints are the same.
    fn layout(&mut self, constraints: Constraints) -> Size {
        if !self.needs_layout() && self.state().constraints() == Some(constraints) {
            return self.state().size();
        }

        let size = self.do_layout(constraints);
        if size != self.state().size() {
            trace!("Size changed {:?} -> {:?}", self.state().size(), size);
            self.mark_needs_draw(true);
        }

        self.state_mut().finish_layout(constraints, size);
        size
    }

    /// Draw into `rect` if anything in the subtree is dirty.
    ///
    /// A rect different from the previous draw forces a full draw. On error
    /// the flags stay set so the next cycle retries.
    fn draw(&mut self, rect: Rect, canvas: &mut dyn Canvas) -> Result<UpdateRegion> {
        if self.state().rect() != Some(rect) {
            self.mark_needs_draw(true);
        }

        if !self.needs_draw() {
            return Ok(UpdateRegion::new());
        }

        trace!(
            "Drawing {:?} ({:?})",
            rect,
            self.state().flags().draw_state()
        );
        let region = self.do_draw(rect, canvas)?;
        self.state_mut().finish_draw(rect);
        Ok(region)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Immutable description of one node for one cycle.
///
/// The associated type pins each widget to exactly one render object type,
/// so updating a render object with a widget of another kind does not
/// compile.
pub trait Widget {
    type RenderObject: RenderObject;

    /// Build a fresh, fully dirty render object for this configuration.
    fn create_render_object(&self) -> Self::RenderObject;

    /// Diff against `render_object`'s stored configuration, mark what
    /// changed, store the new configuration and recurse into the child.
    fn update(&self, render_object: &mut Self::RenderObject);
}
