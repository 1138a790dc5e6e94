//! Update regions: what changed on screen and how to refresh it

use alloc::vec::Vec;
use core::ops::{BitOr, BitOrAssign};
use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect};

/// E-paper refresh strategy for one screen area.
///
/// Ordered from cheapest to most thorough, so `max` picks the stronger mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Waveform {
    /// Direct update: fast, monochrome, no flashing. Used for partial redraws
    /// of lines and borders.
    Du,
    /// Fast grayscale update with minimal flashing.
    #[default]
    Gc16Fast,
    /// Full grayscale clear. Removes ghosting at the cost of a visible flash.
    Gc16,
}

/// One rectangle to refresh together with the waveform to refresh it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionEntry {
    pub rect: Rect,
    pub waveform: Waveform,
}

/// Set of screen areas that must be pushed to the panel after a draw pass.
///
/// Every draw returns one of these and parents merge their children's
/// regions into their own. Merging is a set union: identical entries are
/// kept once, but overlapping rectangles are *not* coalesced, so consumers
/// must tolerate overlap.
#[derive(Debug, Clone, Default)]
pub struct UpdateRegion {
    entries: Vec<RegionEntry>,
}

impl UpdateRegion {
    /// The empty region: nothing to refresh.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Region with a single entry. Empty rects yield the empty region.
    pub fn from_rect(rect: Rect, waveform: Waveform) -> Self {
        let mut region = Self::new();
        region.push(rect, waveform);
        region
    }

    /// Add one entry, ignoring empty rects and exact duplicates.
    pub fn push(&mut self, rect: Rect, waveform: Waveform) {
        if rect.is_empty() {
            return;
        }

        let entry = RegionEntry { rect, waveform };
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    /// Union `other` into this region.
    pub fn merge(&mut self, other: UpdateRegion) {
        for entry in other.entries {
            self.push(entry.rect, entry.waveform);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionEntry> {
        self.entries.iter()
    }

    /// True if this exact entry is part of the region.
    pub fn contains(&self, rect: Rect, waveform: Waveform) -> bool {
        self.entries.contains(&RegionEntry { rect, waveform })
    }

    /// True if any entry covers `point`.
    pub fn covers(&self, point: Point) -> bool {
        self.entries.iter().any(|e| e.rect.contains(point))
    }

    /// Smallest rect covering every entry, `None` when empty.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.entries
            .iter()
            .map(|e| e.rect)
            .reduce(|acc, rect| acc.union(&rect))
    }

    /// Strongest waveform requested by any entry.
    pub fn max_waveform(&self) -> Option<Waveform> {
        self.entries.iter().map(|e| e.waveform).max()
    }
}

impl PartialEq for UpdateRegion {
    /// Set equality; entry order does not matter.
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|e| other.entries.contains(e))
    }
}

impl Eq for UpdateRegion {}

impl BitOr for UpdateRegion {
    type Output = UpdateRegion;

    fn bitor(mut self, rhs: UpdateRegion) -> UpdateRegion {
        self.merge(rhs);
        self
    }
}

impl BitOrAssign for UpdateRegion {
    fn bitor_assign(&mut self, rhs: UpdateRegion) {
        self.merge(rhs);
    }
}

impl<'a> IntoIterator for &'a UpdateRegion {
    type Item = &'a RegionEntry;
    type IntoIter = core::slice::Iter<'a, RegionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
