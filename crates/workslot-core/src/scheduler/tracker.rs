//! Per-run capacity tracking over availability blocks.
//!
//! The tracker owns the mutable fill state for one scheduling run.
//! Commits inside a block are contiguous: each one starts where the
//! previous commit in that block ended.

use chrono::{DateTime, Duration, Utc};

use crate::availability::AvailabilityBlock;

use super::AssignedSlot;

/// Fill state for one availability block.
#[derive(Debug, Clone)]
struct SlotState {
    start: DateTime<Utc>,
    total_minutes: i64,
    used_minutes: i64,
}

/// Consumable capacity for each availability block during one run.
///
/// Slot indexes follow the caller's block order. The tracker is scoped
/// to a single run and must not be shared between concurrent runs.
#[derive(Debug)]
pub struct AvailabilityTracker {
    slots: Vec<SlotState>,
}

impl AvailabilityTracker {
    /// Build fill state over the caller-ordered block list.
    pub fn new(blocks: &[AvailabilityBlock]) -> Self {
        let slots = blocks
            .iter()
            .map(|block| SlotState {
                start: block.start,
                total_minutes: block.duration_minutes(),
                used_minutes: 0,
            })
            .collect();
        Self { slots }
    }

    /// Number of tracked blocks
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether any blocks are tracked
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Minutes still uncommitted in a block
    pub fn remaining_minutes(&self, index: usize) -> i64 {
        let slot = &self.slots[index];
        slot.total_minutes - slot.used_minutes
    }

    /// Instant at which the next commit in a block would start
    pub fn next_start(&self, index: usize) -> DateTime<Utc> {
        let slot = &self.slots[index];
        slot.start + Duration::minutes(slot.used_minutes)
    }

    /// Commit minutes at the block's current fill position and return
    /// the absolute interval. Callers check [`remaining_minutes`]
    /// first; the tracker does not re-check.
    ///
    /// [`remaining_minutes`]: Self::remaining_minutes
    pub fn commit(&mut self, index: usize, minutes: i64) -> AssignedSlot {
        let start = self.next_start(index);
        self.slots[index].used_minutes += minutes;
        AssignedSlot {
            start,
            end: start + Duration::minutes(minutes),
        }
    }

    /// Undo a prior commit. Releases must mirror commits in reverse
    /// order so the fill position stays consistent.
    pub fn release(&mut self, index: usize, minutes: i64) {
        self.slots[index].used_minutes -= minutes;
    }
}
