//! Task splitting into bounded work sessions.
//!
//! Estimates above the session cap are partitioned into the smallest
//! number of sessions that fit the cap, sized as evenly as possible.
//! Sessions that would fall below the minimum chunk are folded into the
//! last retained session rather than dropped, so the partition always
//! accounts for the full estimate.

use serde::{Deserialize, Serialize};

/// Splitter for oversized task estimates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSplitter {
    /// Longest allowed single session in minutes (default 120)
    pub max_session_minutes: u32,
    /// Shortest session worth scheduling on its own (default 30)
    pub min_chunk_minutes: u32,
}

impl Default for TaskSplitter {
    fn default() -> Self {
        Self {
            max_session_minutes: 120,
            min_chunk_minutes: 30,
        }
    }
}

impl TaskSplitter {
    /// Create a splitter with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom limits
    pub fn with_limits(max_session_minutes: u32, min_chunk_minutes: u32) -> Self {
        Self {
            max_session_minutes,
            min_chunk_minutes,
        }
    }

    /// Partition an estimate into session durations.
    ///
    /// Estimates at or under the cap stay whole. Larger estimates split
    /// into `ceil(estimate / cap)` sessions; earlier sessions absorb the
    /// remainder minutes, so durations differ by at most one. The
    /// returned durations always sum to `estimated_minutes`.
    ///
    /// With the default limits every session of a split lands between
    /// the minimum chunk and the cap. A cap below twice the minimum
    /// chunk can produce sub-minimum sessions; those are folded into
    /// the last retained session, and if every session is sub-minimum
    /// the estimate is returned whole.
    pub fn split(&self, estimated_minutes: u32) -> Vec<u32> {
        if estimated_minutes <= self.max_session_minutes {
            return vec![estimated_minutes];
        }

        let count = estimated_minutes.div_ceil(self.max_session_minutes);
        let base = estimated_minutes / count;
        let remainder = estimated_minutes % count;

        let mut sessions: Vec<u32> = (0..count)
            .map(|i| if i < remainder { base + 1 } else { base })
            .collect();

        // Sessions are in descending order, so any sub-minimum ones
        // form the tail.
        if let Some(first_short) = sessions
            .iter()
            .position(|&minutes| minutes < self.min_chunk_minutes)
        {
            let tail: u32 = sessions.drain(first_short..).sum();
            match sessions.last_mut() {
                Some(last) => *last += tail,
                None => sessions.push(estimated_minutes),
            }
        }

        sessions
    }
}
