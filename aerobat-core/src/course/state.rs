//! Course run-state
//!
//! Shared by every course variant. Operations are total: redundant calls
//! degrade to no-ops instead of failing.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum course name length
pub const MAX_NAME_LEN: usize = 16;

/// Bounded course name
pub type CourseName = String<MAX_NAME_LEN>;

/// Run-state of one course
///
/// `start_time` and `elapsed` are milliseconds of the course's clock.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CourseState {
    /// Display name, fixed at construction
    pub name: CourseName,
    /// Step counter; 0 before the first tick of a run
    pub status: u32,
    /// Whether the course is currently running
    pub is_running: bool,
    /// Clock reading when the run started
    pub start_time: u64,
    /// Time between `start_time` and the latest tick
    pub elapsed: u64,
}

impl CourseState {
    /// Create an idle state
    ///
    /// Names longer than [`MAX_NAME_LEN`] bytes are truncated on a character
    /// boundary.
    pub fn new(name: &str) -> Self {
        let mut bounded = CourseName::new();
        for c in name.chars() {
            if bounded.push(c).is_err() {
                break;
            }
        }

        Self {
            name: bounded,
            status: 0,
            is_running: false,
            start_time: 0,
            elapsed: 0,
        }
    }

    /// Begin a run at `now_ms`
    ///
    /// No-op while already running, so the original start time is kept.
    /// The step counter is not reset here; `stop` does that.
    pub fn start(&mut self, now_ms: u64) {
        if self.is_running {
            return;
        }
        self.is_running = true;
        self.start_time = now_ms;
    }

    /// End the run and reset the step counter
    pub fn stop(&mut self) {
        if !self.is_running {
            return;
        }
        self.is_running = false;
        self.status = 0;
    }

    /// Refresh `elapsed` from `now_ms`
    pub fn update_elapsed(&mut self, now_ms: u64) {
        if !self.is_running {
            return;
        }
        self.elapsed = now_ms.saturating_sub(self.start_time);
    }

    /// Time since the run started, measured at `now_ms`
    pub fn since_start(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.start_time)
    }
}
