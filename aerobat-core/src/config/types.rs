//! Pilot configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::registry::{CourseId, COURSE_A_ID};

/// Default time between two course ticks
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 100;

/// Shortest accepted tick interval
pub const MIN_TICK_INTERVAL_MS: u32 = 10;

/// Longest accepted tick interval
pub const MAX_TICK_INTERVAL_MS: u32 = 10_000;

/// How a driver flies courses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PilotConfig {
    /// Registry id of the course to fly
    pub course_id: CourseId,
    /// Milliseconds between two `advance` calls
    pub tick_interval_ms: u32,
    /// Switch the aircraft into SDK mode before forwarding commands
    pub enter_sdk_mode: bool,
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            course_id: COURSE_A_ID,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            enter_sdk_mode: true,
        }
    }
}

impl PilotConfig {
    /// Returns true if the tick interval lies in the accepted range
    pub fn tick_interval_valid(&self) -> bool {
        (MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms)
    }

    /// Wall time a course of `steps` ticks takes at this interval
    pub fn run_time_ms(&self, steps: u32) -> u64 {
        u64::from(steps) * u64::from(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PilotConfig::default();
        assert_eq!(config.course_id, 1);
        assert_eq!(config.tick_interval_ms, 100);
        assert!(config.enter_sdk_mode);
        assert!(config.tick_interval_valid());
    }

    #[test]
    fn test_interval_bounds() {
        let mut config = PilotConfig::default();
        config.tick_interval_ms = MIN_TICK_INTERVAL_MS - 1;
        assert!(!config.tick_interval_valid());
        config.tick_interval_ms = MAX_TICK_INTERVAL_MS;
        assert!(config.tick_interval_valid());
        config.tick_interval_ms = MAX_TICK_INTERVAL_MS + 1;
        assert!(!config.tick_interval_valid());
    }

    #[test]
    fn test_run_time() {
        let config = PilotConfig::default();
        // Course A lands on its 55th tick
        assert_eq!(config.run_time_ms(55), 5_500);
    }
}
