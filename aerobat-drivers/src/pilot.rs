//! Pilot
//!
//! Paces one course on a clock. The owner calls [`Pilot::tick`] as often as
//! it likes (from a ticker task, a timer interrupt, a network callback); the
//! pilot advances the course at most once per configured interval.

use aerobat_core::config::PilotConfig;
use aerobat_core::course::{Advance, Course};
use aerobat_core::registry::{CourseId, CourseRegistry};
use aerobat_core::traits::{Clock, DroneControl};

/// Errors that can occur while binding a pilot to a course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PilotError {
    /// No course with this id in the registry
    UnknownCourse(CourseId),
    /// Tick interval outside the accepted range
    InvalidInterval(u32),
}

/// Drives one course from a registry
pub struct Pilot<'r, 'd, D, C> {
    course_id: CourseId,
    course: &'r Course<'d, D, C>,
    interval_ms: u64,
    /// Earliest time of the next advance; `None` while disengaged
    next_tick_ms: Option<u64>,
}

impl<'r, 'd, D, C> Pilot<'r, 'd, D, C>
where
    D: DroneControl,
    C: Clock,
{
    /// Bind to the course selected by `config`
    pub fn new(
        registry: &'r CourseRegistry<'d, D, C>,
        config: &PilotConfig,
    ) -> Result<Self, PilotError> {
        if !config.tick_interval_valid() {
            return Err(PilotError::InvalidInterval(config.tick_interval_ms));
        }
        let course = registry
            .get(config.course_id)
            .ok_or(PilotError::UnknownCourse(config.course_id))?;

        Ok(Self {
            course_id: config.course_id,
            course,
            interval_ms: u64::from(config.tick_interval_ms),
            next_tick_ms: None,
        })
    }

    /// Id of the bound course
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// The bound course
    pub fn course(&self) -> &'r Course<'d, D, C> {
        self.course
    }

    /// Whether the bound course is running
    pub fn is_flying(&self) -> bool {
        self.course.is_running()
    }

    /// Earliest time the next advance happens, if engaged
    pub fn next_tick_ms(&self) -> Option<u64> {
        self.next_tick_ms
    }

    /// Start the course; the first tick is due immediately
    pub fn engage(&mut self, now_ms: u64) {
        self.course.start();
        self.next_tick_ms = Some(now_ms);
        #[cfg(feature = "defmt")]
        defmt::info!("Pilot engaged course {=u8}", self.course_id);
    }

    /// Stop the course and cancel pending ticks
    pub fn disengage(&mut self) {
        self.course.stop();
        self.next_tick_ms = None;
    }

    /// Advance the course if a tick is due at `now_ms`
    ///
    /// Returns `None` when nothing was due. A late call advances once and
    /// schedules the next tick a full interval later; missed ticks are not
    /// replayed. Disengages automatically once the course stops.
    pub fn tick(&mut self, now_ms: u64) -> Option<Advance> {
        let due = self.next_tick_ms?;
        if now_ms < due {
            return None;
        }

        let outcome = self.course.advance();
        self.next_tick_ms = match outcome {
            Advance::Idle | Advance::Finished { .. } => None,
            _ => Some(now_ms.saturating_add(self.interval_ms)),
        };
        Some(outcome)
    }
}
