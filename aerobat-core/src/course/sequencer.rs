//! Course sequencer
//!
//! Advances one course a single step per call and dispatches the step's
//! action to the drone.
//!
//! # Locking
//!
//! The run-state lives behind a critical-section mutex. `start`, `stop`,
//! `advance` and `snapshot` all take it, so for a given course the counter
//! increment, the dispatch and the elapsed update of one tick are never
//! interleaved with another tick or with a start/stop request. Drone
//! commands are issued with the lock held and must not block.

use core::cell::RefCell;

use aerobat_protocol::DroneCommand;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::state::{CourseName, CourseState};
use super::table::{Choreography, StepAction};
use crate::logging::{log_debug, log_info};
use crate::traits::{Clock, DroneControl};

/// What one call to [`Course::advance`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Advance {
    /// Course was not running; nothing changed
    Idle,
    /// Counter moved to `step`, which has no action
    Silent { step: u32 },
    /// Counter moved to `step` and `command` was issued
    Issued { step: u32, command: DroneCommand },
    /// `command` was issued at `step`, then the counter jumped to `to`
    Skipped {
        step: u32,
        command: DroneCommand,
        to: u32,
    },
    /// `command` was issued at `step` and the course stopped
    Finished { step: u32, command: DroneCommand },
}

impl Advance {
    /// Command issued during the tick, if any
    pub fn command(&self) -> Option<DroneCommand> {
        match *self {
            Advance::Issued { command, .. }
            | Advance::Skipped { command, .. }
            | Advance::Finished { command, .. } => Some(command),
            Advance::Idle | Advance::Silent { .. } => None,
        }
    }

    /// Counter value the tick landed on before any jump
    pub fn step(&self) -> Option<u32> {
        match *self {
            Advance::Idle => None,
            Advance::Silent { step }
            | Advance::Issued { step, .. }
            | Advance::Skipped { step, .. }
            | Advance::Finished { step, .. } => Some(step),
        }
    }

    /// Returns true if this tick ended the run
    pub fn is_finished(&self) -> bool {
        matches!(self, Advance::Finished { .. })
    }
}

/// One runnable course bound to a drone and a clock
///
/// The drone and clock are borrowed: one pair is shared by every course of a
/// registry and outlives all of them.
pub struct Course<'d, D, C> {
    choreography: Choreography,
    state: Mutex<CriticalSectionRawMutex, RefCell<CourseState>>,
    drone: &'d D,
    clock: &'d C,
}

impl<'d, D, C> Course<'d, D, C>
where
    D: DroneControl,
    C: Clock,
{
    /// Create an idle course flying `choreography`
    pub fn new(choreography: Choreography, drone: &'d D, clock: &'d C) -> Self {
        Self {
            choreography,
            state: Mutex::new(RefCell::new(CourseState::new(choreography.name))),
            drone,
            clock,
        }
    }

    /// The step table this course flies
    pub fn choreography(&self) -> &Choreography {
        &self.choreography
    }

    /// Course name
    pub fn name(&self) -> CourseName {
        self.state.lock(|cell| cell.borrow().name.clone())
    }

    /// Whether a run is in progress
    pub fn is_running(&self) -> bool {
        self.state.lock(|cell| cell.borrow().is_running)
    }

    /// Current step counter
    pub fn status(&self) -> u32 {
        self.state.lock(|cell| cell.borrow().status)
    }

    /// Copy of the run-state, suitable for reporting
    pub fn snapshot(&self) -> CourseState {
        self.state.lock(|cell| cell.borrow().clone())
    }

    /// Begin a run; no-op if already running
    pub fn start(&self) {
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();
            if state.is_running {
                return;
            }
            state.start(self.clock.now_ms());
            log_info!(
                "{=str} started at step {=u32}",
                state.name.as_str(),
                state.status
            );
        });
    }

    /// End the run and reset the counter; no-op if idle
    pub fn stop(&self) {
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();
            if !state.is_running {
                return;
            }
            state.stop();
            log_info!("{=str} stopped", state.name.as_str());
        });
    }

    /// Advance one step and run the step's action
    ///
    /// On an idle course this is a no-op returning [`Advance::Idle`].
    pub fn advance(&self) -> Advance {
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();
            if !state.is_running {
                return Advance::Idle;
            }

            state.status = state.status.saturating_add(1);
            let step = state.status;

            let outcome = match self.choreography.lookup(step) {
                None => Advance::Silent { step },
                Some(&StepAction::Command(command)) => {
                    self.drone.issue(command);
                    Advance::Issued { step, command }
                }
                Some(&StepAction::CommandThenSkip {
                    command,
                    within_ms,
                    jump_to,
                }) => {
                    self.drone.issue(command);
                    if state.since_start(self.clock.now_ms()) < within_ms {
                        state.status = jump_to;
                        log_info!(
                            "{=str} skipped from step {=u32} to {=u32}",
                            state.name.as_str(),
                            step,
                            jump_to
                        );
                        Advance::Skipped {
                            step,
                            command,
                            to: jump_to,
                        }
                    } else {
                        Advance::Issued { step, command }
                    }
                }
                Some(&StepAction::Finish(command)) => {
                    self.drone.issue(command);
                    state.stop();
                    log_info!("{=str} finished at step {=u32}", state.name.as_str(), step);
                    Advance::Finished { step, command }
                }
            };

            if outcome.command().is_some() {
                log_debug!("{=str}: {}", state.name.as_str(), outcome);
            }

            state.update_elapsed(self.clock.now_ms());
            outcome
        })
    }
}
