//! Step tables
//!
//! Each course variant is nothing more than a name and a table of
//! `(step, action)` entries. Steps are strictly increasing; steps between
//! entries are silent ticks.

use aerobat_protocol::DroneCommand;

/// Yaw angle used by the default courses
pub const TURN_DEGREES: u16 = 30;

/// What a course does when its counter reaches a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepAction {
    /// Issue one drone command
    Command(DroneCommand),
    /// Issue a command, then jump the counter to `jump_to` if the run
    /// started less than `within_ms` ago
    CommandThenSkip {
        command: DroneCommand,
        within_ms: u64,
        jump_to: u32,
    },
    /// Issue a command, then stop the course
    Finish(DroneCommand),
}

impl StepAction {
    /// The drone command this action issues
    pub const fn command(&self) -> DroneCommand {
        match *self {
            StepAction::Command(command)
            | StepAction::CommandThenSkip { command, .. }
            | StepAction::Finish(command) => command,
        }
    }

    /// Returns true if this action ends the run
    pub const fn is_terminal(&self) -> bool {
        matches!(self, StepAction::Finish(_))
    }
}

/// One table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepEntry {
    /// Counter value that triggers the action
    pub step: u32,
    /// Action bound to the step
    pub action: StepAction,
}

impl StepEntry {
    const fn command(step: u32, command: DroneCommand) -> Self {
        Self {
            step,
            action: StepAction::Command(command),
        }
    }

    const fn finish(step: u32, command: DroneCommand) -> Self {
        Self {
            step,
            action: StepAction::Finish(command),
        }
    }
}

/// A full step table
pub type StepTable = &'static [StepEntry];

/// A named course variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Choreography {
    /// Display name of the course
    pub name: &'static str,
    /// Step table, strictly increasing by step
    pub steps: StepTable,
}

impl Choreography {
    /// Find the action bound to `step`, if any
    pub fn lookup(&self, step: u32) -> Option<&'static StepAction> {
        let steps = self.steps;
        steps
            .binary_search_by_key(&step, |entry| entry.step)
            .ok()
            .map(|index| &steps[index].action)
    }

    /// Step of the first terminal action
    pub fn terminal_step(&self) -> Option<u32> {
        self.steps
            .iter()
            .find(|entry| entry.action.is_terminal())
            .map(|entry| entry.step)
    }

    /// Check that steps start above zero and strictly increase
    pub fn is_well_ordered(&self) -> bool {
        self.steps.first().map_or(true, |first| first.step > 0)
            && self.steps.windows(2).all(|pair| pair[0].step < pair[1].step)
    }
}

/// Course A: take off, yaw back and forth, hover, flip both ways, land
pub const COURSE_A: Choreography = Choreography {
    name: "Course A",
    steps: &[
        StepEntry::command(1, DroneCommand::TakeOff),
        StepEntry::command(10, DroneCommand::Clockwise(TURN_DEGREES)),
        StepEntry::command(15, DroneCommand::CounterClockwise(TURN_DEGREES)),
        StepEntry::command(20, DroneCommand::Clockwise(TURN_DEGREES)),
        StepEntry::command(25, DroneCommand::CounterClockwise(TURN_DEGREES)),
        StepEntry::command(30, DroneCommand::Hover),
        StepEntry::command(35, DroneCommand::FrontFlip),
        StepEntry::command(45, DroneCommand::BackFlip),
        StepEntry::finish(55, DroneCommand::Land),
    ],
};

/// Course B: take off, two front flips, yaw, hover, land
///
/// The second flip jumps the counter to 35 when the run is younger than
/// 10 ms, skipping the yaw at step 30.
// TODO: confirm the intended unit of the step-20 threshold with the
// choreographers; 10 ms almost never holds on a real tick source.
pub const COURSE_B: Choreography = Choreography {
    name: "Course B",
    steps: &[
        StepEntry::command(1, DroneCommand::TakeOff),
        StepEntry::command(10, DroneCommand::FrontFlip),
        StepEntry {
            step: 20,
            action: StepAction::CommandThenSkip {
                command: DroneCommand::FrontFlip,
                within_ms: 10,
                jump_to: 35,
            },
        },
        StepEntry::command(30, DroneCommand::Clockwise(TURN_DEGREES)),
        StepEntry::command(40, DroneCommand::Hover),
        StepEntry::finish(50, DroneCommand::Land),
    ],
};
