//! Courses
//!
//! A course is a named choreography: a sparse table mapping step numbers to
//! drone maneuvers. The step counter advances once per tick, so it doubles
//! as a coarse clock that spaces maneuvers independently of real time.

pub mod sequencer;
pub mod state;
#[cfg(feature = "serde")]
pub mod status;
pub mod table;

pub use sequencer::{Advance, Course};
pub use state::{CourseName, CourseState, MAX_NAME_LEN};
#[cfg(feature = "serde")]
pub use status::{StatusError, MAX_STATUS_FRAME_LEN};
pub use table::{Choreography, StepAction, StepEntry, StepTable, COURSE_A, COURSE_B, TURN_DEGREES};
