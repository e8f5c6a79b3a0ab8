//! Collaborator traits
//!
//! These traits define the interface between course sequencing and the
//! outside world: the aircraft that flies maneuvers and the clock that
//! timestamps a run.

pub mod clock;
pub mod drone;

pub use clock::{Clock, ManualClock};
pub use drone::DroneControl;
