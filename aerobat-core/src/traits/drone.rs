//! Drone control trait
//!
//! A course only ever asks the aircraft to do something; it never waits for
//! or inspects the outcome. Implementations must therefore return quickly
//! and must not block: every method is called with the course lock held.

use aerobat_protocol::DroneCommand;

/// Fire-and-forget maneuver capability shared by every course
///
/// Methods take `&self` because one drone is shared by all courses of a
/// registry. Implementations that need mutation use interior mutability
/// (a command queue, an atomic, a critical-section cell).
pub trait DroneControl {
    /// Take off and hover at default height
    fn take_off(&self);

    /// Land at the current position
    fn land(&self);

    /// Stop all motion and hold position
    fn hover(&self);

    /// Yaw clockwise by `degrees`
    fn clockwise(&self, degrees: u16);

    /// Yaw counter-clockwise by `degrees`
    fn counter_clockwise(&self, degrees: u16);

    /// Flip forward
    fn front_flip(&self);

    /// Flip backward
    fn back_flip(&self);

    /// Route a command value to the matching capability method
    fn issue(&self, command: DroneCommand) {
        match command {
            DroneCommand::TakeOff => self.take_off(),
            DroneCommand::Land => self.land(),
            DroneCommand::Hover => self.hover(),
            DroneCommand::Clockwise(deg) => self.clockwise(deg),
            DroneCommand::CounterClockwise(deg) => self.counter_clockwise(deg),
            DroneCommand::FrontFlip => self.front_flip(),
            DroneCommand::BackFlip => self.back_flip(),
        }
    }
}

impl<T: DroneControl + ?Sized> DroneControl for &T {
    fn take_off(&self) {
        (**self).take_off()
    }

    fn land(&self) {
        (**self).land()
    }

    fn hover(&self) {
        (**self).hover()
    }

    fn clockwise(&self, degrees: u16) {
        (**self).clockwise(degrees)
    }

    fn counter_clockwise(&self, degrees: u16) {
        (**self).counter_clockwise(degrees)
    }

    fn front_flip(&self) {
        (**self).front_flip()
    }

    fn back_flip(&self) {
        (**self).back_flip()
    }
}
