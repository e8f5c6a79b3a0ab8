//! Maneuvers a course can request from the drone

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest rotation the aircraft accepts, in degrees
pub const MIN_DEGREES: u16 = 1;

/// Largest rotation the aircraft accepts, in degrees
pub const MAX_DEGREES: u16 = 360;

/// A single fire-and-forget drone maneuver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DroneCommand {
    /// Auto take-off to hover height
    TakeOff,
    /// Auto landing
    Land,
    /// Stop all motion and hold position
    Hover,
    /// Yaw clockwise by the given degrees
    Clockwise(u16),
    /// Yaw counter-clockwise by the given degrees
    CounterClockwise(u16),
    /// Flip forward
    FrontFlip,
    /// Flip backward
    BackFlip,
}

impl DroneCommand {
    /// Returns true if the aircraft leaves or reaches the ground
    pub fn is_transition(&self) -> bool {
        matches!(self, DroneCommand::TakeOff | DroneCommand::Land)
    }

    /// Returns true if this is a yaw rotation
    pub fn is_rotation(&self) -> bool {
        matches!(
            self,
            DroneCommand::Clockwise(_) | DroneCommand::CounterClockwise(_)
        )
    }

    /// Returns true if this is an acrobatic flip
    pub fn is_flip(&self) -> bool {
        matches!(self, DroneCommand::FrontFlip | DroneCommand::BackFlip)
    }

    /// Rotation angle, if any
    pub fn degrees(&self) -> Option<u16> {
        match *self {
            DroneCommand::Clockwise(deg) | DroneCommand::CounterClockwise(deg) => Some(deg),
            _ => None,
        }
    }
}
