//! Driver implementations
//!
//! This crate connects the board-agnostic course logic in `aerobat-core`
//! to the outside world:
//!
//! - Drone collaborators (a non-blocking command queue)
//! - The command link that writes queued commands as SDK text
//! - The pilot that paces course ticks on a clock
//! - Pilot configuration parsing
//! - Clock sources

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "embassy-time")]
pub mod clock;
pub mod config;
pub mod drone;
pub mod link;
pub mod pilot;

pub use config::{parse_config, ParseError};
pub use drone::{CommandQueue, QueuedDrone, COMMAND_QUEUE_LEN};
pub use link::{enter_sdk_mode, forward_commands, forward_next, Forwarded};
pub use pilot::{Pilot, PilotError};
