//! Aerobat drone command protocol
//!
//! This crate defines the vocabulary of maneuvers a course can request and
//! the plain-text SDK used to send them to the aircraft over UDP or UART.
//!
//! # Wire Overview
//!
//! Every command is a single ASCII line without terminator:
//! ```text
//! takeoff | land | stop | cw <deg> | ccw <deg> | flip f | flip b
//! ```
//!
//! The aircraft must first be switched into SDK mode by sending
//! [`ENTER_SDK`]. It answers each line with `ok`, `error ...` or a value.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod sdk;

pub use command::{DroneCommand, MAX_DEGREES, MIN_DEGREES};
pub use sdk::{
    decode_command, encode_command, Response, SdkError, SdkLine, ENTER_SDK, MAX_LINE_LEN,
};
