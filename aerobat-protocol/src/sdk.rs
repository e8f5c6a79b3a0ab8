//! Text SDK encoding and decoding
//!
//! Commands are short ASCII lines. Rotations carry their angle as a decimal
//! argument; flips carry a single direction letter.

use core::fmt::Write;

use heapless::String;

use crate::command::{DroneCommand, MAX_DEGREES, MIN_DEGREES};

/// Line that switches the aircraft into SDK mode
pub const ENTER_SDK: &str = "command";

/// Longest command line produced or accepted
pub const MAX_LINE_LEN: usize = 16;

/// One encoded command line
pub type SdkLine = String<MAX_LINE_LEN>;

const TAKEOFF: &str = "takeoff";
const LAND: &str = "land";
const STOP: &str = "stop";
const CW: &str = "cw";
const CCW: &str = "ccw";
const FLIP: &str = "flip";
const FLIP_FRONT: &str = "f";
const FLIP_BACK: &str = "b";

/// Errors that can occur while encoding or decoding SDK lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SdkError {
    /// Line contained no command word
    Empty,
    /// Command word is not part of the SDK subset
    UnknownCommand,
    /// Argument missing, malformed, or out of range
    InvalidArgument,
    /// Encoded line does not fit in [`MAX_LINE_LEN`]
    TooLong,
}

/// Encode a command into its SDK line
pub fn encode_command(command: DroneCommand) -> Result<SdkLine, SdkError> {
    let mut line = SdkLine::new();
    let written = match command {
        DroneCommand::TakeOff => line.push_str(TAKEOFF).map_err(|_| SdkError::TooLong),
        DroneCommand::Land => line.push_str(LAND).map_err(|_| SdkError::TooLong),
        DroneCommand::Hover => line.push_str(STOP).map_err(|_| SdkError::TooLong),
        DroneCommand::Clockwise(deg) => write_rotation(&mut line, CW, deg),
        DroneCommand::CounterClockwise(deg) => write_rotation(&mut line, CCW, deg),
        DroneCommand::FrontFlip => write_flip(&mut line, FLIP_FRONT),
        DroneCommand::BackFlip => write_flip(&mut line, FLIP_BACK),
    };
    written.map(|_| line)
}

fn write_rotation(line: &mut SdkLine, word: &str, deg: u16) -> Result<(), SdkError> {
    if !(MIN_DEGREES..=MAX_DEGREES).contains(&deg) {
        return Err(SdkError::InvalidArgument);
    }
    write!(line, "{} {}", word, deg).map_err(|_| SdkError::TooLong)
}

fn write_flip(line: &mut SdkLine, direction: &str) -> Result<(), SdkError> {
    write!(line, "{} {}", FLIP, direction).map_err(|_| SdkError::TooLong)
}

/// Decode an SDK line back into a command
///
/// Surrounding whitespace and a trailing line terminator are ignored.
pub fn decode_command(line: &str) -> Result<DroneCommand, SdkError> {
    let line = line.trim();
    if line.len() > MAX_LINE_LEN {
        return Err(SdkError::TooLong);
    }

    let mut words = line.split_ascii_whitespace();
    let word = words.next().ok_or(SdkError::Empty)?;
    let arg = words.next();
    if words.next().is_some() {
        return Err(SdkError::InvalidArgument);
    }

    let command = match (word, arg) {
        (TAKEOFF, None) => DroneCommand::TakeOff,
        (LAND, None) => DroneCommand::Land,
        (STOP, None) => DroneCommand::Hover,
        (CW, Some(deg)) => DroneCommand::Clockwise(parse_degrees(deg)?),
        (CCW, Some(deg)) => DroneCommand::CounterClockwise(parse_degrees(deg)?),
        (FLIP, Some(FLIP_FRONT)) => DroneCommand::FrontFlip,
        (FLIP, Some(FLIP_BACK)) => DroneCommand::BackFlip,
        (TAKEOFF | LAND | STOP | CW | CCW | FLIP, _) => return Err(SdkError::InvalidArgument),
        _ => return Err(SdkError::UnknownCommand),
    };
    Ok(command)
}

fn parse_degrees(arg: &str) -> Result<u16, SdkError> {
    if !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SdkError::InvalidArgument);
    }
    let deg: u16 = arg.parse().map_err(|_| SdkError::InvalidArgument)?;
    if (MIN_DEGREES..=MAX_DEGREES).contains(&deg) {
        Ok(deg)
    } else {
        Err(SdkError::InvalidArgument)
    }
}

/// Reply sent by the aircraft after each line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response<'a> {
    /// Command accepted
    Ok,
    /// Command rejected; carries the aircraft's reason text (may be empty)
    Error(&'a str),
    /// Read command answered with a value
    Value(&'a str),
}

impl<'a> Response<'a> {
    /// Classify a raw reply
    pub fn parse(reply: &'a str) -> Self {
        let reply = reply.trim();
        if reply.eq_ignore_ascii_case("ok") {
            return Response::Ok;
        }
        match reply.get(..5) {
            Some(head) if head.eq_ignore_ascii_case("error") => {
                Response::Error(reply[5..].trim())
            }
            _ => Response::Value(reply),
        }
    }

    /// Returns true if the aircraft accepted the command
    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok)
    }
}
