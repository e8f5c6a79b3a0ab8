//! Board-agnostic core logic for drone course choreography
//!
//! This crate contains everything that decides *which* maneuver to fly
//! *when*, without knowing how commands reach the aircraft:
//!
//! - Collaborator traits (drone control, clock)
//! - Course run-state and the step tables of every known course
//! - The tick-driven course sequencer
//! - The registry of default courses
//! - Pilot configuration types

#![no_std]
#![deny(unsafe_code)]

mod logging;

pub mod config;
pub mod course;
pub mod registry;
pub mod traits;

pub use course::{Advance, Course, CourseState};
pub use registry::{build_default_courses, CourseId, CourseRegistry};
