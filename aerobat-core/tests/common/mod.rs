//! Shared test doubles

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use aerobat_core::traits::DroneControl;
use aerobat_protocol::DroneCommand;

/// Drone that records every command and flags overlapping calls
#[derive(Default)]
pub struct RecordingDrone {
    commands: Mutex<Vec<DroneCommand>>,
    in_flight: AtomicBool,
    overlaps: AtomicUsize,
}

impl RecordingDrone {
    pub fn commands(&self) -> Vec<DroneCommand> {
        self.commands.lock().unwrap().clone()
    }

    pub fn overlaps(&self) -> usize {
        self.overlaps.load(Ordering::SeqCst)
    }

    fn record(&self, command: DroneCommand) {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            self.overlaps.fetch_add(1, Ordering::SeqCst);
        }
        self.commands.lock().unwrap().push(command);
        std::thread::yield_now();
        self.in_flight.store(false, Ordering::SeqCst);
    }
}

impl DroneControl for RecordingDrone {
    fn take_off(&self) {
        self.record(DroneCommand::TakeOff);
    }

    fn land(&self) {
        self.record(DroneCommand::Land);
    }

    fn hover(&self) {
        self.record(DroneCommand::Hover);
    }

    fn clockwise(&self, degrees: u16) {
        self.record(DroneCommand::Clockwise(degrees));
    }

    fn counter_clockwise(&self, degrees: u16) {
        self.record(DroneCommand::CounterClockwise(degrees));
    }

    fn front_flip(&self) {
        self.record(DroneCommand::FrontFlip);
    }

    fn back_flip(&self) {
        self.record(DroneCommand::BackFlip);
    }
}
