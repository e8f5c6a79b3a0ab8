//! Queued drone
//!
//! Implements [`DroneControl`] by pushing commands into a bounded channel.
//! A separate task drains the channel onto the aircraft link (see
//! [`crate::link`]). Enqueueing never blocks: when the queue is full the
//! command is dropped and counted, and the course carries on.

use aerobat_core::traits::DroneControl;
use aerobat_protocol::DroneCommand;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::{AtomicU32, Ordering};

/// Default command queue capacity
pub const COMMAND_QUEUE_LEN: usize = 8;

/// Channel carrying commands from courses to the link task
pub type CommandQueue<const N: usize> = Channel<CriticalSectionRawMutex, DroneCommand, N>;

/// Fire-and-forget drone over a command queue
pub struct QueuedDrone<'q, const N: usize> {
    queue: &'q CommandQueue<N>,
    dropped: AtomicU32,
}

impl<'q, const N: usize> QueuedDrone<'q, N> {
    /// Create a drone feeding `queue`
    pub const fn new(queue: &'q CommandQueue<N>) -> Self {
        Self {
            queue,
            dropped: AtomicU32::new(0),
        }
    }

    /// Commands lost to a full queue since construction
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn enqueue(&self, command: DroneCommand) {
        if self.queue.try_send(command).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            #[cfg(feature = "defmt")]
            defmt::warn!("Command queue full, dropped {}", command);
        }
    }
}

impl<'q, const N: usize> DroneControl for QueuedDrone<'q, N> {
    fn take_off(&self) {
        self.enqueue(DroneCommand::TakeOff);
    }

    fn land(&self) {
        self.enqueue(DroneCommand::Land);
    }

    fn hover(&self) {
        self.enqueue(DroneCommand::Hover);
    }

    fn clockwise(&self, degrees: u16) {
        self.enqueue(DroneCommand::Clockwise(degrees));
    }

    fn counter_clockwise(&self, degrees: u16) {
        self.enqueue(DroneCommand::CounterClockwise(degrees));
    }

    fn front_flip(&self) {
        self.enqueue(DroneCommand::FrontFlip);
    }

    fn back_flip(&self) {
        self.enqueue(DroneCommand::BackFlip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_queued_in_order() {
        let queue: CommandQueue<COMMAND_QUEUE_LEN> = Channel::new();
        let drone = QueuedDrone::new(&queue);

        drone.take_off();
        drone.clockwise(30);
        drone.land();

        assert_eq!(queue.try_receive().ok(), Some(DroneCommand::TakeOff));
        assert_eq!(queue.try_receive().ok(), Some(DroneCommand::Clockwise(30)));
        assert_eq!(queue.try_receive().ok(), Some(DroneCommand::Land));
        assert!(queue.try_receive().is_err());
        assert_eq!(drone.dropped(), 0);
    }

    #[test]
    fn test_full_queue_drops_newest() {
        let queue: CommandQueue<2> = Channel::new();
        let drone = QueuedDrone::new(&queue);

        drone.take_off();
        drone.front_flip();
        drone.back_flip();
        drone.land();

        assert_eq!(drone.dropped(), 2);
        assert_eq!(queue.try_receive().ok(), Some(DroneCommand::TakeOff));
        assert_eq!(queue.try_receive().ok(), Some(DroneCommand::FrontFlip));
        assert!(queue.try_receive().is_err());
    }

    #[test]
    fn test_issue_goes_through_queue() {
        let queue: CommandQueue<COMMAND_QUEUE_LEN> = Channel::new();
        let drone = QueuedDrone::new(&queue);

        drone.issue(DroneCommand::Hover);
        drone.issue(DroneCommand::CounterClockwise(90));

        assert_eq!(queue.try_receive().ok(), Some(DroneCommand::Hover));
        assert_eq!(
            queue.try_receive().ok(),
            Some(DroneCommand::CounterClockwise(90))
        );
    }
}
