//! End-to-end flights: config, registry, pilot, queue and link together

use std::convert::Infallible;

use aerobat_core::build_default_courses;
use aerobat_core::course::Advance;
use aerobat_core::traits::{Clock, ManualClock};
use aerobat_drivers::{
    enter_sdk_mode, forward_next, parse_config, CommandQueue, Forwarded, Pilot, QueuedDrone,
    COMMAND_QUEUE_LEN,
};
use embassy_futures::block_on;
use embedded_io_async::{ErrorType, Write};

/// Link that records one line per flush
#[derive(Default)]
struct Transcript {
    pending: String,
    lines: Vec<String>,
}

impl ErrorType for Transcript {
    type Error = Infallible;
}

impl Write for Transcript {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.pending.push_str(std::str::from_utf8(buf).unwrap());
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        self.lines.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}

/// Fly a configured course to the end, draining the queue after every tick
fn fly(config_text: &str) -> Vec<String> {
    let config = parse_config(config_text).unwrap();
    let queue: CommandQueue<COMMAND_QUEUE_LEN> = CommandQueue::new();
    let drone = QueuedDrone::new(&queue);
    let clock = ManualClock::new(0);
    let registry = build_default_courses(&drone, &clock);
    let mut pilot = Pilot::new(&registry, &config).unwrap();
    let mut link = Transcript::default();

    if config.enter_sdk_mode {
        block_on(enter_sdk_mode(&mut link)).unwrap();
    }

    pilot.engage(clock.now_ms());
    let mut ticks = 0;
    while pilot.is_flying() {
        clock.advance(u64::from(config.tick_interval_ms) / 2);
        if let Some(outcome) = pilot.tick(clock.now_ms()) {
            ticks += 1;
            if outcome.command().is_some() {
                let forwarded = block_on(forward_next(&queue, &mut link)).unwrap();
                assert!(matches!(forwarded, Forwarded::Sent(_)));
            }
        }
        assert!(ticks <= 100, "course never finished");
    }

    assert_eq!(drone.dropped(), 0);
    link.lines
}

#[test]
fn test_course_a_transcript() {
    let lines = fly("[pilot]\ncourse = 1\ntick_interval_ms = 100\n");

    assert_eq!(
        lines,
        [
            "command", "takeoff", "cw 30", "ccw 30", "cw 30", "ccw 30", "stop", "flip f",
            "flip b", "land",
        ]
    );
}

#[test]
fn test_course_b_transcript_without_sdk_entry() {
    let lines = fly("[pilot]\ncourse = 2\nenter_sdk_mode = false\n");

    // Paced ticks are far older than the skip window, so nothing is skipped
    assert_eq!(
        lines,
        ["takeoff", "flip f", "flip f", "cw 30", "stop", "land"]
    );
}

#[test]
fn test_unknown_course_rejected() {
    let config = parse_config("[pilot]\ncourse = 7\n").unwrap();
    let queue: CommandQueue<COMMAND_QUEUE_LEN> = CommandQueue::new();
    let drone = QueuedDrone::new(&queue);
    let clock = ManualClock::new(0);
    let registry = build_default_courses(&drone, &clock);

    assert!(Pilot::new(&registry, &config).is_err());
}

#[test]
fn test_full_queue_drops_without_stalling() {
    let queue: CommandQueue<2> = CommandQueue::new();
    let drone = QueuedDrone::new(&queue);
    let clock = ManualClock::new(0);
    let registry = build_default_courses(&drone, &clock);
    let course = registry.get(1).unwrap();

    course.start();
    let mut last = Advance::Idle;
    for _ in 0..55 {
        clock.advance(100);
        last = course.advance();
    }

    // Nine commands issued, nobody draining: two fit, seven are dropped
    assert!(last.is_finished());
    assert_eq!(drone.dropped(), 7);
    assert_eq!(queue.len(), 2);
}
