//! Command link
//!
//! Drains the command queue onto the aircraft, one SDK line per command.
//! Each line is flushed on its own so datagram transports send exactly one
//! command per packet.

use core::convert::Infallible;

use aerobat_protocol::{encode_command, DroneCommand, SdkError, ENTER_SDK};
use embedded_io_async::Write;

use crate::drone::CommandQueue;

/// Outcome of forwarding one queued command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Forwarded {
    /// Command written to the link
    Sent(DroneCommand),
    /// Command has no valid SDK encoding and was discarded
    Rejected(DroneCommand, SdkError),
}

/// Switch the aircraft into SDK mode
///
/// Must be sent once before any maneuver is accepted.
pub async fn enter_sdk_mode<W: Write>(writer: &mut W) -> Result<(), W::Error> {
    writer.write_all(ENTER_SDK.as_bytes()).await?;
    writer.flush().await
}

/// Wait for the next queued command and write it to the link
pub async fn forward_next<W: Write, const N: usize>(
    queue: &CommandQueue<N>,
    writer: &mut W,
) -> Result<Forwarded, W::Error> {
    let command = queue.receive().await;

    let line = match encode_command(command) {
        Ok(line) => line,
        Err(err) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Discarding {}: {}", command, err);
            return Ok(Forwarded::Rejected(command, err));
        }
    };

    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;

    #[cfg(feature = "defmt")]
    defmt::trace!("Sent {=str}", line.as_str());
    Ok(Forwarded::Sent(command))
}

/// Forward queued commands forever
///
/// Returns only when the writer fails.
pub async fn forward_commands<W: Write, const N: usize>(
    queue: &CommandQueue<N>,
    writer: &mut W,
) -> Result<Infallible, W::Error> {
    loop {
        forward_next(queue, writer).await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerobat_protocol::SdkLine;
    use embassy_futures::block_on;
    use embassy_sync::channel::Channel;
    use embedded_io_async::{ErrorKind, ErrorType};
    use heapless::Vec;

    /// Collects one line per flush
    #[derive(Default)]
    struct LineSink {
        pending: SdkLine,
        lines: Vec<SdkLine, 8>,
    }

    impl ErrorType for LineSink {
        type Error = Infallible;
    }

    impl Write for LineSink {
        async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            for &b in buf {
                let _ = self.pending.push(b as char);
            }
            Ok(buf.len())
        }

        async fn flush(&mut self) -> Result<(), Self::Error> {
            let line = core::mem::take(&mut self.pending);
            let _ = self.lines.push(line);
            Ok(())
        }
    }

    /// Link whose transport is down
    struct BrokenLink;

    impl ErrorType for BrokenLink {
        type Error = ErrorKind;
    }

    impl Write for BrokenLink {
        async fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
            Err(ErrorKind::NotConnected)
        }
    }

    #[test]
    fn test_enter_sdk_mode() {
        let mut sink = LineSink::default();
        block_on(enter_sdk_mode(&mut sink)).unwrap();
        assert_eq!(sink.lines.len(), 1);
        assert_eq!(sink.lines[0].as_str(), "command");
    }

    #[test]
    fn test_forward_in_queue_order() {
        let queue: CommandQueue<4> = Channel::new();
        let _ = queue.try_send(DroneCommand::TakeOff);
        let _ = queue.try_send(DroneCommand::Clockwise(30));
        let _ = queue.try_send(DroneCommand::BackFlip);

        let mut sink = LineSink::default();
        for _ in 0..3 {
            let forwarded = block_on(forward_next(&queue, &mut sink)).unwrap();
            assert!(matches!(forwarded, Forwarded::Sent(_)));
        }

        let lines: Vec<&str, 8> = sink.lines.iter().map(|l| l.as_str()).collect();
        assert_eq!(lines.as_slice(), &["takeoff", "cw 30", "flip b"]);
    }

    #[test]
    fn test_unencodable_command_rejected() {
        let queue: CommandQueue<2> = Channel::new();
        let _ = queue.try_send(DroneCommand::Clockwise(720));

        let mut sink = LineSink::default();
        let forwarded = block_on(forward_next(&queue, &mut sink)).unwrap();
        assert_eq!(
            forwarded,
            Forwarded::Rejected(DroneCommand::Clockwise(720), SdkError::InvalidArgument)
        );
        assert!(sink.lines.is_empty());
    }

    #[test]
    fn test_link_error_propagates() {
        let queue: CommandQueue<2> = Channel::new();
        let _ = queue.try_send(DroneCommand::Land);
        let _ = queue.try_send(DroneCommand::Hover);

        let result = block_on(forward_commands(&queue, &mut BrokenLink));
        assert!(matches!(result, Err(ErrorKind::NotConnected)));
        // The failed command is consumed; the next one is still queued
        assert_eq!(queue.try_receive().ok(), Some(DroneCommand::Hover));
    }
}
