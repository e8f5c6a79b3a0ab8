//! Status payload for observers
//!
//! A [`CourseState`] snapshot is encoded with postcard and COBS-framed, so a
//! zero byte delimits payloads on a byte stream. Field order on the wire is
//! `name`, `status`, `is_running`, `start_time`, `elapsed`.

use super::state::CourseState;

/// Largest encoded status payload, including the COBS terminator
///
/// Name: 1 length byte + 16 bytes. Counter: 5 varint bytes. Flag: 1 byte.
/// Two timestamps: 10 varint bytes each. COBS adds one overhead byte and the
/// terminator.
pub const MAX_STATUS_FRAME_LEN: usize = 48;

/// Errors that can occur while encoding or decoding a status payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusError {
    /// Output buffer cannot hold the encoded payload
    BufferTooSmall,
    /// Input bytes are not a valid status payload
    Malformed,
}

impl CourseState {
    /// Encode into `buffer`, returning the used prefix
    pub fn encode<'b>(&self, buffer: &'b mut [u8]) -> Result<&'b mut [u8], StatusError> {
        postcard::to_slice_cobs(self, buffer).map_err(|err| match err {
            postcard::Error::SerializeBufferFull => StatusError::BufferTooSmall,
            _ => StatusError::Malformed,
        })
    }

    /// Decode a payload produced by [`CourseState::encode`]
    ///
    /// COBS decoding happens in place, so `frame` is clobbered.
    pub fn decode(frame: &mut [u8]) -> Result<Self, StatusError> {
        postcard::from_bytes_cobs(frame).map_err(|_| StatusError::Malformed)
    }
}
