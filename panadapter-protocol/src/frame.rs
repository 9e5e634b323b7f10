//! Frame encoding for the display link
//!
//! Frame format:
//! - START (1 byte): 241 synchronization byte
//! - TYPE (1 byte): message type identifier
//! - LENGTH (2 bytes, big-endian): payload length (0-256)
//! - PAYLOAD (0-256 bytes): type-specific data
//! - CHECKSUM (1 byte): XOR of TYPE, both LENGTH bytes and all PAYLOAD bytes
//! - STOP (1 byte): 242 end marker

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 241;

/// Frame end marker
pub const FRAME_STOP: u8 = 242;

/// Maximum payload size in bytes (a full spectrum trace)
pub const MAX_PAYLOAD_SIZE: usize = 256;

/// Maximum complete frame size (START + TYPE + LENGTH + MAX_PAYLOAD + CHECKSUM + STOP)
pub const MAX_FRAME_SIZE: usize = 1 + 1 + 2 + MAX_PAYLOAD_SIZE + 1 + 1;

/// Errors that can occur during frame encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A constructed display-link frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type identifier
    pub msg_type: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Create a new frame with the given message type and payload
    pub fn new(msg_type: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let mut payload_vec = Vec::new();
        payload_vec
            .extend_from_slice(payload)
            .map_err(|_| FrameError::PayloadTooLarge)?;

        Ok(Self {
            msg_type,
            payload: payload_vec,
        })
    }

    /// Create a frame with no payload
    pub fn empty(msg_type: u8) -> Self {
        Self {
            msg_type,
            payload: Vec::new(),
        }
    }

    /// Calculate checksum for frame data
    fn calculate_checksum(msg_type: u8, length: u16, payload: &[u8]) -> u8 {
        let [hi, lo] = length.to_be_bytes();
        let mut checksum = msg_type ^ hi ^ lo;
        for &byte in payload {
            checksum ^= byte;
        }
        checksum
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = 6 + self.payload.len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        let length = self.payload.len() as u16;
        let [hi, lo] = length.to_be_bytes();
        let checksum = Self::calculate_checksum(self.msg_type, length, &self.payload);

        buffer[0] = FRAME_START;
        buffer[1] = self.msg_type;
        buffer[2] = hi;
        buffer[3] = lo;
        buffer[4..4 + self.payload.len()].copy_from_slice(&self.payload);
        buffer[4 + self.payload.len()] = checksum;
        buffer[5 + self.payload.len()] = FRAME_STOP;

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| FrameError::BufferTooSmall)?;
        Ok(vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame_layout() {
        let frame = Frame::empty(0x10);
        let encoded = frame.encode_to_vec().unwrap();
        assert_eq!(&encoded[..], &[FRAME_START, 0x10, 0, 0, 0x10, FRAME_STOP]);
    }

    #[test]
    fn test_payload_frame_layout_and_checksum() {
        let frame = Frame::new(0x12, &[0xA0, 0x05]).unwrap();
        let encoded = frame.encode_to_vec().unwrap();

        // checksum = type ^ len_hi ^ len_lo ^ payload bytes
        let checksum: u8 = 0x12 ^ 0x00 ^ 0x02 ^ 0xA0 ^ 0x05;
        assert_eq!(
            &encoded[..],
            &[FRAME_START, 0x12, 0x00, 0x02, 0xA0, 0x05, checksum, FRAME_STOP]
        );
    }

    #[test]
    fn test_max_payload_round_numbers() {
        let payload = [0x55u8; MAX_PAYLOAD_SIZE];
        let frame = Frame::new(0x11, &payload).unwrap();
        let encoded = frame.encode_to_vec().unwrap();
        assert_eq!(encoded.len(), MAX_FRAME_SIZE);
        assert_eq!(encoded[2], 0x01); // length 256 big-endian
        assert_eq!(encoded[3], 0x00);
        assert_eq!(*encoded.last().unwrap(), FRAME_STOP);
    }

    #[test]
    fn test_oversized_payload_rejected() {
        let payload = [0u8; MAX_PAYLOAD_SIZE + 1];
        assert_eq!(Frame::new(0x11, &payload), Err(FrameError::PayloadTooLarge));
    }

    #[test]
    fn test_encode_into_undersized_buffer() {
        let frame = Frame::new(0x12, b"hello").unwrap();
        let mut buffer = [0u8; 8];
        assert_eq!(frame.encode(&mut buffer), Err(FrameError::BufferTooSmall));
    }
}
