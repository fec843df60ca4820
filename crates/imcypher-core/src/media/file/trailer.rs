use byteorder::{BigEndian, ByteOrder};
use log::{debug, warn};

/// Marks the last bytes of a file that carries an appended message
pub const SIGNATURE: &[u8; 12] = b"IMCYPHER_EOF";

/// The message length is stored as big endian u32
pub const LENGTH_FIELD_LEN: usize = 4;

/// Bytes a trailer adds on top of the message itself
pub const TRAILER_OVERHEAD: usize = SIGNATURE.len() + LENGTH_FIELD_LEN;

/// A message appended to the end of a file, laid out as
/// `[message][length: u32 big endian][SIGNATURE]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trailer<'a> {
    message: &'a [u8],
}

impl<'a> Trailer<'a> {
    /// Looks for a valid trailer at the end of `bytes`.
    /// A declared length that exceeds the bytes in front of it is treated as no trailer.
    pub fn locate(bytes: &'a [u8]) -> Option<Self> {
        if bytes.len() < TRAILER_OVERHEAD {
            return None;
        }

        let (rest, signature) = bytes.split_at(bytes.len() - SIGNATURE.len());
        if signature != SIGNATURE {
            return None;
        }

        let (rest, length) = rest.split_at(rest.len() - LENGTH_FIELD_LEN);
        let length = BigEndian::read_u32(length) as usize;
        if length > rest.len() {
            debug!(
                "Trailer declares {length} bytes but only {} bytes precede it",
                rest.len()
            );
            return None;
        }

        Some(Self {
            message: &rest[rest.len() - length..],
        })
    }

    /// Wraps a message, messages beyond `u32::MAX` bytes are cut to fit the length field
    pub fn new(message: &'a [u8]) -> Self {
        let max = u32::MAX as usize;
        if message.len() > max {
            warn!("Message of {} bytes cut to {max} bytes", message.len());
        }

        Self {
            message: &message[..message.len().min(max)],
        }
    }

    pub fn message(&self) -> &'a [u8] {
        self.message
    }

    /// Total number of bytes the trailer occupies at the end of a file
    pub fn span(&self) -> usize {
        self.message.len() + TRAILER_OVERHEAD
    }

    /// Appends the complete trailer to `buffer`
    pub fn append_to(&self, buffer: &mut Vec<u8>) {
        let mut length = [0u8; LENGTH_FIELD_LEN];
        BigEndian::write_u32(&mut length, self.message.len() as u32);

        buffer.reserve(self.span());
        buffer.extend_from_slice(self.message);
        buffer.extend_from_slice(&length);
        buffer.extend_from_slice(SIGNATURE);
    }
}
