use std::io::{ErrorKind, Read, Write};

use log::{debug, error, warn};

use super::iterators::{carrier_count, ColorIter, ColorIterMut};
use crate::error::ImcypherError;
use crate::media::{Carrier, Conceal, LsbCodecOptions, Overflow};
use crate::result::Result;
use crate::universal_decoder::UniversalDecoder;
use crate::universal_encoder::UniversalEncoder;

/// Unveiled text longer than this without a terminator is considered image noise
pub const NOISE_CEILING: usize = 50_000;

/// Hides a NUL terminated message in the least significant bit of the color channels
/// of a raw pixel buffer, leaving one channel per pixel (alpha) untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LsbCodec {
    options: LsbCodecOptions,
}

impl LsbCodec {
    pub fn new(options: LsbCodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LsbCodecOptions {
        &self.options
    }

    /// Maximum message length in bytes for an RGBA image of the given dimensions.
    /// Note the terminator has to fit in as well.
    pub fn capacity(width: u32, height: u32) -> usize {
        width as usize * height as usize * 3 / 8
    }

    /// Maximum message length in bytes for the given pixel buffer
    pub fn capacity_of(&self, pixels: &[u8]) -> usize {
        carrier_count(
            pixels.len(),
            self.options.channel_stride,
            self.options.skip_channel,
        ) / 8
    }

    /// builds a LSB Image Decoder that implements Read
    pub fn decoder<'i>(&self, pixels: &'i [u8]) -> Box<dyn Read + 'i> {
        Box::new(UniversalDecoder::new(ColorIter::new(
            pixels,
            self.options.channel_stride,
            self.options.skip_channel,
        )))
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder<'i>(&self, pixels: &'i mut [u8]) -> Box<dyn Write + 'i> {
        Box::new(UniversalEncoder::new(ColorIterMut::new(
            pixels,
            self.options.channel_stride,
            self.options.skip_channel,
        )))
    }

    /// Reads the hidden message up to its NUL terminator.
    /// Returns `None` if the carrier ends before a terminator shows up,
    /// or if the text grows beyond [`NOISE_CEILING`].
    pub fn decode(&self, pixels: &[u8]) -> Option<String> {
        let mut payload = Vec::new();
        for byte in self.decoder(pixels).bytes() {
            match byte.ok()? {
                0 => {
                    debug!("Found terminated message of {} bytes", payload.len());
                    return Some(self.options.text_encoding.decode(&payload));
                }
                b => payload.push(b),
            }
            if payload.len() > NOISE_CEILING {
                debug!("No terminator within {NOISE_CEILING} bytes, treating carrier as noise");
                return None;
            }
        }

        debug!("Carrier exhausted without a terminator");
        None
    }

    /// Hides `text` in a copy of `pixels`. If the message does not fit,
    /// writing silently stops at the last carrier byte and the result is not decodable.
    pub fn encode(&self, pixels: &[u8], text: &str) -> Vec<u8> {
        let payload = self.payload(text);
        let mut encoded = pixels.to_vec();
        if let Err(e) = self.encoder(&mut encoded).write_all(&payload) {
            warn!(
                "Message truncated, {} bytes do not fit into a capacity of {} bytes: {e}",
                payload.len(),
                self.capacity_of(pixels)
            );
        }

        encoded
    }

    /// Like [`LsbCodec::encode`] but fails with [`ImcypherError::CapacityExceeded`]
    /// instead of truncating the message.
    pub fn try_encode(&self, pixels: &[u8], text: &str) -> Result<Vec<u8>> {
        let payload = self.payload(text);
        let available = self.capacity_of(pixels);
        if payload.len() > available {
            error!(
                "Message of {} bytes does not fit into {available} bytes",
                payload.len()
            );
            return Err(ImcypherError::CapacityExceeded {
                needed: payload.len(),
                available,
            });
        }

        let mut encoded = pixels.to_vec();
        self.encoder(&mut encoded)
            .write_all(&payload)
            .map_err(|e| match e.kind() {
                ErrorKind::WriteZero => ImcypherError::CapacityExceeded {
                    needed: payload.len(),
                    available,
                },
                _ => ImcypherError::IoError(e),
            })?;

        Ok(encoded)
    }

    /// message bytes plus the mandatory terminator
    fn payload(&self, text: &str) -> Vec<u8> {
        let mut payload = self.options.text_encoding.encode(text);
        payload.push(0);
        payload
    }
}

impl Conceal for LsbCodec {
    fn unveil(&self, carrier: &Carrier) -> Option<String> {
        self.decode(carrier.pixels())
    }

    fn hide(&self, carrier: &Carrier, text: &str) -> Result<Carrier> {
        let pixels = match self.options.overflow {
            Overflow::Truncate => self.encode(carrier.pixels(), text),
            Overflow::Reject => self.try_encode(carrier.pixels(), text)?,
        };

        carrier.with_pixels(pixels)
    }

    fn capacity(&self, carrier: &Carrier) -> Option<usize> {
        Some(self.capacity_of(carrier.pixels()))
    }
}
