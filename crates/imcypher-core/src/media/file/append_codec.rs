use log::debug;

use super::trailer::Trailer;
use crate::media::{AppendCodecOptions, Carrier, Conceal};
use crate::result::Result;

/// Hides a message behind the last byte of a file, in a signed trailer.
/// Image decoders stop at the end of their own data, so the image still renders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AppendCodec {
    options: AppendCodecOptions,
}

impl AppendCodec {
    pub fn new(options: AppendCodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AppendCodecOptions {
        &self.options
    }

    /// Reads the message from the trailer at the end of `bytes`, if there is a valid one
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        Trailer::locate(bytes).map(|t| self.options.text_encoding.decode(t.message()))
    }

    /// `bytes` without a trailer, if there was one
    pub fn strip(bytes: &[u8]) -> &[u8] {
        match Trailer::locate(bytes) {
            Some(trailer) => {
                debug!("Stripping existing trailer of {} bytes", trailer.span());
                &bytes[..bytes.len() - trailer.span()]
            }
            None => bytes,
        }
    }

    /// Appends `text` to a copy of `bytes`, an existing trailer gets replaced
    pub fn encode(&self, bytes: &[u8], text: &str) -> Vec<u8> {
        let base = Self::strip(bytes);
        let message = self.options.text_encoding.encode(text);
        let trailer = Trailer::new(&message);

        let mut encoded = Vec::with_capacity(base.len() + trailer.span());
        encoded.extend_from_slice(base);
        trailer.append_to(&mut encoded);

        encoded
    }
}

impl Conceal for AppendCodec {
    fn unveil(&self, carrier: &Carrier) -> Option<String> {
        self.decode(carrier.bytes())
    }

    fn hide(&self, carrier: &Carrier, text: &str) -> Result<Carrier> {
        Ok(carrier.with_bytes(self.encode(carrier.bytes(), text)))
    }

    /// there is no ceiling besides addressable memory
    fn capacity(&self, _carrier: &Carrier) -> Option<usize> {
        None
    }
}
