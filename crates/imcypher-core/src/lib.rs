//! # Imcypher Core API
//!
//! Hides a text message inside an image in one of two ways:
//! - [`LsbCodec`][lsb] writes the message into the least significant bits of the
//!   red, green and blue channels of the decoded pixels
//! - [`AppendCodec`][append] appends the message with a signed trailer to the raw file bytes
//!
//! Both are stateless, [`Session`] keeps the loaded [`Carrier`] and the selected method.
//!
//! # Usage Examples
//!
//! ## Hide a message in a pixel buffer
//!
//! ```rust
//! let pixels = vec![0x80; 4 * 4 * 4]; // 4x4 RGBA
//!
//! let secret = imcypher_core::lsb_encode(&pixels, "Hi");
//!
//! assert_eq!(imcypher_core::lsb_capacity(4, 4), 6);
//! assert_eq!(imcypher_core::lsb_decode(&secret).as_deref(), Some("Hi"));
//! ```
//!
//! ## Append a message to a file
//!
//! ```rust
//! let file = vec![0x01, 0x02, 0x03];
//!
//! let secret = imcypher_core::append_encode(&file, "Hi");
//!
//! assert_eq!(secret.len(), file.len() + 2 + 16);
//! assert!(secret.ends_with(b"IMCYPHER_EOF"));
//! assert_eq!(imcypher_core::append_decode(&secret).as_deref(), Some("Hi"));
//! ```
//!
//! ## Hide a message in an image file
//!
//! ```rust,no_run
//! imcypher_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image("carrier-image.png")
//!     .with_options(imcypher_core::Method::Append.into())
//!     .with_output("image-with-a-message.png")
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! [lsb]: ./media/image/lsb_codec/struct.LsbCodec.html
//! [append]: ./media/file/append_codec/struct.AppendCodec.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod message;
pub mod result;
pub mod session;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::error::ImcypherError;
pub use crate::media::file::AppendCodec;
pub use crate::media::image::LsbCodec;
pub use crate::media::{
    AppendCodecOptions, Carrier, Codec, CodecOptions, Conceal, LsbCodecOptions, Method,
    Overflow, Persist,
};
pub use crate::message::TextEncoding;
pub use crate::result::Result;
pub use crate::session::Session;

/// Message capacity in bytes of an RGBA image, the terminator included
pub fn lsb_capacity(width: u32, height: u32) -> usize {
    LsbCodec::capacity(width, height)
}

/// Unveils a LSB message from RGBA pixels, alpha is skipped
pub fn lsb_decode(pixels: &[u8]) -> Option<String> {
    LsbCodec::default().decode(pixels)
}

/// Unveils a LSB message from a pixel buffer with `channel_stride` bytes per pixel,
/// never reading the channel at `skip_channel_index`
pub fn lsb_decode_with(
    pixels: &[u8],
    channel_stride: usize,
    skip_channel_index: usize,
) -> Option<String> {
    LsbCodec::new(LsbCodecOptions {
        channel_stride,
        skip_channel: Some(skip_channel_index),
        ..LsbCodecOptions::default()
    })
    .decode(pixels)
}

/// Hides a message in a copy of RGBA pixels, silently truncated if it does not fit
pub fn lsb_encode(pixels: &[u8], text: &str) -> Vec<u8> {
    LsbCodec::default().encode(pixels, text)
}

/// Unveils the message of an appended trailer
pub fn append_decode(file_bytes: &[u8]) -> Option<String> {
    AppendCodec::default().decode(file_bytes)
}

/// Appends a message trailer to a copy of the file bytes, replacing an existing one
pub fn append_encode(file_bytes: &[u8], text: &str) -> Vec<u8> {
    AppendCodec::default().encode(file_bytes, text)
}
