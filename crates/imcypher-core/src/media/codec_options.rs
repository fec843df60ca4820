use crate::message::TextEncoding;

/// The two ways of hiding a message, mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// In the least significant bits of the pixel colors
    Lsb,
    /// In a trailer appended to the raw file bytes
    Append,
}

/// Codec configuration for steganography encoding/decoding
///
/// The variant is the method flag:
/// - `Lsb` → message in the pixel values, output is re-encoded as PNG
/// - `Append` → message behind the original file bytes, output keeps its format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecOptions {
    Lsb(LsbCodecOptions),
    Append(AppendCodecOptions),
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::Lsb(LsbCodecOptions::default())
    }
}

impl From<Method> for CodecOptions {
    fn from(method: Method) -> Self {
        match method {
            Method::Lsb => Self::Lsb(LsbCodecOptions::default()),
            Method::Append => Self::Append(AppendCodecOptions::default()),
        }
    }
}

impl CodecOptions {
    pub fn method(&self) -> Method {
        match self {
            Self::Lsb(_) => Method::Lsb,
            Self::Append(_) => Method::Append,
        }
    }

    pub fn text_encoding(&self) -> TextEncoding {
        match self {
            Self::Lsb(o) => o.text_encoding,
            Self::Append(o) => o.text_encoding,
        }
    }

    pub fn with_text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        match &mut self {
            Self::Lsb(o) => o.text_encoding = text_encoding,
            Self::Append(o) => o.text_encoding = text_encoding,
        }
        self
    }
}

/// What happens when a LSB message does not fit into the image
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Stop writing at the last carrier byte, the message is lost
    Truncate,
    /// Fail with a capacity error
    #[default]
    Reject,
}

/// Options for LSB (Least Significant Bit) image encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LsbCodecOptions {
    /// Number of bytes that form one pixel in the buffer, 4 for RGBA.
    pub channel_stride: usize,

    /// Channel index inside a pixel that never carries data, `Some(3)` skips alpha.
    /// `None` uses every byte of the buffer.
    pub skip_channel: Option<usize>,

    /// Applies when hiding via [`crate::media::Conceal`], the plain `encode` always truncates.
    pub overflow: Overflow,

    pub text_encoding: TextEncoding,
}

impl Default for LsbCodecOptions {
    fn default() -> Self {
        Self {
            channel_stride: 4,
            skip_channel: Some(3),
            overflow: Overflow::default(),
            text_encoding: TextEncoding::default(),
        }
    }
}

/// Options for the appended trailer
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AppendCodecOptions {
    pub text_encoding: TextEncoding,
}
