use enum_dispatch::enum_dispatch;

use super::file::AppendCodec;
use super::image::LsbCodec;
use super::{Carrier, CodecOptions, Method};
use crate::result::Result;

/// Common surface of both hiding methods, operating on a loaded [`Carrier`]
#[enum_dispatch]
pub trait Conceal {
    /// Unveils the message hidden with this method, `None` if there is none
    fn unveil(&self, carrier: &Carrier) -> Option<String>;

    /// Hides `text` in a new carrier, the given one stays untouched
    fn hide(&self, carrier: &Carrier, text: &str) -> Result<Carrier>;

    /// Message capacity in bytes, `None` for unlimited
    fn capacity(&self, carrier: &Carrier) -> Option<usize>;
}

/// The codec selected by the method flag
#[enum_dispatch(Conceal)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    LsbCodec,
    AppendCodec,
}

impl From<CodecOptions> for Codec {
    fn from(options: CodecOptions) -> Self {
        match options {
            CodecOptions::Lsb(o) => LsbCodec::new(o).into(),
            CodecOptions::Append(o) => AppendCodec::new(o).into(),
        }
    }
}

impl Default for Codec {
    fn default() -> Self {
        CodecOptions::default().into()
    }
}

impl Codec {
    pub fn method(&self) -> Method {
        match self {
            Codec::LsbCodec(_) => Method::Lsb,
            Codec::AppendCodec(_) => Method::Append,
        }
    }
}
