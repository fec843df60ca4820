pub mod codec;
pub mod codec_options;
pub mod file;
pub mod image;
mod primitives;
mod types;

use std::path::Path;

pub use codec::{Codec, Conceal};
pub use codec_options::{AppendCodecOptions, CodecOptions, LsbCodecOptions, Method, Overflow};
pub use primitives::*;
pub use types::*;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
