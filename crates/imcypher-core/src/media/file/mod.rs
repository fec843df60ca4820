pub mod append_codec;
mod trailer;

pub use append_codec::AppendCodec;
pub use trailer::*;
