use std::path::PathBuf;

use clap::Args;
use imcypher_core::{CodecOptions, Method, Overflow};
use log::warn;

use crate::cli::CodecArgs;
use crate::CliResult;

/// Hides a text message in an image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Image file such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    /// Cut the message silently when it does not fit into the image, instead of failing
    #[arg(long)]
    pub truncate: bool,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl HideArgs {
    pub fn options(&self) -> CodecOptions {
        let overflow = if self.truncate {
            Overflow::Truncate
        } else {
            Overflow::Reject
        };

        self.codec.options(overflow)
    }

    pub fn run(self) -> CliResult<()> {
        let options = self.options();
        if options.method() == Method::Lsb && !is_png(&self.write_to_file) {
            warn!(
                "{:?} will contain PNG data, lossy formats would destroy the message",
                self.write_to_file
            );
        }

        imcypher_core::commands::hide(&self.media, &self.write_to_file, &self.message, options)
    }
}

fn is_png(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}
