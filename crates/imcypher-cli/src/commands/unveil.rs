use std::path::PathBuf;

use clap::Args;
use imcypher_core::Overflow;

use crate::cli::CodecArgs;
use crate::CliResult;

/// Unveils a text message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains a secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// The message will be stored in that file instead of printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let message = imcypher_core::commands::unveil(
            &self.media,
            self.output_file.as_deref(),
            self.codec.options(Overflow::default()),
        )?;

        if self.output_file.is_none() {
            println!("{message}");
        }

        Ok(())
    }
}
