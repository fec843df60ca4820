use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Shows how many characters fit into an image with the LSB method
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Image file to measure
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image file",
        required = true
    )]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let capacity = imcypher_core::commands::capacity(&self.media)?;
        // one byte goes to the terminator
        println!(
            "Max capacity: {} characters.",
            capacity.saturating_sub(1)
        );

        Ok(())
    }
}
