use clap::{Args, Parser, Subcommand, ValueEnum};
use imcypher_core::{CodecOptions, LsbCodecOptions, Method, Overflow, TextEncoding};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MethodArg {
    /// In the least significant bits of the pixels, output is always PNG
    #[default]
    Lsb,
    /// Appended to the file bytes, output keeps the format of the input
    Append,
}

impl From<MethodArg> for Method {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Lsb => Method::Lsb,
            MethodArg::Append => Method::Append,
        }
    }
}

/// Options shared by hide and unveil
#[derive(Args, Debug)]
pub struct CodecArgs {
    /// Where the message is hidden
    #[arg(long, value_enum, default_value_t = MethodArg::Lsb)]
    pub method: MethodArg,

    /// One byte per character, compatible with messages of the browser version
    #[arg(long)]
    pub latin1: bool,
}

impl CodecArgs {
    pub fn options(&self, overflow: Overflow) -> CodecOptions {
        let text_encoding = if self.latin1 {
            TextEncoding::Latin1
        } else {
            TextEncoding::Utf8
        };

        match Method::from(self.method) {
            Method::Lsb => CodecOptions::Lsb(LsbCodecOptions {
                overflow,
                ..LsbCodecOptions::default()
            }),
            Method::Append => CodecOptions::from(Method::Append),
        }
        .with_text_encoding(text_encoding)
    }
}
