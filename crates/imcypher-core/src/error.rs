use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImcypherError {
    /// Represents an invalid carrier image media. For example, a broken PNG file or a text file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a pixel buffer that does not fit the dimensions of the raster it belongs to
    #[error("Pixel buffer of {len} bytes does not match a raster with {stride} bytes per pixel")]
    InvalidPixelBuffer { len: usize, stride: usize },

    /// Represents an unveil of no secret data. For example when a media did not contain any secrets
    #[error("No secret data found")]
    NoSecretData,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error(
        "Capacity Error: The message needs {needed} bytes including its terminator, but the image can only carry {available} bytes"
    )]
    CapacityExceeded { needed: usize, available: usize },
}
