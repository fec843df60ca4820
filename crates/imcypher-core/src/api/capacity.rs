use std::path::{Path, PathBuf};

use crate::media::image::LsbCodec;
use crate::media::Carrier;
use crate::ImcypherError;

pub fn prepare() -> CapacityApi {
    CapacityApi::default()
}

/// Determines how many characters fit into an image with the LSB method
#[derive(Default, Debug)]
pub struct CapacityApi {
    image: Option<PathBuf>,
}

impl CapacityApi {
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Returns the capacity in bytes, the terminator included
    pub fn execute(self) -> Result<usize, ImcypherError> {
        let Some(image) = self.image else {
            return Err(ImcypherError::CarrierNotSet);
        };
        let (width, height) = Carrier::from_file(&image)?.dimensions();

        Ok(LsbCodec::capacity(width, height))
    }
}
