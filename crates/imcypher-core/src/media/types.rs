use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::Path;

pub use image::RgbaImage;
use log::error;

use crate::error::ImcypherError;
use crate::result::Result;

use super::Persist;

/// A loaded image in both representations the codecs work on:
/// the exact file bytes and the decoded RGBA raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    bytes: Vec<u8>,
    image: RgbaImage,
}

impl Carrier {
    pub fn from_file(f: &Path) -> Result<Self> {
        let bytes = fs::read(f).map_err(|e| {
            error!("Error reading file {f:?}: {e}");
            ImcypherError::ReadError { source: e }
        })?;

        Self::from_bytes(bytes)
    }

    /// Takes the raw bytes of an image file, they are kept as they are
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let image = image::load_from_memory(&bytes)
            .map_err(|e| {
                error!("Error decoding image: {e}");
                ImcypherError::InvalidImageMedia
            })?
            .to_rgba8();

        Ok(Self { bytes, image })
    }

    /// Takes a raster, the file bytes become its PNG serialization
    pub fn from_image(image: RgbaImage) -> Result<Self> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                ImcypherError::ImageEncodingError
            })?;

        Ok(Self { bytes, image })
    }

    /// the raw file bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// the decoded raster as `[R, G, B, A]` bytes per pixel
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// A new carrier with the same dimensions but different pixels
    pub(crate) fn with_pixels(&self, pixels: Vec<u8>) -> Result<Self> {
        let (width, height) = self.image.dimensions();
        let len = pixels.len();
        let image = RgbaImage::from_raw(width, height, pixels)
            .ok_or(ImcypherError::InvalidPixelBuffer { len, stride: 4 })?;

        Self::from_image(image)
    }

    /// A new carrier with different file bytes but the same raster
    pub(crate) fn with_bytes(&self, bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            image: self.image.clone(),
        }
    }
}

impl Persist for Carrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let mut f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            ImcypherError::WriteError { source: e }
        })?;

        f.write_all(&self.bytes)
            .map_err(|source| ImcypherError::WriteError { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{prepare_carrier, prepare_image};
    use tempfile::TempDir;

    #[test]
    fn should_keep_the_original_bytes() {
        let png = prepare_carrier(3, 2).into_bytes();
        let mut bytes = png.clone();
        bytes.extend_from_slice(b"anything after the image data");

        let carrier = Carrier::from_bytes(bytes.clone()).expect("Cannot load carrier");

        assert_eq!(carrier.bytes(), &bytes[..]);
        assert_eq!(carrier.dimensions(), (3, 2));
        assert_eq!(carrier.pixels().len(), 3 * 2 * 4);
    }

    #[test]
    fn should_decode_the_raster_of_a_png() {
        let img = prepare_image(4, 3);
        let carrier = Carrier::from_image(img.clone()).expect("Cannot create carrier");

        let reloaded = Carrier::from_bytes(carrier.bytes().to_vec()).expect("Cannot reload");
        assert_eq!(reloaded.image(), &img);
    }

    #[test]
    fn should_fail_for_non_images() {
        match Carrier::from_bytes(b"[package]\nname = \"foo\"".to_vec()) {
            Err(ImcypherError::InvalidImageMedia) => (),
            r => panic!("unexpected result {r:?}"),
        }
    }

    #[test]
    fn should_fail_for_missing_files() {
        match Carrier::from_file(Path::new("some_random_file.png")) {
            Err(ImcypherError::ReadError { .. }) => (),
            r => panic!("unexpected result {r:?}"),
        }
    }

    #[test]
    fn should_reject_pixels_of_the_wrong_size() {
        let carrier = prepare_carrier(2, 2);
        match carrier.with_pixels(vec![0; 15]) {
            Err(ImcypherError::InvalidPixelBuffer { len: 15, stride: 4 }) => (),
            r => panic!("unexpected result {r:?}"),
        }
    }

    #[test]
    fn should_save_the_bytes_as_they_are() {
        let out_dir = TempDir::new().unwrap();
        let target = out_dir.path().join("saved.png");
        let mut carrier = prepare_carrier(2, 2).with_bytes(b"raw bytes".to_vec());

        carrier.save_as(&target).expect("Cannot save carrier");

        assert_eq!(fs::read(&target).unwrap(), b"raw bytes");
    }
}
