use std::path::{Path, PathBuf};

use log::info;

use crate::media::{Carrier, CodecOptions, Persist};
use crate::{ImcypherError, Session};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    /// Use the given codec options, they also select the method
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), ImcypherError> {
        let Some(message) = self.message else {
            return Err(ImcypherError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(ImcypherError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(ImcypherError::TargetNotSet);
        };

        let session = Session::new(Carrier::from_file(&image)?, self.options);
        let mut secret = session.preview(&message)?;
        secret.save_as(&output)?;
        info!(
            "Hid {} characters via {:?} into {output:?}",
            message.chars().count(),
            session.method()
        );

        Ok(())
    }
}
