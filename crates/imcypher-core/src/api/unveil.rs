use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::media::{Carrier, CodecOptions};
use crate::{ImcypherError, Session};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they also select the method
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The unveiled message will also be written to this file
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and return the unveiled message
    pub fn execute(self) -> Result<String, ImcypherError> {
        let Some(secret_media) = self.secret_media else {
            return Err(ImcypherError::CarrierNotSet);
        };

        let session = Session::new(Carrier::from_file(&secret_media)?, self.options);
        let Some(message) = session.unveil() else {
            return Err(ImcypherError::NoSecretData);
        };

        if let Some(output_file) = self.output_file {
            let mut target_file =
                File::create(output_file).map_err(|source| ImcypherError::WriteError { source })?;

            target_file
                .write_all(message.as_bytes())
                .map_err(|source| ImcypherError::WriteError { source })?;
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use std::io::read_to_string;

    use tempfile::tempdir;

    use super::*;
    use crate::media::Method;
    use crate::test_utils::write_carrier_png;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let image = write_carrier_png(temp_dir.path(), 16, 16);
        let secret_image = temp_dir.path().join("secret.png");
        crate::api::hide::prepare()
            .with_message("Hello World")
            .with_image(&image)
            .with_output(&secret_image)
            .execute()
            .expect("Failed to hide message in image");

        let message = crate::api::unveil::prepare()
            .from_secret_file(&secret_image)
            .into_output_file(temp_dir.path().join("secret-message.txt"))
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(message, "Hello World");
        let secret_message = read_to_string(
            File::open(temp_dir.path().join("secret-message.txt")).expect("Failed to open file"),
        )
        .expect("Failed to read file");
        assert_eq!(secret_message, "Hello World");
    }

    #[test]
    fn should_report_no_secret_data() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let image = write_carrier_png(temp_dir.path(), 16, 16);

        for method in [Method::Lsb, Method::Append] {
            match prepare()
                .from_secret_file(&image)
                .with_options(method.into())
                .execute()
            {
                Err(ImcypherError::NoSecretData) => (),
                r => panic!("unexpected result {r:?} for {method:?}"),
            }
        }
    }
}
