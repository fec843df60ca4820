use std::path::Path;

use crate::{CodecOptions, ImcypherError};

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: &str,
    options: CodecOptions,
) -> Result<(), ImcypherError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .with_message(message)
        .execute()
}

pub fn unveil(
    secret_media: &Path,
    output_file: Option<&Path>,
    options: CodecOptions,
) -> Result<String, ImcypherError> {
    let api = crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media);

    match output_file {
        Some(output_file) => api.into_output_file(output_file).execute(),
        None => api.execute(),
    }
}

pub fn capacity(media: &Path) -> Result<usize, ImcypherError> {
    crate::api::capacity::prepare().with_image(media).execute()
}
