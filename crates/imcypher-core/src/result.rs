use crate::error::ImcypherError;

pub type Result<T> = std::result::Result<T, ImcypherError>;
