use log::warn;

/// Decides how the characters of a text message are turned into payload bytes and back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// Every character is written as its UTF-8 byte sequence.
    /// Unveiled bytes that are not valid UTF-8 are replaced by `U+FFFD`.
    #[default]
    Utf8,

    /// One byte per character, the low 8 bits of each code point.
    Latin1,
}

impl TextEncoding {
    /// Turns a text message into the bytes that get hidden
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Latin1 => {
                let bytes: Vec<u8> = text.chars().map(|c| c as u32 as u8).collect();
                if text.chars().any(|c| c as u32 > 0xff) {
                    warn!("Message contains characters beyond U+00FF, they are narrowed to 8 bits");
                }
                bytes
            }
        }
    }

    /// Turns unveiled bytes back into a text message
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::Latin1 => bytes.iter().map(|b| char::from(*b)).collect(),
        }
    }

    /// Number of payload bytes the given text occupies
    pub fn encoded_len(&self, text: &str) -> usize {
        match self {
            TextEncoding::Utf8 => text.len(),
            TextEncoding::Latin1 => text.chars().count(),
        }
    }
}
