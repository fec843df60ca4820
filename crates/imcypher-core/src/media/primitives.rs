/// wrap the low level data types that carries information
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitive {
    ImageColorChannel(u8),
}

impl From<u8> for MediaPrimitive {
    fn from(value: u8) -> Self {
        MediaPrimitive::ImageColorChannel(value)
    }
}

/// mutable primitive for storing hidden data
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitiveMut<'a> {
    ImageColorChannel(&'a mut u8),
}

/// reads the one bit of information a primitive carries
pub trait UnveilBit {
    fn unveil_bit(&self) -> bool;
}

impl UnveilBit for MediaPrimitive {
    #[inline(always)]
    fn unveil_bit(&self) -> bool {
        match self {
            MediaPrimitive::ImageColorChannel(c) => (c & 0x1) > 0,
        }
    }
}

/// overwrites the one bit of information a primitive carries
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for MediaPrimitiveMut<'_> {
    #[inline(always)]
    fn hide_bit(self, bit: bool) {
        match self {
            MediaPrimitiveMut::ImageColorChannel(c) => {
                *c = (*c & (u8::MAX - 1)) | u8::from(bit);
            }
        }
    }
}
