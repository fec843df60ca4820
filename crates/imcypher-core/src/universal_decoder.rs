use bitstream_io::{BigEndian, BitWrite, BitWriter};
use std::io::{Cursor, Read, Result};

use crate::media::UnveilBit;

/// generic carrier decoder, collects one bit per carrier item
/// and packs them most significant bit first into bytes
pub struct UniversalDecoder<I>
where
    I: Iterator,
    I::Item: UnveilBit,
{
    input: I,
}

impl<I> UniversalDecoder<I>
where
    I: Iterator,
    I::Item: UnveilBit,
{
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I> Read for UniversalDecoder<I>
where
    I: Iterator,
    I::Item: UnveilBit,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        // 1 bit per carrier item
        let items_to_take = buf.len() << 3;
        let mut bit_buffer = BitWriter::endian(Cursor::new(buf), BigEndian);

        let mut bits_read = 0;
        for carrier in self.input.by_ref().take(items_to_take) {
            bit_buffer.write_bit(carrier.unveil_bit())?;
            bits_read += 1;
        }

        // an incomplete last unit is not a byte, it is not reported as read
        Ok(bits_read >> 3)
    }
}
