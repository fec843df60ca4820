use bitstream_io::{BigEndian, BitRead, BitReader};
use std::io::{Cursor, Result, Write};

use crate::media::HideBit;

/// generic carrier encoder, spreads every written byte
/// most significant bit first over 8 carrier items
pub struct UniversalEncoder<I>
where
    I: Iterator,
    I::Item: HideBit,
{
    carrier: I,
}

impl<I> UniversalEncoder<I>
where
    I: Iterator,
    I::Item: HideBit,
{
    pub fn new(carrier: I) -> Self {
        Self { carrier }
    }
}

impl<I> Write for UniversalEncoder<I>
where
    I: Iterator,
    I::Item: HideBit,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let items_to_take = buf.len() << 3; // 1 bit per item <=> * 8 <=> << 3
        let mut bit_iter = BitReader::endian(Cursor::new(buf), BigEndian);
        let mut bits_written = 0;
        for item in self.carrier.by_ref().take(items_to_take) {
            item.hide_bit(bit_iter.read_bit()?);
            bits_written += 1;
        }

        // a byte that got only some of its bits hidden does not count as written,
        // `write_all` will then run into `ErrorKind::WriteZero`
        Ok(bits_written >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
