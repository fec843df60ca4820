use std::iter::Enumerate;
use std::slice::{Iter, IterMut};

use crate::media::{MediaPrimitive, MediaPrimitiveMut};

/// Walks the color channels of a raw pixel buffer in buffer order,
/// leaving out the channel at `skip` of every pixel (usually alpha).
pub(crate) struct ColorIter<'a> {
    colors: Enumerate<Iter<'a, u8>>,
    stride: usize,
    skip: Option<usize>,
}

impl<'a> ColorIter<'a> {
    pub fn new(pixels: &'a [u8], stride: usize, skip: Option<usize>) -> Self {
        Self {
            colors: pixels.iter().enumerate(),
            stride: stride.max(1),
            skip,
        }
    }
}

impl Iterator for ColorIter<'_> {
    type Item = MediaPrimitive;

    fn next(&mut self) -> Option<Self::Item> {
        let (stride, skip) = (self.stride, self.skip);
        self.colors
            .find(|(i, _)| Some(i % stride) != skip)
            .map(|(_, c)| MediaPrimitive::ImageColorChannel(*c))
    }
}

pub(crate) struct ColorIterMut<'a> {
    colors: Enumerate<IterMut<'a, u8>>,
    stride: usize,
    skip: Option<usize>,
}

impl<'a> ColorIterMut<'a> {
    pub fn new(pixels: &'a mut [u8], stride: usize, skip: Option<usize>) -> Self {
        Self {
            colors: pixels.iter_mut().enumerate(),
            stride: stride.max(1),
            skip,
        }
    }
}

impl<'a> Iterator for ColorIterMut<'a> {
    type Item = MediaPrimitiveMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (stride, skip) = (self.stride, self.skip);
        self.colors
            .find(|(i, _)| Some(i % stride) != skip)
            .map(|(_, c)| MediaPrimitiveMut::ImageColorChannel(c))
    }
}

/// Number of carrier bytes, hence bits, a pixel buffer of `len` bytes offers
pub(crate) fn carrier_count(len: usize, stride: usize, skip: Option<usize>) -> usize {
    let stride = stride.max(1);
    match skip {
        Some(skip) if skip < stride => {
            let full_pixels = len / stride;
            let rest = len % stride;
            full_pixels * (stride - 1) + if skip < rest { rest - 1 } else { rest }
        }
        _ => len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn should_skip_every_alpha_channel() {
        let img = prepare_5x5_image();
        let colors: Vec<u8> = ColorIter::new(img.as_raw(), 4, Some(3))
            .map(|MediaPrimitive::ImageColorChannel(c)| c)
            .collect();

        assert_eq!(colors.len(), 5 * 5 * 3);
        assert_eq!(colors[..6], [0, 1, 2, 4, 5, 6]);
        for (i, pixel) in img.pixels().enumerate() {
            assert_eq!(colors[i * 3..i * 3 + 3], pixel.0[..3], "pixel {i} mismatched");
        }
    }

    #[test]
    fn should_visit_all_channels_when_nothing_is_skipped() {
        let img = prepare_5x5_image();
        let count = ColorIter::new(img.as_raw(), 4, None).count();

        assert_eq!(count, img.as_raw().len());
    }

    #[test]
    fn should_yield_the_same_channels_mutable_and_readonly() {
        let img = prepare_5x5_image();
        let mut raw = img.as_raw().clone();

        let readonly: Vec<MediaPrimitive> = ColorIter::new(img.as_raw(), 4, Some(3)).collect();
        let mutable: Vec<u8> = ColorIterMut::new(&mut raw, 4, Some(3))
            .map(|MediaPrimitiveMut::ImageColorChannel(c)| *c)
            .collect();

        assert_eq!(readonly.len(), mutable.len());
        for (r, m) in readonly.into_iter().zip(mutable) {
            assert_eq!(r, MediaPrimitive::from(m));
        }
    }

    #[test]
    fn should_be_possible_to_mutate_colors() {
        let mut raw = vec![10u8, 20, 30, 40, 50, 60, 70, 80];
        for MediaPrimitiveMut::ImageColorChannel(c) in ColorIterMut::new(&mut raw, 4, Some(3)) {
            *c += 1;
        }

        assert_eq!(raw, vec![11, 21, 31, 40, 51, 61, 71, 80]);
    }

    #[test]
    fn should_count_carriers_of_partial_pixels() {
        assert_eq!(carrier_count(16, 4, Some(3)), 12);
        assert_eq!(carrier_count(6, 4, Some(3)), 5);
        assert_eq!(carrier_count(7, 4, Some(3)), 6);
        assert_eq!(carrier_count(16, 4, None), 16);
        assert_eq!(carrier_count(16, 4, Some(7)), 16);
        assert_eq!(carrier_count(0, 4, Some(3)), 0);
    }
}
