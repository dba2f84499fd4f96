//! Borrowed 8-bit grayscale view over decoded sample bytes.
use super::f32::ImageF32;
use super::traits::ImageView;
use crate::error::EdgeError;

#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view; `data.len()` must equal `w * h`.
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Result<Self, EdgeError> {
        if data.len() != w * h {
            return Err(EdgeError::SizeMismatch {
                expected: w * h,
                actual: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Samples divided by the format's declared maximum sample value.
    pub fn to_unit(&self, max_value: u16) -> ImageF32 {
        ImageF32::from_u8(self, max_value)
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
