//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! This is the grid every stage consumes and produces. Samples are nominally
//! in the unit interval; conversion to and from bytes happens only at the I/O
//! boundary (`from_u8` / `to_u8`).
use super::traits::{ImageView, ImageViewMut};
use super::u8::ImageU8;
use crate::error::EdgeError;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels (columns)
    pub w: usize,
    /// Image height in pixels (rows)
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Wrap an existing row-major buffer, checking its length.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Result<Self, EdgeError> {
        let expected = w * h;
        if data.len() != expected {
            return Err(EdgeError::SizeMismatch {
                expected,
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

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut out = Self::new(w, h);
        for y in 0..h {
            let row = out.row_mut(y);
            for (x, dst) in row.iter_mut().enumerate() {
                *dst = f(x, y);
            }
        }
        out
    }

    /// Map 8-bit samples into the unit interval by dividing by `max_value`,
    /// the maximum sample value declared by the source format.
    pub fn from_u8(gray: &ImageU8<'_>, max_value: u16) -> Self {
        let max = max_value as f32;
        let mut out = Self::new(gray.w, gray.h);
        for y in 0..gray.h {
            let src = gray.row(y);
            let dst = out.row_mut(y);
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = s as f32 / max;
            }
        }
        out
    }

    /// Map unit-interval samples to bytes (×255, truncated, saturating).
    pub fn to_u8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.w * self.h);
        for y in 0..self.h {
            out.extend(self.row(y).iter().map(|&v| (v * 255.0) as u8));
        }
        out
    }

    #[inline]
    /// `(w, h)` pair used for shape-compatibility checks.
    pub fn shape(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    /// Fail with `ShapeMismatch` unless `other` has identical dimensions.
    pub fn ensure_same_shape(&self, other: &ImageF32) -> Result<(), EdgeError> {
        if self.shape() != other.shape() {
            return Err(EdgeError::ShapeMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        Ok(())
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = ImageF32::from_vec(3, 2, vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            EdgeError::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn byte_conversion_maps_through_unit_interval() {
        let bytes = [0u8, 128, 255, 64];
        let view = ImageU8::new(2, 2, &bytes).unwrap();
        let img = ImageF32::from_u8(&view, 255);
        assert!((img.get(1, 0) - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(img.get(0, 1), 1.0);
        let back = img.to_u8();
        assert_eq!(back[0], 0);
        assert_eq!(back[2], 255);
    }

    #[test]
    fn to_u8_saturates_out_of_range_samples() {
        let img = ImageF32::from_vec(3, 1, vec![-0.5, 0.999, 2.0]).unwrap();
        assert_eq!(img.to_u8(), vec![0, 254, 255]);
    }

    #[test]
    fn rectangular_shape_is_preserved() {
        let img = ImageF32::from_fn(4, 2, |x, y| (x + 10 * y) as f32);
        assert_eq!(img.shape(), (4, 2));
        assert_eq!(img.row(1), &[10.0, 11.0, 12.0, 13.0]);
        let other = ImageF32::new(2, 4);
        assert!(img.ensure_same_shape(&other).is_err());
    }
}
