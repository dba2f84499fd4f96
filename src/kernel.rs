//! Square convolution kernels with odd side length.
//!
//! Weights are small integers stored in a `nalgebra::DMatrix`, indexed as
//! `(row, col)`. The radius is always derived from the side, never stored.
use crate::error::EdgeError;
use nalgebra::DMatrix;

/// Horizontal derivative mask, row-major.
pub const SOBEL_X: [i32; 9] = [-1, 0, 1, -2, 0, 2, -1, 0, 1];
/// Vertical derivative mask, row-major.
pub const SOBEL_Y: [i32; 9] = [1, 2, 1, 0, 0, 0, -1, -2, -1];

#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: DMatrix<i32>,
}

impl Kernel {
    /// Wrap a weight matrix, rejecting non-square or even-sided shapes.
    pub fn from_matrix(weights: DMatrix<i32>) -> Result<Self, EdgeError> {
        let (rows, cols) = weights.shape();
        if rows != cols || rows % 2 == 0 {
            return Err(EdgeError::InvalidKernel { rows, cols });
        }
        Ok(Self { weights })
    }

    /// Build a `side × side` kernel from row-major weights.
    pub fn from_row_slice(side: usize, weights: &[i32]) -> Result<Self, EdgeError> {
        let expected = side * side;
        if weights.len() != expected {
            return Err(EdgeError::KernelSize {
                expected,
                actual: weights.len(),
            });
        }
        Self::from_matrix(DMatrix::from_row_slice(side, side, weights))
    }

    pub fn sobel_x() -> Self {
        Self {
            weights: DMatrix::from_row_slice(3, 3, &SOBEL_X),
        }
    }

    pub fn sobel_y() -> Self {
        Self {
            weights: DMatrix::from_row_slice(3, 3, &SOBEL_Y),
        }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.weights.nrows()
    }

    /// `(side - 1) / 2`: how many pixels the kernel reaches past its centre.
    #[inline]
    pub fn radius(&self) -> usize {
        (self.side() - 1) / 2
    }

    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> i32 {
        self.weights[(row, col)]
    }

    /// Weights as f32 in row-major order, ready for the convolution loop.
    pub fn taps_f32(&self) -> Vec<f32> {
        let side = self.side();
        let w = &self.weights;
        (0..side)
            .flat_map(move |r| (0..side).map(move |c| w[(r, c)] as f32))
            .collect()
    }
}
