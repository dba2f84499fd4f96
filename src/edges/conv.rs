//! Masked 2D convolution with border exclusion.
//!
//! For kernel radius `r`, only centres with `r <= x < w - r` and
//! `r <= y < h - r` are visited; every other output pixel keeps the zero of
//! the freshly allocated buffer. There is no padding, clamping or reflection,
//! and a kernel wider than the image yields an all-zero output.
//!
//! With the `parallel` feature rows are filled concurrently; each output row
//! reads only input rows, so the result is identical to the sequential path.
use crate::image::{ImageF32, ImageView};
use crate::kernel::Kernel;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Convolve `image` with `kernel`, producing a same-shape float grid.
pub fn convolve<I>(image: &I, kernel: &Kernel) -> ImageF32
where
    I: ImageView + Sync,
    I::Pixel: Into<f32>,
{
    let w = image.width();
    let h = image.height();
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    let taps = kernel.taps_f32();
    let side = kernel.side();
    let r = kernel.radius();

    #[cfg(feature = "parallel")]
    {
        out.data
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, row)| convolve_row(image, &taps, side, r, y, row));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in out.data.chunks_mut(w).enumerate() {
            convolve_row(image, &taps, side, r, y, row);
        }
    }

    out
}

fn convolve_row<I>(image: &I, taps: &[f32], side: usize, r: usize, y: usize, out_row: &mut [f32])
where
    I: ImageView,
    I::Pixel: Into<f32>,
{
    let w = image.width();
    let h = image.height();
    if y < r || y + r >= h {
        return;
    }

    for x in r..w.saturating_sub(r) {
        let mut acc = 0.0f32;
        for (ky, k_row) in taps.chunks_exact(side).enumerate() {
            let src = &image.row(y - r + ky)[x - r..x - r + side];
            for (&px, &k) in src.iter().zip(k_row) {
                let v: f32 = px.into();
                acc += v * k;
            }
        }
        out_row[x] = acc;
    }
}
