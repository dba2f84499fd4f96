//! Euclidean combination of gradient components.
//!
//! Only interior pixels (`radius <= x < w - radius`, same for `y`) are
//! computed, matching the convolution footprint, so border pixels stay zero.
//! The maximum magnitude is tracked in the same pass.
use crate::error::EdgeError;
use crate::image::{ImageF32, ImageViewMut};

/// Combined magnitude field and the largest value observed in it.
#[derive(Clone, Debug)]
pub struct Magnitude {
    pub mag: ImageF32,
    pub max: f32,
}

/// Combine same-shape components pixel-wise as `sqrt(sum(c^2))`.
pub fn combine_magnitude(components: &[&ImageF32], radius: usize) -> Result<Magnitude, EdgeError> {
    let (first, rest) = components.split_first().ok_or(EdgeError::NoComponents)?;
    for other in rest {
        first.ensure_same_shape(other)?;
    }

    let (w, h) = first.shape();
    let mut mag = ImageF32::new(w, h);
    let mut max = 0.0f32;
    let x_end = w.saturating_sub(radius);

    for y in radius..h.saturating_sub(radius) {
        let out = mag.row_mut(y);
        for (x, dst) in out.iter_mut().enumerate().take(x_end).skip(radius) {
            let sum_sq: f32 = components
                .iter()
                .map(|c| {
                    let v = c.get(x, y);
                    v * v
                })
                .sum();
            let m = sum_sq.sqrt();
            *dst = m;
            if m > max {
                max = m;
            }
        }
    }

    Ok(Magnitude { mag, max })
}
