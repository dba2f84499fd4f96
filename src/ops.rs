//! Pointwise grid operations: linear rescaling and binary thresholding.
//!
//! Both allocate a fresh output and leave their input untouched.
use crate::image::{ImageF32, ImageView, ImageViewMut};
use crate::threshold::Threshold;

/// Multiply every pixel by `factor`. No clamping; a non-finite factor
/// propagates into the output.
pub fn scale(image: &ImageF32, factor: f32) -> ImageF32 {
    map_pixels(image, |v| v * factor)
}

/// Binarize: `max` where `pixel >= t * max`, otherwise `0`.
pub fn threshold(image: &ImageF32, t: Threshold, max: f32) -> ImageF32 {
    let cut = t.value() * max;
    map_pixels(image, |v| if v >= cut { max } else { 0.0 })
}

fn map_pixels(image: &ImageF32, f: impl Fn(f32) -> f32) -> ImageF32 {
    let mut out = ImageF32::new(image.w, image.h);
    for y in 0..image.h {
        let src = image.row(y);
        let dst = out.row_mut(y);
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = f(s);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ImageF32 {
        ImageF32::from_vec(3, 2, vec![0.0, 0.25, 0.5, 0.75, 1.0, 0.125]).unwrap()
    }

    #[test]
    fn scale_composes_multiplicatively() {
        let img = sample();
        let twice = scale(&scale(&img, 2.0), 0.5);
        let once = scale(&img, 1.0);
        assert_eq!(twice, once);
        assert_eq!(scale(&img, 4.0).get(1, 0), 1.0);
    }

    #[test]
    fn scale_does_not_clamp_or_mask_nan() {
        let img = sample();
        assert_eq!(scale(&img, 3.0).get(1, 1), 3.0);
        let inf = scale(&img, f32::INFINITY);
        assert!(inf.get(0, 0).is_nan());
        assert!(inf.get(1, 1).is_infinite());
    }

    #[test]
    fn threshold_binarizes_against_fraction_of_max() {
        let img = sample();
        let t = Threshold::new(0.5).unwrap();
        let out = threshold(&img, t, 1.0);
        assert_eq!(out.data, vec![0.0, 0.0, 1.0, 1.0, 1.0, 0.0]);
        let out = threshold(&img, t, 2.0);
        assert_eq!(out.data, vec![0.0, 0.0, 0.0, 0.0, 2.0, 0.0]);
    }

    #[test]
    fn threshold_is_idempotent() {
        let img = sample();
        for t in [0.0, 0.3, 0.5, 1.0] {
            let t = Threshold::new(t).unwrap();
            let once = threshold(&img, t, 1.0);
            let twice = threshold(&once, t, 1.0);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn zero_threshold_turns_everything_on() {
        let out = threshold(&sample(), Threshold::new(0.0).unwrap(), 1.0);
        assert!(out.data.iter().all(|&v| v == 1.0));
    }
}
