//! 256-bucket intensity histogram over byte-range samples.
//!
//! Input samples are expected in `[0, 255]` (a unit-interval image already
//! rescaled by 255) and are truncated to a bucket index. Values outside that
//! range saturate into the first or last bucket; NaN lands in bucket 0.
use crate::image::{ImageF32, ImageView};

pub const BUCKETS: usize = 256;

#[derive(Clone, Debug)]
pub struct IntensityHistogram {
    counts: [u32; BUCKETS],
}

impl Default for IntensityHistogram {
    fn default() -> Self {
        Self {
            counts: [0; BUCKETS],
        }
    }
}

impl IntensityHistogram {
    /// Count every sample of a byte-range `image`.
    pub fn from_image(image: &ImageF32) -> Self {
        let mut hist = Self::default();
        for row in image.rows() {
            for &v in row {
                hist.add(quantize(v));
            }
        }
        hist
    }

    #[inline]
    pub fn add(&mut self, bucket: u8) {
        self.counts[bucket as usize] += 1;
    }

    pub fn counts(&self) -> &[u32; BUCKETS] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Bucket with the highest count. Ties go to the lowest index: a later
    /// bucket only replaces the current best when strictly greater.
    pub fn mode(&self) -> u8 {
        let mut best = 0usize;
        for (bucket, &count) in self.counts.iter().enumerate() {
            if count > self.counts[best] {
                best = bucket;
            }
        }
        best as u8
    }
}

#[inline]
fn quantize(v: f32) -> u8 {
    v as u8
}
