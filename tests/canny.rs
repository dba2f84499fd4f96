mod common;

use common::synthetic_image::{flat, vertical_step};
use edge_detector::histogram::IntensityHistogram;
use edge_detector::image::ImageF32;
use edge_detector::{estimate_thresholds, CannyDetector, CannyOptions, ThresholdPair};

#[test]
fn equal_modal_counts_pick_the_lower_intensity() {
    let _ = env_logger::builder().is_test(true).try_init();
    // 50 pixels in bucket 10, 50 in bucket 200, 20 in bucket 90
    let image = ImageF32::from_fn(12, 10, |x, y| {
        let i = y * 12 + x;
        if i < 50 {
            200.5 / 255.0
        } else if i < 100 {
            10.5 / 255.0
        } else {
            90.5 / 255.0
        }
    });
    let est = CannyDetector::new(CannyOptions { sigma: 1 }).estimate(&image);
    assert_eq!(est.modal_bucket, 10);
    assert_eq!(est.thresholds.high, 10.0 / 255.0);
    assert!(est.thresholds.high >= est.thresholds.low);
}

#[test]
fn histogram_tie_break_on_raw_counts() {
    let mut hist = IntensityHistogram::default();
    for _ in 0..50 {
        hist.add(10);
        hist.add(200);
    }
    for b in [0u8, 42, 255] {
        for _ in 0..49 {
            hist.add(b);
        }
    }
    assert_eq!(hist.mode(), 10);
}

#[test]
fn zero_image_yields_zero_pair() {
    assert_eq!(
        estimate_thresholds(&flat(9, 9, 0.0)),
        ThresholdPair { high: 0.0, low: 0.0 }
    );
}

#[test]
fn white_pixels_land_in_top_bucket() {
    // majority white: samples of exactly 1.0 map to bucket 255
    let image = vertical_step(10, 4, 2);
    let est = CannyDetector::default().estimate(&image);
    assert_eq!(est.modal_bucket, 255);
    assert_eq!(est.thresholds.high, 1.0);
    assert_eq!(est.thresholds.low, 0.35);
}

#[test]
fn sigma_is_echoed_but_does_not_change_estimate() {
    let image = vertical_step(10, 4, 7);
    let a = CannyDetector::new(CannyOptions { sigma: 0 }).estimate(&image);
    let b = CannyDetector::new(CannyOptions { sigma: 5 }).estimate(&image);
    assert_eq!(a.thresholds, b.thresholds);
    assert_eq!(b.sigma, 5);
    assert!(a.timings.stage("histogram").is_some());
}
