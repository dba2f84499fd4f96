use edge_detector::image::ImageF32;

/// Vertical step edge: columns `< step_x` are 0.0, the rest 1.0.
pub fn vertical_step(width: usize, height: usize, step_x: usize) -> ImageF32 {
    assert!(step_x <= width, "step must lie inside the image");
    ImageF32::from_fn(width, height, |x, _| if x < step_x { 0.0 } else { 1.0 })
}

/// Horizontal ramp: pixel (x, y) = x / (width - 1).
pub fn horizontal_ramp(width: usize, height: usize) -> ImageF32 {
    assert!(width > 1, "ramp needs at least two columns");
    let denom = (width - 1) as f32;
    ImageF32::from_fn(width, height, |x, _| x as f32 / denom)
}

/// Uniform image of value `c`.
pub fn flat(width: usize, height: usize, c: f32) -> ImageF32 {
    ImageF32::from_fn(width, height, |_, _| c)
}

/// Deterministic pseudo-random texture in [0, 1].
pub fn noise(width: usize, height: usize, seed: u32) -> ImageF32 {
    let mut state = seed.wrapping_mul(2_654_435_761).max(1);
    ImageF32::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state % 256) as f32 / 255.0
    })
}
