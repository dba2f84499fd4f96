use std::fmt;

/// Failures raised by the edge-detection core.
///
/// Configuration problems (`InvalidKernel`, `KernelSize`, `ThresholdOutOfRange`,
/// `UnknownThreshold`) are reported before any stage runs. `NoGradient` marks
/// an input whose interior magnitude is zero everywhere, so it cannot be
/// normalized.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeError {
    /// Two grids that must share dimensions do not; sizes are `(w, h)`.
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// Backing buffer length does not equal `w * h`.
    SizeMismatch { expected: usize, actual: usize },
    /// Magnitude combination was asked to combine zero components.
    NoComponents,
    /// Kernel is not square or its side length is even.
    InvalidKernel { rows: usize, cols: usize },
    /// Kernel weight count does not match `side * side`.
    KernelSize { expected: usize, actual: usize },
    ThresholdOutOfRange(f32),
    UnknownThreshold(String),
    /// Maximum interior gradient magnitude is zero: a flat image, or one too
    /// small to have an interior.
    NoGradient,
}

impl fmt::Display for EdgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} samples, got {actual}")
            }
            Self::NoComponents => write!(f, "no gradient components to combine"),
            Self::InvalidKernel { rows, cols } => {
                write!(f, "kernel must be square with odd side, got {rows}x{cols}")
            }
            Self::KernelSize { expected, actual } => {
                write!(f, "kernel expects {expected} weights, got {actual}")
            }
            Self::ThresholdOutOfRange(value) => {
                write!(f, "threshold {value} is not within [0, 1]")
            }
            Self::UnknownThreshold(raw) => write!(
                f,
                "could not parse threshold {raw:?} as a preset name or a float"
            ),
            Self::NoGradient => write!(f, "no gradient in the image interior to normalize"),
        }
    }
}

impl std::error::Error for EdgeError {}
