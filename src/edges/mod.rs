//! Edge processing building blocks: convolution and magnitude.
//!
//! - `conv`: generic masked convolution with an odd square kernel. Pixels
//!   closer than the kernel radius to any edge are not visited and stay zero.
//! - `magnitude`: pixel-wise Euclidean norm of N same-shape components with
//!   a running maximum.

pub mod conv;
pub mod magnitude;

pub use conv::convolve;
pub use magnitude::{combine_magnitude, Magnitude};
