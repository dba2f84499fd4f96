//! Run diagnostics: per-stage timings and the JSON run report.

pub mod report;
pub mod timing;

pub use report::{EdgeReport, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
