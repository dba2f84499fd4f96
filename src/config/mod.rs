//! JSON configuration for the `edge_detect` tool.

pub mod edge;

pub use edge::{load_config, parse_config, EdgeToolConfig, ModeConfig};
