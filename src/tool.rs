//! The `edge_detect` tool as a library call: config in, files and report out.
//!
//! Sobel mode writes the edge image to `output.image` (required). Canny mode
//! only estimates thresholds; a configured `output.image` is ignored with a
//! warning. In both modes the report goes to `output.report_json` when set.
use crate::config::EdgeToolConfig;
use crate::detector::{CannyDetector, DetectorMode, SobelDetector};
use crate::diagnostics::{EdgeReport, InputDescriptor};
use crate::image::io::{load_unit_image, save_pgm_f32, write_json_file};
use log::{info, warn};

pub fn run_edge_tool(config: &EdgeToolConfig) -> Result<EdgeReport, String> {
    let mode = config
        .mode
        .resolve()
        .map_err(|e| format!("Invalid mode: {e}"))?;
    let out_image = match mode {
        DetectorMode::Sobel(_) => Some(
            config
                .output
                .image
                .as_deref()
                .ok_or("Sobel mode requires output.image")?,
        ),
        DetectorMode::Canny(_) => {
            if let Some(path) = &config.output.image {
                warn!(
                    "canny mode produces no edge image; ignoring output.image {}",
                    path.display()
                );
            }
            None
        }
    };

    let image = load_unit_image(&config.input)?;
    info!(
        "{} mode on {} ({}x{})",
        mode.name(),
        config.input.display(),
        image.w,
        image.h
    );
    let input = InputDescriptor {
        width: image.w,
        height: image.h,
    };

    let report = match (mode, out_image) {
        (DetectorMode::Sobel(options), Some(path)) => {
            let output = SobelDetector::new(options)
                .detect(&image)
                .map_err(|e| format!("Sobel detection failed on {}: {e}", config.input.display()))?;
            save_pgm_f32(&output.edges, path)?;
            info!("edge image written to {}", path.display());
            EdgeReport::sobel(input, &output)
        }
        (DetectorMode::Canny(options), _) => {
            EdgeReport::canny(input, &CannyDetector::new(options).estimate(&image))
        }
        (DetectorMode::Sobel(_), None) => return Err("Sobel mode requires output.image".into()),
    };

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        info!("report written to {}", path.display());
    }
    Ok(report)
}
