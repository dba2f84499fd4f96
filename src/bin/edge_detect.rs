use edge_detector::config::load_config;
use edge_detector::tool::run_edge_tool;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let report = run_edge_tool(&config)?;

    if let (Some(max), Some(path)) = (report.max_magnitude, &config.output.image) {
        println!(
            "Saved {}x{} edge image to {} (max magnitude {max:.4})",
            report.input.width,
            report.input.height,
            path.display()
        );
    }
    if let (Some(pair), Some(bucket)) = (report.thresholds, report.modal_bucket) {
        println!(
            "Adaptive thresholds: high={:.4} low={:.4} (modal bucket {bucket}, sigma {})",
            pair.high,
            pair.low,
            report.sigma.unwrap_or_default()
        );
    }
    if let Some(path) = &config.output.report_json {
        println!("Saved report to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: edge_detect <config.json>".to_string()
}
