use gray_median::compare::compare_median_filters;
use gray_median::config::median_compare;
use gray_median::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use gray_median::timing::MonotonicClock;
use log::info;
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
    let config = median_compare::load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let gray = load_grayscale_image(&config.input).map_err(|e| e.to_string())?;
    info!(
        "loaded {} ({}x{}), kernel {}",
        config.input.display(),
        gray.width(),
        gray.height(),
        config.kernel_size
    );

    let clock = MonotonicClock::new();
    let cmp = compare_median_filters(&gray, config.kernel_size, &clock).map_err(|e| e.to_string())?;
    let summary = cmp.summary();

    println!(
        "Processing time (naive median) = {:.3} seconds",
        summary.naive_ms / 1000.0
    );
    println!(
        "Processing time (histogram median) = {:.3} seconds",
        summary.fast_ms / 1000.0
    );
    if let Some(speedup) = summary.speedup {
        println!("Speedup = {speedup:.1}x");
    }

    save_grayscale_u8(&cmp.naive, &config.output.naive_image).map_err(|e| e.to_string())?;
    save_grayscale_u8(&cmp.fast, &config.output.fast_image).map_err(|e| e.to_string())?;
    if let Some(report) = &config.output.report_json {
        write_json_file(report, &summary).map_err(|e| e.to_string())?;
        println!("Saved report to {}", report.display());
    }

    if summary.mismatched_pixels > 0 {
        return Err(format!(
            "median outputs differ on {} pixels",
            summary.mismatched_pixels
        ));
    }
    Ok(())
}

fn usage() -> String {
    "Usage: median_compare <config.json>".to_string()
}
