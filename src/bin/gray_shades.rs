use gray_median::config::gray_shades;
use gray_median::image::io::save_grayscale_u8;
use gray_median::synth::{vertical_gradient_indexed, vertical_gradient_rows};
use gray_median::timing::{time_stage, MonotonicClock};
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
    let config = match env::args().nth(1) {
        Some(path) => gray_shades::load_config(Path::new(&path)).map_err(|e| e.to_string())?,
        None => gray_shades::GrayShadesConfig::default(),
    };
    let clock = MonotonicClock::new();

    let (indexed, indexed_ms) =
        time_stage(&clock, || vertical_gradient_indexed(config.width, config.height));
    let indexed = indexed.map_err(|e| e.to_string())?;
    println!(
        "Approach per-pixel set(): elapsed time = {:.3} s",
        indexed_ms / 1000.0
    );

    let (rows, rows_ms) = time_stage(&clock, || vertical_gradient_rows(config.width, config.height));
    let rows = rows.map_err(|e| e.to_string())?;
    println!(
        "Approach row-access: elapsed time = {:.3} s",
        rows_ms / 1000.0
    );

    if indexed != rows {
        return Err("fill strategies produced different images".to_string());
    }
    save_grayscale_u8(&rows, &config.output_image).map_err(|e| e.to_string())?;
    println!("Saved gradient to {}", config.output_image.display());
    Ok(())
}
