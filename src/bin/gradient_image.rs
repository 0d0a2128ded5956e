use gray_median::config::gradient_image as gradient_config;
use gray_median::gradient::gradient_image;
use gray_median::image::io::{load_grayscale_image, save_grayscale_u8};
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
    let config = gradient_config::load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let gray = load_grayscale_image(&config.input).map_err(|e| e.to_string())?;
    let edges = gradient_image(&gray, config.gain).map_err(|e| e.to_string())?;
    save_grayscale_u8(&edges, &config.output_image).map_err(|e| e.to_string())?;
    println!(
        "Saved gradient magnitude ({}x{}) to {}",
        edges.width(),
        edges.height(),
        config.output_image.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: gradient_image <config.json>".to_string()
}
