use gray_median::config::salt_pepper;
use gray_median::image::io::{load_grayscale_image, save_grayscale_u8};
use gray_median::median::median_filter;
use gray_median::synth::add_salt_and_pepper;
use gray_median::timing::{time_stage, MonotonicClock};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
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
    let config = salt_pepper::load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let mut noisy = load_grayscale_image(&config.input).map_err(|e| e.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.noise.seed);
    let corrupted = add_salt_and_pepper(&mut noisy, config.noise.percent, &mut rng);
    info!(
        "corrupted {corrupted} of {} pixels",
        noisy.width() * noisy.height()
    );

    let clock = MonotonicClock::new();
    let (denoised, elapsed_ms) = time_stage(&clock, || {
        median_filter(&noisy, config.denoise.kernel_size, config.denoise.method)
    });
    let denoised = denoised.map_err(|e| e.to_string())?;
    println!(
        "Median ({}, k={}): elapsed time = {:.3} s",
        config.denoise.method.label(),
        config.denoise.kernel_size,
        elapsed_ms / 1000.0
    );

    save_grayscale_u8(&noisy, &config.output.noisy_image).map_err(|e| e.to_string())?;
    save_grayscale_u8(&denoised, &config.output.denoised_image).map_err(|e| e.to_string())?;
    Ok(())
}

fn usage() -> String {
    "Usage: salt_pepper_denoise <config.json>".to_string()
}
