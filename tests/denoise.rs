mod common;

use common::synthetic_image::uniform_u8;
use gray_median::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use gray_median::synth::{add_salt_and_pepper, vertical_gradient_rows};
use gray_median::timing::MonotonicClock;
use gray_median::{compare_median_filters, median_filter, MedianMethod};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn median_removes_sparse_salt_and_pepper() {
    let clean = uniform_u8(48, 48, 120);
    let mut noisy = clean.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let corrupted = add_salt_and_pepper(&mut noisy, 5, &mut rng);
    assert!(corrupted > 0);

    let denoised = median_filter(&noisy, 5, MedianMethod::Histogram).unwrap();
    let half = 2;
    let mut wrong = 0;
    for y in half..48 - half {
        for x in half..48 - half {
            if denoised.get(x, y) != 120 {
                wrong += 1;
            }
        }
    }
    // 5% impulses essentially never reach 13 of 25 in one window
    assert!(wrong <= 2, "{wrong} interior pixels still corrupted");
}

#[test]
fn comparison_report_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let img = vertical_gradient_rows(64, 48).unwrap();
    let input = dir.path().join("gradient.png");
    save_grayscale_u8(&img, &input).unwrap();

    let loaded = load_grayscale_image(&input).unwrap();
    assert_eq!(loaded, img);

    let cmp = compare_median_filters(&loaded, 5, &MonotonicClock::new()).unwrap();
    assert_eq!(cmp.mismatched_pixels, 0);

    let report = dir.path().join("report/summary.json");
    write_json_file(&report, &cmp.summary()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["kernelSize"], 5);
    assert_eq!(json["width"], 64);
    assert_eq!(json["mismatchedPixels"], 0);
    assert_eq!(json["timing"]["stages"].as_array().unwrap().len(), 2);
}
