use anyhow::{Context, Result};
use image::io::Reader as ImageReader;
use placeholder_gen::placeholder_gen::{DEFAULT_OUTPUT_DIR, HEIGHT, WIDTH};
use std::path::PathBuf;

/// Largest per-channel difference tolerated from JPEG compression
const TOLERANCE: i32 = 24;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR).join("eiffel.jpg"));

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .decode()
        .context("Failed to decode image")?;

    let rgb_img = img.to_rgb8();
    let width = img.width();
    let height = img.height();

    println!("Checking placeholder: {}", path.display());
    println!("Image dimensions: {}x{}", width, height);

    if width != WIDTH || height != HEIGHT {
        println!("⚠ Expected {}x{}", WIDTH, HEIGHT);
        return Ok(());
    }

    // Sample near the left edge, clear of the title and the label
    let top = rgb_img.get_pixel(10, 10);
    let bottom = rgb_img.get_pixel(10, height - 10);

    println!("\nTop band sample:    RGB [{}, {}, {}]", top[0], top[1], top[2]);
    println!("Bottom band sample: RGB [{}, {}, {}]", bottom[0], bottom[1], bottom[2]);

    // Both bands should be uniform along the edge column
    let mut uniform_samples = 0;
    let samples = 10;

    for i in 0..samples {
        let y_top = 10 + (height / 2 - 20) * i / samples;
        let y_bottom = height / 2 + 10 + (height / 2 - 20) * i / samples;
        if close(rgb_img.get_pixel(10, y_top).0, top.0)
            && close(rgb_img.get_pixel(10, y_bottom).0, bottom.0)
        {
            uniform_samples += 1;
        }
    }

    println!("\nBand analysis:");
    println!("  {} out of {} samples match their band", uniform_samples, samples);

    if uniform_samples >= samples * 7 / 10 && !close(top.0, bottom.0) {
        println!("✓ Two-tone split detected!");
    } else {
        println!("⚠ Two-tone split may not be properly applied");
    }

    Ok(())
}

fn close(a: [u8; 3], b: [u8; 3]) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(&x, &y)| (x as i32 - y as i32).abs() <= TOLERANCE)
}
