use placeholder_gen::placeholder_gen::{HEIGHT, IMAGE_FILES, WIDTH};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs `placeholder-gen -o <dir>` and asserts that every activity image is
/// written with the expected dimensions.
#[test]
fn test_generates_every_listed_image() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("images");

    let output = run_placeholder_gen(&output_dir, &[]);
    assert_success(&output);

    for filename in IMAGE_FILES {
        let path = output_dir.join(filename);
        assert!(
            path.exists(),
            "{} should exist at: {}",
            filename,
            path.display()
        );

        let generated = image::open(&path).expect("Failed to load generated image");
        assert_eq!(generated.width(), WIDTH, "{} width should be {}", filename, WIDTH);
        assert_eq!(generated.height(), HEIGHT, "{} height should be {}", filename, HEIGHT);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Generated: eiffel.jpg"));
    assert!(stdout.contains("✓ Generated 15 placeholder images!"));
}

/// A second run over an existing directory overwrites files instead of failing
/// or producing extra files.
#[test]
fn test_second_run_overwrites() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("images");

    assert_success(&run_placeholder_gen(&output_dir, &[]));
    assert_success(&run_placeholder_gen(&output_dir, &[]));

    let count = std::fs::read_dir(&output_dir)
        .expect("Failed to read output directory")
        .count();
    assert_eq!(count, IMAGE_FILES.len(), "No duplicates should accumulate");
}

#[test]
fn test_manifest_is_valid_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("images");

    assert_success(&run_placeholder_gen(&output_dir, &["--manifest"]));

    let manifest_path = output_dir.join("images.json");
    assert!(manifest_path.exists(), "images.json should exist");

    let content = std::fs::read_to_string(&manifest_path).expect("Failed to read images.json");
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("images.json should contain valid JSON");

    let images = parsed["images"].as_array().expect("images should be an array");
    assert_eq!(images.len(), IMAGE_FILES.len());
    assert_eq!(parsed["info"]["version"], 1);

    assert_eq!(images[0]["filename"], "eiffel.jpg");
    assert_eq!(images[0]["city"], "paris");
    assert_eq!(images[4]["title"], "Jules Verne");
    assert_eq!(images[8]["city"], "rome");
    assert_eq!(images[14]["city"], "barcelona");
    assert_eq!(images[14]["width"], 800);
    assert_eq!(images[14]["height"], 600);
}

/// An unreadable preferred font is not an error; generation still completes
#[test]
fn test_missing_preferred_font_still_generates() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("images");
    let missing_font = temp_dir.path().join("missing.ttf");

    let output = run_placeholder_gen(
        &output_dir,
        &["--font", missing_font.to_str().expect("utf-8 temp path")],
    );
    assert_success(&output);
    for filename in IMAGE_FILES {
        assert!(output_dir.join(filename).exists(), "{} should exist", filename);
    }
}

#[test]
fn test_verify_placeholder_detects_split() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("images");

    assert_success(&run_placeholder_gen(&output_dir, &[]));

    let output = Command::new(env!("CARGO_BIN_EXE_verify_placeholder"))
        .arg(output_dir.join("sagrada.jpg"))
        .output()
        .expect("Failed to run verify_placeholder command");
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Image dimensions: 800x600"));
    assert!(
        stdout.contains("✓ Two-tone split detected!"),
        "verify_placeholder should report the split, got: {}",
        stdout
    );
}

#[test]
fn test_two_tone_split_survives_jpeg() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("images");

    assert_success(&run_placeholder_gen(&output_dir, &[]));

    let img = image::open(output_dir.join("colosseum.jpg"))
        .expect("Failed to load colosseum.jpg")
        .to_rgb8();

    // Rome palette: brown (180, 100, 80) over tan (200, 150, 100)
    assert_close(img.get_pixel(10, 10).0, [180, 100, 80]);
    assert_close(img.get_pixel(10, HEIGHT - 10).0, [200, 150, 100]);
}

fn assert_close(actual: [u8; 3], expected: [u8; 3]) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!(
            (*a as i32 - *e as i32).abs() <= 8,
            "Pixel {:?} should be close to {:?}",
            actual,
            expected
        );
    }
}

fn run_placeholder_gen(output_dir: &Path, extra_args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_placeholder-gen"))
        .arg("-o")
        .arg(output_dir)
        .args(extra_args)
        .output()
        .expect("Failed to run placeholder-gen command")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("placeholder-gen command failed");
    }
}
