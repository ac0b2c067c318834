use crate::city::{classify, Category, Palette};
use crate::manifest::{Manifest, ManifestEntry};
use crate::text::{derive_title, FontSet};
use anyhow::{Context, Result};
use image::{
    codecs::{
        jpeg::JpegEncoder,
        png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    },
    ColorType, ImageBuffer, ImageEncoder, Rgb, RgbImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;
pub const JPEG_QUALITY: u8 = 85;

/// Where the application serves activity images from
pub const DEFAULT_OUTPUT_DIR: &str = "backend/travelbuddy-jakarta/src/main/resources/images";

const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const LABEL_X: i32 = 50;
const PIN_RADIUS: i32 = 8;

/// Every activity image referenced by the activity catalog
pub const IMAGE_FILES: [&str; 15] = [
    "eiffel.jpg",
    "louvre.jpg",
    "seine.jpg",
    "montmartre.jpg",
    "jules-verne.jpg",
    "moulin-rouge.jpg",
    "luxembourg.jpg",
    "galeries.jpg",
    "colosseum.jpg",
    "vatican.jpg",
    "trevi.jpg",
    "pantheon.jpg",
    "sagrada.jpg",
    "park-guell.jpg",
    "gothic-quarter.jpg",
];

#[derive(Debug)]
pub struct GenerateArgs {
    pub output: PathBuf,
    pub font: Option<PathBuf>,
    pub manifest: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            font: None,
            manifest: false,
        }
    }
}

pub fn generate_placeholders(args: GenerateArgs) -> Result<()> {
    // Ensure the output directory exists
    create_dir_all(&args.output).context("Can't create output directory")?;

    println!(
        "Generating placeholder images in: {}\n",
        args.output.display()
    );

    let fonts = FontSet::load(args.font.as_deref());
    let entries = generate_batch(&IMAGE_FILES, &args.output, &fonts)?;

    if args.manifest {
        let mut manifest = Manifest::new("placeholder-gen".to_string());
        for entry in entries.iter().cloned() {
            manifest.add_image(entry);
        }
        manifest.write_to_dir(&args.output)?;
        println!("✓ Generated {}", crate::manifest::MANIFEST_FILE);
    }

    println!("\n✓ Generated {} placeholder images!", entries.len());
    Ok(())
}

/// Render and save every file in `filenames`, in order. The first failure
/// aborts the batch.
pub fn generate_batch(
    filenames: &[&str],
    out_dir: &Path,
    fonts: &FontSet,
) -> Result<Vec<ManifestEntry>> {
    let mut entries = Vec::with_capacity(filenames.len());

    for &filename in filenames {
        validate_filename(filename)?;

        let city = classify(filename);
        let image = render_placeholder(filename, city, fonts);
        save_placeholder(&image, &out_dir.join(filename))?;
        println!("✓ Generated: {filename}");

        entries.push(ManifestEntry {
            filename: filename.to_string(),
            city: city.to_string(),
            title: derive_title(filename),
            width: image.width(),
            height: image.height(),
        });
    }

    Ok(entries)
}

/// Reject names that would escape the output directory
pub fn validate_filename(filename: &str) -> Result<()> {
    if filename.is_empty() {
        anyhow::bail!("Image filename must not be empty");
    }
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        anyhow::bail!(
            "Invalid image filename: {}. Filenames must not contain path components",
            filename
        );
    }
    Ok(())
}

/// Draw the placeholder for `filename` on a fresh canvas
pub fn render_placeholder(filename: &str, city: Category, fonts: &FontSet) -> RgbImage {
    let palette = Palette::for_category(city);

    // Top half background, bottom half accent
    let mut canvas: RgbImage = ImageBuffer::from_fn(WIDTH, HEIGHT, |_, y| {
        if y < HEIGHT / 2 {
            palette.background
        } else {
            palette.accent
        }
    });

    // Title, horizontally centered on its ink box
    let title = derive_title(filename);
    let extent = fonts.title.measure(&title);
    let title_x = (WIDTH as i32 - extent.width()) / 2 - extent.min_x;
    fonts
        .title
        .draw(&mut canvas, title_x, (HEIGHT / 3) as i32, &title, TEXT_COLOR);

    // Location label in the bottom-left corner
    let label_y = HEIGHT as i32 - 100;
    let label = city.as_str().to_uppercase();
    let label_height = fonts.label.measure(&label).height;
    draw_pin(
        &mut canvas,
        LABEL_X + PIN_RADIUS,
        label_y + label_height / 2 - PIN_RADIUS / 2,
        TEXT_COLOR,
    );
    fonts.label.draw(
        &mut canvas,
        LABEL_X + PIN_RADIUS * 3,
        label_y,
        &label,
        TEXT_COLOR,
    );

    canvas
}

/// Map-pin marker: a round head centered at (cx, cy) with a point below it
fn draw_pin(canvas: &mut RgbImage, cx: i32, cy: i32, color: Rgb<u8>) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    let mut plot = |x: i32, y: i32| {
        if x >= 0 && y >= 0 && x < width && y < height {
            canvas.put_pixel(x as u32, y as u32, color);
        }
    };

    let r = PIN_RADIUS;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                plot(cx + dx, cy + dy);
            }
        }
    }

    // Tip narrows one pixel per row below the head
    for step in 0..=r + 2 {
        let half = (r - step).max(0);
        for dx in -half..=half {
            plot(cx + dx, cy + r / 2 + step);
        }
    }
}

/// Encode `image` based on the extension of `path`
pub fn save_placeholder(image: &RgbImage, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => save_jpeg(image, path),
        "png" => save_png(image, path),
        _ => anyhow::bail!(
            "Unsupported image extension for {}. Supported: jpg, jpeg, png",
            path.display()
        ),
    }
}

fn save_jpeg(image: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JPEG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);

    {
        let mut encoder = JpegEncoder::new_with_quality(&mut out_file, JPEG_QUALITY);
        encoder
            .encode(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
            .context("Failed to write JPEG")?;
    }
    out_file.flush()?;
    Ok(())
}

fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);

    let encoder = PngEncoder::new_with_quality(
        &mut out_file,
        CompressionType::Best,
        PngFilterType::Adaptive,
    );
    encoder
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
        .context("Failed to write PNG")?;
    out_file.flush()?;
    Ok(())
}
