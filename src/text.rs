//! Titles, fonts and text drawing for placeholder images.

use crate::bitmap_font;
use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};
use std::path::{Path, PathBuf};

pub const TITLE_SIZE: f32 = 60.0;
pub const LABEL_SIZE: f32 = 30.0;

/// Pixel scale of the built-in font. Used for both the title and the label.
pub const BUILTIN_SCALE: u32 = 4;

/// Well-known system font locations, tried in order
pub const SYSTEM_FONTS: &[&str] = &[
    "arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
];

/// Extensions stripped from filenames before building a title
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Turn a filename into a display title, e.g. `jules-verne.jpg` -> `Jules Verne`
pub fn derive_title(filename: &str) -> String {
    // Only image extensions count, so dots inside a title survive
    let stem = match filename.rsplit_once('.') {
        Some((stem, ext)) if IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()) => stem,
        _ => filename,
    };

    let spaced = stem.replace(['-', '_'], " ");
    title_case(&spaced)
}

/// Uppercase the first letter of every alphabetic run and lowercase the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

/// A font at a fixed size, or the built-in bitmap font
#[derive(Clone)]
pub enum Face {
    TrueType { font: Font<'static>, scale: Scale },
    Builtin,
}

/// Horizontal extent of rendered ink, relative to the draw origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtent {
    pub min_x: i32,
    pub max_x: i32,
    pub height: i32,
}

impl TextExtent {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }
}

impl Face {
    /// Measure the ink box of `text` when drawn at the origin
    pub fn measure(&self, text: &str) -> TextExtent {
        match self {
            Face::TrueType { font, scale } => {
                let v_metrics = font.v_metrics(*scale);
                let mut min_x = i32::MAX;
                let mut max_x = i32::MIN;

                for glyph in font.layout(text, *scale, point(0.0, v_metrics.ascent)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        min_x = min_x.min(bb.min.x);
                        max_x = max_x.max(bb.max.x);
                    }
                }

                let height = (v_metrics.ascent - v_metrics.descent).ceil() as i32;
                if min_x > max_x {
                    // Whitespace only
                    TextExtent {
                        min_x: 0,
                        max_x: 0,
                        height,
                    }
                } else {
                    TextExtent {
                        min_x,
                        max_x,
                        height,
                    }
                }
            }
            Face::Builtin => {
                let (width, height) = bitmap_font::text_size(text, BUILTIN_SCALE);
                TextExtent {
                    min_x: 0,
                    max_x: width as i32,
                    height: height as i32,
                }
            }
        }
    }

    /// Draw `text` with the top of its line box at `y`
    pub fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        match self {
            Face::TrueType { font, scale } => {
                let v_metrics = font.v_metrics(*scale);
                let origin = point(x as f32, y as f32 + v_metrics.ascent);
                let (width, height) = (canvas.width() as i32, canvas.height() as i32);

                for glyph in font.layout(text, *scale, origin) {
                    let Some(bb) = glyph.pixel_bounding_box() else {
                        continue;
                    };
                    glyph.draw(|gx, gy, coverage| {
                        let px = bb.min.x + gx as i32;
                        let py = bb.min.y + gy as i32;
                        if px < 0 || py < 0 || px >= width || py >= height {
                            return;
                        }
                        let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                        *pixel = blend(*pixel, color, coverage);
                    });
                }
            }
            Face::Builtin => bitmap_font::draw_text(canvas, x, y, BUILTIN_SCALE, text, color),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Face::Builtin)
    }
}

fn blend(under: Rgb<u8>, over: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let a = coverage.clamp(0.0, 1.0);
    let mix = |u: u8, o: u8| (u as f32 * (1.0 - a) + o as f32 * a).round() as u8;
    Rgb([
        mix(under[0], over[0]),
        mix(under[1], over[1]),
        mix(under[2], over[2]),
    ])
}

/// The two faces used on every placeholder
#[derive(Clone)]
pub struct FontSet {
    pub title: Face,
    pub label: Face,
}

impl FontSet {
    /// Load the preferred font, then the system fonts, and fall back to the
    /// built-in bitmap font when none of them can be read.
    pub fn load(preferred: Option<&Path>) -> Self {
        let candidates = preferred
            .map(Path::to_path_buf)
            .into_iter()
            .chain(SYSTEM_FONTS.iter().map(|p| PathBuf::from(*p)));

        Self::load_from(candidates)
    }

    /// Use the first candidate that parses as a TrueType font, or the
    /// built-in font when none does
    pub fn load_from(candidates: impl IntoIterator<Item = PathBuf>) -> Self {
        for path in candidates {
            if let Some(font) = load_font(&path) {
                return Self::truetype(font);
            }
        }

        Self::builtin()
    }

    pub fn truetype(font: Font<'static>) -> Self {
        Self {
            title: Face::TrueType {
                font: font.clone(),
                scale: Scale::uniform(TITLE_SIZE),
            },
            label: Face::TrueType {
                font,
                scale: Scale::uniform(LABEL_SIZE),
            },
        }
    }

    pub fn builtin() -> Self {
        Self {
            title: Face::Builtin,
            label: Face::Builtin,
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.title.is_builtin()
    }
}

fn load_font(path: &Path) -> Option<Font<'static>> {
    let data = std::fs::read(path).ok()?;
    Font::try_from_vec(data)
}
