//! City classification and color palettes.
//!
//! Every placeholder belongs to a coarse city category inferred from keywords
//! in its filename. The category picks the two colors used for the canvas.

use image::Rgb;
use std::fmt;

/// City category inferred from a filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Paris,
    Rome,
    Barcelona,
    Other,
}

/// Keyword table in priority order. The first category with a matching
/// keyword wins.
const KEYWORDS: [(Category, &[&str]); 3] = [
    (
        Category::Paris,
        &[
            "eiffel",
            "louvre",
            "seine",
            "montmartre",
            "jules",
            "moulin",
            "luxembourg",
            "galeries",
        ],
    ),
    (
        Category::Rome,
        &["colosseum", "vatican", "trevi", "pantheon"],
    ),
    (Category::Barcelona, &["sagrada", "park", "gothic"]),
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Paris => "paris",
            Category::Rome => "rome",
            Category::Barcelona => "barcelona",
            Category::Other => "other",
        }
    }

    /// Map a label back to its category. Unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "paris" => Category::Paris,
            "rome" => Category::Rome,
            "barcelona" => Category::Barcelona,
            _ => Category::Other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infer the city from a filename by substring matching
pub fn classify(filename: &str) -> Category {
    KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| filename.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

/// Background and accent colors for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb<u8>,
    pub accent: Rgb<u8>,
}

impl Palette {
    pub const DEFAULT: Palette = Palette {
        background: Rgb([100, 150, 200]),
        accent: Rgb([200, 150, 100]),
    };

    pub fn for_category(category: Category) -> Self {
        match category {
            // Blue + gold
            Category::Paris => Palette {
                background: Rgb([100, 150, 200]),
                accent: Rgb([200, 180, 100]),
            },
            // Brown + tan
            Category::Rome => Palette {
                background: Rgb([180, 100, 80]),
                accent: Rgb([200, 150, 100]),
            },
            // Orange + gold
            Category::Barcelona => Palette {
                background: Rgb([200, 100, 50]),
                accent: Rgb([255, 200, 0]),
            },
            Category::Other => Palette::DEFAULT,
        }
    }

    pub fn for_label(label: &str) -> Self {
        Self::for_category(Category::from_label(label))
    }
}
