//! `images.json` data model
//!
//! An optional summary written next to the generated placeholders so the
//! application (or a human) can see which file maps to which city and title.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MANIFEST_FILE: &str = "images.json";

/// Root structure of the manifest
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Manifest {
    /// One entry per generated image, in generation order
    pub images: Vec<ManifestEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// A single generated placeholder
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ManifestEntry {
    pub filename: String,
    pub city: String,
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Info {
    pub version: u32,
    pub author: String,
}

impl Manifest {
    pub fn new(author: String) -> Self {
        Self {
            images: Vec::new(),
            info: Info { version: 1, author },
        }
    }

    pub fn add_image(&mut self, entry: ManifestEntry) {
        self.images.push(entry);
    }

    /// Write the manifest as pretty-printed JSON into `out_dir`
    pub fn write_to_dir(&self, out_dir: &Path) -> Result<()> {
        let path = out_dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self).context("Failed to serialize images.json")?;

        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
