//! Tile pool indexing: directory scan to quantized-color palette
//!
//! Every readable image in a pool directory is reduced to its quantized
//! average color, and paths are grouped under that color key. Unreadable
//! files are skipped without diagnostics; a missing or empty directory
//! simply produces an empty palette.

use crate::palette::color::{self, Rgb};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Candidate tile paths grouped by quantized average color
///
/// Backed by an ordered map so iteration order, and with it nearest-match
/// tie-breaking, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: BTreeMap<Rgb, Vec<PathBuf>>,
}

impl Palette {
    /// Create an empty palette
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add a tile path under a quantized color key
    pub fn insert(&mut self, color: Rgb, path: PathBuf) {
        self.entries.entry(color).or_default().push(path);
    }

    /// Number of distinct quantized colors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette holds no colors at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidate paths recorded for an exact quantized color
    pub fn candidates(&self, color: &Rgb) -> Option<&[PathBuf]> {
        self.entries.get(color).map(Vec::as_slice)
    }

    /// Iterate over quantized colors in key order
    pub fn colors(&self) -> impl Iterator<Item = &Rgb> {
        self.entries.keys()
    }

    /// Iterate over `(color, paths)` entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&Rgb, &Vec<PathBuf>)> {
        self.entries.iter()
    }
}

impl FromIterator<(Rgb, Vec<PathBuf>)> for Palette {
    fn from_iter<I: IntoIterator<Item = (Rgb, Vec<PathBuf>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Scan a tile pool directory and build its palette
///
/// Only files with the given extension are considered. Files that fail to
/// open or decode are skipped silently. Paths are sorted before indexing so
/// candidate lists are reproducible across runs.
pub fn index_directory(directory: &Path, extension: &str) -> Palette {
    let mut palette = Palette::new();

    let Ok(entries) = std::fs::read_dir(directory) else {
        return palette;
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some(extension))
        .collect();
    paths.sort();

    for path in paths {
        let Ok(tile) = image::open(&path) else {
            continue;
        };
        if let Some(average) = color::average_color(&tile.to_rgb8()) {
            palette.insert(average, path);
        }
    }

    palette
}
