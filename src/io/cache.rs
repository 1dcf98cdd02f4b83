//! Palette cache persistence
//!
//! A palette is persisted as a flat JSON object mapping the `"(r, g, b)"`
//! key form to a list of tile paths, key-sorted and indented. A present
//! cache file suppresses re-indexing entirely; it is loaded verbatim and
//! never rewritten.

use crate::io::error::{MosaicError, Result, cache_format_error};
use crate::palette::color::Rgb;
use crate::palette::index::{self, Palette};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk form of a palette cache
///
/// Kept as stringly-keyed JSON for compatibility with caches produced by
/// earlier versions of the tool. Keys are parsed back through
/// [`Rgb::parse_key`], never evaluated.
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
struct CacheDocument(BTreeMap<String, Vec<String>>);

/// Where a palette came from on this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheSource {
    /// Existing cache file was loaded, directory was not rescanned
    Loaded,
    /// Directory was indexed and the cache file written
    Built,
}

/// Load a palette from its cache file, or index the pool and write one
///
/// The cache file wins whenever it exists (unless `rebuild` forces a
/// rescan); its contents are trusted over the directory state.
///
/// # Errors
///
/// Returns an error if an existing cache file cannot be read or parsed, or
/// if a freshly built cache cannot be written.
pub fn load_or_build(
    directory: &Path,
    extension: &str,
    cache_path: &Path,
    rebuild: bool,
) -> Result<(Palette, CacheSource)> {
    if cache_path.exists() && !rebuild {
        return Ok((load(cache_path)?, CacheSource::Loaded));
    }

    let palette = index::index_directory(directory, extension);
    store(&palette, cache_path)?;
    Ok((palette, CacheSource::Built))
}

/// Read and parse a palette cache file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a JSON object of
/// string lists, or contains a key that is not a `"(r, g, b)"` triple.
pub fn load(cache_path: &Path) -> Result<Palette> {
    let contents =
        std::fs::read_to_string(cache_path).map_err(|e| MosaicError::FileSystem {
            path: cache_path.to_path_buf(),
            operation: "read cache",
            source: e,
        })?;

    let document: CacheDocument =
        serde_json::from_str(&contents).map_err(|e| cache_format_error(cache_path, &e))?;

    let mut palette = Palette::new();
    for (key, paths) in document.0 {
        let color = Rgb::parse_key(&key).ok_or_else(|| {
            cache_format_error(cache_path, &format!("bad color key '{key}'"))
        })?;
        for path in paths {
            palette.insert(color, PathBuf::from(path));
        }
    }

    Ok(palette)
}

/// Write a palette as sorted, indented JSON
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn store(palette: &Palette, cache_path: &Path) -> Result<()> {
    let document = CacheDocument(
        palette
            .iter()
            .map(|(color, paths)| {
                let path_strings = paths
                    .iter()
                    .map(|p| p.to_string_lossy().into_owned())
                    .collect();
                (color.key(), path_strings)
            })
            .collect(),
    );

    let contents = serde_json::to_string_pretty(&document)
        .map_err(|e| cache_format_error(cache_path, &e))?;

    std::fs::write(cache_path, contents).map_err(|e| MosaicError::FileSystem {
        path: cache_path.to_path_buf(),
        operation: "write cache",
        source: e,
    })
}
