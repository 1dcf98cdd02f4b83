//! Command-line interface and run orchestration
//!
//! One run is a linear pipeline: load or build the two tile palettes, load
//! the target photograph, locate faces, sweep the background grid, sweep
//! each face grid, export the result.

use crate::detect::{DetectorParams, FaceDetector, FaceRegion, RustfaceDetector};
use crate::io::cache::{self, CacheSource};
use crate::io::configuration::{
    BACKGROUND_CACHE_FILE, BACKGROUND_TILE_EXTENSION, DEFAULT_BACKGROUND_TILE_DIR,
    DEFAULT_BACKGROUND_TILE_SIZE, DEFAULT_FACE_TILE_DIR, DEFAULT_FACE_TILE_SIZE, DEFAULT_SEED,
    DETECTOR_MIN_FACE_SIZE, DETECTOR_PYRAMID_SCALE, DETECTOR_SCORE_THRESHOLD, FACE_CACHE_FILE,
    FACE_TILE_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{MosaicError, Result, image_load_error, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::render::mask;
use crate::render::sweep::{self, SweepStats};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "facemosaic")]
#[command(
    author,
    version,
    about = "Build a photo-mosaic with fine tiles over faces and coarse tiles elsewhere"
)]
/// Command-line arguments for the mosaic tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Target photograph to rebuild from tiles
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory of candidate tiles for face regions
    #[arg(long, value_name = "DIR", default_value = DEFAULT_FACE_TILE_DIR)]
    pub face_tiles: PathBuf,

    /// Directory of candidate tiles for the background
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BACKGROUND_TILE_DIR)]
    pub background_tiles: PathBuf,

    /// Face palette cache file (defaults to cache_face.json)
    #[arg(long, value_name = "FILE")]
    pub face_cache: Option<PathBuf>,

    /// Background palette cache file (defaults to cache_background.json)
    #[arg(long, value_name = "FILE")]
    pub background_cache: Option<PathBuf>,

    /// Output image path (defaults to <target>_mosaic.<ext>)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// SeetaFace frontal-face model file; omit to skip face detection
    #[arg(long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Random seed for reproducible candidate shuffling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Edge of the square tiles stamped over faces
    #[arg(long, default_value_t = DEFAULT_FACE_TILE_SIZE)]
    pub face_tile_size: u32,

    /// Edge of the square tiles stamped over the background
    #[arg(long, default_value_t = DEFAULT_BACKGROUND_TILE_SIZE)]
    pub background_tile_size: u32,

    /// Smallest detectable face box edge in pixels
    #[arg(long, default_value_t = DETECTOR_MIN_FACE_SIZE)]
    pub min_face_size: u32,

    /// Minimum detection confidence score
    #[arg(long, default_value_t = DETECTOR_SCORE_THRESHOLD)]
    pub score_threshold: f64,

    /// Detector image pyramid scale step
    #[arg(long, default_value_t = DETECTOR_PYRAMID_SCALE)]
    pub pyramid_scale: f32,

    /// Rescan tile pools even if cache files exist
    #[arg(long)]
    pub rebuild_cache: bool,

    /// Render even if the output file already exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if an existing output file should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolved face palette cache path
    pub fn face_cache_path(&self) -> PathBuf {
        self.face_cache
            .clone()
            .unwrap_or_else(|| PathBuf::from(FACE_CACHE_FILE))
    }

    /// Resolved background palette cache path
    pub fn background_cache_path(&self) -> PathBuf {
        self.background_cache
            .clone()
            .unwrap_or_else(|| PathBuf::from(BACKGROUND_CACHE_FILE))
    }

    /// Detector tuning assembled from the CLI flags
    pub fn detector_params(&self) -> DetectorParams {
        DetectorParams {
            min_face_size: self.min_face_size,
            score_threshold: self.score_threshold,
            pyramid_scale: self.pyramid_scale,
            ..DetectorParams::default()
        }
    }
}

/// Orchestrates one mosaic run from palettes to exported image
pub struct MosaicProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid, a cache file is
    /// malformed, the target image cannot be loaded, a named face model
    /// cannot be read, or the output cannot be written. Individual tile
    /// failures never surface here.
    pub fn process(&mut self) -> Result<()> {
        self.validate()?;

        let output_path = self.output_path();
        if output_path.exists() && self.cli.skip_existing() {
            self.note(&format!(
                "Skipping: {} (output exists)",
                self.cli.target.display()
            ));
            return Ok(());
        }

        let (face_palette, face_source) = cache::load_or_build(
            &self.cli.face_tiles,
            FACE_TILE_EXTENSION,
            &self.cli.face_cache_path(),
            self.cli.rebuild_cache,
        )?;
        self.note_cache("Face", face_source);

        let (background_palette, background_source) = cache::load_or_build(
            &self.cli.background_tiles,
            BACKGROUND_TILE_EXTENSION,
            &self.cli.background_cache_path(),
            self.cli.rebuild_cache,
        )?;
        self.note_cache("Background", background_source);

        let target = image::open(&self.cli.target)
            .map_err(|e| image_load_error(&self.cli.target, e))?;
        let mut canvas = target.to_rgb8();

        let faces = self.locate_faces(&target)?;
        if !faces.is_empty() {
            self.note(&format!("Detected {} face(s)", faces.len()));
        }

        let background = mask::background_mask(canvas.width(), canvas.height(), &faces);

        let total = sweep::total_cells(
            canvas.width(),
            canvas.height(),
            &faces,
            self.cli.background_tile_size,
            self.cli.face_tile_size,
        );
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_render(total);
        }

        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut stats = sweep::background_sweep(
            &mut canvas,
            &background,
            &background_palette,
            self.cli.background_tile_size,
            &mut rng,
            || {
                if let Some(ref pm) = self.progress_manager {
                    pm.cell_done();
                }
            },
        );

        let face_stats = sweep::face_sweep(
            &mut canvas,
            &faces,
            &face_palette,
            self.cli.face_tile_size,
            &mut rng,
            || {
                if let Some(ref pm) = self.progress_manager {
                    pm.cell_done();
                }
            },
        );
        stats.merge(&face_stats);

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        canvas
            .save(&output_path)
            .map_err(|e| MosaicError::ImageExport {
                path: output_path.clone(),
                source: e,
            })?;

        self.note_summary(&stats, &output_path);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.cli.face_tile_size == 0 {
            return Err(invalid_parameter(
                "face-tile-size",
                &self.cli.face_tile_size,
                &"tile size must be at least 1 pixel",
            ));
        }
        if self.cli.background_tile_size == 0 {
            return Err(invalid_parameter(
                "background-tile-size",
                &self.cli.background_tile_size,
                &"tile size must be at least 1 pixel",
            ));
        }
        Ok(())
    }

    fn locate_faces(&self, target: &image::DynamicImage) -> Result<Vec<FaceRegion>> {
        let Some(ref model_path) = self.cli.model else {
            return Ok(Vec::new());
        };

        let detector = RustfaceDetector::from_model_path(model_path, self.cli.detector_params())?;
        Ok(detector.detect(&target.to_luma8()))
    }

    fn output_path(&self) -> PathBuf {
        if let Some(ref output) = self.cli.output {
            return output.clone();
        }

        let stem = self.cli.target.file_stem().unwrap_or_default();
        let extension = self.cli.target.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = self.cli.target.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    fn note(&self, message: &str) {
        if let Some(ref pm) = self.progress_manager {
            pm.note(message);
        }
    }

    fn note_cache(&self, pool: &str, source: CacheSource) {
        match source {
            CacheSource::Built => self.note(&format!("{pool} tiles caching done")),
            CacheSource::Loaded => self.note(&format!("{pool} tiles cache file already exists")),
        }
    }

    fn note_summary(&self, stats: &SweepStats, output_path: &Path) {
        self.note(&format!(
            "Placed {} tiles ({} cells without palette match, {} cells exhausted candidates, {} face-covered cells deferred)",
            stats.placed, stats.no_match, stats.exhausted, stats.masked
        ));
        self.note(&format!("Wrote {}", output_path.display()));
    }
}
