//! Pipeline constants and runtime configuration defaults

// Tile geometry
/// Default edge of the square tiles stamped over face regions
pub const DEFAULT_FACE_TILE_SIZE: u32 = 10;
/// Default edge of the square tiles stamped over the background
pub const DEFAULT_BACKGROUND_TILE_SIZE: u32 = 20;

// Tile pool scanning
/// File extension indexed in the face tile pool
pub const FACE_TILE_EXTENSION: &str = "jpg";
/// File extension indexed in the background tile pool
pub const BACKGROUND_TILE_EXTENSION: &str = "png";
/// Default face tile pool directory
pub const DEFAULT_FACE_TILE_DIR: &str = "images";
/// Default background tile pool directory
pub const DEFAULT_BACKGROUND_TILE_DIR: &str = "pool";

// Palette caches
/// Default cache file for the face tile palette
pub const FACE_CACHE_FILE: &str = "cache_face.json";
/// Default cache file for the background tile palette
pub const BACKGROUND_CACHE_FILE: &str = "cache_background.json";

// Face detector defaults
/// Smallest detectable face box edge in pixels
pub const DETECTOR_MIN_FACE_SIZE: u32 = 30;
/// Minimum detection confidence score
pub const DETECTOR_SCORE_THRESHOLD: f64 = 2.0;
/// Image pyramid scale step
pub const DETECTOR_PYRAMID_SCALE: f32 = 0.8;
/// Sliding window step in x and y
pub const DETECTOR_WINDOW_STEP: (u32, u32) = (4, 4);

// Randomness
/// Fixed seed for reproducible candidate shuffling
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
