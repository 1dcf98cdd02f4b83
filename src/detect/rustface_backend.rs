//! Face detector backed by the `rustface` crate (SeetaFace engine)

use crate::detect::{FaceDetector, FaceRegion};
use crate::io::error::{MosaicError, Result};
use std::path::Path;

/// Tuning knobs for the SeetaFace detector
///
/// `pyramid_scale` is the geometric step between image pyramid levels,
/// `score_threshold` gates detection confidence, and `min_face_size` is the
/// smallest face box the sliding window will report.
#[derive(Debug, Clone, Copy)]
pub struct DetectorParams {
    /// Smallest detectable face box edge in pixels
    pub min_face_size: u32,
    /// Minimum detection confidence score
    pub score_threshold: f64,
    /// Image pyramid scale factor, in `(0, 1)`
    pub pyramid_scale: f32,
    /// Sliding window step in x and y
    pub window_step: (u32, u32),
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            min_face_size: crate::io::configuration::DETECTOR_MIN_FACE_SIZE,
            score_threshold: crate::io::configuration::DETECTOR_SCORE_THRESHOLD,
            pyramid_scale: crate::io::configuration::DETECTOR_PYRAMID_SCALE,
            window_step: crate::io::configuration::DETECTOR_WINDOW_STEP,
        }
    }
}

/// Frontal-face detector loading a SeetaFace model from disk
pub struct RustfaceDetector {
    model: rustface::Model,
    params: DetectorParams,
}

impl RustfaceDetector {
    /// Load a SeetaFace model file and configure the detector
    ///
    /// # Errors
    ///
    /// Returns an error if the model file cannot be opened or does not parse
    /// as a SeetaFace model.
    pub fn from_model_path(path: &Path, params: DetectorParams) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| MosaicError::FaceModel {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let model = rustface::read_model(std::io::BufReader::new(file)).map_err(|e| {
            MosaicError::FaceModel {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self { model, params })
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, gray: &image::GrayImage) -> Vec<FaceRegion> {
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(self.params.min_face_size);
        detector.set_score_thresh(self.params.score_threshold);
        detector.set_pyramid_scale_factor(self.params.pyramid_scale);
        detector.set_slide_window_step(self.params.window_step.0, self.params.window_step.1);

        let image_data = rustface::ImageData::new(gray.as_raw(), gray.width(), gray.height());
        let faces = detector.detect(&image_data);

        faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                // SeetaFace can report boxes starting slightly off-image
                let x = bbox.x().max(0) as u32;
                let y = bbox.y().max(0) as u32;
                FaceRegion::new(x, y, bbox.width(), bbox.height())
            })
            .collect()
    }
}
