//! Face location as an opaque capability
//!
//! Downstream rendering only needs "zero or more axis-aligned rectangles";
//! the detector behind the trait is interchangeable and nothing is assumed
//! about its recall or precision.

/// SeetaFace detection backend
pub mod rustface_backend;

use crate::spatial::CellRect;

pub use rustface_backend::{DetectorParams, RustfaceDetector};

/// Axis-aligned bounding box of a detected face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRegion {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Box width in pixels
    pub width: u32,
    /// Box height in pixels
    pub height: u32,
}

impl FaceRegion {
    /// Create a face region from its corner and size
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The face box as a cell rectangle clamped to the image bounds
    pub const fn clamped_rect(&self, image_width: u32, image_height: u32) -> CellRect {
        let x0 = if self.x < image_width {
            self.x
        } else {
            image_width
        };
        let y0 = if self.y < image_height {
            self.y
        } else {
            image_height
        };
        let x1 = if self.x + self.width < image_width {
            self.x + self.width
        } else {
            image_width
        };
        let y1 = if self.y + self.height < image_height {
            self.y + self.height
        } else {
            image_height
        };
        CellRect::new(x0, y0, x1, y1)
    }
}

/// Pluggable face detection backend
pub trait FaceDetector {
    /// Detect faces in a grayscale rendition of the target image
    fn detect(&self, gray: &image::GrayImage) -> Vec<FaceRegion>;
}
