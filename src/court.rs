// src/court.rs
//
// Court geometry derived once per video: the padded region of interest
// and the vertical statistics used to reject off-court people.

use crate::error::TrackError;
use crate::geometry::BoundingBox;

/// Court outline keypoints from the upstream court-detection model.
///
/// Invariant: at least one point, all coordinates finite. The set is
/// assumed static for a fixed broadcast camera and is never mutated.
#[derive(Debug, Clone)]
pub struct CourtKeypoints {
    points: Vec<(f32, f32)>,
}

impl CourtKeypoints {
    pub fn from_points(points: Vec<(f32, f32)>) -> Result<Self, TrackError> {
        if points.is_empty() {
            return Err(TrackError::invalid("court keypoint set is empty"));
        }
        if points
            .iter()
            .any(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(TrackError::invalid(
                "court keypoints contain non-finite coordinates",
            ));
        }
        Ok(Self { points })
    }

    /// Build from the flat `[x0, y0, x1, y1, ...]` layout the court model
    /// emits.
    pub fn from_flat(coords: &[f32]) -> Result<Self, TrackError> {
        if coords.len() % 2 != 0 {
            return Err(TrackError::invalid(format!(
                "flat keypoint list has odd length {}",
                coords.len()
            )));
        }
        Self::from_points(coords.chunks_exact(2).map(|c| (c[0], c[1])).collect())
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }
}

/// Padded court ROI plus the vertical band statistics the player filter
/// uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtRegion {
    pub roi: BoundingBox,
    /// Mean keypoint y.
    pub center_y: f32,
    /// Keypoint extent max_y - min_y.
    pub height: f32,
}

impl CourtRegion {
    /// Inflate the keypoint extent by `padding_ratio` of its own size per
    /// axis. Pure function of its input, so recomputing from the same
    /// keypoints yields bit-identical bounds.
    pub fn from_keypoints(keypoints: &CourtKeypoints, padding_ratio: f32) -> Self {
        let pts = keypoints.points();

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        let mut sum_y = 0.0f32;
        for &(x, y) in pts {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
            sum_y += y;
        }

        let pad_x = (max_x - min_x) * padding_ratio;
        let pad_y = (max_y - min_y) * padding_ratio;

        Self {
            roi: BoundingBox::new(min_x - pad_x, min_y - pad_y, max_x + pad_x, max_y + pad_y),
            center_y: sum_y / pts.len() as f32,
            height: max_y - min_y,
        }
    }
}
