// src/tracker.rs

use crate::court::{CourtKeypoints, CourtRegion};
use crate::error::TrackError;
use crate::legacy;
use crate::selector::select_candidates;
use crate::stabilizer::{PlayerAssignment, PlayerStabilizer};
use crate::types::{DetectionFrame, TrackingConfig};

/// Facade binding court geometry and filter settings for one video.
///
/// The region is derived once at construction; the per-frame work is the
/// selector + stabilizer pass.
pub struct PlayerTracker {
    keypoints: CourtKeypoints,
    region: CourtRegion,
    config: TrackingConfig,
}

impl PlayerTracker {
    pub fn new(keypoints: CourtKeypoints, config: TrackingConfig) -> Self {
        let region = CourtRegion::from_keypoints(&keypoints, config.padding_ratio);
        Self {
            keypoints,
            region,
            config,
        }
    }

    pub fn region(&self) -> &CourtRegion {
        &self.region
    }

    pub fn config(&self) -> &TrackingConfig {
        &self.config
    }

    /// Run the full filter + stabilize pass over one clip's detections.
    ///
    /// The output has exactly one entry per input frame. `None` entries
    /// can only appear before the first frame on which both players were
    /// identified.
    pub fn filter_and_stabilize(
        &self,
        frames: &[DetectionFrame],
    ) -> Result<Vec<Option<PlayerAssignment>>, TrackError> {
        let mut stabilizer = PlayerStabilizer::new();
        let mut labeled = Vec::with_capacity(frames.len());

        for (index, frame) in frames.iter().enumerate() {
            let candidates = select_candidates(frame, &self.region, &self.config)?;
            labeled.push(stabilizer.advance(index as u64, &candidates)?);
        }

        Ok(labeled)
    }

    /// Backward-compatible single-shot chooser, see
    /// [`legacy::choose_closest_pair`].
    pub fn choose_players(&self, frame: &DetectionFrame) -> Vec<u32> {
        legacy::choose_closest_pair(&self.keypoints, frame)
    }
}
