// src/types.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;

/// One video frame's raw detector output: ephemeral track id -> bbox.
///
/// The ids are frame-scoped tokens from the upstream person detector and
/// carry no cross-frame identity guarantee. Nothing in this crate follows
/// an id from one frame to the next.
pub type DetectionFrame = HashMap<u32, BoundingBox>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub tracking: TrackingConfig,
    pub io: IoConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// ROI inflation as a fraction of the keypoint extent, per axis.
    pub padding_ratio: f32,
    /// Smallest accepted bbox area in square pixels.
    pub min_area: f32,
    /// Fraction of court height tolerated as vertical deviation from the
    /// court's mean y.
    pub max_vertical_fraction: f32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            padding_ratio: 0.05,
            min_area: 2000.0,
            max_vertical_fraction: 0.6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoConfig {
    pub input_dir: String,
    pub output_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}
