// src/stubs.rs
//
// On-disk caching of raw detector output so tracking can be re-run
// without the model. A caller-side convenience, not part of the
// stabilization contract.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::types::DetectionFrame;

/// One clip's worth of upstream output: court keypoints in the flat
/// layout the court model emits, plus per-frame person detections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionDump {
    pub court_keypoints: Vec<f32>,
    pub frames: Vec<DetectionFrame>,
}

pub fn save_detections(path: &Path, dump: &DetectionDump) -> Result<()> {
    let json = serde_json::to_string(dump)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_detections(path: &Path) -> Result<DetectionDump> {
    let contents = fs::read_to_string(path)?;
    let dump = serde_json::from_str(&contents)?;
    Ok(dump)
}
