// src/legacy.rs
//
// Older single-shot selection kept for callers that predate the
// ROI/stabilizer pipeline: picks the two track ids whose centers sit
// closest to the court outline, once, with no filtering and no temporal
// carry-over. New integrations should use the selector + stabilizer.

use std::cmp::Ordering;

use crate::court::CourtKeypoints;
use crate::geometry::point_distance;
use crate::types::DetectionFrame;

/// Ephemeral ids of the two detections nearest any court keypoint,
/// closest first. Empty when fewer than two detections exist.
pub fn choose_closest_pair(keypoints: &CourtKeypoints, frame: &DetectionFrame) -> Vec<u32> {
    let mut distances: Vec<(u32, f32)> = frame
        .iter()
        .map(|(&track_id, bbox)| {
            let center = bbox.center();
            let min_distance = keypoints
                .points()
                .iter()
                .map(|&kp| point_distance(center, kp))
                .fold(f32::INFINITY, f32::min);
            (track_id, min_distance)
        })
        .collect();

    if distances.len() < 2 {
        return Vec::new();
    }

    distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    vec![distances[0].0, distances[1].0]
}
