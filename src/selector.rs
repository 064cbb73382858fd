// src/selector.rs
//
// Per-frame reduction of raw, possibly noisy detections to at most two
// plausible player candidates. Applied independently to every frame; an
// empty or partial result is a normal outcome handled downstream.

use std::cmp::Ordering;

use crate::court::CourtRegion;
use crate::error::TrackError;
use crate::geometry::BoundingBox;
use crate::types::{DetectionFrame, TrackingConfig};

/// A detection that survived filtering, with the derived values the
/// stabilizer needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub track_id: u32,
    pub bbox: BoundingBox,
    pub center_y: f32,
    pub area: f32,
}

/// Filter one frame's detections down to the best two player candidates.
///
/// A detection survives when its center lies inside the padded ROI
/// (inclusive), its area reaches `min_area`, and its center sits within
/// `max_vertical_fraction` of the court height from the court's mean y.
/// Survivors are ranked by area, largest first.
pub fn select_candidates(
    frame: &DetectionFrame,
    region: &CourtRegion,
    config: &TrackingConfig,
) -> Result<Vec<Candidate>, TrackError> {
    let mut survivors: Vec<Candidate> = Vec::new();

    for (&track_id, bbox) in frame {
        if !bbox.is_finite() {
            return Err(TrackError::invalid(format!(
                "detection {track_id} has non-finite coordinates"
            )));
        }

        let (cx, cy) = bbox.center();
        if !region.roi.contains(cx, cy) {
            continue;
        }

        let area = bbox.area();
        if area < config.min_area {
            continue;
        }

        // Rejects people far off the court plane: ball kids, crowd.
        if (cy - region.center_y).abs() > config.max_vertical_fraction * region.height {
            continue;
        }

        survivors.push(Candidate {
            track_id,
            bbox: *bbox,
            center_y: cy,
            area,
        });
    }

    // The two largest boxes are assumed to be the players. Equal areas
    // fall back to the id so the cut is stable regardless of map
    // iteration order.
    survivors.sort_by(|a, b| {
        b.area
            .partial_cmp(&a.area)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.track_id.cmp(&b.track_id))
    });
    survivors.truncate(2);

    Ok(survivors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::CourtKeypoints;

    fn region() -> CourtRegion {
        let kps = CourtKeypoints::from_points(vec![
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 200.0),
            (0.0, 200.0),
        ])
        .unwrap();
        // ROI (-5, -10, 105, 210), center_y 100, height 200
        CourtRegion::from_keypoints(&kps, 0.05)
    }

    fn centered_box(cx: f32, cy: f32, w: f32, h: f32) -> BoundingBox {
        BoundingBox::new(cx - w * 0.5, cy - h * 0.5, cx + w * 0.5, cy + h * 0.5)
    }

    #[test]
    fn test_center_on_roi_edge_is_kept() {
        let config = TrackingConfig::default();
        let mut frame = DetectionFrame::new();
        frame.insert(1, centered_box(-5.0, 100.0, 100.0, 100.0));
        let survivors = select_candidates(&frame, &region(), &config).unwrap();
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].track_id, 1);
    }

    #[test]
    fn test_center_one_unit_outside_roi_is_dropped() {
        let config = TrackingConfig::default();
        let mut frame = DetectionFrame::new();
        frame.insert(1, centered_box(-6.0, 100.0, 100.0, 100.0));
        let survivors = select_candidates(&frame, &region(), &config).unwrap();
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_area_threshold_boundary() {
        let config = TrackingConfig::default();
        let mut frame = DetectionFrame::new();
        // Exactly min_area (2000 * 1) is kept, one below is dropped.
        frame.insert(1, BoundingBox::new(-950.0, 99.5, 1050.0, 100.5));
        frame.insert(2, BoundingBox::new(-950.0, 99.5, 1049.0, 100.5));
        let survivors = select_candidates(&frame, &region(), &config).unwrap();
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].track_id, 1);
        assert_eq!(survivors[0].area, 2000.0);
    }

    #[test]
    fn test_vertical_band_rejects_off_court_people() {
        let config = TrackingConfig {
            max_vertical_fraction: 0.2,
            ..TrackingConfig::default()
        };
        let mut frame = DetectionFrame::new();
        // Band is 100 +/- 40 here; 130 passes, 150 does not.
        frame.insert(1, centered_box(50.0, 130.0, 60.0, 80.0));
        frame.insert(2, centered_box(50.0, 150.0, 60.0, 80.0));
        let survivors = select_candidates(&frame, &region(), &config).unwrap();
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].track_id, 1);
    }

    #[test]
    fn test_keeps_top_two_by_area() {
        let config = TrackingConfig::default();
        let mut frame = DetectionFrame::new();
        frame.insert(10, centered_box(50.0, 180.0, 50.0, 100.0)); // 5000
        frame.insert(11, centered_box(50.0, 20.0, 50.0, 80.0)); // 4000
        frame.insert(12, centered_box(50.0, 100.0, 50.0, 60.0)); // 3000
        let survivors = select_candidates(&frame, &region(), &config).unwrap();
        assert_eq!(survivors.len(), 2);
        assert_eq!(survivors[0].track_id, 10);
        assert_eq!(survivors[1].track_id, 11);
    }

    #[test]
    fn test_equal_areas_break_ties_by_id() {
        let config = TrackingConfig::default();
        let mut frame = DetectionFrame::new();
        frame.insert(9, centered_box(50.0, 180.0, 50.0, 100.0)); // 5000
        frame.insert(7, centered_box(50.0, 100.0, 50.0, 60.0)); // 3000
        frame.insert(3, centered_box(50.0, 20.0, 50.0, 60.0)); // 3000
        let survivors = select_candidates(&frame, &region(), &config).unwrap();
        assert_eq!(survivors.len(), 2);
        assert_eq!(survivors[0].track_id, 9);
        assert_eq!(survivors[1].track_id, 3);
    }

    #[test]
    fn test_empty_frame_yields_empty_result() {
        let config = TrackingConfig::default();
        let frame = DetectionFrame::new();
        let survivors = select_candidates(&frame, &region(), &config).unwrap();
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_non_finite_bbox_is_an_error() {
        let config = TrackingConfig::default();
        let mut frame = DetectionFrame::new();
        frame.insert(1, BoundingBox::new(0.0, 0.0, f32::NAN, 50.0));
        let err = select_candidates(&frame, &region(), &config).unwrap_err();
        assert!(matches!(err, TrackError::InvalidInput { .. }));
    }
}
