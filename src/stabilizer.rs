// src/stabilizer.rs
//
// Turns per-frame candidate sets into a continuous labeled sequence.
// Labels are recomputed from geometry on every valid frame; continuity
// through occlusions and misdetections comes from repeating the last
// valid assignment, never from following detector ids across frames.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TrackError;
use crate::geometry::BoundingBox;
use crate::selector::Candidate;

/// One frame's stable two-player labeling.
///
/// `near` is player 1, the player nearer the camera (bottom of frame,
/// larger center-y). `far` is player 2 on the far side of the court.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerAssignment {
    pub near: BoundingBox,
    pub far: BoundingBox,
}

/// Hold-last-good stabilizer for a single pass over one video.
///
/// Create a fresh instance per clip; two clips analyzed concurrently must
/// not share one. Frames must arrive in strict temporal order because the
/// hold policy depends on prior outcomes.
#[derive(Debug, Default)]
pub struct PlayerStabilizer {
    last_valid: Option<PlayerAssignment>,
    next_index: u64,
}

impl PlayerStabilizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one frame's candidates.
    ///
    /// Exactly two candidates lock a fresh assignment by vertical
    /// position. Fewer repeat the last valid assignment unchanged; `None`
    /// is only returned before the first lock. The selector never yields
    /// more than two candidates, so anything other than an exact pair
    /// falls back to the hold policy.
    pub fn advance(
        &mut self,
        frame_index: u64,
        candidates: &[Candidate],
    ) -> Result<Option<PlayerAssignment>, TrackError> {
        if frame_index != self.next_index {
            return Err(TrackError::OutOfOrderInput {
                expected: self.next_index,
                got: frame_index,
            });
        }
        self.next_index += 1;

        if let [a, b] = candidates {
            // Larger center-y is lower on screen, i.e. nearer the camera.
            let (near, far) = if a.center_y >= b.center_y {
                (a, b)
            } else {
                (b, a)
            };
            let assignment = PlayerAssignment {
                near: near.bbox,
                far: far.bbox,
            };
            if self.last_valid.is_none() {
                debug!("frame {}: locked on both players", frame_index);
            }
            self.last_valid = Some(assignment);
            return Ok(Some(assignment));
        }

        match self.last_valid {
            Some(held) => {
                debug!(
                    "frame {}: {} candidate(s), holding previous assignment",
                    frame_index,
                    candidates.len()
                );
                Ok(Some(held))
            }
            None => Ok(None),
        }
    }

    /// Whether a valid two-player assignment has been seen yet.
    pub fn is_locked(&self) -> bool {
        self.last_valid.is_some()
    }

    /// Clear the carried assignment, e.g. before reusing the instance on
    /// another clip.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
