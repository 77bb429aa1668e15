// SPDX-License-Identifier: GPL-3.0-only

//! Swipe-to-grade resolution.
//!
//! The platform input stream is somebody else's problem: this module is a
//! pure mapping from `(start_x, current_x)` to a signed offset, and from a
//! released offset to a committed grade. Swipes only ever resolve to GOOD
//! (right) or AGAIN (left); HARD and EASY are button-only grades.

use crate::core::models::flashcard::Grade;

/// Resolves a released horizontal displacement against `threshold_px`.
/// The boundary is strict: exactly `threshold_px` snaps back uncommitted.
pub fn resolve_swipe(offset_px: f32, threshold_px: f32) -> Option<Grade> {
    if offset_px > threshold_px {
        Some(Grade::Good)
    } else if offset_px < -threshold_px {
        Some(Grade::Again)
    } else {
        None
    }
}

/// Tracks one drag from press to release.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    start_x: f32,
    current_x: f32,
    threshold_px: f32,
}

impl SwipeTracker {
    pub fn begin(start_x: f32, threshold_px: f32) -> Self {
        Self {
            start_x,
            current_x: start_x,
            threshold_px,
        }
    }

    pub fn update(&mut self, x: f32) {
        self.current_x = x;
    }

    /// Signed horizontal displacement since the press.
    pub fn offset(&self) -> f32 {
        self.current_x - self.start_x
    }

    /// Visual feedback strength in `[-1, 1]`: positive toward GOOD,
    /// negative toward AGAIN, saturating at the commit threshold.
    pub fn feedback(&self) -> f32 {
        (self.offset() / self.threshold_px).clamp(-1.0, 1.0)
    }

    /// Ends the drag, yielding the grade to commit, if any.
    pub fn release(self) -> Option<Grade> {
        resolve_swipe(self.offset(), self.threshold_px)
    }
}
