use glam::Vec3;

use crate::error::CameraError;
use crate::math::{lerp, PathSegment};

/// Chain of quadratic Bezier segments and the current position along it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraPath {
    segments: Vec<PathSegment>,
    current_segment: usize,
    /// Interpolation parameter on the current segment, in [0, 1)
    parameter: f32,
}

impl CameraPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Index of the segment being travelled, always below `len()` for a non-empty path
    pub fn current_segment(&self) -> usize {
        if self.segments.is_empty() {
            0
        } else {
            self.current_segment % self.segments.len()
        }
    }

    pub fn parameter(&self) -> f32 {
        self.parameter
    }

    /// Drop all segments and rewind to the start
    pub fn clear(&mut self) {
        self.segments.clear();
        self.current_segment = 0;
        self.parameter = 0.0;
    }

    /// Append segments to the path.
    ///
    /// When the path already has segments, the junction point becomes the
    /// midpoint of the two neighbouring control points; it replaces both the
    /// old last end point and the new first start point.
    pub fn append(&mut self, mut new_segments: Vec<PathSegment>) {
        if let (Some(last), Some(first)) = (self.segments.last_mut(), new_segments.first_mut()) {
            let joint = lerp(last.control, first.control, 0.5);
            last.end = joint;
            first.start = joint;
        }
        self.segments.extend(new_segments);
    }

    /// Move along the path by `step` (segments) and return the new position.
    ///
    /// Reaching 1.0 moves to the next segment and drops the parameter by
    /// one, once per call, even if `step` spans several segments.
    pub fn advance(&mut self, step: f32) -> Result<Vec3, CameraError> {
        if self.segments.is_empty() {
            return Err(CameraError::EmptyPath);
        }

        self.parameter += step;
        if self.parameter >= 1.0 {
            self.current_segment = (self.current_segment + 1) % self.segments.len();
            self.parameter -= 1.0;
        }

        Ok(self.position())
    }

    /// Position on the current segment, the start point for an empty path
    pub fn position(&self) -> Vec3 {
        match self.segments.get(self.current_segment()) {
            Some(segment) => segment.point_at(self.parameter),
            None => Vec3::ZERO,
        }
    }
}
