use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Linear interpolation `a * (1 - t) + b * t`
#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// One path segment: a quadratic Bezier curve with three control points.
///
/// Evaluated with two levels of linear interpolation (de Casteljau).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f32; 3]; 3]", into = "[[f32; 3]; 3]")]
pub struct PathSegment {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl PathSegment {
    pub const fn new(start: Vec3, control: Vec3, end: Vec3) -> Self {
        Self { start, control, end }
    }

    /// Point on the curve for parameter `t` in [0, 1]
    pub fn point_at(&self, t: f32) -> Vec3 {
        let ab = lerp(self.start, self.control, t);
        let bc = lerp(self.control, self.end, t);
        lerp(ab, bc, t)
    }
}

impl From<[[f32; 3]; 3]> for PathSegment {
    fn from(points: [[f32; 3]; 3]) -> Self {
        Self::new(
            Vec3::from_array(points[0]),
            Vec3::from_array(points[1]),
            Vec3::from_array(points[2]),
        )
    }
}

impl From<PathSegment> for [[f32; 3]; 3] {
    fn from(segment: PathSegment) -> Self {
        [
            segment.start.to_array(),
            segment.control.to_array(),
            segment.end.to_array(),
        ]
    }
}
