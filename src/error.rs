//! Crate-level error types.

use std::fmt;

/// Errors produced by the camera and transform core.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraError {
    /// The matrix has no inverse (zero or non-finite determinant), or a
    /// look-at target coincides with the eye position.
    DegenerateTransform,
    /// A path operation needs at least one segment.
    EmptyPath,
    /// Field of view, aspect ratio or clip planes out of range.
    InvalidFrustumParameters(String),
    /// A scene setting that the simulation cannot run with.
    InvalidSceneParameters(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateTransform => write!(f, "degenerate transform"),
            Self::EmptyPath => write!(f, "camera path is empty"),
            Self::InvalidFrustumParameters(msg) => {
                write!(f, "invalid frustum parameters: {msg}")
            }
            Self::InvalidSceneParameters(msg) => write!(f, "invalid scene parameters: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}
