use std::fmt;

use glam::{Mat4, Vec3};

use crate::error::CameraError;

/// Multiplication order of an incoming transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// `M' = delta * M`: applied in parent (world) space
    Left,
    /// `M' = M * delta`: applied in local (object) space
    Right,
}

/// Model matrix kept together with its exact inverse.
///
/// Every mutation updates both matrices, so `inverse_matrix()` always
/// equals `matrix().inverse()` up to floating point error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    matrix: Mat4,
    inverse: Mat4,
}

impl AffineTransform {
    /// Create a transform from an invertible matrix
    pub fn new(matrix: Mat4) -> Result<Self, CameraError> {
        let inverse = checked_inverse(matrix)?;
        Ok(Self { matrix, inverse })
    }

    pub fn identity() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
            inverse: Mat4::IDENTITY,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            matrix: Mat4::from_translation(translation),
            inverse: Mat4::from_translation(-translation),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    pub fn inverse_matrix(&self) -> Mat4 {
        self.inverse
    }

    /// Replace the matrix wholesale and recompute its inverse
    pub fn set_transform(&mut self, matrix: Mat4) -> Result<(), CameraError> {
        self.inverse = checked_inverse(matrix)?;
        self.matrix = matrix;
        Ok(())
    }

    /// Translation column: the model-space origin in world space
    pub fn location(&self) -> Vec3 {
        self.matrix.w_axis.truncate()
    }

    /// Overwrite the translation column.
    ///
    /// The translation column never changes the determinant, so the matrix
    /// stays invertible and the inverse is recomputed in full.
    pub fn set_location(&mut self, location: Vec3) {
        self.matrix.w_axis = location.extend(1.0);
        self.inverse = self.matrix.inverse();
    }

    /// Compose a transformation and its precomputed inverse into the current state
    pub fn apply_transformation(&mut self, delta: Mat4, delta_inverse: Mat4, order: Order) {
        match order {
            Order::Left => {
                self.matrix = delta * self.matrix;
                self.inverse = self.inverse * delta_inverse;
            }
            Order::Right => {
                self.matrix = self.matrix * delta;
                self.inverse = delta_inverse * self.inverse;
            }
        }
    }

    pub fn rotate_x(&mut self, radians: f32, order: Order) {
        self.apply_transformation(
            Mat4::from_rotation_x(radians),
            Mat4::from_rotation_x(-radians),
            order,
        );
    }

    pub fn rotate_y(&mut self, radians: f32, order: Order) {
        self.apply_transformation(
            Mat4::from_rotation_y(radians),
            Mat4::from_rotation_y(-radians),
            order,
        );
    }

    pub fn rotate_z(&mut self, radians: f32, order: Order) {
        self.apply_transformation(
            Mat4::from_rotation_z(radians),
            Mat4::from_rotation_z(-radians),
            order,
        );
    }

    /// Rotate around an arbitrary axis; the axis does not need to be unit length
    pub fn rotate(&mut self, radians: f32, axis: Vec3, order: Order) {
        let axis = axis.normalize();
        self.apply_transformation(
            Mat4::from_axis_angle(axis, radians),
            Mat4::from_axis_angle(axis, -radians),
            order,
        );
    }

    pub fn translate(&mut self, translation: Vec3, order: Order) {
        self.apply_transformation(
            Mat4::from_translation(translation),
            Mat4::from_translation(-translation),
            order,
        );
    }

    /// Scale by `scaling`; every component must be non-zero
    pub fn scale(&mut self, scaling: Vec3, order: Order) {
        self.apply_transformation(
            Mat4::from_scale(scaling),
            Mat4::from_scale(scaling.recip()),
            order,
        );
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            let r = self.matrix.row(row);
            writeln!(f, "{} {} {} {}", r.x, r.y, r.z, r.w)?;
        }
        Ok(())
    }
}

fn checked_inverse(matrix: Mat4) -> Result<Mat4, CameraError> {
    let det = matrix.determinant();
    if det == 0.0 || !det.is_finite() {
        return Err(CameraError::DegenerateTransform);
    }
    Ok(matrix.inverse())
}
