//! Scene camera: projection parameters, navigation and frustum culling.
//!
//! The camera owns an [`AffineTransform`] as its world placement. The view
//! matrix is that transform's inverse, so the camera sits at the origin
//! looking down -Z in view space.

pub mod navigation;
pub mod path;

use std::f32::consts::PI;

use glam::{Mat4, Vec3};

use crate::core::InputSnapshot;
use crate::error::CameraError;
use crate::math::{sphere_in_frustum, AffineTransform, Order, PathSegment};

pub use navigation::{NavigationMode, SceneNavigationState};
pub use path::CameraPath;

/// Free-fly speed in world units per second
pub const MOVE_SPEED: f32 = 10.0;
/// Free-fly speed while the speed modifier is held
pub const BOOST_MOVE_SPEED: f32 = 50.0;
/// Radians per pixel of cursor movement
pub const MOUSE_SENSITIVITY: f32 = 0.01;
/// Field of view change in radians per scroll line
pub const ZOOM_SENSITIVITY: f32 = -0.1;
pub const ZOOM_MIN_DEGREES: f32 = 30.0;
pub const ZOOM_MAX_DEGREES: f32 = 80.0;

const DEFAULT_TARGET_LOOK_AT: Vec3 = Vec3::new(0.0, 5.0, 0.0);

/// A perspective camera navigated by free-fly input or along a path
#[derive(Debug, Clone)]
pub struct Camera {
    transform: AffineTransform,

    field_of_view: f32,
    aspect_ratio: f32,
    near_plane: f32,
    far_plane: f32,

    last_nav_mode: NavigationMode,
    /// Transform to restore when switching back to the other mode
    other_mode_transform: AffineTransform,
    /// Scroll accumulated since the last update, in lines
    scroll_y: f32,

    path: CameraPath,
    target_look_at: Vec3,
}

impl Camera {
    /// Create a camera; the field of view is in radians
    pub fn new(
        transform: AffineTransform,
        field_of_view: f32,
        aspect_ratio: f32,
        near_plane: f32,
        far_plane: f32,
    ) -> Result<Self, CameraError> {
        validate_field_of_view(field_of_view)?;
        validate_aspect_ratio(aspect_ratio)?;
        validate_planes(near_plane, far_plane)?;

        Ok(Self::from_parts(transform, field_of_view, aspect_ratio, near_plane, far_plane))
    }

    /// Camera with a 60 degree field of view, 4:3 aspect and planes at 0.2 / 100
    pub fn with_default_frustum(transform: AffineTransform) -> Self {
        Self::from_parts(transform, PI / 3.0, 4.0 / 3.0, 0.2, 100.0)
    }

    fn from_parts(
        transform: AffineTransform,
        field_of_view: f32,
        aspect_ratio: f32,
        near_plane: f32,
        far_plane: f32,
    ) -> Self {
        Self {
            transform,
            field_of_view,
            aspect_ratio,
            near_plane,
            far_plane,
            last_nav_mode: NavigationMode::default(),
            other_mode_transform: transform,
            scroll_y: 0.0,
            path: CameraPath::new(),
            target_look_at: DEFAULT_TARGET_LOOK_AT,
        }
    }

    pub fn transform(&self) -> &AffineTransform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut AffineTransform {
        &mut self.transform
    }

    pub fn set_transform(&mut self, matrix: Mat4) -> Result<(), CameraError> {
        self.transform.set_transform(matrix)
    }

    pub fn location(&self) -> Vec3 {
        self.transform.location()
    }

    /// World to camera space
    pub fn view_matrix(&self) -> Mat4 {
        self.transform.inverse_matrix()
    }

    /// OpenGL-style perspective projection (depth in [-1, 1]), rebuilt on every call
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.field_of_view,
            self.aspect_ratio,
            self.near_plane,
            self.far_plane,
        )
    }

    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn set_field_of_view(&mut self, field_of_view: f32) -> Result<(), CameraError> {
        validate_field_of_view(field_of_view)?;
        self.field_of_view = field_of_view;
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) -> Result<(), CameraError> {
        validate_aspect_ratio(aspect_ratio)?;
        self.aspect_ratio = aspect_ratio;
        Ok(())
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn set_near_plane(&mut self, near_plane: f32) -> Result<(), CameraError> {
        validate_planes(near_plane, self.far_plane)?;
        self.near_plane = near_plane;
        Ok(())
    }

    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    pub fn set_far_plane(&mut self, far_plane: f32) -> Result<(), CameraError> {
        validate_planes(self.near_plane, far_plane)?;
        self.far_plane = far_plane;
        Ok(())
    }

    /// Turn the camera in place so it faces `target`, keeping world up at +Y
    pub fn look_at(&mut self, target: Vec3) -> Result<(), CameraError> {
        let world = look_at_transform(self.location(), target)?;
        self.transform.set_transform(world)
    }

    /// Whether a bounding sphere may be visible.
    ///
    /// The sphere is given by its world space center and the surface point
    /// farthest from it. The test runs in NDC and is conservative.
    pub fn check_sphere_in_frustum(&self, center: Vec3, farthest_point: Vec3, view: Mat4) -> bool {
        sphere_in_frustum(self.projection_matrix() * view, center, farthest_point)
    }

    /// Accumulate vertical scroll until the next `update`
    pub fn on_scroll(&mut self, delta_y: f32) {
        self.scroll_y += delta_y;
    }

    pub fn pending_scroll(&self) -> f32 {
        self.scroll_y
    }

    pub fn path(&self) -> &CameraPath {
        &self.path
    }

    pub fn clear_path(&mut self) {
        self.path.clear();
    }

    pub fn append_path(&mut self, segments: Vec<PathSegment>) {
        self.path.append(segments);
    }

    pub fn target_look_at(&self) -> Vec3 {
        self.target_look_at
    }

    pub fn set_target_look_at(&mut self, target: Vec3) {
        self.target_look_at = target;
    }

    /// Advance the camera by one frame.
    ///
    /// `path_speed` is in path segments per second and only matters in
    /// follow-path mode. Scroll accumulated through `on_scroll` is consumed.
    pub fn update(
        &mut self,
        nav: &SceneNavigationState,
        input: &InputSnapshot,
        time_delta: f32,
        path_speed: f32,
    ) -> Result<(), CameraError> {
        self.handle_nav_mode_change(nav);

        let result = match nav.mode() {
            NavigationMode::FollowPath if !self.path.is_empty() => {
                self.follow_path(time_delta, path_speed)
            }
            NavigationMode::FollowPath => Ok(()),
            NavigationMode::FreeFly => {
                self.handle_free_fly_input(input, time_delta);
                Ok(())
            }
        };

        self.scroll_y = 0.0;
        result
    }

    /// Swap in the transform that was active the last time the new mode was left
    fn handle_nav_mode_change(&mut self, nav: &SceneNavigationState) {
        if nav.mode() == self.last_nav_mode {
            return;
        }

        std::mem::swap(&mut self.transform, &mut self.other_mode_transform);
        log::debug!(
            "camera switched {:?} -> {:?} at {:?}",
            self.last_nav_mode,
            nav.mode(),
            self.location()
        );
        self.last_nav_mode = nav.mode();
    }

    fn follow_path(&mut self, time_delta: f32, path_speed: f32) -> Result<(), CameraError> {
        let position = self.path.advance(time_delta * path_speed)?;
        log::trace!(
            "path segment {}/{} at t={:.3}",
            self.path.current_segment(),
            self.path.len(),
            self.path.parameter()
        );
        let world = look_at_transform(position, self.target_look_at)?;
        self.transform.set_transform(world)
    }

    fn handle_free_fly_input(&mut self, input: &InputSnapshot, time_delta: f32) {
        let speed = if input.movement.boost {
            BOOST_MOVE_SPEED
        } else {
            MOVE_SPEED
        };
        let (forward, right, up) = input.movement.velocity();
        let step = time_delta * speed;

        // local axes read from the current matrix, movement applied in world space
        if forward != 0.0 {
            let back_axis = self.transform.matrix().z_axis.truncate();
            self.transform.translate(back_axis * -forward * step, Order::Left);
        }
        if right != 0.0 {
            let right_axis = self.transform.matrix().x_axis.truncate();
            self.transform.translate(right_axis * right * step, Order::Left);
        }
        if up != 0.0 {
            self.transform.translate(Vec3::Y * up * step, Order::Left);
        }

        // pitch around the local x axis, yaw around world y through the camera location
        let delta = input.cursor_delta;
        self.transform.rotate_x(-MOUSE_SENSITIVITY * delta.y, Order::Right);
        let location = self.transform.location();
        self.transform.translate(-location, Order::Left);
        self.transform.rotate_y(-MOUSE_SENSITIVITY * delta.x, Order::Left);
        self.transform.translate(location, Order::Left);

        self.field_of_view = (self.field_of_view + ZOOM_SENSITIVITY * self.scroll_y).clamp(
            ZOOM_MIN_DEGREES.to_radians(),
            ZOOM_MAX_DEGREES.to_radians(),
        );
    }
}

/// World transform of an eye at `eye` facing `target` with +Y up
fn look_at_transform(eye: Vec3, target: Vec3) -> Result<Mat4, CameraError> {
    let direction = target - eye;
    if direction.length_squared() <= f32::EPSILON * f32::EPSILON {
        return Err(CameraError::DegenerateTransform);
    }
    Ok(Mat4::look_at_rh(eye, target, Vec3::Y).inverse())
}

fn validate_field_of_view(field_of_view: f32) -> Result<(), CameraError> {
    if field_of_view > 0.0 && field_of_view < PI {
        Ok(())
    } else {
        Err(CameraError::InvalidFrustumParameters(format!(
            "field of view must be in (0, pi) radians, got {field_of_view}"
        )))
    }
}

fn validate_aspect_ratio(aspect_ratio: f32) -> Result<(), CameraError> {
    if aspect_ratio > 0.0 && aspect_ratio.is_finite() {
        Ok(())
    } else {
        Err(CameraError::InvalidFrustumParameters(format!(
            "aspect ratio must be positive, got {aspect_ratio}"
        )))
    }
}

fn validate_planes(near_plane: f32, far_plane: f32) -> Result<(), CameraError> {
    if near_plane > 0.0 && far_plane > near_plane && far_plane.is_finite() {
        Ok(())
    } else {
        Err(CameraError::InvalidFrustumParameters(format!(
            "expected 0 < near < far, got near={near_plane} far={far_plane}"
        )))
    }
}
