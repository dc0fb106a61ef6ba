use glam::{Mat4, Quat, Vec3};

use crate::camera::{Camera, SceneNavigationState};
use crate::config::{ObjectConfig, SceneConfig, SunConfig};
use crate::core::{Button, InputSnapshot};
use crate::error::CameraError;
use crate::light::Light;
use crate::math::AffineTransform;
use crate::types::FrameUniforms;

/// Model space bounding sphere of a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub farthest_point: Vec3,
}

impl BoundingSphere {
    pub fn new(center: Vec3, farthest_point: Vec3) -> Self {
        Self { center, farthest_point }
    }

    /// Both points mapped by `model`
    pub fn transformed(&self, model: Mat4) -> Self {
        Self {
            center: model.transform_point3(self.center),
            farthest_point: model.transform_point3(self.farthest_point),
        }
    }
}

/// Something the renderer draws, split into culled-separately surfaces
#[derive(Debug, Clone)]
pub struct Renderable {
    pub name: String,
    pub transform: AffineTransform,
    pub surfaces: Vec<BoundingSphere>,
}

impl Renderable {
    /// Fails with `DegenerateTransform` when a scale component is zero
    pub fn from_config(config: &ObjectConfig) -> Result<Self, CameraError> {
        let model = Mat4::from_scale_rotation_translation(
            Vec3::from_array(config.scale),
            Quat::IDENTITY,
            Vec3::from_array(config.position),
        );
        let surfaces = config
            .surfaces
            .iter()
            .map(|s| {
                BoundingSphere::new(Vec3::from_array(s.center), Vec3::from_array(s.farthest_point))
            })
            .collect();

        Ok(Self {
            name: config.name.clone(),
            transform: AffineTransform::new(model)?,
            surfaces,
        })
    }
}

/// Result of one culling pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CullStats {
    pub candidates: usize,
    pub drawn: usize,
}

impl CullStats {
    pub fn culled(&self) -> usize {
        self.candidates - self.drawn
    }
}

/// Headless island scene: the camera, the sun and the renderables
#[derive(Debug, Clone)]
pub struct Scene {
    nav: SceneNavigationState,
    camera: Camera,
    camera_init: AffineTransform,
    path_speed: f32,
    sun: Light,
    sun_config: SunConfig,
    objects: Vec<Renderable>,
    frustum_culling: bool,
    running: bool,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Result<Self, CameraError> {
        validate_sun(&config.sun)?;
        let objects = config
            .objects
            .iter()
            .map(Renderable::from_config)
            .collect::<Result<Vec<_>, _>>()?;

        let camera_config = &config.camera;
        let camera_init =
            AffineTransform::from_translation(Vec3::from_array(camera_config.position));
        let mut camera = Camera::new(
            camera_init,
            camera_config.field_of_view_degrees.to_radians(),
            config.aspect_ratio(),
            camera_config.near_plane,
            camera_config.far_plane,
        )?;
        camera.set_target_look_at(Vec3::from_array(camera_config.look_at_target));
        camera.append_path(camera_config.path.clone());

        Ok(Self {
            nav: SceneNavigationState::new(camera_config.navigation),
            camera,
            camera_init,
            path_speed: camera_config.path_speed,
            sun: new_sun(&config.sun),
            sun_config: config.sun,
            objects,
            frustum_culling: config.frustum_culling,
            running: true,
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn navigation(&self) -> &SceneNavigationState {
        &self.nav
    }

    pub fn sun(&self) -> &Light {
        &self.sun
    }

    pub fn objects(&self) -> &[Renderable] {
        &self.objects
    }

    pub fn frustum_culling(&self) -> bool {
        self.frustum_culling
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Wheel lines for the camera zoom, consumed by the next `update`
    pub fn on_scroll(&mut self, delta_y: f32) {
        self.camera.on_scroll(delta_y);
    }

    /// Camera first, then the entities that depend on it
    pub fn update(&mut self, input: &InputSnapshot, time_delta: f32) -> Result<(), CameraError> {
        self.camera.update(&self.nav, input, time_delta, self.path_speed)?;
        self.sun.update(time_delta);
        log::trace!("camera:\n{}", self.camera.transform());
        Ok(())
    }

    /// React to a key press
    pub fn handle_key(&mut self, button: Button) {
        match button {
            Button::Tab => {
                self.nav.toggle_nav_mode();
                log::info!("navigation mode: {:?}", self.nav.mode());
            }
            Button::Backspace => self.restart(),
            Button::F8 => {
                self.frustum_culling = !self.frustum_culling;
                if self.frustum_culling {
                    log::info!("view frustum culling enabled");
                } else {
                    log::info!("view frustum culling disabled");
                }
            }
            Button::Escape => self.running = false,
            _ => {}
        }
    }

    /// Put the camera back to its start and begin a new day
    pub fn restart(&mut self) {
        *self.camera.transform_mut() = self.camera_init;
        self.sun = new_sun(&self.sun_config);
        log::info!("scene restarted");
    }

    /// Refresh the projection after a window resize
    pub fn set_viewport(&mut self, width: u32, height: u32) -> Result<(), CameraError> {
        self.camera.set_aspect_ratio(width as f32 / height.max(1) as f32)
    }

    /// Count the surfaces the renderer would draw this frame
    pub fn cull(&self) -> CullStats {
        let view = self.camera.view_matrix();
        let mut stats = CullStats::default();

        for object in &self.objects {
            let model = object.transform.matrix();
            for surface in &object.surfaces {
                stats.candidates += 1;
                if self.frustum_culling {
                    let world = surface.transformed(model);
                    let visible = self.camera.check_sphere_in_frustum(
                        world.center,
                        world.farthest_point,
                        view,
                    );
                    if !visible {
                        continue;
                    }
                }
                stats.drawn += 1;
            }
        }
        stats
    }

    pub fn frame_uniforms(&self) -> FrameUniforms {
        FrameUniforms::new(
            self.camera.view_matrix(),
            self.camera.projection_matrix(),
            self.sun.location(),
            self.sun.color(),
            self.camera.location(),
        )
    }
}

fn validate_sun(config: &SunConfig) -> Result<(), CameraError> {
    if config.day_length > 0.0 && config.day_length.is_finite() {
        Ok(())
    } else {
        Err(CameraError::InvalidSceneParameters(format!(
            "day length must be positive, got {}",
            config.day_length
        )))
    }
}

fn new_sun(config: &SunConfig) -> Light {
    Light::new(
        Vec3::from_array(config.start),
        Vec3::from_array(config.end),
        config.day_length,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_sphere_transform() {
        let sphere = BoundingSphere::new(Vec3::ZERO, Vec3::X);
        let model =
            Mat4::from_translation(Vec3::new(0.0, 5.0, 0.0)) * Mat4::from_scale(Vec3::splat(3.0));
        let world = sphere.transformed(model);
        assert_eq!(world.center, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(world.farthest_point, Vec3::new(3.0, 5.0, 0.0));
    }

    #[test]
    fn test_renderable_from_config_applies_scale() {
        let config = ObjectConfig {
            name: "rock".into(),
            position: [1.0, 2.0, 3.0],
            scale: [2.0, 2.0, 2.0],
            surfaces: vec![],
        };
        let rock = Renderable::from_config(&config).expect("non-zero scale");
        assert_eq!(rock.transform.location(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(rock.transform.matrix().x_axis.x, 2.0);
    }

    #[test]
    fn test_cull_stats_culled() {
        let stats = CullStats { candidates: 5, drawn: 2 };
        assert_eq!(stats.culled(), 3);
    }

    #[test]
    fn test_escape_stops_scene() {
        let mut scene = Scene::new(&SceneConfig::default()).expect("default scene is valid");
        assert!(scene.is_running());
        scene.handle_key(Button::Escape);
        assert!(!scene.is_running());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = SceneConfig::default();
        config.camera.near_plane = 0.0;
        assert!(matches!(
            Scene::new(&config),
            Err(CameraError::InvalidFrustumParameters(_))
        ));
    }
}
