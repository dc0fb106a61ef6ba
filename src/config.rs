//! Scene configuration loaded from JSON.
//!
//! Every field has a default, so a partial document (or none at all)
//! describes the island scene.

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::NavigationMode;
use crate::math::PathSegment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub viewport: ViewportConfig,
    pub camera: CameraConfig,
    pub sun: SunConfig,
    pub frustum_culling: bool,
    pub objects: Vec<ObjectConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub field_of_view_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    pub navigation: NavigationMode,
    /// Path segments travelled per second in follow-path mode
    pub path_speed: f32,
    pub look_at_target: [f32; 3],
    pub path: Vec<PathSegment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    pub start: [f32; 3],
    pub end: [f32; 3],
    /// Length of a full day/night cycle in seconds
    pub day_length: f32,
}

/// A renderable placed in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectConfig {
    pub name: String,
    pub position: [f32; 3],
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
    pub surfaces: Vec<SurfaceConfig>,
}

/// Model space bounding sphere of one surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub center: [f32; 3],
    pub farthest_point: [f32; 3],
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl SceneConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene config: {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid scene config: {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse scene config JSON")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scene config")
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.viewport.width as f32 / self.viewport.height.max(1) as f32
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            camera: CameraConfig::default(),
            sun: SunConfig::default(),
            frustum_culling: true,
            objects: default_objects(),
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 10.0, 50.0],
            field_of_view_degrees: 90.0,
            near_plane: 0.2,
            far_plane: 600.0,
            navigation: NavigationMode::FreeFly,
            path_speed: 0.2,
            look_at_target: [0.0, 5.0, 0.0],
            path: island_tour(),
        }
    }
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            start: [-20.0, 50.0, -40.0],
            end: [20.0, 30.0, -50.0],
            day_length: 60.0,
        }
    }
}

/// Closed loop around the island, four quadratic segments
fn island_tour() -> Vec<PathSegment> {
    let corner = |x: f32, z: f32| Vec3::new(x, 12.0, z);
    vec![
        PathSegment::new(corner(0.0, 50.0), corner(50.0, 50.0), corner(50.0, 0.0)),
        PathSegment::new(corner(50.0, 0.0), corner(50.0, -50.0), corner(0.0, -50.0)),
        PathSegment::new(corner(0.0, -50.0), corner(-50.0, -50.0), corner(-50.0, 0.0)),
        PathSegment::new(corner(-50.0, 0.0), corner(-50.0, 50.0), corner(0.0, 50.0)),
    ]
}

fn default_objects() -> Vec<ObjectConfig> {
    let sphere = |center: [f32; 3], radius: f32| SurfaceConfig {
        center,
        farthest_point: [center[0] + radius, center[1], center[2]],
    };
    vec![
        ObjectConfig {
            name: "island".into(),
            position: [0.0, 0.0, 0.0],
            scale: unit_scale(),
            surfaces: vec![sphere([0.0, 2.0, 0.0], 30.0), sphere([4.0, 8.0, -3.0], 6.0)],
        },
        ObjectConfig {
            name: "ocean".into(),
            position: [0.0, 0.0, 0.0],
            scale: unit_scale(),
            surfaces: vec![sphere([0.0, 0.0, 0.0], 300.0)],
        },
        ObjectConfig {
            name: "eagle".into(),
            position: [0.0, 30.0, -45.0],
            scale: unit_scale(),
            surfaces: vec![sphere([0.0, 0.0, 0.0], 2.0)],
        },
        ObjectConfig {
            name: "campfire".into(),
            position: [6.0, 3.0, 10.0],
            scale: [0.5, 0.5, 0.5],
            surfaces: vec![sphere([0.0, 0.5, 0.0], 1.5)],
        },
    ]
}
